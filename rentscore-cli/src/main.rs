//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

#[expect(clippy::print_stderr, reason = "top-level error report")]
fn main() {
    if let Err(err) = rentscore_cli::run() {
        eprintln!("rentscore: {err}");
        std::process::exit(1);
    }
}
