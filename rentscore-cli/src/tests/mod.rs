//! Shared test harness modules for the rentscore CLI.

use super::*;

mod helpers;
mod score_steps;
