//! Shared test harness modules for the Cadence CLI.

use super::*;

mod helpers;
