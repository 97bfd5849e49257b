//! Integration tests for the sortvis binary and library

mod cli_test;
mod config_test;
mod helpers;
mod race_test;
mod trace_test;
