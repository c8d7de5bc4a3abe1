//! Integration tests for the gitbcalc binary.

mod cli_report;
