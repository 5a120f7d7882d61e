mod config_tests;
mod run_tests;
