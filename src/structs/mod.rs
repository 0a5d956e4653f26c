pub mod ai;
pub mod cli;
pub mod completion;
pub mod config;
pub mod run_summary;
pub mod transcript;
