pub mod completion_options;
#[allow(clippy::module_inception)]
pub mod config;
