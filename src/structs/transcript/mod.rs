pub mod message;
#[allow(clippy::module_inception)]
pub mod transcript;
