//! Runs a chat completion over a `__role` marked conversation file and
//! writes the reply to disk.
//!
//! The pipeline is: [`config::config_manager::ConfigManager`] loads and
//! validates the YAML settings, [`services::transcript_parser::TranscriptParser`]
//! turns the input into a [`structs::transcript::transcript::Transcript`], an
//! [`traits::ai_provider::AiProvider`] performs the request and
//! [`workers::command_runner::CommandRunner`] ties it together.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
