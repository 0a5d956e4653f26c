pub mod ai_providers;
pub mod transcript_parser;
