use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::config::config_manager::ConfigManager;
use crate::errors::{ChatfileError, ChatfileResult};
use crate::logger::animated_logger::AnimatedLogger;
use crate::services::ai_providers::openai::OpenAIProvider;
use crate::services::transcript_parser::TranscriptParser;
use crate::structs::cli::{Cli, RunPaths};
use crate::structs::config::config::Config;
use crate::structs::run_summary::RunSummary;
use crate::traits::ai_provider::AiProvider;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner {
    pub const fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    pub async fn run(&mut self, cli: &Cli) -> ChatfileResult<RunSummary> {
        self.start_time = Some(Instant::now());

        let paths = cli.resolve_paths()?;
        let result = Self::run_with_provider(&paths, |config| {
            Box::new(OpenAIProvider::from_config(config)) as Box<dyn AiProvider>
        })
        .await;

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    /// Loads the config, parses the transcript, runs one completion and
    /// writes the reply. The provider is built only once both inputs are valid.
    pub async fn run_with_provider<F>(paths: &RunPaths, make_provider: F) -> ChatfileResult<RunSummary>
    where
        F: FnOnce(&Config) -> Box<dyn AiProvider>,
    {
        let config = ConfigManager::load(&paths.config)?;
        log::debug!("Loaded config: {config:?}");

        let transcript = TranscriptParser::parse_file(&paths.input)?;
        log::info!("🗒️  {} messages read from {}", transcript.message_count(), paths.input.display());

        let provider = make_provider(&config);

        let mut spinner = AnimatedLogger::new(format!("💬 Waiting for {}", config.model));
        spinner.start();
        let result = provider.chat(&transcript).await;
        spinner.stop().await;
        let completion = result?;
        if let Some(served_by) = &completion.model {
            log::debug!("Served by {served_by}, finish_reason = {:?}", completion.finish_reason);
        }

        Self::write_output(&paths.output, &completion.content)?;
        log::info!("✅ Reply written to {}", paths.output.display());

        Ok(RunSummary {
            model: config.model,
            total_tokens: completion.total_tokens,
            output: paths.output.clone(),
        })
    }

    fn write_output(path: &Path, content: &str) -> ChatfileResult<()> {
        fs::write(path, content)
            .map_err(|e| ChatfileError::file_error(&path.display().to_string(), "write output", &e.to_string()))
    }
}
