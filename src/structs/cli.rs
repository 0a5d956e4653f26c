use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::constants::{DEFAULT_CONFIG_FILE, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};
use crate::errors::{ChatfileError, ChatfileResult};

#[derive(Parser, Debug, Clone)]
#[clap(name = "chatfile")]
#[clap(about = "Run a chat completion on a conversation file", long_about = None)]
pub struct Cli {
    /// Relative path to the configuration file
    #[clap(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Relative path to the input file
    #[clap(short, long, default_value = DEFAULT_INPUT_FILE)]
    pub input: PathBuf,

    /// Relative path to the output file
    #[clap(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Directory the paths are resolved against (defaults to the executable's directory)
    #[clap(long)]
    pub root: Option<PathBuf>,

    /// Print debug logs
    #[clap(short, long)]
    pub verbose: bool,
}

/// Absolute locations of the three files a run touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPaths {
    pub config: PathBuf,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl RunPaths {
    pub fn resolve(root: &Path, config: &Path, input: &Path, output: &Path) -> Self {
        Self {
            config: root.join(config),
            input: root.join(input),
            output: root.join(output),
        }
    }
}

impl Cli {
    pub fn resolve_paths(&self) -> ChatfileResult<RunPaths> {
        let root = match &self.root {
            Some(root) => root.clone(),
            None => Self::program_dir()?,
        };
        Ok(RunPaths::resolve(&root, &self.config, &self.input, &self.output))
    }

    fn program_dir() -> ChatfileResult<PathBuf> {
        let exe = std::env::current_exe()
            .map_err(|e| ChatfileError::system_error("locating the executable", &e.to_string()))?;
        let exe = exe.canonicalize().unwrap_or(exe);
        exe.parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| ChatfileError::system_error("locating the executable", "executable has no parent directory"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["chatfile"]);
        assert_eq!(cli.config, PathBuf::from("config.yml"));
        assert_eq!(cli.input, PathBuf::from("input.md"));
        assert_eq!(cli.output, PathBuf::from("output.md"));
        assert!(cli.root.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_short_flags_and_root() {
        let cli = Cli::parse_from(["chatfile", "-c", "cfg/a.yml", "-i", "in.txt", "-o", "out.txt", "--root", "/srv/chat"]);
        let paths = cli.resolve_paths().unwrap();
        assert_eq!(paths.config, PathBuf::from("/srv/chat/cfg/a.yml"));
        assert_eq!(paths.input, PathBuf::from("/srv/chat/in.txt"));
        assert_eq!(paths.output, PathBuf::from("/srv/chat/out.txt"));
    }

    #[test]
    fn test_absolute_path_overrides_root() {
        let paths = RunPaths::resolve(Path::new("/srv/chat"), Path::new("/etc/chat.yml"), Path::new("in.md"), Path::new("out.md"));
        assert_eq!(paths.config, PathBuf::from("/etc/chat.yml"));
    }

    #[test]
    fn test_defaults_resolve_next_to_executable() {
        let cli = Cli::parse_from(["chatfile"]);
        let paths = cli.resolve_paths().unwrap();
        let exe_dir = std::env::current_exe().unwrap().canonicalize().unwrap();
        assert_eq!(paths.input, exe_dir.parent().unwrap().join("input.md"));
    }
}
