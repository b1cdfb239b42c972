use oddeven_game::{OddEvenError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    pub data_dir: PathBuf,
    pub state_file: String,
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("oddeven"),
            state_file: "state.json".to_string(),
            verbose: false,
        }
    }
}

impl CliConfig {
    pub fn from_args(data_dir: Option<PathBuf>, verbose: bool) -> Self {
        let mut config = Self::default();
        if let Some(data_dir) = data_dir {
            config.data_dir = data_dir;
        }
        config.verbose = verbose;
        config
    }

    pub fn state_path(&self) -> PathBuf {
        self.data_dir.join(&self.state_file)
    }

    pub fn log_filter(&self) -> String {
        let log_level = if self.verbose { "debug" } else { "info" };
        format!("oddeven={},oddeven_game={}", log_level, log_level)
    }

    pub fn validate(&self) -> Result<()> {
        if self.state_file.trim().is_empty() {
            return Err(OddEvenError::config("State file name cannot be empty"));
        }

        let mut components = Path::new(&self.state_file).components();
        if !matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        ) {
            return Err(OddEvenError::config(
                "State file must be a plain file name inside the data directory",
            ));
        }

        Ok(())
    }
}
