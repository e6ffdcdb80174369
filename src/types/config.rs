use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info, instrument};

use crate::error::{AppError, Result};

const APP_DIR: &str = "flashdeck";

/// Settings read from `config.toml`. Every key is optional.
#[derive(Deserialize, Clone, PartialEq, Debug)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	/// Prompt shown in normal mode
	pub prompt:     String,
	/// Tracing filter used when `RUST_LOG` is not set
	pub log_filter: String,
	/// Where exported slide outlines are written
	pub export_dir: PathBuf,
	/// Keep line history between runs
	pub history:    bool,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			prompt:     "> ".to_string(),
			log_filter: "warn".to_string(),
			export_dir: PathBuf::from("."),
			history:    true,
		}
	}
}

impl Config {
	pub fn from_toml(content: &str) -> Result<Self> { Ok(toml::from_str(content)?) }

	/// Loads an explicit config file, or the per-user one when it exists, or
	/// falls back to defaults.
	#[instrument]
	pub fn load(explicit: Option<&Path>) -> Result<Self> {
		let path = match explicit {
			Some(path) if !path.is_file() => return Err(AppError::ConfigNotFound(path.to_path_buf())),
			Some(path) => path.to_path_buf(),
			None => match Self::default_path().filter(|p| p.is_file()) {
				Some(path) => path,
				None => {
					debug!("No config file, using defaults");
					return Ok(Self::default());
				}
			},
		};

		info!("Loading config from {:?}", path);
		let content = fs_err::read_to_string(&path)?;
		Self::from_toml(&content)
	}

	pub fn default_path() -> Option<PathBuf> {
		dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
	}

	pub fn history_path() -> Option<PathBuf> {
		dirs::data_dir().map(|dir| dir.join(APP_DIR).join("history.txt"))
	}
}
