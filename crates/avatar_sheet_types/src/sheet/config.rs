//! Run configuration.
//!
//! Settings are layered with the `config` crate, later sources overriding earlier
//! ones:
//!
//! 1. Built-in defaults (see [`SheetConfig::default`])
//! 2. An optional TOML file
//! 3. Environment variables prefixed `AVATAR_SHEET_`, nested keys separated by
//!    `__` (e.g. `AVATAR_SHEET_INSTRUCTIONS__IDLE_FPS=3`)
//!
//! Command line flags are applied on top by the binary.
//!
//! # Example file
//!
//! ```toml
//! input_dir = "./CharacterSpriteSheet"
//! output_file = "spritesheet.png"
//! alignment = "bottom-right"
//! downscale = true
//! max_side = 500
//!
//! [instructions]
//! avatar_scale = 0.2
//! idle_fps = 2
//! walk_fps = 4
//! ```

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use super::{Alignment, Normalizer, error::SheetError, normalize::DEFAULT_MAX_SIDE};

/// Prefix of environment variable overrides
pub const ENV_PREFIX: &str = "AVATAR_SHEET";

/// Values substituted into the setup instructions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstructionSettings {
	/// Avatar scale to enter in the editor
	pub avatar_scale: f32,
	/// Idle animation frame rate
	pub idle_fps: u32,
	/// Walk animation frame rate
	pub walk_fps: u32,
}

impl Default for InstructionSettings {
	fn default() -> Self {
		Self {
			avatar_scale: 0.2,
			idle_fps: 2,
			walk_fps: 4,
		}
	}
}

/// Settings for one pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
	/// Folder holding the frames; the sheet is written here too
	pub input_dir: PathBuf,
	/// Sheet filename inside `input_dir`
	pub output_file: String,
	/// Placement of smaller frames in the padded canvas
	pub alignment: Alignment,
	/// Downscale frames whose longest side exceeds `max_side`
	pub downscale: bool,
	/// Longest allowed frame side
	pub max_side: u32,
	/// Write normalized frames back over their source files
	pub write_frames: bool,
	/// Report without removing or writing anything
	pub dry_run: bool,
	/// Values for the setup instructions
	pub instructions: InstructionSettings,
}

impl Default for SheetConfig {
	fn default() -> Self {
		Self {
			input_dir: PathBuf::from("./CharacterSpriteSheet"),
			output_file: "spritesheet.png".to_string(),
			alignment: Alignment::default(),
			downscale: true,
			max_side: DEFAULT_MAX_SIDE,
			write_frames: true,
			dry_run: false,
			instructions: InstructionSettings::default(),
		}
	}
}

impl SheetConfig {
	/// Loads the configuration from an optional file and the environment.
	///
	/// A `file` that is given but missing is an error.
	pub fn load(file: Option<&Path>) -> Result<Self, SheetError> {
		let mut builder = Config::builder();
		if let Some(path) = file {
			builder = builder.add_source(File::from(path).required(true));
		}
		let config = builder
			.add_source(
				Environment::with_prefix(ENV_PREFIX)
					.prefix_separator("_")
					.separator("__")
					.try_parsing(true),
			)
			.build()?;

		Ok(config.try_deserialize()?)
	}

	/// Normalizer matching these settings
	pub fn normalizer(&self) -> Normalizer {
		Normalizer::new(self.alignment).with_max_side(self.downscale.then_some(self.max_side))
	}

	/// Full path of the sheet
	pub fn output_path(&self) -> PathBuf {
		self.input_dir.join(&self.output_file)
	}
}
