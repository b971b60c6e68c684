//! StreamAvatars sprite sheet builder
//!
//! Prunes a maples.im frame folder, normalizes the frames to one size and
//! composites them into the 4x5 StreamAvatars sprite sheet grid.
//!
//! # Usage
//!
//! ```bash
//! # Build ./CharacterSpriteSheet/spritesheet.png
//! avatar-sheet
//!
//! # Custom folder, centered frames, no downscaling
//! avatar-sheet frames/ -a center --no-downscale
//!
//! # See what would be deleted without touching anything
//! avatar-sheet --dry-run -v
//!
//! # Machine readable report
//! avatar-sheet --json
//! ```

use std::path::PathBuf;

use anyhow::Context;
use avatar_sheet::prelude::*;
use clap::Parser;
use log::debug;

#[derive(Parser)]
#[command(name = "avatar-sheet")]
#[command(version)]
#[command(about = "Build a StreamAvatars sprite sheet from maples.im character frames", long_about = None)]
struct Cli {
	/// Folder containing the frames (defaults to `./CharacterSpriteSheet`)
	#[arg(value_name = "INPUT_DIR")]
	input: Option<PathBuf>,

	/// Sheet filename, written into the input folder
	#[arg(short, long, value_name = "FILE")]
	output: Option<String>,

	/// Placement of smaller frames: bottom-right, center or bottom-left
	#[arg(short, long, value_name = "ALIGNMENT")]
	alignment: Option<Alignment>,

	/// Longest allowed frame side before downscaling
	#[arg(long, value_name = "PIXELS", value_parser = clap::value_parser!(u32).range(1..))]
	max_side: Option<u32>,

	/// Keep oversized frames at their original size
	#[arg(long)]
	no_downscale: bool,

	/// Leave the source frames untouched, only write the sheet
	#[arg(long)]
	keep_frames: bool,

	/// Report what would happen without deleting or writing anything
	#[arg(long)]
	dry_run: bool,

	/// TOML configuration file
	#[arg(short, long, value_name = "CONFIG", env = "AVATAR_SHEET_CONFIG")]
	config: Option<PathBuf>,

	/// Print the run report as JSON instead of the setup instructions
	#[arg(long)]
	json: bool,

	/// Show verbose output
	#[arg(short, long)]
	verbose: bool,
}

impl Cli {
	/// Applies command line overrides on top of the loaded configuration
	fn apply(&self, config: &mut SheetConfig) {
		if let Some(input) = &self.input {
			config.input_dir = input.clone();
		}
		if let Some(output) = &self.output {
			config.output_file = output.clone();
		}
		if let Some(alignment) = self.alignment {
			config.alignment = alignment;
		}
		if let Some(max_side) = self.max_side {
			config.max_side = max_side;
		}
		if self.no_downscale {
			config.downscale = false;
		}
		if self.keep_frames {
			config.write_frames = false;
		}
		if self.dry_run {
			config.dry_run = true;
		}
	}
}

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	let level = if cli.verbose {
		"debug"
	} else {
		"info"
	};
	env_logger::init_from_env(env_logger::Env::default().default_filter_or(level));

	let mut config = SheetConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
	cli.apply(&mut config);
	debug!("Configuration: {:?}", config);

	let report = Pipeline::new(config.clone())
		.run()
		.with_context(|| format!("Failed to build sprite sheet from {}", config.input_dir.display()))?;

	if cli.json {
		println!("{}", serde_json::to_string_pretty(&report)?);
		return Ok(());
	}

	if report.dry_run {
		println!("Dry run complete, '{}' would be {}", report.output_file, report.sheet);
	} else {
		println!("Spritesheet created successfully as '{}'", report.output_file);
	}
	println!();
	println!("{}", report.instructions(&config.instructions));

	Ok(())
}
