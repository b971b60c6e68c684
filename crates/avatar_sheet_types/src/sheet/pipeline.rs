//! End-to-end sheet build: curate, load, normalize, write, composite.
//!
//! Every frame is decoded once and written at most once; all transforms happen
//! in memory between the two. The order is fixed:
//!
//! ```text
//! validate layout -> curate -> load -> scale -> target size -> pad
//!                 -> write frames -> composite -> write sheet
//! ```

use std::path::PathBuf;

use log::{debug, info, warn};
use serde::Serialize;

use super::{
	ALLOWED_FRAMES, CurationReport, Curator, Frame, FrameSummary, InstructionSettings,
	Instructions, Layout, Placement, SheetConfig, Size, compose, compose::digest,
	error::SheetError,
};

/// Summary of a pipeline run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetReport {
	/// Whether the run left the filesystem untouched
	pub dry_run: bool,
	/// Entries removed by curation (or that would be, on a dry run)
	pub removed: Vec<PathBuf>,
	/// Per-frame normalization record
	pub frames: Vec<FrameSummary>,
	/// Normalized frames written back to disk
	pub written_frames: Vec<PathBuf>,
	/// Cell size, i.e. the normalized frame size
	pub cell: Size,
	/// Sheet size
	pub sheet: Size,
	/// Frames placed into the sheet
	pub placements: Vec<Placement>,
	/// Sheet path
	pub output: PathBuf,
	/// Sheet filename, as shown in the instructions
	pub output_file: String,
	/// Hex MD5 digest of the encoded sheet
	pub digest: String,
}

impl SheetReport {
	/// Setup instructions for the produced sheet
	pub fn instructions(&self, settings: &InstructionSettings) -> Instructions {
		Instructions::new(self.output_file.clone(), self.cell, settings.clone())
	}
}

/// Builds a sprite sheet from a frame folder.
#[derive(Debug, Clone)]
pub struct Pipeline {
	config: SheetConfig,
	layout: Layout,
}

impl Pipeline {
	/// Creates a pipeline using the StreamAvatars layout.
	pub fn new(config: SheetConfig) -> Self {
		Self {
			config,
			layout: Layout::STREAM_AVATARS,
		}
	}

	/// Replaces the sheet layout.
	pub fn with_layout(mut self, layout: Layout) -> Self {
		self.layout = layout;
		self
	}

	/// Returns the run configuration.
	pub fn config(&self) -> &SheetConfig {
		&self.config
	}

	/// Runs the pipeline.
	///
	/// # Errors
	///
	/// Fails before touching the filesystem if the layout references an unknown
	/// frame, the downscale bound is zero or the input directory is missing. Any
	/// failing removal, read or write aborts the run.
	pub fn run(&self) -> Result<SheetReport, SheetError> {
		self.layout.validate(&ALLOWED_FRAMES)?;
		let normalizer = self.config.normalizer();
		normalizer.validate()?;

		let config = &self.config;
		let dir = config.input_dir.as_path();
		let curation = self.curate()?;

		let mut frames = Vec::with_capacity(curation.retained.len());
		for name in &curation.retained {
			let path = dir.join(name);
			if !path.is_file() {
				debug!("Skipping {}: not a file", path.display());
				continue;
			}
			let frame = Frame::open(&path)?;
			debug!("Loaded {}", frame);
			frames.push(frame);
		}
		if frames.is_empty() {
			return Err(SheetError::EmptyFrameSet);
		}

		let normalized = normalizer.normalize(frames)?;
		let cell = normalized.target();

		let mut written_frames = Vec::new();
		if config.write_frames && !config.dry_run {
			for frame in normalized.frames() {
				let path = frame.save_to(dir)?;
				debug!("Wrote {}", path.display());
				written_frames.push(path);
			}
			info!("Normalized {} frames to {}", written_frames.len(), cell);
		}

		let sheet = compose(&self.layout, cell, normalized.frames())?;
		let output = config.output_path();
		let digest = if config.dry_run {
			warn!("Dry run: {} not written", output.display());
			digest(&sheet.encode_png()?)
		} else {
			sheet.save(&output)?
		};

		Ok(SheetReport {
			dry_run: config.dry_run,
			removed: curation.removed,
			frames: normalized.summaries().to_vec(),
			written_frames,
			cell,
			sheet: sheet.size(),
			placements: sheet.placements().to_vec(),
			output,
			output_file: config.output_file.clone(),
			digest,
		})
	}

	fn curate(&self) -> Result<CurationReport, SheetError> {
		let curator = Curator::new(&self.config.input_dir, &ALLOWED_FRAMES);
		if !self.config.dry_run {
			return curator.apply();
		}

		let plan = curator.plan()?;
		for path in &plan.removed {
			warn!("Dry run: would delete {}", path.display());
		}
		Ok(plan)
	}
}
