//! Error types for sprite sheet curation, normalization and compositing.

use std::path::PathBuf;

use thiserror::Error;

use super::Size;

/// Errors that can occur while building a sprite sheet
#[derive(Debug, Error)]
pub enum SheetError {
	/// Input directory does not exist
	#[error("Input directory not found: {}", .0.display())]
	MissingDirectory(PathBuf),

	/// Reading, removing or writing a file failed
	#[error("File system error at {}: {source}", path.display())]
	FileSystem {
		/// Path of the entry being accessed
		path: PathBuf,
		/// Underlying IO error
		#[source]
		source: std::io::Error,
	},

	/// Downscale bound cannot hold a single pixel
	#[error("Invalid maximum frame side {0}, must be at least 1 pixel")]
	InvalidMaxSide(u32),

	/// No frame from the allow-list was found
	#[error("No frames matching the allow-list were found, nothing to composite")]
	EmptyFrameSet,

	/// A frame matched the allow-list by name but could not be decoded
	#[error("Unreadable image {}: {source}", path.display())]
	UnreadableImage {
		/// Path of the frame file
		path: PathBuf,
		/// Underlying decoder error
		#[source]
		source: image::ImageError,
	},

	/// Encoding the sheet to PNG failed
	#[error("Failed to encode sprite sheet: {0}")]
	Encode(#[source] image::ImageError),

	/// A frame does not fit the canvas or cell it is placed in
	#[error("Frame {name} is {actual}, which does not fit into {expected}")]
	FrameSizeMismatch {
		/// Frame filename
		name: String,
		/// Canvas or cell size
		expected: Size,
		/// Actual frame size
		actual: Size,
	},

	/// A layout cell names a frame outside the allow-list
	#[error("Layout cell ({row}, {col}) references {name}, which is not an allowed frame")]
	UnknownLayoutFrame {
		/// Layout row
		row: u32,
		/// Layout column
		col: u32,
		/// Referenced frame filename
		name: String,
	},

	/// Configuration could not be loaded
	#[error(transparent)]
	Config(#[from] config::ConfigError),
}

impl SheetError {
	/// Wraps an IO error with the path it occurred on
	pub(crate) fn fs(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
		Self::FileSystem {
			path: path.into(),
			source,
		}
	}
}

/// Error returned when parsing an unknown alignment name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown alignment '{0}', expected one of: bottom-right, center, bottom-left")]
pub struct ParseAlignmentError(pub String);
