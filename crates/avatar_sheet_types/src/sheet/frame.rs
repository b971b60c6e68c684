//! Frame structures and utilities.
//!
//! A [`Frame`] is one animation pose: an RGBA raster keyed by its filename in the
//! frame folder. Frames are decoded once, transformed in memory, and written back
//! at most once.

use std::{
	fmt,
	path::{Path, PathBuf},
};

use image::{ImageReader, RgbaImage};
use serde::{Deserialize, Serialize};

use super::error::SheetError;

/// Pixel dimensions of a frame, canvas or cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
	/// Width in pixels
	pub width: u32,

	/// Height in pixels
	pub height: u32,
}

impl Size {
	/// Creates a new size.
	pub const fn new(width: u32, height: u32) -> Self {
		Self {
			width,
			height,
		}
	}

	/// Returns the longest side.
	#[inline]
	pub fn longest_side(&self) -> u32 {
		self.width.max(self.height)
	}

	/// Returns `true` if either dimension is zero.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.width == 0 || self.height == 0
	}

	/// Returns `true` if `other` fits inside this size in both dimensions.
	#[inline]
	pub fn contains(&self, other: Size) -> bool {
		other.width <= self.width && other.height <= self.height
	}

	/// Componentwise maximum of two sizes.
	#[inline]
	pub fn max(self, other: Size) -> Size {
		Size::new(self.width.max(other.width), self.height.max(other.height))
	}
}

impl fmt::Display for Size {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}×{}", self.width, self.height)
	}
}

/// A single named animation frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
	/// Filename key, e.g. `stand1_0.png`
	name: String,

	/// RGBA pixel data
	image: RgbaImage,
}

impl Frame {
	/// Creates a frame from an already decoded image.
	pub fn new(name: impl Into<String>, image: RgbaImage) -> Self {
		Self {
			name: name.into(),
			image,
		}
	}

	/// Decodes the frame stored at `path`, converting it to RGBA.
	///
	/// The frame is keyed by the file name component of `path`.
	pub fn open(path: impl AsRef<Path>) -> Result<Self, SheetError> {
		let path = path.as_ref();
		let name = path
			.file_name()
			.map(|n| n.to_string_lossy().into_owned())
			.unwrap_or_default();

		let reader = ImageReader::open(path).map_err(|e| SheetError::fs(path, e))?;
		let reader = reader.with_guessed_format().map_err(|e| SheetError::fs(path, e))?;
		let image = reader.decode().map_err(|source| SheetError::UnreadableImage {
			path: path.to_path_buf(),
			source,
		})?;

		Ok(Self::new(name, image.into_rgba8()))
	}

	/// Writes the frame as PNG into `dir`, under its own name.
	///
	/// Returns the path written.
	pub fn save_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf, SheetError> {
		let path = dir.as_ref().join(&self.name);
		self.image.save_with_format(&path, image::ImageFormat::Png).map_err(|e| match e {
			image::ImageError::IoError(io) => SheetError::fs(&path, io),
			other => SheetError::Encode(other),
		})?;
		Ok(path)
	}

	/// Returns the frame's filename key.
	#[inline]
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the frame's width.
	#[inline]
	pub fn width(&self) -> u32 {
		self.image.width()
	}

	/// Returns the frame's height.
	#[inline]
	pub fn height(&self) -> u32 {
		self.image.height()
	}

	/// Returns the frame's dimensions.
	#[inline]
	pub fn size(&self) -> Size {
		Size::new(self.width(), self.height())
	}

	/// Returns a reference to the pixel data.
	#[inline]
	pub fn image(&self) -> &RgbaImage {
		&self.image
	}

	/// Replaces the pixel data, keeping the name.
	pub(crate) fn with_image(self, image: RgbaImage) -> Self {
		Self {
			name: self.name,
			image,
		}
	}
}

impl fmt::Display for Frame {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} ({})", self.name, self.size())
	}
}
