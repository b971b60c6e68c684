//! Sheet compositing.

use std::{io::Cursor, path::Path};

use image::{ImageFormat, RgbaImage, imageops};
use log::{debug, info};
use md5::{Digest, Md5};
use serde::Serialize;

use super::{AnimationRow, Frame, Layout, Size, error::SheetError};

/// A frame placed into the sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
	/// Grid row
	pub row: u32,
	/// Grid column
	pub col: u32,
	/// Animation of the row, `None` for rows outside the StreamAvatars grid
	pub animation: Option<AnimationRow>,
	/// Frame filename
	pub name: String,
	/// Left edge in sheet pixels
	pub x: u32,
	/// Top edge in sheet pixels
	pub y: u32,
}

/// A composited sprite sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteSheet {
	image: RgbaImage,
	cell: Size,
	placements: Vec<Placement>,
}

impl SpriteSheet {
	/// Returns the sheet pixels.
	#[inline]
	pub fn image(&self) -> &RgbaImage {
		&self.image
	}

	/// Returns the sheet dimensions.
	#[inline]
	pub fn size(&self) -> Size {
		Size::new(self.image.width(), self.image.height())
	}

	/// Returns the size of one grid cell.
	#[inline]
	pub fn cell_size(&self) -> Size {
		self.cell
	}

	/// Returns the placed frames, in row-major order.
	#[inline]
	pub fn placements(&self) -> &[Placement] {
		&self.placements
	}

	/// Encodes the sheet as PNG.
	pub fn encode_png(&self) -> Result<Vec<u8>, SheetError> {
		let mut buffer = Cursor::new(Vec::new());
		self.image.write_to(&mut buffer, ImageFormat::Png).map_err(SheetError::Encode)?;
		Ok(buffer.into_inner())
	}

	/// Encodes the sheet and writes it to `path`.
	///
	/// Returns the hex MD5 digest of the written bytes.
	pub fn save(&self, path: impl AsRef<Path>) -> Result<String, SheetError> {
		let path = path.as_ref();
		let bytes = self.encode_png()?;
		std::fs::write(path, &bytes).map_err(|e| SheetError::fs(path, e))?;
		info!("Wrote sprite sheet {} ({})", path.display(), self.size());
		Ok(digest(&bytes))
	}
}

/// Hex MD5 digest of `bytes`
pub fn digest(bytes: &[u8]) -> String {
	hex::encode(Md5::digest(bytes))
}

/// Composites `frames` into a sheet following `layout`.
///
/// Each occupied cell whose frame is present is copied with its top-left corner on
/// the cell origin. Empty cells and cells whose frame is absent stay transparent.
///
/// # Errors
///
/// [`SheetError::FrameSizeMismatch`] if a referenced frame is larger than `cell`.
pub fn compose(layout: &Layout, cell: Size, frames: &[Frame]) -> Result<SpriteSheet, SheetError> {
	let size = Layout::sheet_size(cell);
	let mut image = RgbaImage::new(size.width, size.height);
	let mut placements = Vec::new();

	for layout_cell in layout.cells() {
		let Some(frame) = frames.iter().find(|f| f.name() == layout_cell.name) else {
			debug!(
				"Cell ({}, {}) left empty: {} not found",
				layout_cell.row, layout_cell.col, layout_cell.name
			);
			continue;
		};

		if !cell.contains(frame.size()) {
			return Err(SheetError::FrameSizeMismatch {
				name: frame.name().to_string(),
				expected: cell,
				actual: frame.size(),
			});
		}

		let (x, y) = layout_cell.offset(cell);
		imageops::replace(&mut image, frame.image(), i64::from(x), i64::from(y));
		placements.push(Placement {
			row: layout_cell.row,
			col: layout_cell.col,
			animation: layout_cell.animation(),
			name: layout_cell.name.to_string(),
			x,
			y,
		});
	}

	Ok(SpriteSheet {
		image,
		cell,
		placements,
	})
}
