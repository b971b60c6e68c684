//! Dimension normalization.
//!
//! StreamAvatars slices a sheet into equally sized cells, so every frame has to
//! share one canvas size. Normalization runs in a fixed order:
//!
//! 1. Frames whose longest side exceeds the configured maximum are downscaled
//!    (aspect ratio preserved, Lanczos3 resampling).
//! 2. The target size is the componentwise maximum over the *scaled* frames.
//! 3. Every frame smaller than the target is copied onto a transparent canvas of
//!    the target size, at an offset chosen by the [`Alignment`].
//!
//! Scaling before discovery matters: the consuming tool rejects frames above a
//! fixed pixel size, and computing the target from unscaled frames would leave
//! every cell oversized.

use std::{fmt, str::FromStr};

use image::{RgbaImage, imageops};
use log::debug;
use serde::{Deserialize, Serialize};

use super::{
	Frame, Size,
	error::{ParseAlignmentError, SheetError},
};

/// Longest side StreamAvatars accepts for a single frame
pub const DEFAULT_MAX_SIDE: u32 = 500;

/// Placement of a smaller frame inside the padded canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alignment {
	/// Bottom-right corners coincide, padding goes left and top
	#[default]
	BottomRight,
	/// Centered, odd remainders go right and bottom
	Center,
	/// Bottom-left corners coincide, padding goes right and top
	BottomLeft,
}

impl Alignment {
	/// Returns the offset of a `frame` sized image inside a `target` sized canvas.
	///
	/// `frame` must fit into `target`.
	pub fn offset(self, frame: Size, target: Size) -> (u32, u32) {
		let dx = target.width - frame.width;
		let dy = target.height - frame.height;
		match self {
			Self::BottomRight => (dx, dy),
			Self::Center => (dx / 2, dy / 2),
			Self::BottomLeft => (0, dy),
		}
	}

	/// Kebab-case name, as accepted by [`FromStr`]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::BottomRight => "bottom-right",
			Self::Center => "center",
			Self::BottomLeft => "bottom-left",
		}
	}
}

impl fmt::Display for Alignment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Alignment {
	type Err = ParseAlignmentError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
			"bottom-right" => Ok(Self::BottomRight),
			"center" | "centre" => Ok(Self::Center),
			"bottom-left" => Ok(Self::BottomLeft),
			_ => Err(ParseAlignmentError(s.to_string())),
		}
	}
}

/// Size a frame is scaled to so that its longest side equals `max_side`.
///
/// Returns `None` when the frame already fits. A zero `max_side` is treated as 1.
pub fn scaled_size(size: Size, max_side: u32) -> Option<Size> {
	let max_side = max_side.max(1);
	let longest = size.longest_side();
	if longest <= max_side {
		return None;
	}

	let factor = f64::from(max_side) / f64::from(longest);
	let scale = |side: u32| {
		if side == longest {
			max_side
		} else {
			((f64::from(side) * factor) as u32).clamp(1, max_side)
		}
	};
	Some(Size::new(scale(size.width), scale(size.height)))
}

/// Downscales `frame` if its longest side exceeds `max_side`.
///
/// Resampling runs on premultiplied alpha, so transparent neighbours do not bleed
/// their color into the opaque edges.
pub fn scale_to_fit(frame: Frame, max_side: u32) -> Frame {
	match scaled_size(frame.size(), max_side) {
		Some(size) => {
			debug!("Scaling {} to {}", frame, size);
			let image = imageops::resize(
				&premultiply(frame.image()),
				size.width,
				size.height,
				imageops::FilterType::Lanczos3,
			);
			frame.with_image(unpremultiply(image))
		}
		None => frame,
	}
}

fn premultiply(image: &RgbaImage) -> RgbaImage {
	let mut out = image.clone();
	for pixel in out.pixels_mut() {
		let alpha = u16::from(pixel.0[3]);
		for channel in &mut pixel.0[..3] {
			*channel = ((u16::from(*channel) * alpha + 127) / 255) as u8;
		}
	}
	out
}

fn unpremultiply(mut image: RgbaImage) -> RgbaImage {
	for pixel in image.pixels_mut() {
		let alpha = u16::from(pixel.0[3]);
		for channel in &mut pixel.0[..3] {
			*channel = if alpha == 0 {
				0
			} else {
				((u16::from(*channel) * 255 + alpha / 2) / alpha).min(255) as u8
			};
		}
	}
	image
}

/// Componentwise maximum over all frame sizes.
pub fn target_size<'a>(frames: impl IntoIterator<Item = &'a Frame>) -> Size {
	frames.into_iter().fold(Size::default(), |acc, frame| acc.max(frame.size()))
}

/// Pads `frame` to exactly `target`, placing it according to `alignment`.
///
/// A frame already of target size is returned unchanged. Pixels are copied, not
/// blended, so transparent pixels stay transparent.
pub fn pad(frame: Frame, target: Size, alignment: Alignment) -> Result<Frame, SheetError> {
	let size = frame.size();
	if size == target {
		return Ok(frame);
	}
	if !target.contains(size) {
		return Err(SheetError::FrameSizeMismatch {
			name: frame.name().to_string(),
			expected: target,
			actual: size,
		});
	}

	let (x, y) = alignment.offset(size, target);
	let mut canvas = RgbaImage::new(target.width, target.height);
	imageops::replace(&mut canvas, frame.image(), i64::from(x), i64::from(y));
	Ok(frame.with_image(canvas))
}

/// What normalization did to one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameSummary {
	/// Frame filename
	pub name: String,
	/// Size as decoded
	pub original: Size,
	/// Size after downscaling, if the frame was downscaled
	pub scaled: Option<Size>,
	/// Offset of the frame content inside the padded canvas
	pub offset: (u32, u32),
}

/// Frames that all share one canvas size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedFrames {
	target: Size,
	frames: Vec<Frame>,
	summaries: Vec<FrameSummary>,
}

impl NormalizedFrames {
	/// The shared canvas size
	#[inline]
	pub fn target(&self) -> Size {
		self.target
	}

	/// Normalized frames, in input order
	#[inline]
	pub fn frames(&self) -> &[Frame] {
		&self.frames
	}

	/// Per-frame record of the applied transforms
	#[inline]
	pub fn summaries(&self) -> &[FrameSummary] {
		&self.summaries
	}

	/// Looks up a frame by filename
	pub fn get(&self, name: &str) -> Option<&Frame> {
		self.frames.iter().find(|f| f.name() == name)
	}
}

/// Scales and pads a frame set to a common size.
///
/// # Examples
///
/// ```
/// use avatar_sheet_types::sheet::{Alignment, Frame, Normalizer, Size};
/// use image::RgbaImage;
///
/// # fn main() -> Result<(), avatar_sheet_types::sheet::SheetError> {
/// let normalizer = Normalizer::new(Alignment::Center).with_max_side(Some(500));
/// let frames = vec![Frame::new("jump_0.png", RgbaImage::new(800, 400))];
/// let normalized = normalizer.normalize(frames)?;
/// assert_eq!(normalized.target(), Size::new(500, 250));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalizer {
	/// Placement of smaller frames
	pub alignment: Alignment,
	/// Longest allowed side, `None` disables downscaling
	pub max_side: Option<u32>,
}

impl Default for Normalizer {
	fn default() -> Self {
		Self {
			alignment: Alignment::default(),
			max_side: Some(DEFAULT_MAX_SIDE),
		}
	}
}

impl Normalizer {
	/// Creates a normalizer with the given alignment and no downscaling.
	pub fn new(alignment: Alignment) -> Self {
		Self {
			alignment,
			max_side: None,
		}
	}

	/// Sets the downscale bound.
	pub fn with_max_side(mut self, max_side: Option<u32>) -> Self {
		self.max_side = max_side;
		self
	}

	/// Checks that the downscale bound can hold at least one pixel.
	pub fn validate(&self) -> Result<(), SheetError> {
		match self.max_side {
			Some(0) => Err(SheetError::InvalidMaxSide(0)),
			_ => Ok(()),
		}
	}

	/// Normalizes `frames` to one canvas size.
	///
	/// # Errors
	///
	/// [`SheetError::InvalidMaxSide`] if the downscale bound is zero.
	/// [`SheetError::EmptyFrameSet`] if there are no frames, or the frames have no
	/// area to composite.
	pub fn normalize(&self, frames: Vec<Frame>) -> Result<NormalizedFrames, SheetError> {
		self.validate()?;
		let originals: Vec<Size> = frames.iter().map(Frame::size).collect();

		let scaled: Vec<Frame> = match self.max_side {
			Some(max_side) => frames.into_iter().map(|f| scale_to_fit(f, max_side)).collect(),
			None => frames,
		};

		let target = target_size(&scaled);
		if target.is_empty() {
			return Err(SheetError::EmptyFrameSet);
		}
		debug!("Target frame size: {}", target);

		let mut padded = Vec::with_capacity(scaled.len());
		let mut summaries = Vec::with_capacity(scaled.len());
		for (frame, original) in scaled.into_iter().zip(originals) {
			let size = frame.size();
			summaries.push(FrameSummary {
				name: frame.name().to_string(),
				original,
				scaled: (size != original).then_some(size),
				offset: self.alignment.offset(size, target),
			});
			padded.push(pad(frame, target, self.alignment)?);
		}

		Ok(NormalizedFrames {
			target,
			frames: padded,
			summaries,
		})
	}
}
