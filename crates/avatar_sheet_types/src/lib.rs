//! This crate provides the frame, layout and compositing types for the `avatar-sheet` project.
//!
//! # Pipeline
//!
//! - **Curator**: prunes a frame folder down to the maples.im frame allow-list
//! - **Normalizer**: downscales oversized frames and pads every frame to one canvas size
//! - **Compositor**: pastes the frames into the fixed 4x5 StreamAvatars grid
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use avatar_sheet_types::prelude::*;
//!
//! # fn main() -> Result<(), SheetError> {
//! let config = SheetConfig::default();
//! let report = Pipeline::new(config).run()?;
//! println!("Sheet: {}", report.sheet);
//! # Ok(())
//! # }
//! ```
//!
//! Or work on in-memory frames directly:
//!
//! ```
//! use avatar_sheet_types::sheet::{Alignment, Frame, Layout, Normalizer, compose};
//! use image::RgbaImage;
//!
//! # fn main() -> Result<(), avatar_sheet_types::sheet::SheetError> {
//! let frames = vec![
//! 	Frame::new("stand1_0.png", RgbaImage::new(40, 60)),
//! 	Frame::new("walk1_0.png", RgbaImage::new(50, 50)),
//! ];
//! let normalized = Normalizer::new(Alignment::BottomRight).normalize(frames)?;
//! let sheet = compose(&Layout::STREAM_AVATARS, normalized.target(), normalized.frames())?;
//! assert_eq!(sheet.size().width, 200);
//! assert_eq!(sheet.size().height, 300);
//! # Ok(())
//! # }
//! ```

pub mod sheet;

/// `use avatar_sheet_types::prelude::*;` to import commonly used items.
pub mod prelude;
