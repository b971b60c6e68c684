//! Sprite sheet support for the `avatar-sheet` project.

mod error;

pub mod compose;
pub mod config;
pub mod curator;
pub mod frame;
pub mod instructions;
pub mod layout;
pub mod normalize;
pub mod pipeline;


/// Default exported frame names of a maples.im character sprite download.
///
/// 4 stand frames, 4 walk frames, 1 sit frame and 1 jump frame. Everything else
/// found in the input folder is removed by the [`Curator`].
pub const ALLOWED_FRAMES: [&str; 10] = [
	"stand1_0.png",
	"stand1_1.png",
	"stand1_2.png",
	"stand1_3.png",
	"walk1_0.png",
	"walk1_1.png",
	"walk1_2.png",
	"walk1_3.png",
	"sit_0.png",
	"jump_0.png",
];

// Re-export unified error type
pub use error::{ParseAlignmentError, SheetError};

// Re-export main sheet types
pub use compose::{Placement, SpriteSheet, compose};
pub use self::config::{InstructionSettings, SheetConfig};
pub use curator::{CurationReport, Curator};
pub use frame::{Frame, Size};
pub use instructions::Instructions;
pub use layout::{AnimationRow, Cell, Layout, SHEET_COLUMNS, SHEET_ROWS};
pub use normalize::{Alignment, FrameSummary, NormalizedFrames, Normalizer};
pub use pipeline::{Pipeline, SheetReport};
