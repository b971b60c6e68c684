//! Prelude module for `avatar_sheet_types`.
//!
//! This module provides a convenient way to import commonly used types, traits, and constants.
//!
//! # Examples
//!
//! ```no_run
//! use avatar_sheet_types::prelude::*;
//!
//! let pipeline = Pipeline::new(SheetConfig::default());
//! assert_eq!(ALLOWED_FRAMES.len(), 10);
//! ```

// Sheet module types
#[doc(inline)]
pub use crate::sheet::{
	// Constants
	ALLOWED_FRAMES,
	SHEET_COLUMNS,
	SHEET_ROWS,

	// Normalizer types
	Alignment,
	AnimationRow,
	// Curator types
	CurationReport,
	Curator,

	Frame,
	FrameSummary,
	InstructionSettings,
	Instructions,
	Layout,
	NormalizedFrames,
	Normalizer,

	// Pipeline types
	Pipeline,
	Placement,
	SheetConfig,
	SheetError,
	SheetReport,
	Size,
	SpriteSheet,

	compose,
};

// Re-export the sheet module for advanced usage
#[doc(inline)]
pub use crate::sheet;
