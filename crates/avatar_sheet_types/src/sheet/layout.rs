//! StreamAvatars sprite sheet layout.
//!
//! The sheet is a fixed grid of [`SHEET_COLUMNS`] × [`SHEET_ROWS`] cells. Each row
//! holds one animation, each cell optionally references a frame by filename.
//!
//! # Grid
//!
//! ```text
//! Row  Animation  Col 0         Col 1         Col 2         Col 3
//! ---  ---------  ------------  ------------  ------------  ------------
//! 0    Idle       stand1_0.png  stand1_1.png  stand1_2.png  stand1_3.png
//! 1    Walk       walk1_0.png   walk1_1.png   walk1_2.png   walk1_3.png
//! 2    Sit        sit_0.png     -             -             -
//! 3    Stand      stand1_0.png  -             -             -
//! 4    Jump       jump_0.png    -             -             -
//! ```
//!
//! Format reference:
//! <https://docs.streamavatars.com/stream-avatars/content-creating/creating-avatars#sprite-sheet-format>

use std::fmt;

use serde::Serialize;

use super::{Size, error::SheetError};

/// Number of columns in the sheet
pub const SHEET_COLUMNS: u32 = 4;

/// Number of rows in the sheet
pub const SHEET_ROWS: u32 = 5;

/// Animation stored in a sheet row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u32)]
pub enum AnimationRow {
	/// Idle loop
	Idle = 0,
	/// Walk cycle
	Walk = 1,
	/// Sitting pose
	Sit = 2,
	/// Default standing pose
	Stand = 3,
	/// Jump pose
	Jump = 4,
}

impl AnimationRow {
	/// All rows in sheet order.
	pub const ALL: [AnimationRow; SHEET_ROWS as usize] =
		[Self::Idle, Self::Walk, Self::Sit, Self::Stand, Self::Jump];

	/// Converts a row index to `AnimationRow`
	pub fn from_index(row: u32) -> Option<Self> {
		Self::ALL.get(row as usize).copied()
	}
}

impl fmt::Display for AnimationRow {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Idle => write!(f, "Idle"),
			Self::Walk => write!(f, "Walk"),
			Self::Sit => write!(f, "Sit"),
			Self::Stand => write!(f, "Stand"),
			Self::Jump => write!(f, "Jump"),
		}
	}
}

/// One occupied layout cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
	/// Grid row
	pub row: u32,
	/// Grid column
	pub col: u32,
	/// Referenced frame filename
	pub name: &'static str,
}

impl Cell {
	/// Returns the animation this cell belongs to, `None` for rows outside the grid.
	pub fn animation(&self) -> Option<AnimationRow> {
		AnimationRow::from_index(self.row)
	}

	/// Pixel offset of the cell's top-left corner for the given cell size.
	pub fn offset(&self, cell: Size) -> (u32, u32) {
		(self.col * cell.width, self.row * cell.height)
	}
}

type Grid = [[Option<&'static str>; SHEET_COLUMNS as usize]; SHEET_ROWS as usize];

/// Static mapping from grid position to frame filename
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
	rows: Grid,
}

impl Layout {
	/// Layout expected by StreamAvatars. `stand1_0.png` fills both the first idle
	/// cell and the stand row.
	pub const STREAM_AVATARS: Layout = Layout::new([
		[Some("stand1_0.png"), Some("stand1_1.png"), Some("stand1_2.png"), Some("stand1_3.png")],
		[Some("walk1_0.png"), Some("walk1_1.png"), Some("walk1_2.png"), Some("walk1_3.png")],
		[Some("sit_0.png"), None, None, None],
		[Some("stand1_0.png"), None, None, None],
		[Some("jump_0.png"), None, None, None],
	]);

	/// Creates a layout from a row-major grid.
	pub const fn new(rows: Grid) -> Self {
		Self {
			rows,
		}
	}

	/// Returns the frame referenced at `(row, col)`, if any.
	pub fn get(&self, row: u32, col: u32) -> Option<&'static str> {
		self.rows.get(row as usize).and_then(|r| r.get(col as usize)).copied().flatten()
	}

	/// Iterates over occupied cells in row-major order.
	pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
		self.rows.iter().enumerate().flat_map(|(row, cols)| {
			cols.iter().enumerate().filter_map(move |(col, name)| {
				name.map(|name| Cell {
					row: row as u32,
					col: col as u32,
					name,
				})
			})
		})
	}

	/// Returns the sheet size for a given cell size.
	pub fn sheet_size(cell: Size) -> Size {
		Size::new(cell.width * SHEET_COLUMNS, cell.height * SHEET_ROWS)
	}

	/// Checks that every occupied cell references a name in `allowed`.
	pub fn validate(&self, allowed: &[&str]) -> Result<(), SheetError> {
		match self.cells().find(|cell| !allowed.contains(&cell.name)) {
			Some(cell) => Err(SheetError::UnknownLayoutFrame {
				row: cell.row,
				col: cell.col,
				name: cell.name.to_string(),
			}),
			None => Ok(()),
		}
	}
}

impl Default for Layout {
	fn default() -> Self {
		Self::STREAM_AVATARS
	}
}
