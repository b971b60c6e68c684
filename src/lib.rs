//! `avatar-sheet` turns a folder of maples.im character frames into a StreamAvatars
//! sprite sheet.
//!
//! The heavy lifting lives in [`avatar_sheet_types`]; this crate re-exports it and
//! ships the `avatar-sheet` command line tool.
//!
pub use avatar_sheet_types::*;
