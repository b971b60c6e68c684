//! Frame set curation.
//!
//! maples.im downloads contain more poses than StreamAvatars uses. The curator
//! keeps the entries named in the allow-list and removes everything else from
//! the frame folder: files one by one, directories recursively.

use std::{
	fs,
	path::{Path, PathBuf},
};

use log::info;
use serde::Serialize;

use super::error::SheetError;

/// Outcome of a curation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CurationReport {
	/// Entries removed (or, for a plan, to be removed), in name order
	pub removed: Vec<PathBuf>,
	/// Allowed names present in the folder, in allow-list order
	pub retained: Vec<String>,
}

/// Prunes a folder to an allow-list of entry names.
#[derive(Debug, Clone, Copy)]
pub struct Curator<'a> {
	dir: &'a Path,
	allowed: &'a [&'a str],
}

impl<'a> Curator<'a> {
	/// Creates a curator for `dir`.
	pub fn new(dir: &'a Path, allowed: &'a [&'a str]) -> Self {
		Self {
			dir,
			allowed,
		}
	}

	/// Lists what [`Curator::apply`] would remove and keep, without removing anything.
	pub fn plan(&self) -> Result<CurationReport, SheetError> {
		if !self.dir.is_dir() {
			return Err(SheetError::MissingDirectory(self.dir.to_path_buf()));
		}

		let read_dir = fs::read_dir(self.dir).map_err(|e| SheetError::fs(self.dir, e))?;
		let mut names = Vec::new();
		for entry in read_dir {
			let entry = entry.map_err(|e| SheetError::fs(self.dir, e))?;
			names.push(entry.file_name());
		}
		names.sort();

		let mut removed = Vec::new();
		for name in &names {
			let keep = name.to_str().is_some_and(|name| self.allowed.contains(&name));
			if !keep {
				removed.push(self.dir.join(name));
			}
		}

		let retained = self
			.allowed
			.iter()
			.filter(|allowed| names.iter().any(|name| name.as_os_str() == **allowed))
			.map(|allowed| allowed.to_string())
			.collect();

		Ok(CurationReport {
			removed,
			retained,
		})
	}

	/// Removes every entry not in the allow-list.
	///
	/// Stops at the first entry that cannot be removed.
	pub fn apply(&self) -> Result<CurationReport, SheetError> {
		let report = self.plan()?;
		for path in &report.removed {
			remove_entry(path)?;
			info!("Deleted: {}", path.display());
		}
		Ok(report)
	}
}

/// Removes a single directory entry. Symlinks are removed, not followed.
fn remove_entry(path: &Path) -> Result<(), SheetError> {
	let file_type = fs::symlink_metadata(path).map_err(|e| SheetError::fs(path, e))?.file_type();
	let result = if file_type.is_dir() {
		fs::remove_dir_all(path)
	} else {
		fs::remove_file(path)
	};
	result.map_err(|e| SheetError::fs(path, e))
}
