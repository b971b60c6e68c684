//! Setup instructions for the StreamAvatars avatar editor.

use std::fmt;

use super::{InstructionSettings, Size};

const RULE: &str = "==================================================";

/// Manual configuration steps for the generated sheet.
///
/// Rendered through [`fmt::Display`] for a human operator.
#[derive(Debug, Clone, PartialEq)]
pub struct Instructions {
	/// Name of the generated sheet file
	pub output_file: String,
	/// Per-frame cell size to enter in the editor
	pub cell: Size,
	/// Editor scale and frame rates
	pub settings: InstructionSettings,
}

impl Instructions {
	/// Creates the instruction block for a sheet.
	pub fn new(output_file: impl Into<String>, cell: Size, settings: InstructionSettings) -> Self {
		Self {
			output_file: output_file.into(),
			cell,
			settings,
		}
	}
}

impl fmt::Display for Instructions {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "{RULE}")?;
		writeln!(f, "Instructions")?;
		writeln!(f, "{RULE}")?;
		writeln!(f, "1. Open StreamAvatars.")?;
		writeln!(f, "2. Click the 'Open Folder' icon and navigate to /avatars.")?;
		writeln!(f, "3. Drag the generated '{}' into the folder.", self.output_file)?;
		writeln!(f, "4. Save & Reload.")?;
		writeln!(f, "5. Update Scale to {} (may need adjustment).", self.settings.avatar_scale)?;
		writeln!(f, "6. Set Width to {} and Height to {}.", self.cell.width, self.cell.height)?;
		writeln!(f, "7. Set Idle FPS to {} FPS.", self.settings.idle_fps)?;
		writeln!(f, "8. Set Walk FPS to {} FPS.", self.settings.walk_fps)?;
		writeln!(f, "9. Connect and test the new avatar.")?;
		writeln!(f, "{RULE}")?;
		writeln!(f, "Spritesheet setup is complete! Enjoy using your new MapleStory avatar :)")?;
		write!(f, "{RULE}")
	}
}
