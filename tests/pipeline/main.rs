//! End-to-end tests for the sprite sheet pipeline


use avatar_sheet::prelude::*;
use fixtures::{CLEAR, SKIN, dimensions, scenario_dir, write_frame};

fn config_for(dir: &std::path::Path) -> SheetConfig {
	SheetConfig {
		input_dir: dir.to_path_buf(),
		..SheetConfig::default()
	}
}

#[test_log::test]
fn test_two_frame_scenario() {
	let dir = tempfile::tempdir().unwrap();
	scenario_dir(dir.path());

	let report = Pipeline::new(config_for(dir.path())).run().unwrap();

	assert_eq!(report.removed, vec![dir.path().join("extra_notes.txt")]);
	assert!(!dir.path().join("extra_notes.txt").exists());
	assert_eq!(report.cell, Size::new(50, 60));
	assert_eq!(report.sheet, Size::new(200, 300));
	assert_eq!(report.output, dir.path().join("spritesheet.png"));

	// normalized frames are written back over the sources
	assert_eq!(report.written_frames.len(), 2);
	assert_eq!(dimensions(&dir.path().join("stand1_0.png")), (50, 60));
	assert_eq!(dimensions(&dir.path().join("walk1_0.png")), (50, 60));

	let sheet = image::open(&report.output).unwrap().into_rgba8();
	assert_eq!(sheet.dimensions(), (200, 300));

	// stand1_0 (40x60) is right-aligned in its cell: x 10..50, border at 10 and 49
	assert_eq!(*sheet.get_pixel(9, 30), CLEAR);
	assert_eq!(*sheet.get_pixel(10, 30), CLEAR);
	assert_eq!(*sheet.get_pixel(11, 30), SKIN);
	// stand row repeats the idle frame
	assert_eq!(*sheet.get_pixel(11, 180 + 30), SKIN);
	// walk1_0 (50x50) sits on the bottom of its 60 high cell
	assert_eq!(*sheet.get_pixel(25, 60 + 5), CLEAR);
	assert_eq!(*sheet.get_pixel(25, 60 + 20), SKIN);

	for (x, y, pixel) in sheet.enumerate_pixels() {
		let (col, row) = (x / 50, y / 60);
		if col > 0 || row == 2 || row == 4 {
			assert_eq!(*pixel, CLEAR, "pixel ({x}, {y}) should be transparent");
		}
	}
}

#[test_log::test]
fn test_output_is_deterministic() {
	let first = tempfile::tempdir().unwrap();
	let second = tempfile::tempdir().unwrap();
	scenario_dir(first.path());
	scenario_dir(second.path());

	let a = Pipeline::new(config_for(first.path())).run().unwrap();
	let b = Pipeline::new(config_for(second.path())).run().unwrap();

	assert_eq!(a.digest, b.digest);
	assert_eq!(std::fs::read(&a.output).unwrap(), std::fs::read(&b.output).unwrap());
}

#[test_log::test]
fn test_oversized_frame_is_scaled_first() {
	let dir = tempfile::tempdir().unwrap();
	write_frame(dir.path(), "jump_0.png", 800, 400);
	write_frame(dir.path(), "sit_0.png", 100, 300);

	let report = Pipeline::new(config_for(dir.path())).run().unwrap();

	let jump = report.frames.iter().find(|f| f.name == "jump_0.png").unwrap();
	assert_eq!(jump.original, Size::new(800, 400));
	assert_eq!(jump.scaled, Some(Size::new(500, 250)));
	assert_eq!(report.cell, Size::new(500, 300));
	assert_eq!(report.sheet, Size::new(2000, 1500));
}

#[test_log::test]
fn test_no_downscale_keeps_large_frames() {
	let dir = tempfile::tempdir().unwrap();
	write_frame(dir.path(), "jump_0.png", 800, 400);

	let config = SheetConfig {
		downscale: false,
		..config_for(dir.path())
	};
	let report = Pipeline::new(config).run().unwrap();
	assert_eq!(report.cell, Size::new(800, 400));
}

#[test_log::test]
fn test_alignment_center() {
	let dir = tempfile::tempdir().unwrap();
	scenario_dir(dir.path());

	let config = SheetConfig {
		alignment: Alignment::Center,
		..config_for(dir.path())
	};
	let report = Pipeline::new(config).run().unwrap();

	let stand = report.frames.iter().find(|f| f.name == "stand1_0.png").unwrap();
	let walk = report.frames.iter().find(|f| f.name == "walk1_0.png").unwrap();
	assert_eq!(stand.offset, (5, 0));
	assert_eq!(walk.offset, (0, 5));
}

#[test_log::test]
fn test_missing_directory_is_fatal() {
	let dir = tempfile::tempdir().unwrap();
	let missing = dir.path().join("CharacterSpriteSheet");

	let result = Pipeline::new(config_for(&missing)).run();
	assert!(matches!(result, Err(SheetError::MissingDirectory(_))));
}

#[test_log::test]
fn test_empty_frame_set_is_fatal() {
	let dir = tempfile::tempdir().unwrap();
	std::fs::write(dir.path().join("extra_notes.txt"), "notes").unwrap();
	std::fs::create_dir(dir.path().join("stand1_0.png")).unwrap();

	let result = Pipeline::new(config_for(dir.path())).run();
	assert!(matches!(result, Err(SheetError::EmptyFrameSet)));
	assert!(!dir.path().join("spritesheet.png").exists());
}

#[test_log::test]
fn test_unreadable_frame_is_fatal() {
	let dir = tempfile::tempdir().unwrap();
	write_frame(dir.path(), "stand1_0.png", 10, 10);
	std::fs::write(dir.path().join("walk1_1.png"), "not an image").unwrap();

	let result = Pipeline::new(config_for(dir.path())).run();
	assert!(matches!(result, Err(SheetError::UnreadableImage { .. })));
	assert!(!dir.path().join("spritesheet.png").exists());
}

#[test_log::test]
fn test_dry_run_touches_nothing() {
	let dir = tempfile::tempdir().unwrap();
	scenario_dir(dir.path());

	let config = SheetConfig {
		dry_run: true,
		..config_for(dir.path())
	};
	let report = Pipeline::new(config).run().unwrap();

	assert!(report.dry_run);
	assert_eq!(report.removed, vec![dir.path().join("extra_notes.txt")]);
	assert!(report.written_frames.is_empty());
	assert!(dir.path().join("extra_notes.txt").exists());
	assert!(!dir.path().join("spritesheet.png").exists());
	assert_eq!(dimensions(&dir.path().join("stand1_0.png")), (40, 60));
	assert_eq!(report.sheet, Size::new(200, 300));
}

#[test_log::test]
fn test_keep_frames_leaves_sources() {
	let dir = tempfile::tempdir().unwrap();
	scenario_dir(dir.path());

	let config = SheetConfig {
		write_frames: false,
		output_file: "avatar.png".to_string(),
		..config_for(dir.path())
	};
	let report = Pipeline::new(config).run().unwrap();

	assert!(report.written_frames.is_empty());
	assert_eq!(dimensions(&dir.path().join("stand1_0.png")), (40, 60));
	assert_eq!(dimensions(&dir.path().join("avatar.png")), (200, 300));
}

#[test_log::test]
fn test_custom_layout_rejected_before_curation() {
	let dir = tempfile::tempdir().unwrap();
	scenario_dir(dir.path());

	let layout = Layout::new([
		[Some("stand1_0.png"), None, None, None],
		[Some("ladder_0.png"), None, None, None],
		[None; 4],
		[None; 4],
		[None; 4],
	]);
	let result = Pipeline::new(config_for(dir.path())).with_layout(layout).run();

	assert!(matches!(result, Err(SheetError::UnknownLayoutFrame { .. })));
	assert!(dir.path().join("extra_notes.txt").exists());
}

#[test_log::test]
fn test_zero_max_side_is_rejected() {
	let dir = tempfile::tempdir().unwrap();
	scenario_dir(dir.path());

	let config = SheetConfig {
		max_side: 0,
		..config_for(dir.path())
	};
	let result = Pipeline::new(config).run();

	assert!(matches!(result, Err(SheetError::InvalidMaxSide(0))));
	assert!(dir.path().join("extra_notes.txt").exists());
	assert_eq!(dimensions(&dir.path().join("stand1_0.png")), (40, 60));
	assert!(!dir.path().join("spritesheet.png").exists());
}

#[test_log::test]
fn test_unwritable_output_is_fatal() {
	let dir = tempfile::tempdir().unwrap();
	scenario_dir(dir.path());
	// an allow-listed directory survives curation and blocks the sheet write
	std::fs::create_dir(dir.path().join("sit_0.png")).unwrap();

	let config = SheetConfig {
		output_file: "sit_0.png".to_string(),
		..config_for(dir.path())
	};
	let result = Pipeline::new(config).run();

	match result {
		Err(SheetError::FileSystem {
			path,
			..
		}) => assert_eq!(path, dir.path().join("sit_0.png")),
		other => panic!("unexpected result: {other:?}"),
	}
	assert!(dir.path().join("sit_0.png").is_dir());
	assert!(!dir.path().join("spritesheet.png").exists());
}
