use tibiadat_rs::prelude::*;

use crate::fixtures::{DatBuilder, scratch_dir, write_file};

#[test_log::test]
fn export_groups_sprites_by_object() -> anyhow::Result<()> {
	let dir = scratch_dir("export");
	let sprites = dir.join("sprites");
	std::fs::create_dir_all(&sprites)?;
	for id in [5u32, 6] {
		write_file(&sprites, &format!("{id}.png"), &id.to_le_bytes());
	}

	let data = DatBuilder::new(0, 0, 0, 2).object(&[], &[5, 6]).object(&[], &[6, 0]).build();
	let dat = DatFile::from_bytes_with_config(&data, DecodeConfig::counted())?;

	let out = dir.join("objects");
	let summary = export_sprites(dat.objects(), &sprites, &out)?;
	assert_eq!(summary.objects, 2);
	assert_eq!(summary.copied, 3);
	assert_eq!(summary.missing, 0);
	assert_eq!(std::fs::read(out.join("101").join("6.png"))?, 6u32.to_le_bytes());

	std::fs::remove_dir_all(&dir)?;
	Ok(())
}

#[test_log::test]
fn missing_inputs_are_usage_errors() {
	let dir = scratch_dir("usage");

	let err = require_path(&dir.join("Tibia.dat"), PathKind::File).unwrap_err();
	assert!(matches!(err, DatError::InvalidPath { expected: PathKind::File, .. }));
	assert!(!err.is_format_error());

	assert!(require_path(&dir, PathKind::Directory).is_ok());
	assert!(require_path(&dir, PathKind::File).is_err());

	let _ = std::fs::remove_dir_all(&dir);
}
