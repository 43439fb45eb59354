use std::collections::BTreeSet;

use tibiadat_rs::prelude::*;

use crate::fixtures::{DatBuilder, scratch_dir, write_file};

/// Seven records laid out the way the client numbers them: items 100..=102,
/// outfits 103..=104, effect 105, distance effect 106.
fn client_dat() -> Vec<u8> {
	let mut market = vec![0x22, 0, 0, 0, 0, 0, 0, 3, 0];
	market.extend_from_slice(b"Axe");
	market.extend_from_slice(&[0, 0, 0, 0]);

	DatBuilder::new(102, 2, 1, 1)
		.object(&[0x00, 0x01, 0x00], &[2500, 7])
		.object(&market, &[7, 0])
		.object(&[], &[0])
		.outfit(&[10, 11], Some(&[11, 1200]))
		.outfit(&[10], None)
		.object(&[0x16, 1, 2, 3, 4], &[2500])
		.object(&[], &[3])
		.build()
}

#[test_log::test]
fn single_distance_object() -> anyhow::Result<()> {
	let dir = scratch_dir("single");
	let data = DatBuilder::new(0, 0, 0, 1).object(&[], &[42]).build();
	let input = write_file(&dir, "Tibia.dat", &data);
	let output = dir.join("bindings.txt");

	let dat = DatFile::open_with_config(&input, DecodeConfig::counted())?;
	dat.sprite_index()?.write(&output)?;

	assert_eq!(std::fs::read_to_string(&output)?, "42 100\n");
	std::fs::remove_dir_all(&dir)?;
	Ok(())
}

#[test_log::test]
fn single_distance_object_with_id_offset_bound() -> anyhow::Result<()> {
	let data = DatBuilder::new(0, 0, 0, 1).object(&[], &[42]).build();

	let dat = DatFile::from_bytes(&data)?;
	assert!(dat.is_empty());
	assert_eq!(dat.sprite_index()?.to_text(), "");
	Ok(())
}

#[test_log::test]
fn client_layout_bindings() -> anyhow::Result<()> {
	let dat = DatFile::from_bytes(&client_dat())?;
	assert_eq!(dat.len(), 7);
	assert_eq!(dat.get(101).and_then(|o| o.market_name.as_deref()), Some("Axe"));

	let index = dat.sprite_index()?;
	assert_eq!(index.bucket_count(), 3);
	assert_eq!(
		index.to_text(),
		"7 100 101\n10 103 104\n11 103\n3 106\n1200 103\n2500 100 105\n"
	);
	Ok(())
}

#[test_log::test]
fn every_line_references_decoded_objects() -> anyhow::Result<()> {
	let dat = DatFile::from_bytes(&client_dat())?;
	let text = dat.sprite_index()?.to_text();
	let upper = 100 + dat.header().num_objects();

	let mut referenced = BTreeSet::new();
	for line in text.lines() {
		let ids: Vec<u32> = line.split(' ').map(str::parse::<u32>).collect::<Result<_, _>>()?;
		assert!(ids.len() >= 2, "line without objects: {line:?}");

		for &object_id in &ids[1..] {
			assert!((100..upper).contains(&object_id));
			let object = dat.get(object_id).expect("object exists");
			assert!(object.sprite_ids.contains(&ids[0]));
			referenced.insert(object_id);
		}
	}

	// 102 only draws the empty sprite
	assert!(!referenced.contains(&102));
	assert_eq!(referenced.len(), 6);
	Ok(())
}

#[test_log::test]
fn decoding_twice_is_byte_identical() -> anyhow::Result<()> {
	let data = client_dat();
	let first = DatFile::from_bytes(&data)?.sprite_index()?.to_text();
	let second = DatFile::from_bytes(&data)?.sprite_index()?.to_text();
	assert_eq!(first, second);
	Ok(())
}

#[test_log::test]
fn text_index_reads_back() -> anyhow::Result<()> {
	let dir = scratch_dir("readback");
	let output = dir.join("bindings.txt");
	let index = DatFile::from_bytes(&client_dat())?.sprite_index()?;
	index.write(&output)?;

	let reopened = SpriteIndex::open(&output, DEFAULT_BUCKET_SIZE)?;
	assert_eq!(reopened.objects_for(2500), Some(&BTreeSet::from([100, 105])));
	assert_eq!(reopened.to_text(), index.to_text());

	std::fs::remove_dir_all(&dir)?;
	Ok(())
}

#[test_log::test]
fn failed_decode_writes_nothing() -> anyhow::Result<()> {
	let dir = scratch_dir("failed");
	let mut data = client_dat();
	data.truncate(data.len() - 3);
	let input = write_file(&dir, "Tibia.dat", &data);
	let output = dir.join("bindings.txt");

	let result = DatFile::open(&input)
		.and_then(|dat| dat.sprite_index())
		.and_then(|index| index.write(&output));
	assert!(matches!(result, Err(DatError::OutOfBounds { .. })));
	assert!(!output.exists());

	std::fs::remove_dir_all(&dir)?;
	Ok(())
}

#[test_log::test]
fn unknown_tag_is_fatal() {
	let data = DatBuilder::new(0, 0, 0, 1)
		.raw(&[0x05, 0x00, 0x00, 0xFF, 1, 1, 1, 1, 1, 1, 1])
		.raw(&42u32.to_le_bytes())
		.build();

	let err = DatFile::from_bytes_with_config(&data, DecodeConfig::counted()).unwrap_err();
	assert!(matches!(
		err,
		DatError::UnrecognizedTag {
			tag: 0x05,
			offset: 12,
			object_id: 100
		}
	));
}

#[test_log::test]
fn small_buckets() -> anyhow::Result<()> {
	let config = DecodeConfig::default().with_bucket_size(10);
	let dat = DatFile::from_bytes_with_config(&client_dat(), config)?;
	let index = dat.sprite_index()?;

	assert_eq!(index.bucket_count(), 251);
	assert_eq!(index.bucket_index(2500), 250);
	assert_eq!(
		index.to_text(),
		"7 100 101\n3 106\n10 103 104\n11 103\n1200 103\n2500 100 105\n"
	);
	Ok(())
}
