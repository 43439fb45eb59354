//! Benchmark helper utilities for tibiadat-rs
//!
//! This module provides generators for synthetic `Tibia.dat` images shaped like
//! the files shipped with the client: mostly single-tile items with a few
//! properties, followed by animated multi-tile outfits with two frame groups.

/// Generates a synthetic `Tibia.dat` image.
///
/// Items get ids `100..=items + 99`, so the header stores `items + 99` as the
/// item count the way client files do. Sprite ids are shared between
/// neighbouring objects to exercise binding merges.
pub fn generate_test_dat_data(items: u16, outfits: u16) -> Vec<u8> {
	let mut data = Vec::new();

	// Version
	data.extend_from_slice(&0x4A10_5A3Cu32.to_le_bytes());

	// Counts: items (highest id), outfits, effects, distances
	data.extend_from_slice(&(items + 99).to_le_bytes());
	data.extend_from_slice(&outfits.to_le_bytes());
	data.extend_from_slice(&0u16.to_le_bytes());
	data.extend_from_slice(&0u16.to_le_bytes());

	let mut next_sprite = 1u32;
	for i in 0..items {
		// Ground speed + light properties
		data.extend_from_slice(&[0x00, 0x96, 0x00, 0x16, 0x02, 0x00, 0xD7, 0x00, 0xFF]);

		// 1x1, 4 blend frames, no animation
		data.extend_from_slice(&[1, 1, 4, 1, 1, 1, 1]);
		for k in 0..4u32 {
			data.extend_from_slice(&(next_sprite + k).to_le_bytes());
		}
		if i % 2 == 1 {
			next_sprite += 4;
		}
	}

	for _ in 0..outfits {
		data.push(0xFF);
		data.extend_from_slice(&2u16.to_le_bytes());
		for group in 0..2 {
			if group == 1 {
				data.push(0x01);
			}

			// 2x2 with exact size, 4 directions, 3 phases
			data.extend_from_slice(&[2, 2, 64, 1, 4, 1, 1, 3]);
			data.extend_from_slice(&[0u8; 6]);
			data.extend_from_slice(&[0u8; 3 * 8]);
			for _ in 0..(2 * 2 * 4 * 3) {
				data.extend_from_slice(&next_sprite.to_le_bytes());
				next_sprite += 1;
			}
		}
	}

	data
}
