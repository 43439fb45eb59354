//! `Tibia.dat` CLI Utility
//!
//! A command-line tool for turning the client's object metadata into a sprite to
//! object binding file, inspecting the decoded objects, and exporting sprite
//! images grouped by object.
//!
//! # Usage
//!
//! ```bash
//! # Write the sprite -> objects binding file
//! tibiadat-utils bindings -i Tibia.dat -s sprites/ -o sprite-object-bindings.txt
//!
//! # Hand-built files whose header holds plain record counts
//! tibiadat-utils bindings -i test.dat -s sprites/ -o out.txt --counted
//!
//! # Show header information
//! tibiadat-utils info Tibia.dat
//! tibiadat-utils info Tibia.dat --json
//!
//! # Dump the object table as JSON
//! tibiadat-utils objects Tibia.dat -o objects.json
//!
//! # Copy sprite images into one folder per object
//! tibiadat-utils export -i Tibia.dat -s sprites/ -o objects/
//!
//! # Find the objects drawing a sprite
//! tibiadat-utils lookup sprite-object-bindings.txt 2500
//! ```

use clap::{Args, Parser, Subcommand};
use log::{error, info};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tibiadat_rs::prelude::*;

#[derive(Parser)]
#[command(name = "tibiadat-utils")]
#[command(author = "tibiadat-rs project")]
#[command(version = "1.0")]
#[command(about = "Tibia.dat utility - sprite bindings, object info and sprite export", long_about = None)]
struct Cli {
	/// Show debug output
	#[arg(short, long, global = true)]
	verbose: bool,

	#[command(subcommand)]
	command: Commands,
}

/// Options controlling how the object table is read.
#[derive(Args, Clone, Copy)]
struct DecodeArgs {
	/// Treat header counts as plain record counts instead of id ranges
	#[arg(long)]
	counted: bool,

	/// Sprite ids per binding bucket
	#[arg(long, value_name = "SIZE", default_value_t = DEFAULT_BUCKET_SIZE)]
	bucket_size: u32,
}

impl DecodeArgs {
	fn config(self) -> DecodeConfig {
		let config = if self.counted {
			DecodeConfig::counted()
		} else {
			DecodeConfig::default()
		};
		config.with_bucket_size(self.bucket_size)
	}
}

#[derive(Subcommand)]
enum Commands {
	/// Write the sprite -> objects binding file
	Bindings {
		/// Input Tibia.dat path
		#[arg(short = 'i', long = "input", value_name = "DAT")]
		input: PathBuf,

		/// Directory of extracted sprite images
		#[arg(short = 's', long = "sprites", value_name = "SPRITE_DIR")]
		sprites: PathBuf,

		/// Output binding file path
		#[arg(short = 'o', long = "output", value_name = "OUTPUT")]
		output: PathBuf,

		#[command(flatten)]
		decode: DecodeArgs,
	},

	/// Show header and object statistics
	Info {
		/// Input Tibia.dat path
		#[arg(value_name = "DAT")]
		input: PathBuf,

		/// Print as JSON
		#[arg(long)]
		json: bool,

		#[command(flatten)]
		decode: DecodeArgs,
	},

	/// Dump the decoded object table as JSON
	Objects {
		/// Input Tibia.dat path
		#[arg(value_name = "DAT")]
		input: PathBuf,

		/// Output JSON path (optional, defaults to stdout)
		#[arg(short = 'o', long = "output", value_name = "OUTPUT_JSON")]
		output: Option<PathBuf>,

		#[command(flatten)]
		decode: DecodeArgs,
	},

	/// Copy sprite images into one folder per object
	Export {
		/// Input Tibia.dat path
		#[arg(short = 'i', long = "input", value_name = "DAT")]
		input: PathBuf,

		/// Directory of extracted sprite images
		#[arg(short = 's', long = "sprites", value_name = "SPRITE_DIR")]
		sprites: PathBuf,

		/// Output directory
		#[arg(short = 'o', long = "output", value_name = "OUTPUT_DIR")]
		output: PathBuf,

		#[command(flatten)]
		decode: DecodeArgs,
	},

	/// Find the objects drawing a sprite in a binding file
	Lookup {
		/// Binding file written by `bindings`
		#[arg(value_name = "BINDINGS")]
		bindings: PathBuf,

		/// Sprite id to look up
		#[arg(value_name = "SPRITE_ID")]
		sprite_id: u32,
	},
}

/// Header and statistics printed by `info`.
#[derive(Serialize)]
struct DatInfo<'a> {
	header: &'a DatHeader,
	header_hex: String,
	file_size: usize,
	objects: usize,
	items: usize,
	outfits: usize,
	effects: usize,
	distances: usize,
	with_sprites: usize,
	max_sprite_id: Option<u32>,
}

fn open_dat(input: &Path, config: DecodeConfig) -> Result<(Vec<u8>, DatFile), DatError> {
	require_path(input, PathKind::File)?;
	let data = std::fs::read(input)?;
	let dat = DatFile::from_bytes_with_config(&data, config)?;
	Ok((data, dat))
}

fn handle_bindings(
	input: &Path,
	sprites: &Path,
	output: &Path,
	decode: DecodeArgs,
) -> Result<(), DatError> {
	require_path(input, PathKind::File)?;
	require_path(sprites, PathKind::Directory)?;

	info!("Reading '{}'...", input.display());
	let dat = DatFile::open_with_config(input, decode.config())?;

	info!("Creating bindings...");
	let index = dat.sprite_index()?;
	info!("{index}");

	info!("Writing bindings to '{}'.", output.display());
	index.write(output)
}

fn handle_info(input: &Path, json: bool, decode: DecodeArgs) -> Result<(), Box<dyn std::error::Error>> {
	let (data, dat) = open_dat(input, decode.config())?;
	let info = DatInfo {
		header: dat.header(),
		header_hex: hex::encode(&data[..DatHeader::size()]),
		file_size: data.len(),
		objects: dat.len(),
		items: dat.count_of(ObjectCategory::Item),
		outfits: dat.count_of(ObjectCategory::Outfit),
		effects: dat.count_of(ObjectCategory::Effect),
		distances: dat.count_of(ObjectCategory::Distance),
		with_sprites: dat.iter().filter(|o| o.has_sprites()).count(),
		max_sprite_id: dat.max_sprite_id(),
	};

	if json {
		println!("{}", serde_json::to_string_pretty(&info)?);
		return Ok(());
	}

	println!("📄 {}", input.display());
	println!("   {}", info.header);
	println!("   Raw header: {}", info.header_hex);
	println!("   File size: {} bytes", info.file_size);
	println!("   Header total: {}", info.header.num_objects());
	println!("   Decoded objects: {}", info.objects);
	println!("     Items:     {}", info.items);
	println!("     Outfits:   {}", info.outfits);
	println!("     Effects:   {}", info.effects);
	println!("     Distances: {}", info.distances);
	println!("   Objects with sprites: {}", info.with_sprites);
	match info.max_sprite_id {
		Some(id) => println!("   Highest sprite id: {id}"),
		None => println!("   Highest sprite id: -"),
	}
	Ok(())
}

fn handle_objects(
	input: &Path,
	output: Option<&Path>,
	decode: DecodeArgs,
) -> Result<(), Box<dyn std::error::Error>> {
	let (_, dat) = open_dat(input, decode.config())?;
	let json = serde_json::to_string_pretty(dat.objects())?;

	match output {
		Some(path) => {
			std::fs::write(path, json)?;
			info!("Wrote {} objects to '{}'", dat.len(), path.display());
		}
		None => println!("{json}"),
	}
	Ok(())
}

fn handle_export(
	input: &Path,
	sprites: &Path,
	output: &Path,
	decode: DecodeArgs,
) -> Result<(), DatError> {
	require_path(sprites, PathKind::Directory)?;
	let (_, dat) = open_dat(input, decode.config())?;
	let summary = export_sprites(dat.objects(), sprites, output)?;
	println!("✓ {summary}");
	Ok(())
}

fn handle_lookup(bindings: &Path, sprite_id: u32) -> Result<(), DatError> {
	require_path(bindings, PathKind::File)?;
	let index = SpriteIndex::open(bindings, DEFAULT_BUCKET_SIZE)?;

	match index.objects_for(sprite_id) {
		Some(objects) => {
			let ids: Vec<String> = objects.iter().map(u32::to_string).collect();
			println!("{sprite_id}: {}", ids.join(" "));
		}
		None => println!("{sprite_id}: no objects"),
	}
	Ok(())
}

fn main() {
	let cli = Cli::parse();

	let level = if cli.verbose {
		"debug"
	} else {
		"info"
	};
	env_logger::init_from_env(env_logger::Env::default().default_filter_or(level));

	let result: Result<(), Box<dyn std::error::Error>> = match cli.command {
		Commands::Bindings {
			input,
			sprites,
			output,
			decode,
		} => handle_bindings(&input, &sprites, &output, decode).map_err(Into::into),

		Commands::Info {
			input,
			json,
			decode,
		} => handle_info(&input, json, decode),

		Commands::Objects {
			input,
			output,
			decode,
		} => handle_objects(&input, output.as_deref(), decode),

		Commands::Export {
			input,
			sprites,
			output,
			decode,
		} => handle_export(&input, &sprites, &output, decode).map_err(Into::into),

		Commands::Lookup {
			bindings,
			sprite_id,
		} => handle_lookup(&bindings, sprite_id).map_err(Into::into),
	};

	if let Err(e) = result {
		error!("{e}");
		std::process::exit(2);
	}
}
