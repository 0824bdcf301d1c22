//! SLD/SLB (Slide / Slide Library) CLI Utility
//!
//! A command-line tool for inspecting slide files and managing slide
//! libraries.
//!
//! # Features
//!
//! - **info**: Display slide or library information
//! - **list**: List all slides in a library
//! - **extract**: Extract slides from a library to `.sld` files
//! - **merge**: Merge slides and libraries into one library
//! - **dump**: Interpret a slide and print its drawing primitives
//!
//! # Usage Examples
//!
//! ```bash
//! # Display information about a slide or library
//! cargo run --example slide_utils -- info acad.slb
//!
//! # List library contents as JSON
//! cargo run --example slide_utils -- list acad.slb --format json
//!
//! # Extract one slide, or everything
//! cargo run --example slide_utils -- extract acad.slb logo -o out/
//! cargo run --example slide_utils -- extract acad.slb --all -o out/
//!
//! # Merge files into a new library (name collisions get numeric suffixes)
//! cargo run --example slide_utils -- merge a.sld b.slb c.sld -o merged.slb
//!
//! # Print a slide's drawing program
//! cargo run --example slide_utils -- dump logo.sld
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn};
use serde::Serialize;
use slm_rs::prelude::*;

#[derive(Parser)]
#[command(name = "slide_utils")]
#[command(author = "slm-rs project")]
#[command(version = "1.0")]
#[command(about = "Slide / slide library utility - inspect, extract, merge, and dump", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Display slide or library information
	Info {
		/// Input file (.sld or .slb)
		#[arg(value_name = "INPUT")]
		input: PathBuf,
	},

	/// List all slides in a library
	List {
		/// Input library (.slb)
		#[arg(value_name = "INPUT")]
		input: PathBuf,

		/// Output format
		#[arg(short, long, value_enum, default_value = "table")]
		format: OutputFormat,
	},

	/// Extract slides from a library
	Extract {
		/// Input library (.slb)
		#[arg(value_name = "INPUT")]
		input: PathBuf,

		/// Name of the slide to extract
		#[arg(value_name = "NAME")]
		name: Option<String>,

		/// Extract every slide
		#[arg(short, long)]
		all: bool,

		/// Output directory
		#[arg(short, long, value_name = "DIR", default_value = ".")]
		output: PathBuf,
	},

	/// Merge slides and libraries into one library
	Merge {
		/// Input files (.sld and/or .slb)
		#[arg(value_name = "INPUTS", required = true)]
		inputs: Vec<PathBuf>,

		/// Output library path
		#[arg(short, long, value_name = "OUTPUT")]
		output: PathBuf,
	},

	/// Interpret a slide and print its drawing primitives
	Dump {
		/// Input slide (.sld)
		#[arg(value_name = "INPUT")]
		input: PathBuf,

		/// Output format
		#[arg(short, long, value_enum, default_value = "table")]
		format: OutputFormat,
	},
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
	/// Human-readable listing
	Table,
	/// JSON document
	Json,
}

/// One library entry in `list` output.
#[derive(Serialize)]
struct SlideRow<'a> {
	name: &'a str,
	width: u16,
	height: u16,
	version: u8,
	bytes: usize,
}

fn main() -> anyhow::Result<()> {
	// Initialize logger with default level set to info if RUST_LOG is not set
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	match cli.command {
		Commands::Info {
			input,
		} => cmd_info(&input),
		Commands::List {
			input,
			format,
		} => cmd_list(&input, format),
		Commands::Extract {
			input,
			name,
			all,
			output,
		} => cmd_extract(&input, name.as_deref(), all, &output),
		Commands::Merge {
			inputs,
			output,
		} => cmd_merge(&inputs, &output),
		Commands::Dump {
			input,
			format,
		} => cmd_dump(&input, format),
	}
}

fn cmd_info(input: &Path) -> anyhow::Result<()> {
	if SldFile::is_slide(input) {
		let slide = SldFile::open(input).with_context(|| format!("cannot open {}", input.display()))?;
		println!("{slide}");
	} else if SlbFile::is_slide_library(input) {
		let lib = SlbFile::open(input).with_context(|| format!("cannot open {}", input.display()))?;
		print!("{lib}");
		for (name, err) in lib.skipped() {
			warn!("unreadable entry '{name}': {err}");
		}
	} else {
		bail!("{} is neither a .sld nor a .slb file", input.display());
	}
	Ok(())
}

fn cmd_list(input: &Path, format: OutputFormat) -> anyhow::Result<()> {
	let lib = SlbFile::open(input)?;
	match format {
		OutputFormat::Table => {
			println!("{:<32} {:>6} {:>6} {:>8}  ver", "name", "width", "height", "bytes");
			for (name, slide) in lib.iter() {
				println!(
					"{:<32} {:>6} {:>6} {:>8}  {}",
					name,
					slide.width(),
					slide.height(),
					slide.size(),
					slide.version()
				);
			}
		}
		OutputFormat::Json => {
			let entries: Vec<_> = lib
				.iter()
				.map(|(name, slide)| SlideRow {
					name,
					width: slide.width(),
					height: slide.height(),
					version: slide.version(),
					bytes: slide.size(),
				})
				.collect();
			println!("{}", serde_json::to_string_pretty(&entries)?);
		}
	}
	Ok(())
}

fn cmd_extract(input: &Path, name: Option<&str>, all: bool, output: &Path) -> anyhow::Result<()> {
	let lib = SlbFile::open(input)?;
	fs::create_dir_all(output)?;
	let mut extracted = 0usize;
	for (key, slide) in lib.iter() {
		if !all && name != Some(key) {
			continue;
		}
		let Some(file_name) = safe_file_name(key) else {
			warn!("skipping '{}': entry name is not a safe file name", key.escape_default());
			continue;
		};
		let path = output.join(file_name);
		slide.save_as(&path)?;
		info!("wrote {} ({} bytes)", path.display(), slide.size());
		extracted += 1;
	}
	if extracted == 0 {
		bail!("nothing matched: pass a slide name or --all");
	}
	Ok(())
}

/// Maps a library entry name to an output file name.
///
/// Entry names come from untrusted archives; one containing a path
/// separator would escape the output directory when joined onto it, so
/// such names are rejected instead of written.
fn safe_file_name(key: &str) -> Option<String> {
	if key.is_empty() || key == "." || key == ".." || key.contains(['/', '\\', '\0']) {
		return None;
	}
	Some(format!("{key}.sld"))
}

fn cmd_merge(inputs: &[PathBuf], output: &Path) -> anyhow::Result<()> {
	let mut lib = SlbFile::new();
	for input in inputs {
		if SlbFile::is_slide_library(input) {
			let source = SlbFile::open(input)?;
			for (key, slide) in source.iter() {
				let mut slide = slide.clone();
				slide.set_name(key);
				let stored = lib.insert(slide);
				if stored != key {
					info!("renamed '{key}' from {} to '{stored}'", input.display());
				}
			}
		} else if SldFile::is_slide(input) {
			let slide = SldFile::open(input)?;
			let stored = lib.insert(slide);
			info!("added '{stored}' from {}", input.display());
		} else {
			warn!("skipping {}: not a slide or library", input.display());
		}
	}
	lib.save_as(output).with_context(|| format!("cannot write {}", output.display()))?;
	info!("wrote {} with {} slides ({} bytes)", output.display(), lib.len(), lib.file_len());
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::safe_file_name;

	#[test]
	fn hostile_entry_names_are_rejected() {
		assert_eq!(safe_file_name("../../etc/cron.d/evil"), None);
		assert_eq!(safe_file_name("..\\boot.ini"), None);
		assert_eq!(safe_file_name("/etc/passwd"), None);
		assert_eq!(safe_file_name("nul\0byte"), None);
		assert_eq!(safe_file_name(".."), None);
		assert_eq!(safe_file_name("."), None);
		assert_eq!(safe_file_name(""), None);
	}

	#[test]
	fn ordinary_entry_names_pass_through() {
		assert_eq!(safe_file_name("logo").as_deref(), Some("logo.sld"));
		assert_eq!(safe_file_name("part 1").as_deref(), Some("part 1.sld"));
	}
}

fn cmd_dump(input: &Path, format: OutputFormat) -> anyhow::Result<()> {
	let slide = SldFile::open(input)?;
	match format {
		OutputFormat::Table => {
			println!("{slide}");
			for primitive in slide.primitives() {
				println!("  {}", primitive?);
			}
		}
		OutputFormat::Json => {
			let primitives = slide.primitives().collect::<Result<Vec<_>, _>>()?;
			println!("{}", serde_json::to_string_pretty(&primitives)?);
		}
	}
	Ok(())
}
