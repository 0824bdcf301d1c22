//! `.SLB` slide library support.
//!
//! Slide libraries pack multiple named slides into one archive produced
//! by AutoCAD's SLIDELIB tool.
//!
//! # File Structure
//!
//! ```text
//! Offset        Size  Field       Description
//! ------------  ----  ----------  ---------------------------------------
//! 0x00          32    header      "AutoCAD Slide Library 1.0" + padding
//! 0x20          36*n  directory   One record per slide:
//!                                   32-byte NUL-padded name
//!                                   u32 LE absolute payload offset
//! 0x20 + 36*n   36    terminator  All-zero record ends the directory
//! ...                 payloads    Concatenated slide byte ranges, in
//!                                 directory order
//! ```
//!
//! A slide's length is not stored; it is the delta to the next payload
//! offset (or to end-of-file for the last entry). Two directory records
//! may alias the same payload, in which case the delta for the first is
//! zero and the real length comes from the next distinct boundary.


use std::fmt::Formatter;
use std::fs;
use std::path::{Path, PathBuf};

use encoding_rs::WINDOWS_1252;

use crate::file::{SlbError, SldError, sld};

mod constants {
	/// Leading signature bytes of every slide library
	pub const SIGNATURE: &[u8; 25] = b"AutoCAD Slide Library 1.0";

	/// Size of the signature block preceding the directory
	pub const SIGNATURE_BLOCK_LEN: usize = 32;

	/// Size of one directory record (name + offset)
	pub const DIR_RECORD_LEN: usize = 36;

	/// Size of the name field inside a directory record
	pub const NAME_LEN: usize = 32;

	/// Minimum library length: signature block + terminator record
	pub const HEADER_LEN: usize = 68;
}

/// SLB slide library file.
///
/// Owns an ordered collection of slides keyed by name. Insertion order
/// is preserved so serialization reproduces a deterministic layout. The
/// collection is not internally synchronized; concurrent mutation is the
/// caller's responsibility.
#[derive(Debug, Default)]
pub struct File {
	path: Option<PathBuf>,
	entries: Vec<(String, sld::File)>,
	skipped: Vec<(String, SldError)>,
}

impl File {
	/// Checks if the path has a library extension (`.slb`, case-insensitive).
	pub fn is_slide_library(path: impl AsRef<Path>) -> bool {
		path.as_ref()
			.extension()
			.is_some_and(|ext| ext.eq_ignore_ascii_case("slb"))
	}

	/// Creates an empty library.
	pub fn new() -> Self {
		Self::default()
	}

	/// Decodes a library from a byte slice.
	///
	/// Entries whose payload does not decode as a slide are dropped from
	/// the collection (and listed by [`File::skipped`]) rather than
	/// failing the whole library; inconsistent directory offsets do fail
	/// with [`SlbError::CorruptLibrary`].
	pub fn from_bytes(data: &[u8]) -> Result<Self, SlbError> {
		if data.len() < constants::HEADER_LEN
			|| data[..constants::SIGNATURE.len()] != constants::SIGNATURE[..]
		{
			return Err(SlbError::NotALibrary {
				len: data.len(),
			});
		}

		// Collect payload boundaries: the offset field of each record,
		// terminated by the all-zero record, plus end-of-file. The first
		// boundary duplicates the first record's own offset and is dropped.
		let mut boundaries = Vec::new();
		let mut at = constants::SIGNATURE_BLOCK_LEN + constants::DIR_RECORD_LEN - 4;
		loop {
			let offset = read_u32_le(data, at)?;
			if offset == 0 {
				break;
			}
			boundaries.push(offset as usize);
			at += constants::DIR_RECORD_LEN;
		}
		boundaries.push(data.len());
		boundaries.remove(0);

		let mut entries: Vec<(String, sld::File)> = Vec::with_capacity(boundaries.len());
		let mut skipped = Vec::new();
		let mut record = constants::SIGNATURE_BLOCK_LEN;
		for (index, &boundary) in boundaries.iter().enumerate() {
			let name = decode_name(&data[record..record + constants::NAME_LEN]);
			let offset = read_u32_le(data, record + constants::NAME_LEN)? as usize;

			let mut length = boundary as i64 - offset as i64;
			// Aliased entry: two records share one payload, so the delta
			// to the next boundary is zero. Look further ahead.
			let mut look = index + 1;
			while length == 0 {
				let Some(&next) = boundaries.get(look) else {
					return Err(SlbError::CorruptLibrary {
						offset,
						length,
						available: data.len(),
					});
				};
				length = next as i64 - offset as i64;
				look += 1;
			}
			if length < 0 || offset + length as usize > data.len() {
				return Err(SlbError::CorruptLibrary {
					offset,
					length,
					available: data.len(),
				});
			}

			match sld::File::from_bytes(&name, &data[offset..offset + length as usize]) {
				Ok(slide) => entries.push((name, slide)),
				Err(e) => {
					log::warn!("skipping unreadable slide '{name}': {e}");
					skipped.push((name, e));
				}
			}
			record += constants::DIR_RECORD_LEN;
		}

		Ok(Self {
			path: None,
			entries,
			skipped,
		})
	}

	/// Reads and decodes a library file, remembering its path.
	pub fn open(path: impl AsRef<Path>) -> Result<Self, SlbError> {
		let data = fs::read(&path)?;
		let mut lib = Self::from_bytes(&data)?;
		lib.path = Some(path.as_ref().to_path_buf());
		Ok(lib)
	}

	/// Reads a single named slide out of a library file.
	pub fn load_slide(path: impl AsRef<Path>, name: &str) -> Result<Option<sld::File>, SlbError> {
		let mut lib = Self::open(path)?;
		Ok(lib.remove(name))
	}

	/// Returns the path the library was opened from, if any.
	pub fn path(&self) -> Option<&Path> {
		self.path.as_deref()
	}

	/// Returns the number of slides.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` when the library holds no slides.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Returns `true` when a slide is stored under `name`.
	pub fn contains(&self, name: &str) -> bool {
		self.entries.iter().any(|(key, _)| key == name)
	}

	/// Gets a slide by name.
	pub fn get(&self, name: &str) -> Option<&sld::File> {
		self.entries.iter().find(|(key, _)| key == name).map(|(_, slide)| slide)
	}

	/// Iterates over `(key, slide)` pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &sld::File)> {
		self.entries.iter().map(|(key, slide)| (key.as_str(), slide))
	}

	/// Entries dropped during decode because their payload was not a
	/// readable slide, with the reason each failed.
	pub fn skipped(&self) -> &[(String, SldError)] {
		&self.skipped
	}

	/// Inserts a slide, never overwriting an existing entry.
	///
	/// When the slide's name is taken, the first free numeric suffix
	/// (`name0`, `name1`, ...) is used instead. Returns the key the slide
	/// was stored under.
	pub fn insert(&mut self, slide: sld::File) -> String {
		let mut key = slide.name().to_string();
		if self.contains(&key) {
			for i in 0u32.. {
				let candidate = format!("{}{}", slide.name(), i);
				if !self.contains(&candidate) {
					key = candidate;
					break;
				}
			}
		}
		self.entries.push((key.clone(), slide));
		key
	}

	/// Removes and returns the slide stored under `name`.
	pub fn remove(&mut self, name: &str) -> Option<sld::File> {
		let index = self.entries.iter().position(|(key, _)| key == name)?;
		Some(self.entries.remove(index).1)
	}

	/// Returns the serialized size in bytes: the fixed header, one
	/// directory record per slide, and the concatenated payloads.
	pub fn file_len(&self) -> usize {
		constants::HEADER_LEN
			+ self.entries.len() * constants::DIR_RECORD_LEN
			+ self.entries.iter().map(|(_, slide)| slide.size()).sum::<usize>()
	}

	/// Serializes the library to bytes.
	///
	/// Fails closed with [`SlbError::EmptyLibrary`] when there is nothing
	/// to write, and with [`SlbError::InvalidName`] when a key cannot fit
	/// the fixed-width directory name field.
	pub fn to_bytes(&self) -> Result<Vec<u8>, SlbError> {
		if self.entries.is_empty() {
			return Err(SlbError::EmptyLibrary);
		}

		let mut out = vec![0u8; self.file_len()];
		out[..constants::SIGNATURE.len()].copy_from_slice(constants::SIGNATURE);

		// Payloads start right after the terminator record
		let mut payload_at = constants::SIGNATURE_BLOCK_LEN
			+ (self.entries.len() + 1) * constants::DIR_RECORD_LEN;
		for (i, (key, slide)) in self.entries.iter().enumerate() {
			let (encoded, _, _) = WINDOWS_1252.encode(key);
			if encoded.is_empty() || encoded.len() >= constants::NAME_LEN {
				return Err(SlbError::InvalidName {
					name: key.clone(),
					len: encoded.len(),
				});
			}
			let record = constants::SIGNATURE_BLOCK_LEN + i * constants::DIR_RECORD_LEN;
			out[record..record + encoded.len()].copy_from_slice(&encoded);
			out[record + constants::NAME_LEN..record + constants::DIR_RECORD_LEN]
				.copy_from_slice(&(payload_at as u32).to_le_bytes());
			out[payload_at..payload_at + slide.size()].copy_from_slice(slide.as_bytes());
			payload_at += slide.size();
		}

		Ok(out)
	}

	/// Writes the library to the path it was opened from.
	pub fn save(&self) -> Result<(), SlbError> {
		let Some(path) = self.path.clone() else {
			return Err(std::io::Error::new(
				std::io::ErrorKind::NotFound,
				"slide library has no associated path",
			)
			.into());
		};
		self.save_as(path)
	}

	/// Writes the library to disk: the old file is removed first, then
	/// the new content is written whole (never partially).
	pub fn save_as(&self, path: impl AsRef<Path>) -> Result<(), SlbError> {
		let bytes = self.to_bytes()?;
		let path = path.as_ref();
		if path.exists() {
			fs::remove_file(path)?;
		}
		fs::write(path, bytes)?;
		Ok(())
	}
}

impl std::fmt::Display for File {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		writeln!(f, "Slide library: {} slides, {} bytes", self.entries.len(), self.file_len())?;
		for (key, slide) in &self.entries {
			writeln!(f, "  {key}: {slide}")?;
		}
		Ok(())
	}
}

impl TryFrom<&[u8]> for File {
	type Error = SlbError;

	fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
		Self::from_bytes(value)
	}
}

fn read_u32_le(data: &[u8], at: usize) -> Result<u32, SlbError> {
	let bytes = at
		.checked_add(4)
		.and_then(|end| data.get(at..end))
		.ok_or(SlbError::CorruptLibrary {
			offset: at,
			length: 4,
			available: data.len(),
		})?;
	Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

/// Decodes a directory name field: bytes up to the first NUL, in the
/// legacy single-byte codepage the original tools wrote names in.
fn decode_name(field: &[u8]) -> String {
	let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
	let (name, _, _) = WINDOWS_1252.decode(&field[..end]);
	name.trim().to_string()
}
