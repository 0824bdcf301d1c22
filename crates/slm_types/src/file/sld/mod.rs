//! `.SLD` slide file support.
//!
//! Slides are small raster-free vector images produced by AutoCAD's
//! MSLIDE command. A slide is a fixed header followed by a stream of
//! drawing commands (see [`interpreter`] for the command encoding).
//!
//! # Header Structure
//!
//! ```text
//! Offset  Size  Field         Description
//! ------  ----  ------------  ------------------------------------------
//! 0x00    13    signature     "AutoCAD Slide"
//! 0x0D    4     terminator    CR LF ^Z NUL
//! 0x11    1     level         Type level indicator
//! 0x12    1     format        Format marker: 0x01 (legacy) or 0x02
//! 0x13    2     width         Image width (point-decoding rule applies)
//! 0x15    2     height        Image height
//! 0x17    ...   aspect/fill   Format-dependent metadata
//! 0x1D    2     order tag     Format 2: 0x1234 read low-first decides
//!                             the file's byte order
//! ```
//!
//! Format 2 drawing data begins at offset 31, format 1 at offset 34.
//! Format 1 carries no byte-order tag; the order is probed from the
//! trailing end-of-file field instead (`0xFC00` read low-first means the
//! low byte comes first, `0x00FC` the reverse).
//!
//! Multi-byte values honor the per-file byte order, not a fixed
//! endianness, and coordinates share the MSLIDE sign quirk handled by
//! [`crate::file::cursor::read_point`].

mod interpreter;
pub mod palette;
mod primitive;

#[cfg(test)]
mod tests;

use std::fmt::Formatter;
use std::fs;
use std::path::{Path, PathBuf};

use crate::file::{SldError, cursor};

pub use interpreter::Primitives;
pub use primitive::{DrawPrimitive, FitTransform, Point};

mod constants {
	/// Leading signature bytes of every slide file
	pub const SIGNATURE: &[u8; 13] = b"AutoCAD Slide";

	/// Offset of the format marker byte
	pub const FORMAT_MARKER: usize = 18;

	/// Offset of the 16-bit image width
	pub const WIDTH: usize = 19;

	/// Offset of the 16-bit image height
	pub const HEIGHT: usize = 21;

	/// Offset of the format-2 byte-order tag
	pub const ORDER_TAG: usize = 29;

	/// Value of the byte-order tag when the low-order byte comes first
	pub const ORDER_TAG_VALUE: u16 = 0x1234;

	/// Minimum length of a format-2 slide (header only, no commands)
	pub const V2_HEADER_LEN: usize = 31;

	/// Drawing data offset for format-1 slides
	pub const V1_HEADER_LEN: usize = 34;

	/// Trailing end-of-file probe, read low-first, for a low-first file
	pub const V1_PROBE_LOW_FIRST: u16 = 0xFC00;

	/// Trailing end-of-file probe, read low-first, for a high-first file
	pub const V1_PROBE_HIGH_FIRST: u16 = 0x00FC;
}

/// SLD slide file.
///
/// Immutable after decode: the raw bytes, resolved format version, byte
/// order, and dimensions never change. Re-encoding is verbatim
/// passthrough of the stored bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
	name: String,
	path: Option<PathBuf>,
	data: Vec<u8>,
	version: u8,
	low_first: bool,
	width: u16,
	height: u16,
}

impl File {
	/// Checks if the path has a slide extension (`.sld`, case-insensitive).
	pub fn is_slide(path: impl AsRef<Path>) -> bool {
		path.as_ref()
			.extension()
			.is_some_and(|ext| ext.eq_ignore_ascii_case("sld"))
	}

	/// Decodes a slide from a byte slice.
	///
	/// `name` is the display identifier (file stem or library entry key);
	/// it is not part of the byte stream. The slide owns a copy of `data`.
	pub fn from_bytes(name: impl Into<String>, data: &[u8]) -> Result<Self, SldError> {
		Self::decode(name.into(), data.to_vec())
	}

	/// Reads and decodes a slide file; the name is the file stem.
	pub fn open(path: impl AsRef<Path>) -> Result<Self, SldError> {
		let path = path.as_ref();
		let name = path
			.file_stem()
			.map(|stem| stem.to_string_lossy().into_owned())
			.unwrap_or_default();
		let data = fs::read(path)?;
		let mut slide = Self::decode(name, data)?;
		slide.path = Some(path.to_path_buf());
		Ok(slide)
	}

	fn decode(name: String, data: Vec<u8>) -> Result<Self, SldError> {
		if data.len() < constants::V2_HEADER_LEN
			|| data[..constants::SIGNATURE.len()] != constants::SIGNATURE[..]
		{
			return Err(SldError::NotASlide {
				len: data.len(),
			});
		}

		let (version, low_first) = match data[constants::FORMAT_MARKER] {
			0x01 => {
				// No order tag in the legacy format: probe the trailing
				// end-of-file field, which must be present
				if data.len() < constants::V1_HEADER_LEN + 2 {
					return Err(SldError::NotASlide {
						len: data.len(),
					});
				}
				match cursor::read_u16(&data, data.len() - 2, true)? {
					constants::V1_PROBE_LOW_FIRST => (1, true),
					constants::V1_PROBE_HIGH_FIRST => (1, false),
					_ => {
						return Err(SldError::NotASlide {
							len: data.len(),
						});
					}
				}
			}
			0x02 => {
				let tag = cursor::read_u16(&data, constants::ORDER_TAG, true)?;
				(2, tag == constants::ORDER_TAG_VALUE)
			}
			marker => {
				return Err(SldError::UnsupportedVersion {
					marker,
				});
			}
		};

		let width = cursor::read_point(&data, constants::WIDTH, low_first)? as u16;
		let height = cursor::read_point(&data, constants::HEIGHT, low_first)? as u16;

		Ok(Self {
			name,
			path: None,
			data,
			version,
			low_first,
			width,
			height,
		})
	}

	/// Returns the slide's display name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Renames the slide (display identifier only; bytes are untouched).
	pub fn set_name(&mut self, name: impl Into<String>) {
		self.name = name.into();
	}

	/// Returns the path the slide was opened from, if any.
	pub fn path(&self) -> Option<&Path> {
		self.path.as_deref()
	}

	/// Returns the format version (1 or 2).
	pub fn version(&self) -> u8 {
		self.version
	}

	/// Returns `true` when multi-byte values store the low-order byte first.
	pub fn low_first(&self) -> bool {
		self.low_first
	}

	/// Returns the image width in pixels.
	pub fn width(&self) -> u16 {
		self.width
	}

	/// Returns the image height in pixels.
	pub fn height(&self) -> u16 {
		self.height
	}

	/// Returns the total size in bytes.
	pub fn size(&self) -> usize {
		self.data.len()
	}

	/// Returns the exact on-disk content.
	pub fn as_bytes(&self) -> &[u8] {
		&self.data
	}

	/// Serializes the slide to bytes (verbatim passthrough).
	pub fn to_bytes(&self) -> Vec<u8> {
		self.data.clone()
	}

	/// Returns the offset where the drawing-command stream begins.
	pub fn drawing_offset(&self) -> usize {
		if self.version == 1 { constants::V1_HEADER_LEN } else { constants::V2_HEADER_LEN }
	}

	/// Interprets the drawing-command stream.
	///
	/// Each call restarts from the top of the stream; interpretation only
	/// reads the slide's immutable bytes and is safely re-entrant.
	pub fn primitives(&self) -> Primitives<'_> {
		Primitives::new(self)
	}

	/// Computes the transform fitting this slide into a viewport.
	pub fn fit_in(&self, viewport_w: f64, viewport_h: f64, respect_ratio: bool) -> FitTransform {
		FitTransform::fit(
			f64::from(self.width),
			f64::from(self.height),
			viewport_w,
			viewport_h,
			respect_ratio,
		)
	}

	/// Writes the slide back to the path it was opened from.
	pub fn save(&self) -> Result<(), SldError> {
		let Some(path) = self.path.clone() else {
			return Err(std::io::Error::new(
				std::io::ErrorKind::NotFound,
				"slide has no associated path",
			)
			.into());
		};
		self.save_as(path)
	}

	/// Writes the slide to disk.
	pub fn save_as(&self, path: impl AsRef<Path>) -> Result<(), SldError> {
		fs::write(path, &self.data)?;
		Ok(())
	}
}

impl std::fmt::Display for File {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"Slide {{ name: '{}', {}x{}, version: {}, {} bytes }}",
			self.name, self.width, self.height, self.version, self.data.len()
		)
	}
}

impl TryFrom<&[u8]> for File {
	type Error = SldError;

	fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
		Self::from_bytes(String::new(), value)
	}
}

impl From<File> for Vec<u8> {
	fn from(file: File) -> Self {
		file.data
	}
}

impl From<&File> for Vec<u8> {
	fn from(file: &File) -> Self {
		file.to_bytes()
	}
}
