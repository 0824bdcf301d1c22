//! Drawing-command interpreter for slide opcode streams.
//!
//! A slide's body is a sequence of variable-length fields. Each field
//! starts with a 2-byte value whose high byte selects the command:
//!
//! ```text
//! High byte  Command                 Field length
//! ---------  ----------------------  -----------------------------
//! 0xFF       Color change            2 (low byte = palette index)
//! 0xFE       Common-endpoint vector  3 (two signed byte deltas)
//! 0xFD       Solid fill              6 + 6 per vertex
//! 0xFC       End of file             2
//! 0xFB       Offset vector           5 (four signed byte deltas)
//! <= 0x7F    Absolute vector         8 (value itself is the first X)
//! 0x80-0xFA  Undefined               halts interpretation
//! ```
//!
//! Relative vectors are applied to the endpoint of the previous vector,
//! so the interpreter carries a current point across fields. The stream
//! is interpreted lazily and never reads past the slide's length; a field
//! that would is reported as [`SldError::TruncatedStream`].

use crate::file::{SldError, cursor};

use super::File;
use super::palette;
use super::primitive::{DrawPrimitive, Point};

/// Lazy iterator over a slide's drawing primitives.
///
/// Yields `Result` items so malformed streams surface as values instead
/// of panics. The iterator is fused: after `EndOfFile`, an undefined
/// opcode, or an error, it keeps returning `None`. Re-invoking
/// [`File::primitives`] restarts interpretation from the top.
pub struct Primitives<'a> {
	data: &'a [u8],
	low_first: bool,
	cursor: usize,
	current: Point,
	done: bool,
}

impl<'a> Primitives<'a> {
	pub(super) fn new(file: &'a File) -> Self {
		Self {
			data: file.as_bytes(),
			low_first: file.low_first(),
			cursor: file.drawing_offset(),
			current: Point::default(),
			done: false,
		}
	}

	fn read_u16(&self, at: usize) -> Result<u16, SldError> {
		cursor::read_u16(self.data, at, self.low_first).map_err(|_| SldError::TruncatedStream {
			offset: at,
			len: self.data.len(),
		})
	}

	fn read_point(&self, at: usize) -> Result<i32, SldError> {
		cursor::read_point(self.data, at, self.low_first).map_err(|_| SldError::TruncatedStream {
			offset: at,
			len: self.data.len(),
		})
	}

	fn byte(&self, at: usize) -> Result<i8, SldError> {
		self.data.get(at).map(|&b| b as i8).ok_or(SldError::TruncatedStream {
			offset: at,
			len: self.data.len(),
		})
	}

	/// Decodes fields until one produces a primitive.
	///
	/// `Ok(None)` means the stream halted without an explicit marker:
	/// either the cursor ran off the end of the slide or an undefined
	/// opcode was hit (the latter deliberately does not synthesize an
	/// `EndOfFile`, matching the original viewer).
	fn step(&mut self) -> Result<Option<DrawPrimitive>, SldError> {
		while self.cursor < self.data.len() {
			let field = self.read_u16(self.cursor)?;
			match cursor::high_byte(field) {
				0xFF => {
					self.cursor += 2;
					let index = palette::clamp_index(cursor::low_byte(field));
					return Ok(Some(DrawPrimitive::ColorChange(index)));
				}
				0xFE => {
					let from = self.current;
					let dx = cursor::low_byte(field) as i8;
					let dy = self.byte(self.cursor + 2)?;
					self.cursor += 3;
					self.current = from.offset(dx, dy);
					return Ok(Some(DrawPrimitive::Line {
						from,
						to: self.current,
					}));
				}
				0xFD => {
					let count = self.read_u16(self.cursor + 2)?;
					self.cursor += 6;
					if count == 0 {
						// Header-only fill: skip it and keep decoding
						continue;
					}
					let mut points = Vec::with_capacity(count as usize);
					for _ in 0..count {
						let x = self.read_point(self.cursor + 2)?;
						let y = self.read_point(self.cursor + 4)?;
						points.push(Point::new(x, y));
						self.cursor += 6;
					}
					return Ok(Some(DrawPrimitive::Polygon {
						points,
					}));
				}
				0xFC => {
					self.cursor += 2;
					return Ok(Some(DrawPrimitive::EndOfFile));
				}
				0xFB => {
					let base = self.current;
					let to = base.offset(cursor::low_byte(field) as i8, self.byte(self.cursor + 2)?);
					let from = base.offset(self.byte(self.cursor + 3)?, self.byte(self.cursor + 4)?);
					self.cursor += 5;
					self.current = to;
					return Ok(Some(DrawPrimitive::Line {
						from,
						to,
					}));
				}
				hb if hb <= 0x7F => {
					let to = Point::new(i32::from(field), self.read_point(self.cursor + 2)?);
					let from =
						Point::new(self.read_point(self.cursor + 4)?, self.read_point(self.cursor + 6)?);
					self.cursor += 8;
					self.current = to;
					return Ok(Some(DrawPrimitive::Line {
						from,
						to,
					}));
				}
				_ => return Ok(None),
			}
		}
		Ok(None)
	}
}

impl Iterator for Primitives<'_> {
	type Item = Result<DrawPrimitive, SldError>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}
		match self.step() {
			Ok(Some(primitive)) => {
				if matches!(primitive, DrawPrimitive::EndOfFile) {
					self.done = true;
				}
				Some(Ok(primitive))
			}
			Ok(None) => {
				self.done = true;
				None
			}
			Err(e) => {
				self.done = true;
				Some(Err(e))
			}
		}
	}
}
