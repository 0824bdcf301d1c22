//! 16-bit reads over raw slide bytes with per-file byte order.
//!
//! Slides do not have a fixed endianness: the header carries a sentinel
//! that tells the decoder whether the low-order byte comes first. Every
//! multi-byte read in the slide codec goes through this module so the
//! resolved order is applied uniformly, with bounds checks the original
//! implementation lacked.

use super::SldError;

/// Reads an unsigned 16-bit value at `index`.
///
/// `low_first` selects which of the two bytes is the low-order one.
/// Fails with [`SldError::OutOfRange`] when fewer than two bytes remain.
pub fn read_u16(data: &[u8], index: usize, low_first: bool) -> Result<u16, SldError> {
	let Some(pair) = index.checked_add(1).and_then(|hi| data.get(index..=hi)) else {
		return Err(SldError::OutOfRange {
			index,
			len: data.len(),
		});
	};
	let (lo, hi) = if low_first { (pair[0], pair[1]) } else { (pair[1], pair[0]) };
	Ok(u16::from(lo) | (u16::from(hi) << 8))
}

/// Reads a 16-bit coordinate at `index`, undoing the MSLIDE sign bug.
///
/// MSLIDE encoded negative coordinates as `65536 - v` instead of two's
/// complement; values above 32767 are folded back the same way rather
/// than cast, so `40000` decodes to `25536`.
pub fn read_point(data: &[u8], index: usize, low_first: bool) -> Result<i32, SldError> {
	let value = read_u16(data, index, low_first)?;
	if value > 0x7FFF {
		Ok(65536 - i32::from(value))
	} else {
		Ok(i32::from(value))
	}
}

/// Returns the high-order byte of a field-start value.
pub const fn high_byte(value: u16) -> u8 {
	(value >> 8) as u8
}

/// Returns the low-order byte of a field-start value.
pub const fn low_byte(value: u16) -> u8 {
	(value & 0xFF) as u8
}
