//! AutoCAD color table for slide rendering.
//!
//! Slides reference colors by palette index (the low byte of a color-change
//! field). The table below is the classic 256-entry AutoCAD color wheel:
//! 10 standard colors, 240 hue/shade combinations, and 6 gray shades at the
//! top of the range. It is process-wide constant data; renderers map the
//! indices emitted by the interpreter onto their own surface with it.

use std::fmt;

use serde::Serialize;

/// RGB color representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Color {
	/// Red component (0-255)
	pub r: u8,
	/// Green component (0-255)
	pub g: u8,
	/// Blue component (0-255)
	pub b: u8,
}

impl Color {
	/// Creates a new RGB color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self {
			r,
			g,
			b,
		}
	}

	/// Returns the bitwise complement of this color.
	pub const fn complement(&self) -> Self {
		Self::rgb(!self.r, !self.g, !self.b)
	}

	/// Returns the color as a packed `0xRRGGBB` value.
	pub const fn to_rgb24(&self) -> u32 {
		((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "RGB({}, {}, {})", self.r, self.g, self.b)
	}
}

/// Resolves a color-change index against the palette.
///
/// An index whose entry is the complement of entry 0 would vanish against
/// the classic background; such indices fall back to 0, matching the
/// original viewer. A `u8` index is structurally within the table.
pub fn clamp_index(index: u8) -> u8 {
	if AUTOCAD_PALETTE[index as usize] == AUTOCAD_PALETTE[0].complement() {
		0
	} else {
		index
	}
}

/// The 256-entry AutoCAD color table.
pub const AUTOCAD_PALETTE: [Color; 256] = [
	Color::rgb(255, 255, 255), // 0: ByBlock - White
	Color::rgb(255, 0, 0), // 1: Red
	Color::rgb(255, 255, 0), // 2: Yellow
	Color::rgb(0, 255, 0), // 3: Green
	Color::rgb(0, 255, 255), // 4: Cyan
	Color::rgb(0, 0, 255), // 5: Blue
	Color::rgb(255, 0, 255), // 6: Magenta
	Color::rgb(255, 255, 255), // 7: White
	Color::rgb(128, 128, 128), // 8: Dark Gray
	Color::rgb(192, 192, 192), // 9: Light Gray
	Color::rgb(255, 0, 0),
	Color::rgb(255, 127, 127),
	Color::rgb(165, 0, 0),
	Color::rgb(165, 82, 82),
	Color::rgb(127, 0, 0),
	Color::rgb(127, 63, 63),
	Color::rgb(76, 0, 0),
	Color::rgb(76, 38, 38),
	Color::rgb(38, 0, 0),
	Color::rgb(38, 19, 19),
	Color::rgb(255, 63, 0),
	Color::rgb(255, 159, 127),
	Color::rgb(165, 41, 0),
	Color::rgb(165, 103, 82),
	Color::rgb(127, 31, 0),
	Color::rgb(127, 79, 63),
	Color::rgb(76, 19, 0),
	Color::rgb(76, 47, 38),
	Color::rgb(38, 9, 0),
	Color::rgb(38, 23, 19),
	Color::rgb(255, 127, 0),
	Color::rgb(255, 191, 127),
	Color::rgb(165, 82, 0),
	Color::rgb(165, 124, 82),
	Color::rgb(127, 63, 0),
	Color::rgb(127, 95, 63),
	Color::rgb(76, 38, 0),
	Color::rgb(76, 57, 38),
	Color::rgb(38, 19, 0),
	Color::rgb(38, 28, 19),
	Color::rgb(255, 191, 0),
	Color::rgb(255, 223, 127),
	Color::rgb(165, 124, 0),
	Color::rgb(165, 145, 82),
	Color::rgb(127, 95, 0),
	Color::rgb(127, 111, 63),
	Color::rgb(76, 57, 0),
	Color::rgb(76, 66, 38),
	Color::rgb(38, 28, 0),
	Color::rgb(38, 33, 19),
	Color::rgb(255, 255, 0),
	Color::rgb(255, 255, 127),
	Color::rgb(165, 165, 0),
	Color::rgb(165, 165, 82),
	Color::rgb(127, 127, 0),
	Color::rgb(127, 127, 63),
	Color::rgb(76, 76, 0),
	Color::rgb(76, 76, 38),
	Color::rgb(38, 38, 0),
	Color::rgb(38, 38, 19),
	Color::rgb(191, 255, 0),
	Color::rgb(223, 255, 127),
	Color::rgb(124, 165, 0),
	Color::rgb(145, 165, 82),
	Color::rgb(95, 127, 0),
	Color::rgb(111, 127, 63),
	Color::rgb(57, 76, 0),
	Color::rgb(66, 76, 38),
	Color::rgb(28, 38, 0),
	Color::rgb(33, 38, 19),
	Color::rgb(127, 255, 0),
	Color::rgb(191, 255, 127),
	Color::rgb(82, 165, 0),
	Color::rgb(124, 165, 82),
	Color::rgb(63, 127, 0),
	Color::rgb(95, 127, 63),
	Color::rgb(38, 76, 0),
	Color::rgb(57, 76, 38),
	Color::rgb(19, 38, 0),
	Color::rgb(28, 38, 19),
	Color::rgb(63, 255, 0),
	Color::rgb(159, 255, 127),
	Color::rgb(41, 165, 0),
	Color::rgb(103, 165, 82),
	Color::rgb(31, 127, 0),
	Color::rgb(79, 127, 63),
	Color::rgb(19, 76, 0),
	Color::rgb(47, 76, 38),
	Color::rgb(9, 38, 0),
	Color::rgb(23, 38, 19),
	Color::rgb(0, 255, 0),
	Color::rgb(127, 255, 127),
	Color::rgb(0, 165, 0),
	Color::rgb(82, 165, 82),
	Color::rgb(0, 127, 0),
	Color::rgb(63, 127, 63),
	Color::rgb(0, 76, 0),
	Color::rgb(38, 76, 38),
	Color::rgb(0, 38, 0),
	Color::rgb(19, 38, 19),
	Color::rgb(0, 255, 63),
	Color::rgb(127, 255, 159),
	Color::rgb(0, 165, 41),
	Color::rgb(82, 165, 103),
	Color::rgb(0, 127, 31),
	Color::rgb(63, 127, 79),
	Color::rgb(0, 76, 19),
	Color::rgb(38, 76, 47),
	Color::rgb(0, 38, 9),
	Color::rgb(19, 38, 23),
	Color::rgb(0, 255, 127),
	Color::rgb(127, 255, 191),
	Color::rgb(0, 165, 82),
	Color::rgb(82, 165, 124),
	Color::rgb(0, 127, 63),
	Color::rgb(63, 127, 95),
	Color::rgb(0, 76, 38),
	Color::rgb(38, 76, 57),
	Color::rgb(0, 38, 19),
	Color::rgb(19, 38, 28),
	Color::rgb(0, 255, 191),
	Color::rgb(127, 255, 223),
	Color::rgb(0, 165, 124),
	Color::rgb(82, 165, 145),
	Color::rgb(0, 127, 95),
	Color::rgb(63, 127, 111),
	Color::rgb(0, 76, 57),
	Color::rgb(38, 76, 66),
	Color::rgb(0, 38, 28),
	Color::rgb(19, 38, 33),
	Color::rgb(0, 255, 255),
	Color::rgb(127, 255, 255),
	Color::rgb(0, 165, 165),
	Color::rgb(82, 165, 165),
	Color::rgb(0, 127, 127),
	Color::rgb(63, 127, 127),
	Color::rgb(0, 76, 76),
	Color::rgb(38, 76, 76),
	Color::rgb(0, 38, 38),
	Color::rgb(19, 38, 38),
	Color::rgb(0, 191, 255),
	Color::rgb(127, 223, 255),
	Color::rgb(0, 124, 165),
	Color::rgb(82, 145, 165),
	Color::rgb(0, 95, 127),
	Color::rgb(63, 111, 127),
	Color::rgb(0, 57, 76),
	Color::rgb(38, 66, 76),
	Color::rgb(0, 28, 38),
	Color::rgb(19, 33, 38),
	Color::rgb(0, 127, 255),
	Color::rgb(127, 191, 255),
	Color::rgb(0, 82, 165),
	Color::rgb(82, 124, 165),
	Color::rgb(0, 63, 127),
	Color::rgb(63, 95, 127),
	Color::rgb(0, 38, 76),
	Color::rgb(38, 57, 76),
	Color::rgb(0, 19, 38),
	Color::rgb(19, 28, 38),
	Color::rgb(0, 63, 255),
	Color::rgb(127, 159, 255),
	Color::rgb(0, 41, 165),
	Color::rgb(82, 103, 165),
	Color::rgb(0, 31, 127),
	Color::rgb(63, 79, 127),
	Color::rgb(0, 19, 76),
	Color::rgb(38, 47, 76),
	Color::rgb(0, 9, 38),
	Color::rgb(19, 23, 38),
	Color::rgb(0, 0, 255),
	Color::rgb(127, 127, 255),
	Color::rgb(0, 0, 165),
	Color::rgb(82, 82, 165),
	Color::rgb(0, 0, 127),
	Color::rgb(63, 63, 127),
	Color::rgb(0, 0, 76),
	Color::rgb(38, 38, 76),
	Color::rgb(0, 0, 38),
	Color::rgb(19, 19, 38),
	Color::rgb(63, 0, 255),
	Color::rgb(159, 127, 255),
	Color::rgb(41, 0, 165),
	Color::rgb(103, 82, 165),
	Color::rgb(31, 0, 127),
	Color::rgb(79, 63, 127),
	Color::rgb(19, 0, 76),
	Color::rgb(47, 38, 76),
	Color::rgb(9, 0, 38),
	Color::rgb(23, 19, 38),
	Color::rgb(127, 0, 255),
	Color::rgb(191, 127, 255),
	Color::rgb(82, 0, 165),
	Color::rgb(124, 82, 165),
	Color::rgb(63, 0, 127),
	Color::rgb(95, 63, 127),
	Color::rgb(38, 0, 76),
	Color::rgb(57, 38, 76),
	Color::rgb(19, 0, 38),
	Color::rgb(28, 19, 38),
	Color::rgb(191, 0, 255),
	Color::rgb(223, 127, 255),
	Color::rgb(124, 0, 165),
	Color::rgb(145, 82, 165),
	Color::rgb(95, 0, 127),
	Color::rgb(111, 63, 127),
	Color::rgb(57, 0, 76),
	Color::rgb(66, 38, 76),
	Color::rgb(28, 0, 38),
	Color::rgb(33, 19, 38),
	Color::rgb(255, 0, 255),
	Color::rgb(255, 127, 255),
	Color::rgb(165, 0, 165),
	Color::rgb(165, 82, 165),
	Color::rgb(127, 0, 127),
	Color::rgb(127, 63, 127),
	Color::rgb(76, 0, 76),
	Color::rgb(76, 38, 76),
	Color::rgb(38, 0, 38),
	Color::rgb(38, 19, 38),
	Color::rgb(255, 0, 191),
	Color::rgb(255, 127, 223),
	Color::rgb(165, 0, 124),
	Color::rgb(165, 82, 145),
	Color::rgb(127, 0, 95),
	Color::rgb(127, 63, 111),
	Color::rgb(76, 0, 57),
	Color::rgb(76, 38, 66),
	Color::rgb(38, 0, 28),
	Color::rgb(38, 19, 33),
	Color::rgb(255, 0, 127),
	Color::rgb(255, 127, 191),
	Color::rgb(165, 0, 82),
	Color::rgb(165, 82, 124),
	Color::rgb(127, 0, 63),
	Color::rgb(127, 63, 95),
	Color::rgb(76, 0, 38),
	Color::rgb(76, 38, 57),
	Color::rgb(38, 0, 19),
	Color::rgb(38, 19, 28),
	Color::rgb(255, 0, 63),
	Color::rgb(255, 127, 159),
	Color::rgb(165, 0, 41),
	Color::rgb(165, 82, 103),
	Color::rgb(127, 0, 31),
	Color::rgb(127, 63, 79),
	Color::rgb(76, 0, 19),
	Color::rgb(76, 38, 47),
	Color::rgb(38, 0, 9),
	Color::rgb(38, 19, 23),
	Color::rgb(84, 84, 84), // 250: Gray Shades
	Color::rgb(118, 118, 118),
	Color::rgb(152, 152, 152),
	Color::rgb(186, 186, 186),
	Color::rgb(220, 220, 220),
	Color::rgb(255, 255, 255),
];
