//! Device-independent drawing primitives and the viewport-fit transform.
//!
//! The interpreter reduces a slide's opcode stream to these values so any
//! renderer (retained scene graph, immediate mode, headless test harness)
//! can consume slides uniformly.

use std::fmt;

use serde::Serialize;

/// A point in slide coordinate space.
///
/// Slide space has its origin at the bottom-left; coordinates decoded
/// from the stream are 16-bit, but relative vectors can push them past
/// that range, hence `i32`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Point {
	/// Horizontal coordinate
	pub x: i32,
	/// Vertical coordinate (bottom-up)
	pub y: i32,
}

impl Point {
	/// Creates a new point.
	pub const fn new(x: i32, y: i32) -> Self {
		Self {
			x,
			y,
		}
	}

	/// Returns this point displaced by a pair of signed byte deltas.
	pub(super) const fn offset(self, dx: i8, dy: i8) -> Self {
		Self {
			x: self.x + dx as i32,
			y: self.y + dy as i32,
		}
	}
}

impl fmt::Display for Point {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({}, {})", self.x, self.y)
	}
}

/// A single drawing command produced by the interpreter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DrawPrimitive {
	/// Select a new palette color for subsequent geometry
	ColorChange(u8),
	/// Straight line segment in the current color
	Line {
		/// Segment start point
		from: Point,
		/// Segment end point
		to: Point,
	},
	/// Filled polygon in the current color
	Polygon {
		/// Polygon vertices in stream order
		points: Vec<Point>,
	},
	/// Explicit end-of-file marker; nothing follows
	EndOfFile,
}

impl fmt::Display for DrawPrimitive {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			DrawPrimitive::ColorChange(index) => write!(f, "color {index}"),
			DrawPrimitive::Line {
				from,
				to,
			} => write!(f, "line {from} -> {to}"),
			DrawPrimitive::Polygon {
				points,
			} => write!(f, "polygon with {} vertices", points.len()),
			DrawPrimitive::EndOfFile => write!(f, "end of file"),
		}
	}
}

/// Scale-and-translate transform fitting a slide into a viewport.
///
/// Slide space is bottom-up while viewports are top-down, so the Y scale
/// and translation are negated. Callers apply scale before translate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FitTransform {
	/// Horizontal scale factor
	pub scale_x: f64,
	/// Vertical scale factor (negative: flips slide space into view space)
	pub scale_y: f64,
	/// Horizontal centering offset
	pub translate_x: f64,
	/// Vertical centering offset
	pub translate_y: f64,
}

impl FitTransform {
	/// Computes the transform mapping a `slide_w` x `slide_h` slide into a
	/// `viewport_w` x `viewport_h` viewport.
	///
	/// With `respect_ratio` both axes use the smaller of the two scale
	/// factors; otherwise the slide stretches to fill the viewport.
	pub fn fit(
		slide_w: f64,
		slide_h: f64,
		viewport_w: f64,
		viewport_h: f64,
		respect_ratio: bool,
	) -> Self {
		let mut sx = viewport_w / slide_w;
		let mut sy = viewport_h / slide_h;
		if respect_ratio {
			sx = sx.min(sy);
			sy = sx;
		}
		let tx = (viewport_w - slide_w * sx) / 2.0;
		let ty = (viewport_h - slide_h * sy) / 2.0;
		Self {
			scale_x: sx,
			scale_y: -sy,
			translate_x: tx,
			translate_y: -ty,
		}
	}

	/// Maps a slide-space point into viewport space (scale, then translate).
	pub fn apply(&self, point: Point) -> (f64, f64) {
		(
			f64::from(point.x) * self.scale_x + self.translate_x,
			f64::from(point.y) * self.scale_y + self.translate_y,
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fit_respecting_ratio_uses_smaller_scale() {
		let t = FitTransform::fit(100.0, 50.0, 200.0, 200.0, true);
		assert_eq!(t.scale_x, 2.0);
		assert_eq!(t.scale_y, -2.0);
		assert_eq!(t.translate_x, 0.0);
		assert_eq!(t.translate_y, -50.0);
	}

	#[test]
	fn fit_stretching_scales_each_axis() {
		let t = FitTransform::fit(100.0, 50.0, 200.0, 200.0, false);
		assert_eq!(t.scale_x, 2.0);
		assert_eq!(t.scale_y, -4.0);
		assert_eq!(t.translate_x, 0.0);
		assert_eq!(t.translate_y, 0.0);
	}

	#[test]
	fn apply_scales_before_translating() {
		let t = FitTransform::fit(100.0, 50.0, 200.0, 200.0, true);
		assert_eq!(t.apply(Point::new(50, 25)), (100.0, -100.0));
	}
}
