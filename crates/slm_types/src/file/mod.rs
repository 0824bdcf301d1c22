//! File type support for `slm-rs`.

mod error;

pub mod cursor;
pub mod slb;
pub mod sld;

// Re-export unified error types
pub use error::{SlbError, SldError};

// Re-export main file types
pub use slb::File as SlbFile;
pub use sld::{
	DrawPrimitive, File as SldFile, FitTransform, Point, Primitives,
	palette::{AUTOCAD_PALETTE, Color},
};
