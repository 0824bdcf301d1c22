//! `slm-rs` manages the legacy AutoCAD slide formats: single `.sld`
//! vector images and `.slb` slide-library archives. It decodes and
//! re-encodes both containers, interprets slide drawing commands into
//! device-independent primitives, and computes viewport-fit transforms
//! for renderers.

pub use slm_types;

pub use slm_types::file;
pub use slm_types::prelude;

// Re-export commonly used types at crate root
pub use slm_types::file::{
	AUTOCAD_PALETTE, Color, DrawPrimitive, FitTransform, Point, SlbError, SlbFile, SldError,
	SldFile,
};
