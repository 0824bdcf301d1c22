//! Prelude module for `slm_types`.
//!
//! This module provides a convenient way to import commonly used types,
//! traits, and constants.
//!
//! # Examples
//!
//! ```no_run
//! use slm_types::prelude::*;
//!
//! let slide = SldFile::open("logo.sld")?;
//! let transform = slide.fit_in(640.0, 480.0, true);
//! # Ok::<(), SldError>(())
//! ```

// File module types
#[doc(inline)]
pub use crate::file::{
	// Palette
	AUTOCAD_PALETTE,
	Color,

	// Interpreter output
	DrawPrimitive,
	FitTransform,
	Point,
	Primitives,

	// Library types
	SlbError,
	SlbFile,

	// Slide types
	SldError,
	SldFile,
};

// Re-export the file module for advanced usage
#[doc(inline)]
pub use crate::file;
