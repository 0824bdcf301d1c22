//! This crate provides the codec core for the `slm-rs` project: AutoCAD
//! slide files and slide libraries, plus the drawing-command interpreter.
//!
//! # File Formats
//!
//! - **SLD**: a single vector slide - fixed header, runtime-detected byte
//!   order, and a compact opcode stream of lines, fills, and color changes
//! - **SLB**: a library archive packing multiple named slides behind a
//!   directory of offsets
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use slm_types::prelude::*;
//!
//! let slide = SldFile::open("logo.sld")?;
//! for primitive in slide.primitives() {
//!     println!("{}", primitive?);
//! }
//!
//! let mut library = SlbFile::new();
//! library.insert(slide);
//! library.save_as("out.slb")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Or use explicit paths:
//!
//! ```no_run
//! use slm_types::file::{SlbFile, SldFile};
//!
//! let library = SlbFile::open("acad.slb")?;
//! # Ok::<(), slm_types::file::SlbError>(())
//! ```

pub mod file;

/// `use slm_types::prelude::*;` to import commonly used items.
pub mod prelude;
