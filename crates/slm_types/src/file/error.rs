//! Error types for slide and slide-library parsing.

use thiserror::Error;

/// Errors that can occur when decoding or interpreting SLD slide files
#[derive(Debug, Error)]
pub enum SldError {
	/// Signature, size, or byte-order probe check failed
	#[error("not an AutoCAD slide ({len} bytes)")]
	NotASlide {
		/// Length of the rejected buffer
		len: usize,
	},

	/// Format marker byte is neither 0x01 nor 0x02
	#[error("unsupported slide format marker: 0x{marker:02X}")]
	UnsupportedVersion {
		/// The format marker found at offset 18
		marker: u8,
	},

	/// The drawing-command stream ended in the middle of a field
	#[error("truncated drawing stream: read at offset {offset} past end of slide ({len} bytes)")]
	TruncatedStream {
		/// Offset of the attempted read
		offset: usize,
		/// Total slide length in bytes
		len: usize,
	},

	/// A 16-bit read was attempted past the end of the buffer
	#[error("read out of range: index {index} in a {len}-byte buffer")]
	OutOfRange {
		/// Index of the attempted read
		index: usize,
		/// Total buffer length in bytes
		len: usize,
	},

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}

/// Errors that can occur when decoding or encoding SLB slide libraries
#[derive(Debug, Error)]
pub enum SlbError {
	/// Signature or size check failed
	#[error("not an AutoCAD slide library ({len} bytes)")]
	NotALibrary {
		/// Length of the rejected buffer
		len: usize,
	},

	/// Directory offsets are inconsistent with the file contents
	#[error(
		"corrupt library directory: entry at offset {offset} spans {length} bytes, {available} available"
	)]
	CorruptLibrary {
		/// Payload offset recorded in the directory
		offset: usize,
		/// Computed payload length (may be negative when offsets are inverted)
		length: i64,
		/// Bytes actually available in the file
		available: usize,
	},

	/// Encode was requested for a library with no entries
	#[error("cannot encode an empty slide library")]
	EmptyLibrary,

	/// Slide name cannot fit in a 32-byte directory record
	#[error("invalid slide name '{name}': {len} bytes (directory names are 1..=31 bytes)")]
	InvalidName {
		/// The offending name
		name: String,
		/// Its serialized length in bytes
		len: usize,
	},

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),

	/// Embedded slide error
	#[error(transparent)]
	SldError(#[from] SldError),
}
