//! Unit tests for slide decoding and interpretation.

use super::*;

fn put_u16(data: &mut [u8], at: usize, value: u16, low_first: bool) {
	let [lo, hi] = value.to_le_bytes();
	if low_first {
		data[at] = lo;
		data[at + 1] = hi;
	} else {
		data[at] = hi;
		data[at + 1] = lo;
	}
}

/// Builds a 31-byte format-2 header.
fn v2_header(width: u16, height: u16, low_first: bool) -> Vec<u8> {
	let mut data = vec![0u8; 31];
	data[..13].copy_from_slice(b"AutoCAD Slide");
	data[13..17].copy_from_slice(&[0x0D, 0x0A, 0x1A, 0x00]);
	data[18] = 0x02;
	put_u16(&mut data, 19, width, low_first);
	put_u16(&mut data, 21, height, low_first);
	put_u16(&mut data, 29, 0x1234, low_first);
	data
}

fn v2_slide(width: u16, height: u16, low_first: bool, ops: &[u8]) -> File {
	let mut data = v2_header(width, height, low_first);
	data.extend_from_slice(ops);
	File::from_bytes("test", &data).unwrap()
}

fn collect(slide: &File) -> Vec<DrawPrimitive> {
	slide.primitives().collect::<Result<Vec<_>, _>>().unwrap()
}

#[test]
fn header_only_v2_decodes() {
	// 31 bytes is a complete format-2 header; no drawing data required
	let data = v2_header(640, 480, true);
	assert_eq!(data.len(), 31);
	let slide = File::from_bytes("empty", &data).unwrap();
	assert_eq!(slide.name(), "empty");
	assert_eq!(slide.version(), 2);
	assert!(slide.low_first());
	assert_eq!(slide.width(), 640);
	assert_eq!(slide.height(), 480);
	assert_eq!(slide.drawing_offset(), 31);
	// No trailing opcodes: interpretation yields an empty sequence
	assert_eq!(collect(&slide), vec![]);
}

#[test]
fn high_first_header_decodes() {
	let mut data = v2_header(320, 200, false);
	// Order tag stored big-endian reads as 0x3412 low-first: high-first file
	data.extend_from_slice(&[0xFC, 0x00]);
	let slide = File::from_bytes("hf", &data).unwrap();
	assert!(!slide.low_first());
	assert_eq!(slide.width(), 320);
	assert_eq!(slide.height(), 200);
	assert_eq!(collect(&slide), vec![DrawPrimitive::EndOfFile]);
}

#[test]
fn rejects_short_and_unsigned_buffers() {
	assert!(matches!(File::from_bytes("x", &[]), Err(SldError::NotASlide { len: 0 })));
	let data = v2_header(1, 1, true);
	assert!(matches!(
		File::from_bytes("x", &data[..30]),
		Err(SldError::NotASlide { len: 30 })
	));
	let mut bad = v2_header(1, 1, true);
	bad[0] = b'B';
	assert!(matches!(File::from_bytes("x", &bad), Err(SldError::NotASlide { .. })));
}

#[test]
fn rejects_unknown_format_marker() {
	let mut data = v2_header(1, 1, true);
	data[18] = 0x03;
	assert!(matches!(
		File::from_bytes("x", &data),
		Err(SldError::UnsupportedVersion { marker: 0x03 })
	));
}

fn v1_slide_bytes(width: u16, height: u16, low_first: bool) -> Vec<u8> {
	let mut data = vec![0u8; 34];
	data[..13].copy_from_slice(b"AutoCAD Slide");
	data[13..17].copy_from_slice(&[0x0D, 0x0A, 0x1A, 0x00]);
	data[18] = 0x01;
	put_u16(&mut data, 19, width, low_first);
	put_u16(&mut data, 21, height, low_first);
	// Drawing data is just the end-of-file field, which doubles as the
	// byte-order probe
	data.extend_from_slice(if low_first { &[0x00, 0xFC] } else { &[0xFC, 0x00] });
	data
}

#[test]
fn v1_byte_order_is_probed_from_the_tail() {
	let lf = File::from_bytes("v1", &v1_slide_bytes(100, 60, true)).unwrap();
	assert_eq!(lf.version(), 1);
	assert!(lf.low_first());
	assert_eq!(lf.drawing_offset(), 34);
	assert_eq!((lf.width(), lf.height()), (100, 60));
	assert_eq!(collect(&lf), vec![DrawPrimitive::EndOfFile]);

	let hf = File::from_bytes("v1", &v1_slide_bytes(100, 60, false)).unwrap();
	assert!(!hf.low_first());
	assert_eq!((hf.width(), hf.height()), (100, 60));
}

#[test]
fn v1_with_unrecognized_probe_is_rejected() {
	let mut data = v1_slide_bytes(100, 60, true);
	let len = data.len();
	data[len - 1] = 0x00;
	assert!(matches!(File::from_bytes("v1", &data), Err(SldError::NotASlide { .. })));
}

#[test]
fn color_change_then_end() {
	// High-first file: the stream reads byte-for-byte as written
	let mut data = v2_header(10, 10, false);
	data.extend_from_slice(&[0xFF, 0x01, 0xFC, 0x00]);
	let slide = File::from_bytes("c", &data).unwrap();
	assert_eq!(collect(&slide), vec![DrawPrimitive::ColorChange(1), DrawPrimitive::EndOfFile]);

	// Same stream in a low-first file has each field's bytes swapped
	let slide = v2_slide(10, 10, true, &[0x01, 0xFF, 0x00, 0xFC]);
	assert_eq!(collect(&slide), vec![DrawPrimitive::ColorChange(1), DrawPrimitive::EndOfFile]);
}

#[test]
fn common_endpoint_vectors_chain() {
	// 0xFE: dx in the field's low byte, dy in the following raw byte
	let slide = v2_slide(
		10,
		10,
		true,
		&[
			0x05, 0xFE, 0xFB, // (0,0) + (5,-5)
			0x01, 0xFE, 0x01, // (5,-5) + (1,1)
			0x00, 0xFC,
		],
	);
	assert_eq!(
		collect(&slide),
		vec![
			DrawPrimitive::Line {
				from: Point::new(0, 0),
				to: Point::new(5, -5)
			},
			DrawPrimitive::Line {
				from: Point::new(5, -5),
				to: Point::new(6, -4)
			},
			DrawPrimitive::EndOfFile,
		]
	);
}

#[test]
fn absolute_vector_sets_the_current_point() {
	let slide = v2_slide(
		10,
		10,
		true,
		&[
			0x64, 0x00, // to.x = 100 (field value itself)
			0x2C, 0x01, // to.y = 300
			0x0A, 0x00, // from.x = 10
			0x14, 0x00, // from.y = 20
			0x02, 0xFE, 0x03, // relative from (100,300)
			0x00, 0xFC,
		],
	);
	assert_eq!(
		collect(&slide),
		vec![
			DrawPrimitive::Line {
				from: Point::new(10, 20),
				to: Point::new(100, 300)
			},
			DrawPrimitive::Line {
				from: Point::new(100, 300),
				to: Point::new(102, 303)
			},
			DrawPrimitive::EndOfFile,
		]
	);
}

#[test]
fn offset_vector_derives_both_points_from_the_current_one() {
	let slide = v2_slide(
		10,
		10,
		true,
		&[
			0x64, 0x00, 0x2C, 0x01, 0x0A, 0x00, 0x14, 0x00, // current = (100,300)
			0x0A, 0xFB, 0x00, 0xF6, 0x0B, // to += (10,0), from += (-10,11)
			0x00, 0xFC,
		],
	);
	let primitives = collect(&slide);
	assert_eq!(
		primitives[1],
		DrawPrimitive::Line {
			from: Point::new(90, 311),
			to: Point::new(110, 300)
		}
	);
	// The next relative vector starts from the offset vector's endpoint
	assert_eq!(primitives.len(), 3);
}

#[test]
fn solid_fill_collects_vertices() {
	let slide = v2_slide(
		10,
		10,
		true,
		&[
			0x00, 0xFD, // fill field
			0x03, 0x00, // 3 vertices
			0x00, 0x00, // rest of the fill header
			0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // (0,0)
			0x00, 0x00, 0x0A, 0x00, 0x00, 0x00, // (10,0)
			0x00, 0x00, 0x05, 0x00, 0x40, 0x9C, // (5, 25536): sign recovery
			0x00, 0xFC,
		],
	);
	assert_eq!(
		collect(&slide),
		vec![
			DrawPrimitive::Polygon {
				points: vec![Point::new(0, 0), Point::new(10, 0), Point::new(5, 25536)]
			},
			DrawPrimitive::EndOfFile,
		]
	);
}

#[test]
fn zero_vertex_fill_advances_without_emitting() {
	let slide = v2_slide(10, 10, true, &[0x00, 0xFD, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFC]);
	assert_eq!(collect(&slide), vec![DrawPrimitive::EndOfFile]);
}

#[test]
fn undefined_opcode_halts_without_end_marker() {
	let slide = v2_slide(10, 10, true, &[0x01, 0xFF, 0x00, 0x90, 0x00, 0xFC]);
	// 0x90 is undefined: interpretation stops silently, no EndOfFile
	assert_eq!(collect(&slide), vec![DrawPrimitive::ColorChange(1)]);
}

#[test]
fn nothing_is_emitted_after_end_of_file() {
	let slide = v2_slide(10, 10, true, &[0x00, 0xFC, 0x01, 0xFF]);
	assert_eq!(collect(&slide), vec![DrawPrimitive::EndOfFile]);
}

#[test]
fn truncated_field_start_is_reported() {
	let slide = v2_slide(10, 10, true, &[0x01, 0xFF, 0xAA]);
	let items: Vec<_> = slide.primitives().collect();
	assert_eq!(items.len(), 2);
	assert_eq!(items[0].as_ref().unwrap(), &DrawPrimitive::ColorChange(1));
	assert!(matches!(items[1], Err(SldError::TruncatedStream { .. })));
}

#[test]
fn truncated_vector_payload_is_reported() {
	// 0xFE needs one more byte than the stream has
	let slide = v2_slide(10, 10, true, &[0x05, 0xFE]);
	let items: Vec<_> = slide.primitives().collect();
	assert_eq!(items.len(), 1);
	assert!(matches!(items[0], Err(SldError::TruncatedStream { .. })));
}

#[test]
fn truncated_fill_is_reported() {
	// Two vertices promised, none present
	let slide = v2_slide(10, 10, true, &[0x00, 0xFD, 0x02, 0x00, 0x00, 0x00]);
	let items: Vec<_> = slide.primitives().collect();
	assert_eq!(items.len(), 1);
	assert!(matches!(items[0], Err(SldError::TruncatedStream { .. })));
}

#[test]
fn interpretation_is_restartable_and_idempotent() {
	let slide = v2_slide(10, 10, true, &[0x01, 0xFF, 0x05, 0xFE, 0xFB, 0x00, 0xFC]);
	let first = collect(&slide);
	let second = collect(&slide);
	assert_eq!(first, second);
	assert_eq!(first.len(), 3);
}

#[test]
fn encode_is_verbatim_passthrough() {
	let mut data = v2_header(640, 480, true);
	data.extend_from_slice(&[0x01, 0xFF, 0x00, 0xFC]);
	let slide = File::from_bytes("s", &data).unwrap();
	assert_eq!(slide.to_bytes(), data);
	assert_eq!(slide.as_bytes(), &data[..]);
	assert_eq!(slide.size(), data.len());
}

#[test]
fn fit_in_uses_slide_dimensions() {
	let slide = v2_slide(100, 50, true, &[]);
	let t = slide.fit_in(200.0, 200.0, true);
	assert_eq!(t.scale_x, 2.0);
	assert_eq!(t.scale_y, -2.0);
}

#[test]
fn save_remembers_the_opened_path() {
	let dir = std::env::temp_dir().join(format!("slm_types_sld_{}", std::process::id()));
	std::fs::create_dir_all(&dir).unwrap();
	let path = dir.join("logo.sld");

	// A slide built from bytes has no associated path to save back to
	let slide = v2_slide(640, 480, true, &[0xFC, 0x00]);
	assert!(slide.path().is_none());
	assert!(slide.save().is_err());
	slide.save_as(&path).unwrap();

	let reopened = File::open(&path).unwrap();
	assert_eq!(reopened.path(), Some(path.as_path()));
	assert_eq!(reopened.name(), "logo");
	assert_eq!(reopened.as_bytes(), slide.as_bytes());
	reopened.save().unwrap();
	assert_eq!(std::fs::read(&path).unwrap(), slide.to_bytes());

	std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn extension_predicate() {
	assert!(File::is_slide("foo.sld"));
	assert!(File::is_slide("FOO.SLD"));
	assert!(!File::is_slide("foo.slb"));
	assert!(!File::is_slide("foo"));
}
