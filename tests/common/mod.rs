// Common test utilities: assemble little-endian MDL byte streams by hand.
// The crate deliberately has no writer, so tests build their own buffers.
#![allow(dead_code)]

pub fn push_i32(buf: &mut Vec<u8>, value: i32) {
    buf.extend_from_slice(&value.to_le_bytes());
}

pub fn push_f32(buf: &mut Vec<u8>, value: f32) {
    buf.extend_from_slice(&value.to_le_bytes());
}

pub fn push_vector3(buf: &mut Vec<u8>, v: [f32; 3]) {
    for value in v {
        push_f32(buf, value);
    }
}

/// Write a 16-byte NUL-padded frame name field
pub fn push_name(buf: &mut Vec<u8>, name: &str) {
    let mut field = [0u8; 16];
    field[..name.len()].copy_from_slice(name.as_bytes());
    buf.extend_from_slice(&field);
}

pub struct HeaderCounts {
    pub texture_group_num: i32,
    pub texture_width: i32,
    pub texture_height: i32,
    pub vertex_num: i32,
    pub triangle_num: i32,
    pub frame_group_num: i32,
}

/// Write the identifier, version and scalar block with fixed transform
/// values (scale 1, translation 0, radius 32, eye (0, 0, 24), sync 0,
/// flags 0, size 10) and the given counts.
pub fn push_header(buf: &mut Vec<u8>, counts: &HeaderCounts) {
    buf.extend_from_slice(b"IDPO");
    push_i32(buf, 6);
    push_vector3(buf, [1.0, 1.0, 1.0]);
    push_vector3(buf, [0.0, 0.0, 0.0]);
    push_f32(buf, 32.0);
    push_vector3(buf, [0.0, 0.0, 24.0]);
    push_i32(buf, counts.texture_group_num);
    push_i32(buf, counts.texture_width);
    push_i32(buf, counts.texture_height);
    push_i32(buf, counts.vertex_num);
    push_i32(buf, counts.triangle_num);
    push_i32(buf, counts.frame_group_num);
    push_i32(buf, 0);
    push_i32(buf, 0);
    push_f32(buf, 10.0);
}

/// A complete small model: one single-variant 2x2 texture group with
/// indices [0, 1, 2, 3], three texcoords, one front-facing triangle over
/// vertices [0, 1, 2], and one single-variant frame group named "f0" whose
/// vertices are (i, i, i, i).
pub fn build_small_model() -> Vec<u8> {
    let mut buf = Vec::new();
    push_header(
        &mut buf,
        &HeaderCounts {
            texture_group_num: 1,
            texture_width: 2,
            texture_height: 2,
            vertex_num: 3,
            triangle_num: 1,
            frame_group_num: 1,
        },
    );

    // texture group, single variant
    push_i32(&mut buf, 0);
    buf.extend_from_slice(&[0, 1, 2, 3]);

    // texcoords
    for (seam, s, t) in [(0, 0, 0), (1, 8, 8), (0, 16, 16)] {
        push_i32(&mut buf, seam);
        push_i32(&mut buf, s);
        push_i32(&mut buf, t);
    }

    // triangle
    push_i32(&mut buf, 1);
    for index in [0, 1, 2] {
        push_i32(&mut buf, index);
    }

    // frame group, single variant
    push_i32(&mut buf, 0);
    buf.extend_from_slice(&[0, 0, 0, 0]);
    buf.extend_from_slice(&[255, 255, 255, 0]);
    push_name(&mut buf, "f0");
    for i in 0..3u8 {
        buf.extend_from_slice(&[i, i, i, i]);
    }

    buf
}
