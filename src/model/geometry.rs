use binrw::binread;
use serde::Serialize;

/// A packed frame vertex. Coordinates are stored as unsigned bytes and must
/// be scaled by the header's `scale`/`translation` to recover model space.
/// `normal` indexes the engine's fixed normal table, which is not part of
/// the file.
#[binread]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[br(little)]
pub struct MdlVertex {
    pub x: u8,
    pub y: u8,
    pub z: u8,
    pub normal: u8,
}

/// Per-vertex UV mapping. `seam` marks vertices on the texture seam that
/// back-facing triangles project with an offset.
#[binread]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[br(little)]
pub struct MdlTexCoord {
    #[br(map = |raw: i32| raw != 0)]
    pub seam: bool,
    pub s: i32,
    pub t: i32,
}

#[binread]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[br(little)]
pub struct MdlTriangle {
    #[br(map = |raw: i32| raw != 0)]
    pub front: bool,
    pub vertex_seq: [i32; 3],
}
