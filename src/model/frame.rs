use std::io::{Read, Seek};

use binrw::{binread, BinRead, BinResult, VecArgs};
use serde::Serialize;

use super::geometry::MdlVertex;

/// Frame names occupy a fixed 16-byte field, NUL-padded.
pub const MDL_FRAME_NAME_LEN: usize = 16;

/// One animation pose: a packed-vertex bounding box, a name, and one packed
/// vertex per model vertex. The vertex count comes from the model header.
#[binread]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[br(little, import(vertex_num: i32))]
pub struct MdlFrame {
    pub min: MdlVertex,
    pub max: MdlVertex,

    // Truncated at the first NUL; whatever padding or garbage follows the
    // terminator is discarded.
    #[br(map = |raw_name: [u8; MDL_FRAME_NAME_LEN]| {
        let end = raw_name.iter().position(|&b| b == 0).unwrap_or(MDL_FRAME_NAME_LEN);
        String::from_utf8_lossy(&raw_name[..end]).to_string()
    })]
    pub name: String,

    #[br(count = vertex_num)]
    pub vertex_seq: Vec<MdlVertex>,
}

#[binread]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[br(little)]
pub struct MdlFrameBounds {
    pub min: MdlVertex,
    pub max: MdlVertex,
}

/// A frame group: one static pose, or an animated sequence that carries a
/// shared bounding box and per-frame times. Single-pose groups have no
/// bounding box in the file, hence the `Option`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MdlFrameGroup {
    pub bounds: Option<MdlFrameBounds>,
    pub frame_seq: Vec<MdlFrame>,
    pub time_seq: Vec<f32>,
}

impl BinRead for MdlFrameGroup {
    type Args<'a> = (i32,);

    fn read_options<R: Read + Seek>(
        reader: &mut R,
        endian: binrw::Endian,
        args: Self::Args<'_>,
    ) -> BinResult<Self> {
        let (vertex_num,) = args;

        if i32::read_options(reader, endian, ())? == 0 {
            let frame = MdlFrame::read_options(reader, endian, (vertex_num,))?;
            return Ok(Self {
                bounds: None,
                frame_seq: vec![frame],
                time_seq: vec![0.0],
            });
        }

        let frame_num = i32::read_options(reader, endian, ())?;
        let bounds = MdlFrameBounds::read_options(reader, endian, ())?;
        let time_seq: Vec<f32> = Vec::read_options(
            reader,
            endian,
            VecArgs {
                count: frame_num as usize,
                inner: (),
            },
        )?;
        let mut frame_seq = Vec::with_capacity(frame_num as usize);
        for _ in 0..frame_num {
            frame_seq.push(MdlFrame::read_options(reader, endian, (vertex_num,))?);
        }

        Ok(Self {
            bounds: Some(bounds),
            frame_seq,
            time_seq,
        })
    }
}
