use std::io::{Read, Seek};

use binrw::{binread, BinRead, BinResult, VecArgs};
use serde::Serialize;

/// An indexed-color bitmap. Every texture in a file shares the header's
/// width and height, so the dimensions come from the caller rather than the
/// stream; the payload is `width * height` palette indices, row-major.
#[binread]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[br(little, import(width: i32, height: i32))]
pub struct MdlTexture {
    #[br(calc = width)]
    pub width: i32,

    #[br(calc = height)]
    pub height: i32,

    #[br(count = i64::from(width) * i64::from(height))]
    pub index_seq: Vec<u8>,
}

/// A texture group: either one static texture or an animated sequence with
/// per-texture display times. Unlike frame groups, neither shape carries a
/// bounding box.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MdlTextureGroup {
    pub texture_seq: Vec<MdlTexture>,
    pub time_seq: Vec<f32>,
}

impl BinRead for MdlTextureGroup {
    type Args<'a> = (i32, i32);

    fn read_options<R: Read + Seek>(
        reader: &mut R,
        endian: binrw::Endian,
        args: Self::Args<'_>,
    ) -> BinResult<Self> {
        let (width, height) = args;

        // A zero discriminator means a lone texture with a synthesized time;
        // anything else is followed by the real count.
        if i32::read_options(reader, endian, ())? == 0 {
            let texture = MdlTexture::read_options(reader, endian, (width, height))?;
            return Ok(Self {
                texture_seq: vec![texture],
                time_seq: vec![0.0],
            });
        }

        let texture_num = i32::read_options(reader, endian, ())?;
        let time_seq: Vec<f32> = Vec::read_options(
            reader,
            endian,
            VecArgs {
                count: texture_num as usize,
                inner: (),
            },
        )?;
        let mut texture_seq = Vec::with_capacity(texture_num as usize);
        for _ in 0..texture_num {
            texture_seq.push(MdlTexture::read_options(reader, endian, (width, height))?);
        }

        Ok(Self {
            texture_seq,
            time_seq,
        })
    }
}
