//! Decoder for the legacy `IDPO` (MDL) version-6 model format.
//!
//! Wire layout, little-endian throughout:
//! - 4-byte `IDPO` identifier, i32 version (must be 6)
//! - scale, translation, bounding radius, eye position (10 floats)
//! - i32 counts: texture groups, texture width/height, vertices, triangles,
//!   frame groups, then sync type, flags and a float size
//! - texture groups, per-vertex texture coordinates, triangles, frame groups,
//!   each section sized by the counts above
//!
//! Decoding is one strict forward pass; nothing in the format requires
//! lookahead or backtracking.

pub mod error;
pub mod frame;
pub mod geometry;
pub mod texture;

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use binrw::{binread, BinRead, BinResult, VecArgs};
use serde::Serialize;

use crate::math::MdlVector3;
use error::{FormatError, MdlError};
use frame::MdlFrameGroup;
use geometry::{MdlTexCoord, MdlTriangle};
use texture::MdlTextureGroup;

pub const MDL_IDENTIFIER: [u8; 4] = *b"IDPO";
pub const MDL_VERSION: i32 = 6;

/// The fixed-order scalar block that follows the identifier and version.
#[binread]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[br(little)]
pub struct MdlHeader {
    pub scale: MdlVector3,
    pub translation: MdlVector3,
    pub bounding_radius: f32,
    pub eye_position: MdlVector3,

    pub texture_group_num: i32,
    pub texture_width: i32,
    pub texture_height: i32,

    pub vertex_num: i32,
    pub triangle_num: i32,
    pub frame_group_num: i32,

    pub sync_type: i32,
    pub flags: i32,
    pub size: f32,
}

/// A fully decoded model. Immutable once returned; the counts in `header`
/// match the lengths of the corresponding sequences.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MdlModel {
    pub header: MdlHeader,
    pub texture_group_seq: Vec<MdlTextureGroup>,
    pub texcoord_seq: Vec<MdlTexCoord>,
    pub triangle_seq: Vec<MdlTriangle>,
    pub frame_group_seq: Vec<MdlFrameGroup>,
}

impl BinRead for MdlModel {
    type Args<'a> = ();

    fn read_options<R: Read + Seek>(
        reader: &mut R,
        endian: binrw::Endian,
        _args: Self::Args<'_>,
    ) -> BinResult<Self> {
        let pos = reader.stream_position()?;
        let identifier = <[u8; 4]>::read_options(reader, endian, ())?;
        if identifier != MDL_IDENTIFIER {
            return Err(binrw::Error::Custom {
                pos,
                err: Box::new(FormatError::BadIdentifier { found: identifier }),
            });
        }

        let pos = reader.stream_position()?;
        let version = i32::read_options(reader, endian, ())?;
        if version != MDL_VERSION {
            return Err(binrw::Error::Custom {
                pos,
                err: Box::new(FormatError::UnsupportedVersion { found: version }),
            });
        }

        let header = MdlHeader::read_options(reader, endian, ())?;

        // Counts are trusted as read; a corrupt file fails on the resulting
        // reads or allocations rather than being clamped here.
        let mut texture_group_seq = Vec::with_capacity(header.texture_group_num as usize);
        for _ in 0..header.texture_group_num {
            texture_group_seq.push(MdlTextureGroup::read_options(
                reader,
                endian,
                (header.texture_width, header.texture_height),
            )?);
        }

        let texcoord_seq: Vec<MdlTexCoord> = Vec::read_options(
            reader,
            endian,
            VecArgs {
                count: header.vertex_num as usize,
                inner: (),
            },
        )?;

        let triangle_seq: Vec<MdlTriangle> = Vec::read_options(
            reader,
            endian,
            VecArgs {
                count: header.triangle_num as usize,
                inner: (),
            },
        )?;

        let pos = reader.stream_position()?;
        for (i, triangle) in triangle_seq.iter().enumerate() {
            for &index in &triangle.vertex_seq {
                if index < 0 || index >= header.vertex_num {
                    return Err(binrw::Error::Custom {
                        pos,
                        err: Box::new(FormatError::VertexIndexOutOfRange {
                            triangle: i,
                            index,
                            vertex_num: header.vertex_num,
                        }),
                    });
                }
            }
        }

        let mut frame_group_seq = Vec::with_capacity(header.frame_group_num as usize);
        for _ in 0..header.frame_group_num {
            frame_group_seq.push(MdlFrameGroup::read_options(
                reader,
                endian,
                (header.vertex_num,),
            )?);
        }

        Ok(Self {
            header,
            texture_group_seq,
            texcoord_seq,
            triangle_seq,
            frame_group_seq,
        })
    }
}

impl MdlModel {
    /// Decode a model from a seekable byte stream.
    ///
    /// Fails with [`MdlError::Format`] if the stream does not start with the
    /// `IDPO` identifier and version 6, or if a triangle references a vertex
    /// the model does not have; stream failures surface as [`MdlError::Io`].
    pub fn read_from<R: Read + Seek>(reader: &mut R) -> error::Result<Self> {
        Self::read_options(reader, binrw::Endian::Little, ()).map_err(MdlError::from)
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            anyhow::anyhow!("Failed to open MDL file '{}': {}", path.display(), e)
        })?;

        let file_size = file.metadata().map(|m| m.len()).unwrap_or(0);

        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader).map_err(|err| {
            let bytes_read = reader.stream_position().unwrap_or(0);
            anyhow::Error::new(err).context(format!(
                "Failed to parse MDL file '{}' ({} bytes, {} read before error)",
                path.display(),
                file_size,
                bytes_read
            ))
        })
    }
}
