use std::io;

/// A violation of the MDL binary layout itself, as opposed to a failure of
/// the underlying stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// The first 4 bytes were not the `IDPO` identifier
    BadIdentifier { found: [u8; 4] },

    /// The file version was not 6
    UnsupportedVersion { found: i32 },

    /// A triangle referenced a vertex outside `[0, vertex_num)`
    VertexIndexOutOfRange {
        triangle: usize,
        index: i32,
        vertex_num: i32,
    },
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatError::BadIdentifier { found } => {
                write!(
                    f,
                    "unsupported identifier: {:?}",
                    String::from_utf8_lossy(found)
                )
            }
            FormatError::UnsupportedVersion { found } => {
                write!(f, "unsupported version: {}", found)
            }
            FormatError::VertexIndexOutOfRange {
                triangle,
                index,
                vertex_num,
            } => {
                write!(
                    f,
                    "triangle {} references vertex {} but the model has {} vertices",
                    triangle, index, vertex_num
                )
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// MDL decode error types
#[derive(Debug)]
pub enum MdlError {
    /// IO error occurred
    Io(io::Error),

    /// The stream is not a version-6 IDPO model
    Format(FormatError),
}

impl std::fmt::Display for MdlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MdlError::Io(e) => write!(f, "IO error: {}", e),
            MdlError::Format(e) => write!(f, "Invalid MDL file: {}", e),
        }
    }
}

impl std::error::Error for MdlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MdlError::Io(e) => Some(e),
            MdlError::Format(e) => Some(e),
        }
    }
}

impl From<io::Error> for MdlError {
    fn from(err: io::Error) -> Self {
        MdlError::Io(err)
    }
}

impl From<FormatError> for MdlError {
    fn from(err: FormatError) -> Self {
        MdlError::Format(err)
    }
}

impl From<binrw::Error> for MdlError {
    fn from(err: binrw::Error) -> Self {
        if let Some(format) = err.custom_err::<FormatError>() {
            return MdlError::Format(*format);
        }
        match err {
            binrw::Error::Io(e) => MdlError::Io(e),
            other => MdlError::Io(io::Error::new(
                io::ErrorKind::InvalidData,
                other.to_string(),
            )),
        }
    }
}

/// Result type for MDL decode operations
pub type Result<T> = std::result::Result<T, MdlError>;
