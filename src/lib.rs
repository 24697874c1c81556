//! Read-only decoder for legacy `IDPO` (MDL) version-6 model files.

pub mod math;
pub mod model;

pub use model::error::{FormatError, MdlError};
pub use model::{MdlHeader, MdlModel, MDL_IDENTIFIER, MDL_VERSION};
