use crate::domain::error::VerbiError;
use std::borrow::Cow;

/// Where the raw dataset bytes come from
///
/// The bundled resource and a file on disk are interchangeable: both hand
/// back the same JSON document and the loader never knows which one it got.
pub trait DatasetSource {
    /// Short name used in user-facing messages (e.g. `verbs.json`)
    fn name(&self) -> String;

    /// Read the whole dataset
    fn read(&self) -> Result<Cow<'static, [u8]>, VerbiError>;
}
