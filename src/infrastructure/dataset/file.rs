use crate::domain::error::VerbiError;
use crate::domain::traits::DatasetSource;
use std::borrow::Cow;
use std::path::PathBuf;
use tracing::debug;

/// Dataset read from a path on disk, in the same format as the bundled one
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSource for FileSource {
    fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    fn read(&self) -> Result<Cow<'static, [u8]>, VerbiError> {
        debug!(path = %self.path.display(), "reading dataset file");
        let bytes = std::fs::read(&self.path).map_err(|source| VerbiError::Read {
            source_id: self.path.display().to_string(),
            source,
        })?;
        Ok(Cow::Owned(bytes))
    }
}
