pub mod bundled;
pub mod file;

pub use bundled::BundledSource;
pub use file::FileSource;

use crate::domain::traits::DatasetSource;
use crate::infrastructure::config::Config;
use tracing::debug;

/// Pick the dataset source: a configured file wins over the bundled copy
pub fn select_source(config: &Config) -> Box<dyn DatasetSource> {
    match config.dataset_path() {
        Some(path) => {
            debug!(path = %path.display(), "using dataset file");
            Box::new(FileSource::new(path))
        }
        None => {
            debug!("using bundled dataset");
            Box::new(BundledSource)
        }
    }
}
