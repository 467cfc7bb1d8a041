use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerbiError {
    #[error("errore nella lettura del file {source_id}: {source}")]
    Read {
        source_id: String,
        #[source]
        source: std::io::Error,
    },

    #[error("errore nell'analisi JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
