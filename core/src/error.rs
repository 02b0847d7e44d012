use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("document identifier is missing")]
    MissingDocumentIdentifier,
    #[error("document not found: {document}")]
    DocumentNotFound {
        document: String,
        #[source]
        source: io::Error,
    },
    #[error("noise word file not found: {}", path.display())]
    NoiseWordSourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("document list not found: {}", path.display())]
    DocumentListSourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, IndexError>;
