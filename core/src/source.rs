//! Collaborators that feed raw text into the index: document token streams,
//! the document list and the noise word list.

use crate::error::{IndexError, Result};
use crate::tokenizer::NoiseWords;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Lazy stream of whitespace-delimited raw tokens. A read failure is yielded
/// once and ends the stream.
pub type Tokens<'a> = Box<dyn Iterator<Item = Result<String>> + 'a>;

pub trait DocumentSource {
    /// Open `document` and stream its raw tokens.
    fn tokens(&self, document: &str) -> Result<Tokens<'_>>;
}

/// Documents stored as files, resolved relative to `root`.
#[derive(Debug, Clone)]
pub struct FsDocuments {
    pub root: PathBuf,
}

impl FsDocuments {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }

    pub fn path(&self, document: &str) -> PathBuf { self.root.join(document) }
}

impl DocumentSource for FsDocuments {
    fn tokens(&self, document: &str) -> Result<Tokens<'_>> {
        let file = File::open(self.path(document)).map_err(|source| IndexError::DocumentNotFound {
            document: document.to_string(),
            source,
        })?;
        let mut reader = BufReader::new(file);
        let mut buf = Vec::new();
        let mut failed = false;
        // invalid UTF-8 is replaced, not treated as a read error
        let lines = std::iter::from_fn(move || {
            if failed {
                return None;
            }
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => None,
                Ok(_) => Some(Ok(String::from_utf8_lossy(&buf).into_owned())),
                Err(err) => {
                    failed = true;
                    Some(Err(IndexError::Io(err)))
                }
            }
        });
        Ok(Box::new(lines.flat_map(|line| match line {
            Ok(line) => line.split_whitespace().map(|w| Ok(w.to_owned())).collect::<Vec<_>>(),
            Err(err) => vec![Err(err)],
        })))
    }
}

/// Documents held in memory, keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocuments {
    docs: HashMap<String, String>,
}

impl MemoryDocuments {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, document: impl Into<String>, text: impl Into<String>) {
        self.docs.insert(document.into(), text.into());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryDocuments {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut docs = MemoryDocuments::new();
        for (name, text) in iter {
            docs.insert(name, text);
        }
        docs
    }
}

impl DocumentSource for MemoryDocuments {
    fn tokens(&self, document: &str) -> Result<Tokens<'_>> {
        let text = self.docs.get(document).ok_or_else(|| IndexError::DocumentNotFound {
            document: document.to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such document"),
        })?;
        Ok(Box::new(text.split_whitespace().map(|w| Ok(w.to_owned()))))
    }
}

fn read_words(path: &Path) -> io::Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    Ok(text.split_whitespace().map(str::to_owned).collect())
}

/// Document identifiers in file order.
pub fn load_document_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    read_words(path).map_err(|source| IndexError::DocumentListSourceNotFound { path: path.to_path_buf(), source })
}

pub fn load_noise_words<P: AsRef<Path>>(path: P) -> Result<NoiseWords> {
    let path = path.as_ref();
    let words = read_words(path)
        .map_err(|source| IndexError::NoiseWordSourceNotFound { path: path.to_path_buf(), source })?;
    Ok(words.into_iter().collect())
}
