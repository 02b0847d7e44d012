//! Keyword index over a fixed document collection with two-keyword top-5 search.

pub mod builder;
pub mod error;
pub mod index;
pub mod query;
pub mod ranking;
pub mod source;
pub mod tokenizer;

pub use builder::{build_index, build_index_with_stats, BuildOptions, BuildStats};
pub use error::{IndexError, Result};
pub use index::{DocumentKeywordCounts, Index, Occurrence};
pub use query::TOP_RESULTS;
pub use source::{DocumentSource, FsDocuments, MemoryDocuments};
pub use tokenizer::NoiseWords;
