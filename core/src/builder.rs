use crate::error::{IndexError, Result};
use crate::index::{DocumentKeywordCounts, Index, Occurrence};
use crate::ranking::insert_last_occurrence;
use crate::source::{load_document_list, load_noise_words, DocumentSource, FsDocuments};
use crate::tokenizer::NoiseWords;
use std::collections::hash_map::Entry;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    /// Skip documents that cannot be opened instead of failing the build.
    pub skip_missing: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub documents: usize,
    pub skipped: usize,
    pub keywords: usize,
}

impl Index {
    /// Count the keywords of one document.
    pub fn count_keywords<S>(&self, document: &str, source: &S) -> Result<DocumentKeywordCounts>
    where
        S: DocumentSource + ?Sized,
    {
        if document.trim().is_empty() {
            return Err(IndexError::MissingDocumentIdentifier);
        }
        let mut counts = DocumentKeywordCounts::new();
        for word in source.tokens(document)? {
            let Some(kw) = self.keyword(&word?) else { continue };
            counts
                .entry(kw)
                .and_modify(Occurrence::increment)
                .or_insert_with(|| Occurrence::new(document, 1));
        }
        Ok(counts)
    }

    /// Merge one document's counts, keeping every occurrence list ranked.
    pub fn merge_keywords(&mut self, counts: DocumentKeywordCounts) {
        for (kw, occ) in counts {
            match self.keywords.entry(kw) {
                Entry::Occupied(mut e) => {
                    let occs = e.get_mut();
                    occs.push(occ);
                    insert_last_occurrence(occs);
                }
                Entry::Vacant(e) => {
                    e.insert(vec![occ]);
                }
            }
        }
    }

    /// Index every document listed in `docs_file`, resolving document paths
    /// relative to the list's directory.
    pub fn from_files<P, Q>(docs_file: P, noise_file: Q, options: BuildOptions) -> Result<Index>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let noise_words = load_noise_words(noise_file)?;
        let docs_file = docs_file.as_ref();
        let documents = load_document_list(docs_file)?;
        let source = FsDocuments::new(docs_file.parent().unwrap_or_else(|| Path::new(".")));
        build_index(documents, noise_words, &source, options)
    }
}

pub fn build_index<I, S>(documents: I, noise_words: NoiseWords, source: &S, options: BuildOptions) -> Result<Index>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    S: DocumentSource + ?Sized,
{
    build_index_with_stats(documents, noise_words, source, options).map(|(index, _)| index)
}

/// Build an index from `documents` in the given order.
pub fn build_index_with_stats<I, S>(
    documents: I,
    noise_words: NoiseWords,
    source: &S,
    options: BuildOptions,
) -> Result<(Index, BuildStats)>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    S: DocumentSource + ?Sized,
{
    let mut index = Index::new(noise_words);
    let mut stats = BuildStats::default();
    for document in documents {
        let document = document.as_ref();
        let counts = match index.count_keywords(document, source) {
            Ok(counts) => counts,
            Err(IndexError::DocumentNotFound { document, source: err }) if options.skip_missing => {
                tracing::warn!(%document, error = %err, "skipping missing document");
                stats.skipped += 1;
                continue;
            }
            Err(err) => return Err(err),
        };
        tracing::debug!(document, keywords = counts.len(), "merging document");
        index.merge_keywords(counts);
        stats.documents += 1;
    }
    stats.keywords = index.len();
    tracing::info!(
        documents = stats.documents,
        skipped = stats.skipped,
        keywords = stats.keywords,
        "index built"
    );
    Ok((index, stats))
}
