use anyhow::Result;
use axum::{extract::{Path, Query, State}, http::{HeaderMap, StatusCode}, routing::{get, post}, Json, Router};
use littlesearch_core::source::{load_document_list, load_noise_words};
use littlesearch_core::{build_index_with_stats, BuildOptions, BuildStats, FsDocuments, Index, NoiseWords, Occurrence};
use parking_lot::RwLock;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::path::{Path as FsPath, PathBuf};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Where the index is built from and who may rebuild it.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Document list, one path per line relative to the list's directory.
    pub docs: PathBuf,
    /// Noise word file; the built-in English list is used when absent.
    pub noise: Option<PathBuf>,
    pub skip_missing: bool,
    pub admin_token: Option<String>,
    pub cors_origins: Vec<String>,
}

impl Settings {
    fn root(&self) -> PathBuf {
        self.docs.parent().unwrap_or_else(|| FsPath::new(".")).to_path_buf()
    }
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub kw1: String,
    #[serde(default)]
    pub kw2: String,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub kw1: String,
    pub kw2: String,
    pub took_ms: u128,
    pub took_s: f64,
    pub total_hits: usize,
    pub results: Vec<SearchHit>,
}

#[derive(Serialize)]
pub struct SearchHit {
    pub document: String,
    pub frequency: u32,
    pub snippet: Option<String>,
}

#[derive(Serialize)]
pub struct KeywordResponse {
    pub keyword: String,
    pub occurrences: Vec<Occurrence>,
}

#[derive(Serialize)]
pub struct RebuildResponse {
    pub documents: usize,
    pub skipped: usize,
    pub keywords: usize,
}

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub index: Arc<RwLock<Arc<Index>>>,
}

impl AppState {
    fn current(&self) -> Arc<Index> { self.index.read().clone() }
}

pub fn load_index(settings: &Settings) -> Result<(Index, BuildStats)> {
    let noise_words = match &settings.noise {
        Some(path) => load_noise_words(path)?,
        None => NoiseWords::english(),
    };
    let documents = load_document_list(&settings.docs)?;
    let source = FsDocuments::new(settings.root());
    let options = BuildOptions { skip_missing: settings.skip_missing };
    Ok(build_index_with_stats(documents, noise_words, &source, options)?)
}

pub fn build_app(settings: Settings) -> Result<Router> {
    // Build the index at startup
    let (index, stats) = load_index(&settings)?;
    tracing::info!(documents = stats.documents, keywords = stats.keywords, "index ready");

    let origins: Vec<_> = settings.cors_origins.iter().filter_map(|s| s.trim().parse().ok()).collect();
    let cors = if origins.is_empty() {
        CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
    } else {
        CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
    };

    let app_state = AppState { settings: Arc::new(settings), index: Arc::new(RwLock::new(Arc::new(index))) };
    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/search", get(search_handler))
        .route("/keyword/:word", get(keyword_handler))
        .route("/index/rebuild", post(rebuild_handler))
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());
    Ok(app)
}

pub async fn search_handler(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Json<SearchResponse> {
    let start = std::time::Instant::now();
    let index = state.current();
    let kw1 = params.kw1.to_lowercase();
    let kw2 = params.kw2.to_lowercase();
    let documents = index.search(&kw1, &kw2);

    let pattern = match_pattern(&[kw1.as_str(), kw2.as_str()]);
    let root = state.settings.root();
    let results: Vec<SearchHit> = documents
        .into_iter()
        .map(|document| {
            let frequency = frequency_of(&index, &document, &[kw1.as_str(), kw2.as_str()]);
            let snippet = pattern.as_ref().and_then(|re| snippet_from_file(&root.join(&document), re));
            SearchHit { document, frequency, snippet }
        })
        .collect();

    let elapsed = start.elapsed();
    Json(SearchResponse {
        kw1: params.kw1,
        kw2: params.kw2,
        took_ms: elapsed.as_millis(),
        took_s: elapsed.as_secs_f64(),
        total_hits: results.len(),
        results,
    })
}

pub async fn keyword_handler(State(state): State<AppState>, Path(word): Path<String>) -> Result<Json<KeywordResponse>, (StatusCode, String)> {
    let keyword = word.to_lowercase();
    let index = state.current();
    match index.occurrences(&keyword) {
        Some(occs) => Ok(Json(KeywordResponse { keyword, occurrences: occs.to_vec() })),
        None => Err((StatusCode::NOT_FOUND, format!("keyword {keyword:?} is not indexed"))),
    }
}

async fn rebuild_handler(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<RebuildResponse>, (StatusCode, String)> {
    authorize(&state, &headers)?;
    let settings = state.settings.clone();
    let built = tokio::task::spawn_blocking(move || load_index(&settings))
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    let (index, stats) = built.map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, format!("{e:#}")))?;
    *state.index.write() = Arc::new(index);
    tracing::info!(documents = stats.documents, keywords = stats.keywords, "index rebuilt");
    Ok(Json(RebuildResponse { documents: stats.documents, skipped: stats.skipped, keywords: stats.keywords }))
}

fn authorize(state: &AppState, headers: &HeaderMap) -> Result<(), (StatusCode, String)> {
    let required = match &state.settings.admin_token {
        Some(t) => t,
        None => return Err((StatusCode::UNAUTHORIZED, "ADMIN_TOKEN not set".into())),
    };
    let provided = headers.get("X-ADMIN-TOKEN").and_then(|v| v.to_str().ok()).unwrap_or("");
    if provided == required {
        Ok(())
    } else {
        Err((StatusCode::UNAUTHORIZED, "invalid admin token".into()))
    }
}

/// Highest frequency of `document` under any of `keywords`.
fn frequency_of(index: &Index, document: &str, keywords: &[&str]) -> u32 {
    keywords
        .iter()
        .filter_map(|kw| index.occurrences(kw))
        .flat_map(|occs| occs.iter())
        .filter(|occ| occ.document == document)
        .map(|occ| occ.frequency)
        .max()
        .unwrap_or(0)
}

/// Case-insensitive whole-word matcher for the non-empty keywords.
fn match_pattern(keywords: &[&str]) -> Option<Regex> {
    let alternatives: Vec<String> = keywords.iter().filter(|k| !k.trim().is_empty()).map(|k| regex::escape(k)).collect();
    if alternatives.is_empty() {
        return None;
    }
    RegexBuilder::new(&format!(r"\b(?:{})\b", alternatives.join("|")))
        .case_insensitive(true)
        .build()
        .ok()
}

fn snippet_from_file(path: &FsPath, pattern: &Regex) -> Option<String> {
    let text = std::fs::read_to_string(path).ok()?;
    if text.is_empty() { return None; }
    let (start, end) = match pattern.find(&text) {
        Some(m) => (m.start().saturating_sub(100), (m.start() + 200).min(text.len())),
        None => (0, text.len().min(200)),
    };
    let snippet = &text[char_floor(&text, start)..char_floor(&text, end)];
    Some(pattern.replace_all(snippet, |caps: &regex::Captures| format!("<em>{}</em>", &caps[0])).into_owned())
}

fn char_floor(text: &str, mut idx: usize) -> usize {
    while !text.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snippet_highlights_both_keywords() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        std::fs::write(&path, "A Cat and a dog. Concatenate nothing.").unwrap();
        let re = match_pattern(&["cat", "dog"]).unwrap();
        let snippet = snippet_from_file(&path, &re).unwrap();
        assert_eq!(snippet, "A <em>Cat</em> and a <em>dog</em>. Concatenate nothing.");
    }

    #[test]
    fn empty_keywords_have_no_pattern() {
        assert!(match_pattern(&["", "  "]).is_none());
    }

    #[test]
    fn char_floor_stays_on_boundaries() {
        let text = "héllo";
        assert_eq!(char_floor(text, 2), 1);
        assert_eq!(char_floor(text, 3), 3);
    }
}
