use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use littlesearch_core::source::{load_document_list, load_noise_words};
use littlesearch_core::{build_index_with_stats, BuildOptions, FsDocuments, Index, NoiseWords, Occurrence};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};
use walkdir::WalkDir;

use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "indexer")]
#[command(about = "Build a keyword index over text documents and query it", long_about = None)]
struct Cli {
    #[command(flatten)]
    input: InputArgs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct InputArgs {
    /// File listing one document path per line, relative to the file's directory
    #[arg(long, conflicts_with = "input_dir", required_unless_present = "input_dir")]
    docs: Option<PathBuf>,
    /// Index every .txt file under this directory instead of a document list
    #[arg(long)]
    input_dir: Option<PathBuf>,
    /// Noise word file, one word per line (defaults to a built-in English list)
    #[arg(long)]
    noise: Option<PathBuf>,
    /// Skip documents that cannot be opened
    #[arg(long, default_value_t = false)]
    skip_missing: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Top documents containing either keyword
    Search { kw1: String, kw2: String },
    /// Print index statistics
    Stats,
    /// Print a keyword's ranked occurrences as JSON
    Show { keyword: String },
}

#[derive(Serialize)]
struct KeywordDump<'a> {
    keyword: &'a str,
    occurrences: &'a [Occurrence],
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();
    let index = load_index(&cli.input)?;

    match cli.command {
        Commands::Search { kw1, kw2 } => {
            let hits = index.search(&kw1, &kw2);
            if hits.is_empty() {
                println!("no documents match {kw1:?} or {kw2:?}");
            }
            for (rank, doc) in hits.iter().enumerate() {
                println!("{}. {}", rank + 1, doc);
            }
        }
        Commands::Stats => {
            let occurrences: usize = index.keywords().map(|(_, occs)| occs.len()).sum();
            println!("keywords:    {}", index.len());
            println!("occurrences: {}", occurrences);
            println!("noise words: {}", index.noise_words().len());
        }
        Commands::Show { keyword } => {
            let keyword = keyword.to_lowercase();
            let Some(occurrences) = index.occurrences(&keyword) else {
                bail!("keyword {keyword:?} is not indexed");
            };
            let dump = KeywordDump { keyword: &keyword, occurrences };
            println!("{}", serde_json::to_string_pretty(&dump)?);
        }
    }
    Ok(())
}

fn load_index(input: &InputArgs) -> Result<Index> {
    let noise_words = match &input.noise {
        Some(path) => load_noise_words(path)?,
        None => NoiseWords::english(),
    };
    let options = BuildOptions { skip_missing: input.skip_missing };

    let (root, documents) = match (&input.docs, &input.input_dir) {
        (Some(list), _) => {
            let root = list.parent().unwrap_or_else(|| Path::new(".")).to_path_buf();
            (root, load_document_list(list)?)
        }
        (None, Some(dir)) => (dir.clone(), collect_documents(dir)?),
        (None, None) => bail!("either --docs or --input-dir is required"),
    };

    let source = FsDocuments::new(&root);
    let (index, stats) = build_index_with_stats(documents, noise_words, &source, options)?;
    tracing::info!(root = %root.display(), documents = stats.documents, skipped = stats.skipped, "loaded index");
    Ok(index)
}

/// Relative paths of all .txt files under `dir`, sorted so ties rank the same on every run.
fn collect_documents(dir: &Path) -> Result<Vec<String>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
        let p = entry.path();
        if !p.is_file() || p.extension().and_then(|s| s.to_str()) != Some("txt") {
            continue;
        }
        if let Ok(rel) = p.strip_prefix(dir) {
            files.push(rel.to_string_lossy().into_owned());
        }
    }
    if files.is_empty() {
        bail!("no .txt documents under {}", dir.display());
    }
    Ok(files)
}
