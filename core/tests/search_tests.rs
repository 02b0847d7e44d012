use littlesearch_core::{build_index, BuildOptions, Index, IndexError, MemoryDocuments, NoiseWords, Occurrence};
use std::fs;
use tempfile::tempdir;

fn cat_dog_index() -> Index {
    let docs: MemoryDocuments = [("doc1", "The Cat sat."), ("doc2", "Cat cat dog!")].into_iter().collect();
    let noise: NoiseWords = ["is", "the"].into_iter().collect();
    build_index(["doc1", "doc2"], noise, &docs, BuildOptions::default()).unwrap()
}

#[test]
fn cat_or_dog_ranks_doc2_first() {
    let index = cat_dog_index();
    assert_eq!(index.occurrences("cat").unwrap(), &[Occurrence::new("doc2", 2), Occurrence::new("doc1", 1)]);
    assert_eq!(index.search("cat", "dog"), vec!["doc2", "doc1"]);
}

#[test]
fn query_keywords_are_case_insensitive() {
    let index = cat_dog_index();
    assert_eq!(index.search("CAT", "Dog"), vec!["doc2", "doc1"]);
}

#[test]
fn absent_keywords() {
    let index = cat_dog_index();
    assert!(index.search("bird", "fish").is_empty());
    assert_eq!(index.search("bird", "cat"), vec!["doc2", "doc1"]);
    assert_eq!(index.search("dog", "bird"), vec!["doc2"]);
}

#[test]
fn single_keyword_is_capped_at_five() {
    let docs: MemoryDocuments = (1..=8).map(|i| (format!("d{i}"), "word ".repeat(i))).collect();
    let names: Vec<String> = (1..=8).map(|i| format!("d{i}")).collect();
    let index = build_index(&names, NoiseWords::new(), &docs, BuildOptions::default()).unwrap();
    assert_eq!(index.search("word", "missing"), vec!["d8", "d7", "d6", "d5", "d4"]);
}

#[test]
fn builds_from_files_relative_to_the_document_list() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("docs")).unwrap();
    fs::write(dir.path().join("docs/a.txt"), "Deep sea fish. Fish swim!").unwrap();
    fs::write(dir.path().join("docs/b.txt"), "A fish, a bird, a bird.").unwrap();
    fs::write(dir.path().join("list.txt"), "docs/a.txt\ndocs/b.txt\n").unwrap();
    fs::write(dir.path().join("noise.txt"), "a\nthe\n").unwrap();

    let index = Index::from_files(dir.path().join("list.txt"), dir.path().join("noise.txt"), BuildOptions::default()).unwrap();
    assert_eq!(index.search("bird", "fish"), vec!["docs/b.txt", "docs/a.txt"]);
    assert_eq!(index.occurrences("a"), None);
    assert_eq!(index.occurrences("swim").unwrap(), &[Occurrence::new("docs/a.txt", 1)]);
}

#[test]
fn missing_list_files_are_reported() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("noise.txt"), "the\n").unwrap();
    let err = Index::from_files(dir.path().join("nope.txt"), dir.path().join("noise.txt"), BuildOptions::default()).unwrap_err();
    assert!(matches!(err, IndexError::DocumentListSourceNotFound { .. }));

    fs::write(dir.path().join("list.txt"), "").unwrap();
    let err = Index::from_files(dir.path().join("list.txt"), dir.path().join("nope.txt"), BuildOptions::default()).unwrap_err();
    assert!(matches!(err, IndexError::NoiseWordSourceNotFound { .. }));
}
