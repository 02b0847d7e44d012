use crate::index::{Index, Occurrence};
use std::collections::HashSet;

/// Maximum number of documents returned by [`Index::search`].
pub const TOP_RESULTS: usize = 5;

#[derive(Default)]
struct TopDocuments<'a> {
    order: Vec<&'a str>,
    seen: HashSet<&'a str>,
}

impl<'a> TopDocuments<'a> {
    fn is_full(&self) -> bool { self.order.len() >= TOP_RESULTS }

    fn contains(&self, document: &str) -> bool { self.seen.contains(document) }

    /// Add `document` unless it is already present.
    fn offer(&mut self, document: &'a str) {
        if self.seen.insert(document) {
            self.order.push(document);
        }
    }

    fn into_vec(self) -> Vec<String> { self.order.into_iter().map(str::to_owned).collect() }
}

impl Index {
    /// Documents containing `kw1` or `kw2`, highest frequency first, at most
    /// [`TOP_RESULTS`] of them. Ties favor `kw1`. Empty when neither keyword
    /// is indexed.
    pub fn search(&self, kw1: &str, kw2: &str) -> Vec<String> {
        let first = self.occurrences(&kw1.to_lowercase()).unwrap_or(&[]);
        let second = self.occurrences(&kw2.to_lowercase()).unwrap_or(&[]);
        merge_ranked(first, second)
    }
}

/// Walk two ranked lists at once. An exhausted list drops out of the
/// comparison and the other is drained in order.
fn merge_ranked(first: &[Occurrence], second: &[Occurrence]) -> Vec<String> {
    let mut top = TopDocuments::default();
    let (mut i, mut j) = (0, 0);
    while (i < first.len() || j < second.len()) && !top.is_full() {
        match (first.get(i), second.get(j)) {
            (Some(a), Some(b)) => {
                if a.frequency > b.frequency && !top.contains(&a.document) {
                    top.offer(&a.document);
                    i += 1;
                } else if a.frequency < b.frequency && !top.contains(&b.document) {
                    top.offer(&b.document);
                    j += 1;
                } else {
                    top.offer(&a.document);
                    i += 1;
                    if !top.is_full() {
                        top.offer(&b.document);
                        j += 1;
                    }
                }
            }
            (Some(a), None) => {
                top.offer(&a.document);
                i += 1;
            }
            (None, Some(b)) => {
                top.offer(&b.document);
                j += 1;
            }
            (None, None) => break,
        }
    }
    top.into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(entries: &[(&str, u32)]) -> Vec<Occurrence> {
        entries.iter().map(|&(d, f)| Occurrence::new(d, f)).collect()
    }

    #[test]
    fn higher_frequency_wins() {
        let a = ranked(&[("a1", 9), ("a2", 3)]);
        let b = ranked(&[("b1", 5), ("b2", 4)]);
        assert_eq!(merge_ranked(&a, &b), vec!["a1", "b1", "b2", "a2"]);
    }

    #[test]
    fn ties_favor_first_keyword() {
        let a = ranked(&[("a1", 2)]);
        let b = ranked(&[("b1", 2)]);
        assert_eq!(merge_ranked(&a, &b), vec!["a1", "b1"]);
        assert_eq!(merge_ranked(&b, &a), vec!["b1", "a1"]);
    }

    #[test]
    fn shared_document_appears_once() {
        let a = ranked(&[("x", 4), ("y", 2)]);
        let b = ranked(&[("x", 4), ("z", 1)]);
        assert_eq!(merge_ranked(&a, &b), vec!["x", "y", "z"]);
    }

    #[test]
    fn duplicate_on_higher_side_falls_through() {
        // "x" already taken from b, so w is offered before the higher x2
        let a = ranked(&[("x", 5), ("x2", 4), ("y", 3)]);
        let b = ranked(&[("x", 6), ("w", 1)]);
        assert_eq!(merge_ranked(&b, &a), vec!["x", "w", "x2", "y"]);
    }

    #[test]
    fn exhausted_list_drains_the_other() {
        let a = ranked(&[("a1", 1)]);
        let b = ranked(&[("b1", 9), ("b2", 8), ("b3", 7)]);
        assert_eq!(merge_ranked(&a, &b), vec!["b1", "b2", "b3", "a1"]);
    }

    #[test]
    fn caps_at_five() {
        let a = ranked(&[("a1", 9), ("a2", 7), ("a3", 5), ("a4", 3)]);
        let b = ranked(&[("b1", 8), ("b2", 6), ("b3", 4)]);
        assert_eq!(merge_ranked(&a, &b), vec!["a1", "b1", "a2", "b2", "a3"]);
    }

    #[test]
    fn tie_at_the_cap_keeps_first_keyword() {
        let a = ranked(&[("a1", 5), ("a2", 4), ("a3", 3), ("a4", 2), ("a5", 1)]);
        let b = ranked(&[("b1", 1)]);
        assert_eq!(merge_ranked(&a, &b), vec!["a1", "a2", "a3", "a4", "a5"]);
    }

    #[test]
    fn single_list_keeps_order() {
        let b = ranked(&[("b1", 3), ("b2", 2), ("b3", 1)]);
        assert_eq!(merge_ranked(&[], &b), vec!["b1", "b2", "b3"]);
        assert!(merge_ranked(&[], &[]).is_empty());
    }
}
