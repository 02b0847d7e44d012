use crate::index::Occurrence;
use std::cmp::Ordering;

/// Move the last occurrence of `occs` into place, keeping frequencies
/// non-increasing. Elements `0..n-1` must already be ordered.
///
/// Returns the midpoints probed by the binary search, in visiting order. The
/// search stops at the first probe with an equal frequency; the occurrence is
/// then placed after every existing occurrence of that frequency.
pub fn insert_last_occurrence(occs: &mut [Occurrence]) -> Vec<usize> {
    let mut probes = Vec::new();
    let Some(target) = occs.last().map(|o| o.frequency) else {
        return probes;
    };
    let prefix = occs.len() - 1;

    let mut low: isize = 0;
    let mut high: isize = prefix as isize - 1;
    let mut matched = None;
    while low <= high {
        let mid = (low + high) / 2;
        probes.push(mid as usize);
        match occs[mid as usize].frequency.cmp(&target) {
            Ordering::Less => high = mid - 1,
            Ordering::Greater => low = mid + 1,
            Ordering::Equal => {
                matched = Some(mid as usize);
                break;
            }
        }
    }

    let mut at = matched.unwrap_or(low as usize);
    at += occs[at..prefix].iter().take_while(|o| o.frequency == target).count();
    occs[at..].rotate_right(1);
    probes
}
