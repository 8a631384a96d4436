use crate::scan::Boundary;
use crate::shift::byte_shift_table;

/// Find the first occurrence of `pattern` in `text` using Horspool.
/// Returns Some(start_index) if found, None otherwise.
///
/// Operates on raw bytes, so every byte is in the alphabet.
pub fn horspool_find(text: &[u8], pattern: &[u8]) -> Option<usize> {
    horspool_find_bounded(text, pattern, Boundary::Inclusive)
}

pub fn horspool_find_bounded(text: &[u8], pattern: &[u8], boundary: Boundary) -> Option<usize> {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        return Some(0);
    }

    let shift = byte_shift_table(pattern);
    let mut start = 0usize;

    while boundary.admits(start, m, n) {
        let last = text[start + m - 1];
        if last == pattern[m - 1] && text[start..start + m - 1] == pattern[..m - 1] {
            return Some(start);
        }
        start += shift[last as usize].max(1);
    }

    None
}

/// Find all (possibly overlapping) occurrences of `pattern` in `text`.
pub fn horspool_find_all(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    horspool_find_all_bounded(text, pattern, Boundary::Inclusive)
}

pub fn horspool_find_all_bounded(text: &[u8], pattern: &[u8], boundary: Boundary) -> Vec<usize> {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        // Convention: match at every index (including at the end)
        return (0..=n).collect();
    }

    let shift = byte_shift_table(pattern);
    let mut res = Vec::new();
    let mut start = 0usize;

    while boundary.admits(start, m, n) {
        let last = text[start + m - 1];
        if last == pattern[m - 1] && text[start..start + m - 1] == pattern[..m - 1] {
            res.push(start);
        }
        // a single-byte pattern has a zero shift for its own byte
        start += shift[last as usize].max(1);
    }

    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horspool_basic() {
        let hay = b"ababcabcabababd";
        let pat = b"ababd";
        assert_eq!(horspool_find(hay, pat), Some(10));
    }

    #[test]
    fn test_horspool_not_found() {
        assert_eq!(horspool_find(b"hello world", b"rust"), None);
        assert_eq!(horspool_find(b"hay", b"haystack"), None);
    }

    #[test]
    fn test_horspool_empty_pattern() {
        let hay = b"abc";
        let pat: &[u8] = b"";
        assert_eq!(horspool_find(hay, pat), Some(0));
        assert_eq!(horspool_find_all(hay, pat), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_horspool_find_all_overlapping() {
        assert_eq!(horspool_find_all(b"aaaa", b"aa"), vec![0, 1, 2]);
        assert_eq!(horspool_find_all(b"aaaa", b"a"), vec![0, 1, 2, 3]);
        assert_eq!(horspool_find_all(b"aabaa", b"aa"), vec![0, 3]);
    }

    #[test]
    fn test_horspool_strict_boundary() {
        assert_eq!(horspool_find_bounded(b"xxba", b"ba", Boundary::Strict), None);
        assert_eq!(horspool_find_bounded(b"xbax", b"ba", Boundary::Strict), Some(1));
        assert_eq!(horspool_find_all_bounded(b"baba", b"ba", Boundary::Strict), vec![0]);
    }

    #[test]
    fn test_horspool_utf8() {
        let hay_s = "🌍hello🌍hello";
        let pat_s = "🌍hello";

        assert_eq!(horspool_find(hay_s.as_bytes(), pat_s.as_bytes()), Some(0));
        assert_eq!(
            horspool_find_all(hay_s.as_bytes(), pat_s.as_bytes()),
            vec![0, pat_s.len()]
        );
    }
}
