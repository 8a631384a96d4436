use std::collections::HashMap;

use crate::alphabet::{Alphabet, Symbol};
use crate::error::{Error, Input, Result};

/// Skip distances keyed by symbol, built once per pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftTable<S: Symbol> {
    order: Vec<S>,
    shifts: HashMap<S, usize>,
    pattern: Vec<S>,
}

impl<S: Symbol> ShiftTable<S> {
    /// Build the table for `pattern` over every symbol of `alphabet`.
    ///
    /// A symbol missing from the pattern shifts by the full pattern length.
    /// Otherwise it shifts by the distance from its rightmost occurrence in
    /// `pattern[..len - 1]` to the last position. A symbol that only occurs
    /// as the last character shifts by `len - 1`.
    pub fn build(pattern: &[S], alphabet: &Alphabet<S>) -> Result<Self> {
        if pattern.is_empty() {
            return Err(Error::InvalidPattern);
        }
        if let Some((pos, sym)) = pattern
            .iter()
            .enumerate()
            .find(|(_, sym)| !alphabet.contains(sym))
        {
            return Err(Error::missing_symbol(Input::Pattern, sym, pos));
        }

        let m = pattern.len();
        let mut shifts: HashMap<S, usize> =
            alphabet.symbols().iter().map(|&sym| (sym, m)).collect();

        // later occurrences overwrite earlier ones
        for (j, sym) in pattern[..m - 1].iter().enumerate() {
            shifts.insert(*sym, m - 1 - j);
        }

        let last = pattern[m - 1];
        if !pattern[..m - 1].contains(&last) {
            shifts.insert(last, m - 1);
        }

        log::trace!("shift table for pattern of length {m}: {shifts:?}");

        Ok(Self {
            order: alphabet.symbols().to_vec(),
            shifts,
            pattern: pattern.to_vec(),
        })
    }

    pub fn get(&self, symbol: &S) -> Option<usize> {
        self.shifts.get(symbol).copied()
    }

    pub fn contains(&self, symbol: &S) -> bool {
        self.shifts.contains_key(symbol)
    }

    /// The pattern this table was built from.
    pub fn pattern(&self) -> &[S] {
        &self.pattern
    }

    /// Entries in alphabet order.
    pub fn iter(&self) -> impl Iterator<Item = (S, usize)> + '_ {
        self.order.iter().map(|sym| (*sym, self.shifts[sym]))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl ShiftTable<char> {
    pub fn for_str(pattern: &str, alphabet: &Alphabet<char>) -> Result<Self> {
        let pattern: Vec<char> = pattern.chars().collect();
        Self::build(&pattern, alphabet)
    }
}

/// Validate `alphabet` and build the shift table for `pattern` over it.
pub fn build_shift_table<S: Symbol>(pattern: &[S], alphabet: &[S]) -> Result<ShiftTable<S>> {
    let alphabet = Alphabet::new(alphabet.iter().copied())?;
    ShiftTable::build(pattern, &alphabet)
}

/// Same rules as [`ShiftTable::build`] over all 256 byte values.
/// The pattern must not be empty.
pub fn byte_shift_table(pattern: &[u8]) -> [usize; 256] {
    let m = pattern.len();
    let mut table = [m; 256];
    if m == 0 {
        return table;
    }

    for (j, &b) in pattern[..m - 1].iter().enumerate() {
        table[b as usize] = m - 1 - j;
    }

    let last = pattern[m - 1];
    if !pattern[..m - 1].contains(&last) {
        table[last as usize] = m - 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_shift_ba() {
        let table = ShiftTable::for_str("BA", &Alphabet::space_upper()).unwrap();
        assert_eq!(table.get(&'B'), Some(1));
        assert_eq!(table.get(&'A'), Some(1));
        assert_eq!(table.get(&'D'), Some(2));
        assert_eq!(table.get(&' '), Some(2));
        assert_eq!(table.get(&'_'), None);
        assert_eq!(table.len(), 27);
    }

    #[test]
    fn test_shift_needle() {
        let table = ShiftTable::for_str("NEEDLE", &Alphabet::underscore_upper()).unwrap();
        assert_eq!(table.get(&'N'), Some(5));
        assert_eq!(table.get(&'E'), Some(3));
        assert_eq!(table.get(&'D'), Some(2));
        assert_eq!(table.get(&'L'), Some(1));
        assert_eq!(table.get(&'_'), Some(6));
        assert_eq!(table.get(&'Z'), Some(6));
    }

    #[test]
    fn test_shift_last_only() {
        // 'N' only occurs as the last character
        let table = ShiftTable::for_str("BAN", &Alphabet::space_upper()).unwrap();
        assert_eq!(table.get(&'N'), Some(2));
        assert_eq!(table.get(&'A'), Some(1));
        assert_eq!(table.get(&'B'), Some(2));
        assert_eq!(table.get(&'C'), Some(3));

        let table = ShiftTable::for_str("A", &Alphabet::space_upper()).unwrap();
        assert_eq!(table.get(&'A'), Some(0));
        assert_eq!(table.get(&'B'), Some(1));
    }

    #[test]
    fn test_shift_iter_order() {
        let alphabet = Alphabet::from_chars("CBA").unwrap();
        let table = ShiftTable::for_str("AB", &alphabet).unwrap();
        let entries: Vec<_> = table.iter().collect();
        assert_eq!(entries, vec![('C', 2), ('B', 1), ('A', 1)]);
        assert_eq!(table.pattern(), &['A', 'B']);
    }

    #[test]
    fn test_shift_deterministic() {
        let alphabet = Alphabet::space_upper();
        let a = ShiftTable::for_str("BAAAAAA", &alphabet).unwrap();
        let b = ShiftTable::for_str("BAAAAAA", &alphabet).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.iter().collect::<Vec<_>>(), b.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_shift_errors() {
        let alphabet = Alphabet::space_upper();
        assert_eq!(
            ShiftTable::build(&[], &alphabet).unwrap_err(),
            Error::InvalidPattern
        );
        assert_eq!(
            ShiftTable::for_str("BaN", &alphabet).unwrap_err(),
            Error::SymbolNotInAlphabet {
                input: Input::Pattern,
                symbol: "'a'".into(),
                position: 1,
            }
        );
        assert!(matches!(
            build_shift_table(&chars("AB"), &chars("ABA")),
            Err(Error::InvalidAlphabet { first: 0, second: 2, .. })
        ));
    }

    #[test]
    fn test_byte_table_matches_generic() {
        let all: Vec<u8> = (0..=255).collect();
        for pattern in [&b"BA"[..], b"NEEDLE", b"BAAAAAA", b"X", b"ABAB"] {
            let generic = build_shift_table(pattern, &all).unwrap();
            let bytes = byte_shift_table(pattern);
            for b in 0..=255u8 {
                assert_eq!(generic.get(&b), Some(bytes[b as usize]), "byte {b}");
            }
        }
    }
}
