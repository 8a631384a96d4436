use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{Error, Result};

/// Anything that can be searched for: a `char`, a byte, a token id.
pub trait Symbol: Copy + Eq + Hash + Debug {}

impl<T: Copy + Eq + Hash + Debug> Symbol for T {}

const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// An ordered set of distinct symbols that a shift table is indexed over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet<S: Symbol> {
    symbols: Vec<S>,
}

impl<S: Symbol> Alphabet<S> {
    /// Fails with [`Error::InvalidAlphabet`] on the first repeated symbol.
    pub fn new(symbols: impl IntoIterator<Item = S>) -> Result<Self> {
        let symbols: Vec<S> = symbols.into_iter().collect();
        let mut seen: HashMap<S, usize> = HashMap::with_capacity(symbols.len());

        for (pos, &sym) in symbols.iter().enumerate() {
            if let Some(&first) = seen.get(&sym) {
                return Err(Error::InvalidAlphabet {
                    symbol: format!("{sym:?}"),
                    first,
                    second: pos,
                });
            }
            seen.insert(sym, pos);
        }

        Ok(Self { symbols })
    }

    pub fn symbols(&self) -> &[S] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn contains(&self, symbol: &S) -> bool {
        self.symbols.contains(symbol)
    }
}

impl Alphabet<char> {
    pub fn from_chars(chars: &str) -> Result<Self> {
        Self::new(chars.chars())
    }

    /// Blank followed by `A`..=`Z`.
    pub fn space_upper() -> Self {
        Self {
            symbols: std::iter::once(' ').chain(UPPER.chars()).collect(),
        }
    }

    /// Underscore followed by `A`..=`Z`.
    pub fn underscore_upper() -> Self {
        Self {
            symbols: std::iter::once('_').chain(UPPER.chars()).collect(),
        }
    }
}
