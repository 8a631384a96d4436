use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Which input a symbol was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Text,
    Pattern,
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Text => f.write_str("text"),
            Input::Pattern => f.write_str("pattern"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("pattern must not be empty")]
    InvalidPattern,

    #[error("alphabet lists {symbol} twice (positions {first} and {second})")]
    InvalidAlphabet {
        symbol: String,
        first: usize,
        second: usize,
    },

    #[error("{input} symbol {symbol} at position {position} is not in the alphabet")]
    SymbolNotInAlphabet {
        input: Input,
        symbol: String,
        position: usize,
    },

    #[error("shift table was built for a different pattern (table length {expected_len}, pattern length {actual_len})")]
    TableMismatch {
        expected_len: usize,
        actual_len: usize,
    },
}

impl Error {
    pub(crate) fn missing_symbol<S: fmt::Debug>(input: Input, symbol: &S, position: usize) -> Self {
        Error::SymbolNotInAlphabet {
            input,
            symbol: format!("{symbol:?}"),
            position,
        }
    }
}
