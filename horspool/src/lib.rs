mod alphabet;
mod error;
mod find;
mod scan;
mod shift;
mod trace;

pub trait StringSearch {
    type Config;
    type State;

    fn build(config: Self::Config) -> Self::State;
    fn find_bytes(state: &Self::State, text: &[u8], pattern: &[u8]) -> Option<usize>;
    fn find_all_bytes(state: &Self::State, text: &[u8], pattern: &[u8]) -> Vec<usize>;
    fn find(state: &Self::State, text: &str, pattern: &str) -> Option<usize> {
        Self::find_bytes(state, text.as_bytes(), pattern.as_bytes())
    }
    fn find_all(state: &Self::State, text: &str, pattern: &str) -> Vec<usize> {
        Self::find_all_bytes(state, text.as_bytes(), pattern.as_bytes())
    }
}

/// Untraced Horspool over bytes.
pub struct Horspool;

impl StringSearch for Horspool {
    type Config = ScanConfig;
    type State = ScanConfig;

    fn build(config: Self::Config) -> Self::State {
        config
    }

    fn find_bytes(state: &Self::State, text: &[u8], pattern: &[u8]) -> Option<usize> {
        horspool_find_bounded(text, pattern, state.boundary)
    }

    fn find_all_bytes(state: &Self::State, text: &[u8], pattern: &[u8]) -> Vec<usize> {
        horspool_find_all_bounded(text, pattern, state.boundary)
    }
}

pub use alphabet::{Alphabet, Symbol};
pub use error::{Error, Input, Result};
pub use find::{horspool_find, horspool_find_all, horspool_find_all_bounded, horspool_find_bounded};
pub use scan::{Boundary, ScanConfig, Scanner, scan};
pub use shift::{ShiftTable, build_shift_table, byte_shift_table};
pub use trace::{MatchOutcome, ScanStep, StepOutcome, Trace};
