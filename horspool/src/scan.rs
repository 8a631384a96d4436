use crate::alphabet::Symbol;
use crate::error::{Error, Input, Result};
use crate::shift::ShiftTable;
use crate::trace::{MatchOutcome, ScanStep, StepOutcome, Trace};

/// How far right the pattern may be aligned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Boundary {
    /// Alignments with `start + len(pattern) <= len(text)`.
    #[default]
    Inclusive,
    /// Alignments with `start + len(pattern) < len(text)`. The last
    /// alignment is never tried, so a match ending on the final symbol of
    /// the text goes unreported.
    Strict,
}

impl Boundary {
    #[inline]
    pub fn admits(self, start: usize, pattern_len: usize, text_len: usize) -> bool {
        let end = start + pattern_len;
        match self {
            Boundary::Inclusive => end <= text_len,
            Boundary::Strict => end < text_len,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanConfig {
    pub boundary: Boundary,
}

impl ScanConfig {
    pub fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Scanner {
    config: ScanConfig,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> ScanConfig {
        self.config
    }

    /// Search `text` for `pattern`, recording every comparison.
    ///
    /// Inputs are validated before the first step is recorded, so an error
    /// never comes with a partial trace.
    pub fn scan<S: Symbol>(
        &self,
        text: &[S],
        pattern: &[S],
        table: &ShiftTable<S>,
    ) -> Result<(MatchOutcome, Trace)> {
        validate(text, pattern, table)?;

        let n = text.len();
        let m = pattern.len();
        let mut trace = Trace::with_capacity(m + 1);

        let mut start = 0usize; // alignment of pattern[0] in text
        let mut i = (m - 1) as isize;

        while self.config.boundary.admits(start, m, n) {
            i = (m - 1) as isize;

            while i >= 0 && pattern[i as usize] == text[start + i as usize] {
                trace.push(ScanStep::new(start, i, StepOutcome::Pending));
                i -= 1;
            }

            if i < 0 {
                trace.push(ScanStep::new(start, -1, StepOutcome::Match));
                log::debug!("match at {start} after {} steps", trace.len());
                return Ok((MatchOutcome::Found { index: start }, trace));
            }

            trace.push(ScanStep::new(start, i, StepOutcome::Mismatch));

            // always keyed by the window's last symbol, not the mismatching one
            let last = &text[start + m - 1];
            let shift = table
                .get(last)
                .ok_or_else(|| Error::missing_symbol(Input::Text, last, start + m - 1))?;
            log::debug!(
                "mismatch at start={start} i={i}: {:?} != {:?}, shift for {last:?} = {shift}",
                text[start + i as usize],
                pattern[i as usize],
            );
            debug_assert!(shift > 0, "zero shift after a mismatch");
            start += shift;
        }

        trace.push(ScanStep::new(start, i, StepOutcome::NotFound));
        log::debug!("no match, stopped at start={start} after {} steps", trace.len());
        Ok((MatchOutcome::NotFound, trace))
    }

    pub fn scan_str(
        &self,
        text: &str,
        pattern: &str,
        table: &ShiftTable<char>,
    ) -> Result<(MatchOutcome, Trace)> {
        let text: Vec<char> = text.chars().collect();
        let pattern: Vec<char> = pattern.chars().collect();
        self.scan(&text, &pattern, table)
    }
}

/// [`Scanner::scan`] with the default configuration.
pub fn scan<S: Symbol>(
    text: &[S],
    pattern: &[S],
    table: &ShiftTable<S>,
) -> Result<(MatchOutcome, Trace)> {
    Scanner::default().scan(text, pattern, table)
}

fn validate<S: Symbol>(text: &[S], pattern: &[S], table: &ShiftTable<S>) -> Result<()> {
    if pattern.is_empty() {
        return Err(Error::InvalidPattern);
    }
    if let Some((pos, sym)) = pattern.iter().enumerate().find(|(_, s)| !table.contains(s)) {
        return Err(Error::missing_symbol(Input::Pattern, sym, pos));
    }
    if table.pattern() != pattern {
        return Err(Error::TableMismatch {
            expected_len: table.pattern().len(),
            actual_len: pattern.len(),
        });
    }
    if let Some((pos, sym)) = text.iter().enumerate().find(|(_, s)| !table.contains(s)) {
        return Err(Error::missing_symbol(Input::Text, sym, pos));
    }
    Ok(())
}
