use std::time::{Duration, Instant};

use horspool::{Alphabet, Horspool, ScanConfig, Scanner, ShiftTable, StringSearch};

const REPEATS: usize = 5;

const TEXTS: &[(&str, &str, usize)] = &[
    ("bananas", "BARD LOVED BANANAS ", 5_000),
    ("haystack", "BEETLE AND A HAY STACK ", 5_000),
    ("runs", "BAAAABAAABAAAAAAAAAAB", 5_000),
];

const PATTERNS: &[(&str, &str)] = &[
    ("BA", "Short"),
    ("BANANAS", "Repeated"),
    ("BAAAAAA", "Near miss"),
    ("NEEDLE", "Not Present"),
];

#[derive(Debug)]
struct ResultEntry {
    mode: &'static str,
    pattern: String,
    text: String,
    steps: usize,
    duration: Duration,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("--- Starting Benchmark ---");

    let alphabet = Alphabet::space_upper();
    let scanner = Scanner::default();
    let state = Horspool::build(ScanConfig::default());
    let mut results: Vec<ResultEntry> = Vec::new();

    for (name, unit, count) in TEXTS {
        // one occurrence of every findable pattern at the end
        let tail: Vec<&str> = PATTERNS
            .iter()
            .filter(|(_, desc)| *desc != "Not Present")
            .map(|(p, _)| *p)
            .collect();
        let text = format!("{}{}", unit.repeat(*count), tail.join(" "));
        let chars: Vec<char> = text.chars().collect();

        for (pattern, desc) in PATTERNS {
            println!("> Running on text '{}' with pattern '{}' ({})", name, pattern, desc);

            let pattern_chars: Vec<char> = pattern.chars().collect();
            let table = ShiftTable::build(&pattern_chars, &alphabet)?;

            let mut traced = Duration::MAX;
            let mut steps = 0;
            for _ in 0..REPEATS {
                let started = Instant::now();
                let (outcome, trace) = scanner.scan(&chars, &pattern_chars, &table)?;
                traced = traced.min(started.elapsed());
                steps = trace.len();
                log::debug!("traced {pattern} in {name}: {outcome:?}");
            }

            let mut untraced = Duration::MAX;
            for _ in 0..REPEATS {
                let started = Instant::now();
                let found = Horspool::find(&state, &text, pattern);
                untraced = untraced.min(started.elapsed());
                log::debug!("untraced {pattern} in {name}: {found:?}");
            }

            results.push(ResultEntry {
                mode: "traced",
                pattern: pattern.to_string(),
                text: name.to_string(),
                steps,
                duration: traced,
            });
            results.push(ResultEntry {
                mode: "untraced",
                pattern: pattern.to_string(),
                text: name.to_string(),
                steps: 0,
                duration: untraced,
            });
        }
    }

    print_summary_table(&results);
    Ok(())
}

fn print_summary_table(results: &[ResultEntry]) {
    println!("\n\n{:=^80}", " RESULTS SUMMARY ");
    println!(
        "{:<10} | {:<12} | {:<10} | {:>12} | {:>15}",
        "Mode", "Pattern", "Text", "Steps", "Time (µs)"
    );
    println!("{:-^80}", "");

    for entry in results {
        let micros = entry.duration.as_nanos() as f64 / 1000.0;
        println!(
            "{:<10} | {:<12} | {:<10} | {:>12} | {:>15.2}",
            entry.mode, entry.pattern, entry.text, entry.steps, micros
        );
    }
    println!("{:=^80}", " END ");
}
