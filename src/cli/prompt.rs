use std::io::{BufRead, Write};

use crate::error::Result;

pub const DEFAULT_LIMIT: u32 = 5;
pub const MAX_LIMIT: u32 = 100;

/// Writes `question` and reads one trimmed line of input.
///
/// End of input yields an empty answer.
pub fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Parses the track count answer.
///
/// Anything that is not a plain number falls back to [`DEFAULT_LIMIT`];
/// numbers are clamped to the range the API accepts.
pub fn parse_limit(answer: &str) -> u32 {
    let answer = answer.trim();
    if answer.is_empty() || !answer.chars().all(|c| c.is_ascii_digit()) {
        return DEFAULT_LIMIT;
    }

    answer
        .parse::<u32>()
        .unwrap_or(MAX_LIMIT)
        .clamp(1, MAX_LIMIT)
}
