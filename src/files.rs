//! Line-oriented exercise and answer file formats.
//!
//! Exercise lines look like `1. 3 + 5 = ` and answer lines like `1. 8`.
//! Blank lines and lines starting with `#` are skipped. A non-blank line
//! that does not match the numbered grammar is a structural error, distinct
//! from a merely wrong answer.

use std::fmt::Write;

use crate::error::{MathError, Result};
use crate::generator::Problem;

/// Extracts exercise texts from numbered `<i>. <text> =` lines.
pub fn parse_exercises(content: &str) -> Result<Vec<String>> {
    parse_numbered(content, true)
}

/// Extracts answer texts from numbered `<i>. <text>` lines.
pub fn parse_answers(content: &str) -> Result<Vec<String>> {
    parse_numbered(content, false)
}

fn parse_numbered(content: &str, exercise_form: bool) -> Result<Vec<String>> {
    let mut entries = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (digits, rest) = line
            .split_once('.')
            .ok_or_else(|| malformed(line))?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed(line));
        }
        let body = if exercise_form {
            rest.trim()
                .strip_suffix('=')
                .ok_or_else(|| malformed(line))?
        } else {
            rest
        };
        entries.push(body.trim().to_string());
    }
    Ok(entries)
}

fn malformed(line: &str) -> MathError {
    MathError::Parse(format!("malformed numbered line: {line}"))
}

/// Serializes problems as an exercise file, one `<i>. <text> = ` per line.
pub fn format_exercises(problems: &[Problem]) -> String {
    let mut out = String::new();
    for (i, problem) in problems.iter().enumerate() {
        let _ = writeln!(out, "{}. {} = ", i + 1, problem.text);
    }
    out
}

/// Serializes answers as an answer file, one `<i>. <answer>` per line.
pub fn format_answers(problems: &[Problem]) -> String {
    let mut out = String::new();
    for (i, problem) in problems.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, problem.answer);
    }
    out
}
