//! Grading claimed answers against independently recomputed results.

use std::fmt;

use crate::fraction::Fraction;
use crate::parser::evaluate;

/// Outcome of one grading pass: 1-based indices of the correct and wrong
/// exercise/answer pairs, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GradeReport {
    pub correct: Vec<usize>,
    pub wrong: Vec<usize>,
}

/// Checks each exercise against its claimed answer. A pair whose exercise
/// fails to evaluate or whose answer fails to parse counts as wrong; one
/// bad line never aborts the run. Unpaired trailing lines are ignored.
pub fn grade(exercises: &[String], answers: &[String]) -> GradeReport {
    let mut report = GradeReport::default();
    for (index, (exercise, claimed)) in exercises.iter().zip(answers).enumerate() {
        let matched = evaluate(exercise)
            .and_then(|expected| Ok(expected == claimed.parse::<Fraction>()?));
        match matched {
            Ok(true) => report.correct.push(index + 1),
            Ok(false) | Err(_) => report.wrong.push(index + 1),
        }
    }
    report
}

impl fmt::Display for GradeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Correct: {} ({})", self.correct.len(), join(&self.correct))?;
        write!(f, "Wrong: {} ({})", self.wrong.len(), join(&self.wrong))
    }
}

fn join(indices: &[usize]) -> String {
    indices
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
