use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{ArgGroup, Parser};

use arithdrill::{GenConfig, files, generate, grade};

/// Arithmetic drill generator and grader.
#[derive(Parser, Debug)]
#[command(version, about)]
#[command(group = ArgGroup::new("mode").required(true).args(["count", "exercises"]))]
struct Cli {
    /// Number of problems to generate (writes Exercises.txt and Answers.txt)
    #[arg(short = 'n', value_name = "COUNT", requires = "range")]
    count: Option<usize>,

    /// Bound for operand values and fraction denominators
    #[arg(short = 'r', value_name = "RANGE", requires = "count", conflicts_with_all = ["exercises", "answers"])]
    range: Option<i64>,

    /// Exercise file to grade (writes Grade.txt)
    #[arg(short = 'e', value_name = "FILE", requires = "answers")]
    exercises: Option<PathBuf>,

    /// Answer file to grade against
    #[arg(short = 'a', value_name = "FILE", requires = "exercises", conflicts_with_all = ["count", "range"])]
    answers: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(count) = cli.count {
        let range = cli.range.context("-n requires -r <RANGE>")?;
        if count == 0 || range <= 0 {
            bail!("-n and -r must both be positive");
        }

        let config = GenConfig {
            max_value: range,
            ..GenConfig::default()
        };
        let problems = generate(&mut rand::thread_rng(), count, &config)
            .context("problem generation failed")?;

        fs::write("Exercises.txt", files::format_exercises(&problems))
            .context("cannot write Exercises.txt")?;
        fs::write("Answers.txt", files::format_answers(&problems))
            .context("cannot write Answers.txt")?;
        println!("generated {count} problems into Exercises.txt and Answers.txt");
    } else if let Some(exercise_path) = cli.exercises {
        let answer_path = cli.answers.context("-e requires -a <FILE>")?;

        let exercise_text = fs::read_to_string(&exercise_path)
            .with_context(|| format!("cannot read {}", exercise_path.display()))?;
        let answer_text = fs::read_to_string(&answer_path)
            .with_context(|| format!("cannot read {}", answer_path.display()))?;

        let exercises = files::parse_exercises(&exercise_text)
            .with_context(|| format!("malformed exercise file {}", exercise_path.display()))?;
        let answers = files::parse_answers(&answer_text)
            .with_context(|| format!("malformed answer file {}", answer_path.display()))?;

        let report = grade(&exercises, &answers);
        fs::write("Grade.txt", format!("{report}\n")).context("cannot write Grade.txt")?;
        println!("graded {} pairs into Grade.txt", exercises.len().min(answers.len()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Cli;

    #[test]
    fn accepted_invocations() {
        assert!(Cli::try_parse_from(["arithdrill", "-n", "5", "-r", "10"]).is_ok());
        assert!(Cli::try_parse_from(["arithdrill", "-e", "ex.txt", "-a", "ans.txt"]).is_ok());
    }

    #[test]
    fn incomplete_mode_pairings_are_rejected_at_parse_time() {
        assert!(Cli::try_parse_from(["arithdrill", "-n", "5"]).is_err());
        assert!(Cli::try_parse_from(["arithdrill", "-e", "ex.txt"]).is_err());
        assert!(Cli::try_parse_from(["arithdrill", "-a", "ans.txt"]).is_err());
    }

    #[test]
    fn cross_mode_flags_are_rejected() {
        assert!(Cli::try_parse_from(["arithdrill", "-e", "ex.txt", "-a", "a.txt", "-r", "9"]).is_err());
        assert!(Cli::try_parse_from(["arithdrill", "-n", "5", "-r", "10", "-e", "ex.txt"]).is_err());
        assert!(Cli::try_parse_from(["arithdrill"]).is_err());
    }
}
