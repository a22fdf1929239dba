use arithdrill::{GradeReport, files, grade};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn one_right_one_wrong() {
    let exercises = strings(&["3 + 5", "1/2 + 1/3"]);
    let answers = strings(&["7", "5/6"]);
    let report = grade(&exercises, &answers);
    assert_eq!(report.correct, vec![2]);
    assert_eq!(report.wrong, vec![1]);
    assert_eq!(report.to_string(), "Correct: 1 (2)\nWrong: 1 (1)");
}

#[test]
fn equivalent_answer_forms_count_as_correct() {
    let exercises = strings(&["7 ÷ 2", "1/2 + 1/2"]);
    let answers = strings(&["3'1/2", "1"]);
    let report = grade(&exercises, &answers);
    assert_eq!(report.correct, vec![1, 2]);
    assert!(report.wrong.is_empty());
}

#[test]
fn bad_pairs_count_as_wrong_without_aborting() {
    let exercises = strings(&["3 - 5", "nonsense", "2 × 2", "4 ÷ 0"]);
    let answers = strings(&["-2", "1", "4", "0"]);
    let report = grade(&exercises, &answers);
    assert_eq!(report.correct, vec![3]);
    assert_eq!(report.wrong, vec![1, 2, 4]);
}

#[test]
fn overflowing_exercise_counts_as_wrong() {
    // Operands that each fit i64 but whose product does not must be
    // recorded as wrong, not abort the run.
    let exercises = strings(&["999999999999 × 999999999999", "3 + 5"]);
    let answers = strings(&["1", "8"]);
    let report = grade(&exercises, &answers);
    assert_eq!(report.correct, vec![2]);
    assert_eq!(report.wrong, vec![1]);
}

#[test]
fn unparseable_claimed_answer_is_wrong() {
    let exercises = strings(&["3 + 5"]);
    let answers = strings(&["eight"]);
    let report = grade(&exercises, &answers);
    assert_eq!(report.wrong, vec![1]);
}

#[test]
fn empty_input_reports_empty_lists() {
    let report = grade(&[], &[]);
    assert_eq!(report, GradeReport::default());
    assert_eq!(report.to_string(), "Correct: 0 ()\nWrong: 0 ()");
}

#[test]
fn exercise_file_lines_round_trip() {
    let content = "1. 3 + 5 = \n\n# a comment\n2. 1/2 + 1/3 = \n";
    let exercises = files::parse_exercises(content).expect("parse exercises");
    assert_eq!(exercises, strings(&["3 + 5", "1/2 + 1/3"]));
}

#[test]
fn answer_file_lines_round_trip() {
    let content = "1. 8\n2. 5/6\n";
    let answers = files::parse_answers(content).expect("parse answers");
    assert_eq!(answers, strings(&["8", "5/6"]));
}

#[test]
fn malformed_numbered_lines_are_fatal() {
    assert!(files::parse_exercises("first. 3 + 5 =").is_err());
    assert!(files::parse_exercises("1. 3 + 5").is_err());
    assert!(files::parse_answers("no number here").is_err());
}

#[test]
fn generated_files_grade_fully_correct() {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    let mut rng = StdRng::seed_from_u64(11);
    let config = arithdrill::GenConfig::default();
    let problems = arithdrill::generate(&mut rng, 15, &config).expect("generate");

    let exercises =
        files::parse_exercises(&files::format_exercises(&problems)).expect("exercise lines");
    let answers = files::parse_answers(&files::format_answers(&problems)).expect("answer lines");

    let report = grade(&exercises, &answers);
    assert_eq!(report.correct.len(), 15, "wrong pairs: {:?}", report.wrong);
    assert!(report.wrong.is_empty());
}
