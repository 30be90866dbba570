//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_to_pegs};
use crate::commands::{AnalysisResult, ScoreResult};
use crate::core::Code;
use colored::{ColoredString, Colorize};

/// Colour a code's letters, one colour per symbol
#[must_use]
pub fn colored_code(code: &Code) -> String {
    code.symbols()
        .iter()
        .map(|s| {
            let letter = s.to_string();
            let painted: ColoredString = match s.index() {
                0 => letter.red(),
                1 => letter.green(),
                2 => letter.yellow(),
                3 => letter.blue(),
                4 => letter.magenta(),
                _ => letter.cyan(),
            };
            painted.bold().to_string()
        })
        .collect()
}

/// Print the result of scoring one guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!("Secret:   {}", colored_code(&result.secret));
    println!("Guess:    {}", colored_code(&result.guess));
    println!("{}", "─".repeat(40).cyan());

    println!("Feedback: [{}]", result.feedback.glyphs());
    println!("Pegs:     {}", feedback_to_pegs(&result.feedback));
    println!(
        "Exact: {}  Misplaced: {}",
        result.feedback.exact_count().to_string().green().bold(),
        result.feedback.misplaced_count().to_string().yellow().bold()
    );

    if result.feedback.is_win() {
        println!("{}", "✅ Code cracked!".green().bold());
    }
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "FEEDBACK ANALYSIS:".bright_cyan().bold(),
        colored_code(&result.guess)
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} possible secrets:", result.total_secrets);
    println!("   Distinct feedbacks: {}", result.partitions.len());
    println!(
        "   Worst case:         {} secrets remain",
        result.worst_case().to_string().yellow()
    );
    println!(
        "   Expected:           {} secrets remain",
        format!("{:.1}", result.expected_remaining).bright_yellow()
    );

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let worst = result.worst_case() as f64;
    for &(feedback, count) in &result.partitions {
        let pct = count as f64 / result.total_secrets as f64 * 100.0;
        let bar = create_progress_bar(count as f64, worst, 30);
        println!(
            "   {} {} {count:5} ({pct:5.1}%)",
            feedback_to_pegs(&feedback),
            bar.green()
        );
    }
}
