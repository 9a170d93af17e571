//! Console output formatter for solve, evaluation and inspection results

use super::inspect::AnswerView;
use colored::Colorize;
use router_domain::{EvaluationReport, SolveOutcome};

/// Formats results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// The bare answer, as a batch would store it
    pub fn format_answer(outcome: &SolveOutcome) -> String {
        outcome.answer.clone()
    }

    /// Answer plus how it was reached
    pub fn format_explained(question: &str, outcome: &SolveOutcome) -> String {
        let mut output = String::new();

        output.push_str(&format!("{} {}\n", "Question:".cyan().bold(), question));
        output.push_str(&format!("{} {}\n", "Label:".cyan().bold(), outcome.label));
        output.push_str(&format!("{} {}\n", "Route:".cyan().bold(), outcome.route));

        if let Some(tally) = &outcome.tally {
            let votes = if tally.is_empty() {
                "no integer extracted".dimmed().to_string()
            } else {
                tally.summary()
            };
            output.push_str(&format!("{} {}\n", "Votes:".cyan().bold(), votes));
        }
        if outcome.fallback_used {
            output.push_str(&format!(
                "{} {}\n",
                "Fallback:".yellow().bold(),
                "direct answer"
            ));
        }

        output.push_str(&format!("\n{} {}\n", "Answer:".green().bold(), outcome.answer));
        output
    }

    /// Format as JSON
    pub fn format_outcome_json(outcome: &SolveOutcome) -> String {
        serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string())
    }

    /// Accuracy summary, per-domain table and retained mistakes
    pub fn format_report(report: &EvaluationReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Evaluation Results"));
        output.push('\n');
        output.push_str(&format!(
            "{} {}/{} = {:.2}%\n",
            "Overall accuracy:".cyan().bold(),
            report.correct,
            report.total,
            report.accuracy() * 100.0
        ));
        if report.skipped > 0 {
            output.push_str(&format!(
                "{}\n",
                format!("{} question(s) without gold output skipped", report.skipped).dimmed()
            ));
        }

        output.push_str(&Self::section_header("Per-domain accuracy"));
        for stats in &report.per_domain {
            output.push_str(&format!(
                "  {:<20} {:>4}/{:<4} = {:6.2}%\n",
                stats.domain,
                stats.correct,
                stats.total,
                stats.accuracy() * 100.0
            ));
        }

        if !report.mistakes.is_empty() {
            output.push_str(&Self::section_header(&format!(
                "Sample mistakes (showing {})",
                report.mistakes.len()
            )));
            for mistake in &report.mistakes {
                output.push_str(&format!(
                    "\n{}\n",
                    format!("── #{} [{}] ──", mistake.index, mistake.domain)
                        .yellow()
                        .bold()
                ));
                output.push_str(&format!("{}\n", Self::indent(&mistake.input, "  ")));
                output.push_str(&format!("  {} {}\n", "gold:".green(), mistake.gold));
                output.push_str(&format!("  {} {}\n", "pred:".red(), mistake.predicted));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    pub fn format_report_json(report: &EvaluationReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// One question with its current answer
    pub fn format_view(view: &AnswerView) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", "=".repeat(60).cyan()));
        output.push_str(&format!("{} {}\n", "Index:".cyan().bold(), view.index));
        output.push_str(&format!("{}\n{}\n\n", "QUESTION:".bold(), view.input));

        match &view.answer {
            Some(answer) => output.push_str(&format!("{} {}\n", "MODEL ANSWER:".bold(), answer)),
            None => output.push_str(&format!("{}\n", "(not answered yet)".dimmed())),
        }
        match &view.gold {
            Some(gold) => output.push_str(&format!("{} {}\n", "GOLD ANSWER:".bold(), gold)),
            None => output.push_str(&format!(
                "{}\n",
                "(Test data or no gold answer available.)".dimmed()
            )),
        }
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
