mod cli;
mod config;
mod error;
mod logging;

use std::io::{self, Write};
use std::sync::Arc;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, SelectionState, SimilarOutcome, SimilarityService};
use survey_core::model::SimilarityBand;
use survey_core::{CategoryFilter, Threshold};
use ui::{App, UiApp, ViewDefaults, build_app_context};

use crate::cli::{Cli, Command};
use crate::error::AppError;

struct DesktopApp {
    similarity: Arc<SimilarityService>,
    view_defaults: ViewDefaults,
}

impl UiApp for DesktopApp {
    fn similarity(&self) -> Arc<SimilarityService> {
        Arc::clone(&self.similarity)
    }

    fn view_defaults(&self) -> ViewDefaults {
        self.view_defaults.clone()
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    logging::init_logging(cli.verbose)?;
    let services = AppServices::new_embedded()?;
    let similarity = services.similarity();

    match cli.into_command() {
        Command::Ui(view) => {
            let view_defaults = config::view_defaults(view);
            tracing::info!(
                category = %view_defaults.category,
                threshold = %view_defaults.threshold,
                "launching desktop viewer"
            );
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                similarity,
                view_defaults,
            });
            let context = build_app_context(&app);

            // Some dev setups default to an always-on-top window.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Survey Question Similarity Analysis")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::List { category } => {
            let mut out = io::stdout().lock();
            print_questions(&mut out, &similarity, &category)?;
            Ok(())
        }
        Command::Similar {
            question,
            threshold,
            json,
        } => {
            let mut out = io::stdout().lock();
            print_similar(&mut out, &similarity, &question, threshold, json)?;
            Ok(())
        }
    }
}

fn print_questions(
    out: &mut impl Write,
    similarity: &SimilarityService,
    category: &CategoryFilter,
) -> Result<(), AppError> {
    let groups = similarity.visible_question_groups(category);
    if groups.is_empty() {
        writeln!(out, "No questions for category `{category}`.")?;
        return Ok(());
    }
    for group in groups {
        writeln!(out, "{}", group.category.label())?;
        for question in &group.questions {
            writeln!(out, "  - {}", question.text())?;
        }
    }
    Ok(())
}

fn print_similar(
    out: &mut impl Write,
    similarity: &SimilarityService,
    question: &str,
    threshold: Threshold,
    json: bool,
) -> Result<(), AppError> {
    let mut selection = SelectionState::new();
    selection.select(question);
    let outcome = similarity.visible_similar(selection.current(), threshold.value());

    if json {
        serde_json::to_writer_pretty(&mut *out, &outcome)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "Selected Question: {question}")?;
    match &outcome {
        SimilarOutcome::Matches { matches } => {
            for item in matches {
                let band = match item.band {
                    SimilarityBand::High => "high",
                    SimilarityBand::Medium => "medium",
                    SimilarityBand::Low => "low",
                };
                writeln!(
                    out,
                    "[{band:>6}] {}  {}: {}",
                    item.candidate.score().percent_label(),
                    item.candidate.source_survey(),
                    item.candidate.question_text()
                )?;
            }
        }
        other => {
            writeln!(out, "{}", other.message().unwrap_or_default())?;
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        // Binary glue: report once and exit.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn similarity() -> Arc<SimilarityService> {
        AppServices::new_embedded()
            .expect("embedded services")
            .similarity()
    }

    fn similar_output(question: &str, threshold: f64, json: bool) -> String {
        let mut out = Vec::new();
        print_similar(
            &mut out,
            &similarity(),
            question,
            Threshold::new(threshold).unwrap(),
            json,
        )
        .expect("print");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn list_prints_grouped_questions() {
        let mut out = Vec::new();
        print_questions(&mut out, &similarity(), &CategoryFilter::parse("usability"))
            .expect("print");
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Usability\n  - How easy was it to use our product?\n  - Did you encounter any difficulties?\n  - Rate the user interface of our product\n"
        );
    }

    #[test]
    fn list_reports_unknown_category() {
        let mut out = Vec::new();
        print_questions(&mut out, &similarity(), &CategoryFilter::parse("pricing"))
            .expect("print");
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "No questions for category `pricing`.\n"
        );
    }

    #[test]
    fn similar_prints_banded_rows() {
        let text = similar_output("How satisfied are you with our product quality?", 0.7, false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("[  high] 85.0%  Product Survey 2024"));
        assert!(lines[2].starts_with("[medium] 82.0%"));
        assert!(lines[3].starts_with("[medium] 79.0%"));
    }

    #[test]
    fn similar_prints_threshold_message() {
        let text = similar_output("How satisfied are you with our product quality?", 0.9, false);
        assert!(text.ends_with("No matches at threshold 90.0%\n"), "{text}");
    }

    #[test]
    fn similar_prints_json() {
        let text = similar_output("Unknown?", 0.7, true);
        let value: serde_json::Value = serde_json::from_str(&text).expect("json");
        assert_eq!(value["status"], "no_similar_questions");
    }
}
