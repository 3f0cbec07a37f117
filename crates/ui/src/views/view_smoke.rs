use storage::StaticCatalog;
use survey_core::{CategoryFilter, Threshold};

use super::test_harness::{
    ViewHarness, ViewKind, setup_view_harness, setup_view_harness_with_catalog,
};
use crate::context::ViewDefaults;

const QUALITY: &str = "How satisfied are you with our product quality?";

fn rendered(mut harness: ViewHarness) -> String {
    harness.rebuild();
    harness.render()
}

fn defaults_with(question: Option<&str>, threshold: f64, category: &str) -> ViewDefaults {
    ViewDefaults {
        category: CategoryFilter::parse(category),
        threshold: Threshold::new(threshold).unwrap(),
        question: question.map(str::to_owned),
    }
}

#[test]
fn similarity_view_smoke_renders_prompt_without_selection() {
    let html = rendered(setup_view_harness(
        ViewKind::Similarity,
        ViewDefaults::default(),
    ));
    assert!(html.contains("Survey Question Similarity Analysis"), "missing title in {html}");
    assert!(
        html.contains("Select a generic question to see similar questions"),
        "missing prompt in {html}"
    );
    assert!(html.contains("Customer Satisfaction"), "missing heading in {html}");
    assert!(html.contains("Usability"), "missing heading in {html}");
    assert!(html.contains("Similarity Threshold: 70.0%"), "missing threshold in {html}");
    assert!(html.contains(QUALITY), "missing question in {html}");
    assert!(!html.contains("Selected Question:"), "unexpected selection in {html}");
}

#[test]
fn similarity_view_smoke_renders_banded_cards() {
    let html = rendered(setup_view_harness(
        ViewKind::Similarity,
        defaults_with(Some(QUALITY), 0.7, "all"),
    ));
    assert!(html.contains("Selected Question:"), "missing selection in {html}");
    assert!(html.contains("Similarity: 85.0%"), "missing score in {html}");
    assert!(html.contains("Similarity: 82.0%"), "missing score in {html}");
    assert!(html.contains("Similarity: 79.0%"), "missing score in {html}");
    assert_eq!(html.matches("similar-card--high").count(), 1, "{html}");
    assert_eq!(html.matches("similar-card--medium").count(), 2, "{html}");
    assert_eq!(html.matches("similar-card--low").count(), 0, "{html}");
    assert!(html.contains("question-button--selected"), "missing highlight in {html}");

    let first = html.find("Rate your satisfaction with product quality").unwrap();
    let second = html.find("Are you satisfied with the product?").unwrap();
    let third = html.find("Product satisfaction rating").unwrap();
    assert!(first < second && second < third, "results out of order in {html}");
}

#[test]
fn similarity_view_smoke_renders_threshold_warning() {
    let html = rendered(setup_view_harness(
        ViewKind::Similarity,
        defaults_with(Some(QUALITY), 0.9, "all"),
    ));
    assert!(
        html.contains("No matches at threshold 90.0%"),
        "missing warning in {html}"
    );
    assert!(!html.contains("similar-card--"), "unexpected cards in {html}");
}

#[test]
fn similarity_view_smoke_filters_by_category() {
    let html = rendered(setup_view_harness(
        ViewKind::Similarity,
        defaults_with(None, 0.7, "usability"),
    ));
    assert!(html.contains("How easy was it to use our product?"), "missing question in {html}");
    assert!(html.contains("Did you encounter any difficulties?"), "missing question in {html}");
    assert!(!html.contains(QUALITY), "unexpected question in {html}");
    assert_eq!(html.matches("question-button").count(), 3, "{html}");
}

#[test]
fn similarity_view_smoke_renders_unknown_category() {
    let html = rendered(setup_view_harness(
        ViewKind::Similarity,
        defaults_with(None, 0.7, "pricing"),
    ));
    assert!(html.contains("No questions in this category."), "missing notice in {html}");
}

#[test]
fn similarity_view_smoke_renders_no_similar_questions() {
    let catalog = StaticCatalog::from_json(
        r#"{"categories": [{"name": "onboarding", "questions": ["Was setup clear?"]}]}"#,
    )
    .expect("catalog");
    let html = rendered(setup_view_harness_with_catalog(
        ViewKind::Similarity,
        defaults_with(Some("Was setup clear?"), 0.0, "all"),
        catalog,
    ));
    assert!(
        html.contains("No similar questions found for this question"),
        "missing notice in {html}"
    );
    assert!(html.contains("Onboarding"), "missing heading in {html}");
}

#[test]
fn similarity_view_smoke_renders_legend() {
    let html = rendered(setup_view_harness(
        ViewKind::Similarity,
        ViewDefaults::default(),
    ));
    assert!(html.contains("Color Legend:"), "missing legend in {html}");
    assert!(html.contains("Medium Similarity (75-84%)"), "missing legend in {html}");
    assert!(html.contains("legend-swatch--low"), "missing swatch in {html}");
}

#[test]
fn catalog_view_smoke_renders_rows() {
    let html = rendered(setup_view_harness(ViewKind::Catalog, ViewDefaults::default()));
    assert!(html.contains("Catalog"), "missing title in {html}");
    assert!(html.contains("Would you recommend our product to others?"), "missing row in {html}");
    assert!(html.contains("88.0%"), "missing best score in {html}");
}
