use dioxus::prelude::*;
use services::SelectionState;
use survey_core::{CategoryFilter, Threshold};

use crate::context::AppContext;
use crate::vm::{
    LegendEntryVm, QuestionGroupVm, SimilarCardVm, SimilarPanelBody, SimilarPanelVm,
    legend_entries, map_category_options, map_question_groups, map_similar_panel,
};

/// Main viewer. Selection, category and threshold live in signals owned by this
/// component, so each window gets its own session state.
#[component]
pub fn SimilarityView() -> Element {
    let ctx = use_context::<AppContext>();
    let similarity = ctx.similarity();
    let defaults = ctx.view_defaults();
    let initial_threshold = defaults.threshold;
    let initial_category = defaults.category;
    let initial_question = defaults.question;

    let mut category = use_signal(move || initial_category);
    let mut threshold = use_signal(move || initial_threshold);
    let selection = use_signal(move || SelectionState::with_selection(initial_question));

    let model = similarity.render(&selection.read(), &category.read(), threshold().value());
    let options = map_category_options(&model.category_options, &model.category_filter);
    let groups = map_question_groups(&model.question_groups, model.selected.as_deref());
    let panel = map_similar_panel(&model);
    let legend = legend_entries();
    let has_questions = !groups.is_empty();

    let category_value = model.category_filter.value().to_owned();
    let threshold_label = threshold().percent_label();
    let threshold_value = threshold().value().to_string();
    let min = Threshold::MIN.to_string();
    let max = Threshold::MAX.to_string();
    let step = Threshold::STEP.to_string();

    rsx! {
        div { class: "page similarity-page",
            header { class: "view-header",
                h2 { class: "view-title", "Survey Question Similarity Analysis" }
            }
            div { class: "similarity-controls",
                label { class: "control",
                    span { class: "control-label", "Select Question Category" }
                    select {
                        class: "category-select",
                        value: "{category_value}",
                        onchange: move |evt| category.set(CategoryFilter::parse(&evt.value())),
                        for opt in options {
                            option {
                                value: "{opt.value}",
                                selected: opt.selected,
                                "{opt.label}"
                            }
                        }
                    }
                }
                label { class: "control",
                    span { class: "control-label", "Similarity Threshold: {threshold_label}" }
                    input {
                        class: "threshold-slider",
                        r#type: "range",
                        min: "{min}",
                        max: "{max}",
                        step: "{step}",
                        value: "{threshold_value}",
                        oninput: move |evt| {
                            if let Ok(raw) = evt.value().parse::<f64>() {
                                threshold.set(Threshold::snapped(raw));
                            }
                        },
                    }
                }
            }
            div { class: "similarity-columns",
                section { class: "similarity-column",
                    h3 { "Generic Survey Questions" }
                    if !has_questions {
                        p { class: "notice notice--info", "No questions in this category." }
                    }
                    for group in groups {
                        QuestionGroupList { group, selection }
                    }
                }
                section { class: "similarity-column",
                    h3 { "Similar Questions" }
                    SimilarPanel { panel }
                }
            }
            Legend { entries: legend }
        }
    }
}

#[component]
fn QuestionGroupList(group: QuestionGroupVm, selection: Signal<SelectionState>) -> Element {
    let buttons = group.questions.iter().map(|question| {
        let text = question.text.clone();
        let mut selection = selection;
        rsx! {
            button {
                key: "{question.key}",
                class: if question.is_selected {
                    "question-button question-button--selected"
                } else {
                    "question-button"
                },
                r#type: "button",
                onclick: move |_| selection.write().select(text.clone()),
                "{question.text}"
            }
        }
    });

    rsx! {
        div { class: "question-group",
            h4 { class: "question-group-heading", "{group.heading}" }
            {buttons}
            hr {}
        }
    }
}

#[component]
fn SimilarPanel(panel: SimilarPanelVm) -> Element {
    rsx! {
        div { class: "similar-panel",
            match panel.selected {
                Some(text) => rsx! {
                    div { class: "selected-question",
                        p { strong { "Selected Question:" } }
                        p { em { "{text}" } }
                        hr {}
                    }
                },
                None => rsx! {},
            }
            match panel.body {
                SimilarPanelBody::Info(message) => rsx! {
                    p { class: "notice notice--info", "{message}" }
                },
                SimilarPanelBody::Warning(message) => rsx! {
                    p { class: "notice notice--warning", "{message}" }
                },
                SimilarPanelBody::Cards(cards) => rsx! {
                    for card in cards {
                        SimilarCard { card }
                    }
                },
            }
        }
    }
}

#[component]
fn SimilarCard(card: SimilarCardVm) -> Element {
    rsx! {
        div { class: "similar-card similar-card--{card.band_modifier}",
            p { class: "similar-card-survey", "{card.survey}" }
            p { class: "similar-card-question", "{card.question}" }
            p { class: "similar-card-score", "{card.score_label}" }
        }
    }
}

#[component]
fn Legend(entries: Vec<LegendEntryVm>) -> Element {
    rsx! {
        footer { class: "legend",
            hr {}
            p { strong { "Color Legend:" } }
            div { class: "legend-entries",
                for entry in entries {
                    div { class: "legend-swatch legend-swatch--{entry.modifier}", "{entry.label}" }
                }
            }
        }
    }
}
