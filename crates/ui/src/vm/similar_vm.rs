use services::{SimilarMatch, SimilarOutcome, SimilarityViewModel};
use survey_core::model::SimilarityBand;

/// CSS modifier for a band; the stylesheet owns the colors.
#[must_use]
pub fn band_modifier(band: SimilarityBand) -> &'static str {
    match band {
        SimilarityBand::High => "high",
        SimilarityBand::Medium => "medium",
        SimilarityBand::Low => "low",
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimilarCardVm {
    pub survey: String,
    pub question: String,
    pub score_label: String,
    pub band_modifier: &'static str,
}

impl From<&SimilarMatch> for SimilarCardVm {
    fn from(item: &SimilarMatch) -> Self {
        Self {
            survey: item.candidate.source_survey().to_owned(),
            question: item.candidate.question_text().to_owned(),
            score_label: format!("Similarity: {}", item.candidate.score().percent_label()),
            band_modifier: band_modifier(item.band),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimilarPanelBody {
    Info(String),
    Warning(String),
    Cards(Vec<SimilarCardVm>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimilarPanelVm {
    pub selected: Option<String>,
    pub body: SimilarPanelBody,
}

#[must_use]
pub fn map_similar_panel(model: &SimilarityViewModel) -> SimilarPanelVm {
    let body = match &model.similar {
        SimilarOutcome::Matches { matches } => {
            SimilarPanelBody::Cards(matches.iter().map(SimilarCardVm::from).collect())
        }
        SimilarOutcome::NoMatchesAtThreshold { .. } => {
            SimilarPanelBody::Warning(model.similar.message().unwrap_or_default())
        }
        SimilarOutcome::NothingSelected | SimilarOutcome::NoSimilarQuestions => {
            SimilarPanelBody::Info(model.similar.message().unwrap_or_default())
        }
    };

    SimilarPanelVm {
        selected: model.selected.clone(),
        body,
    }
}
