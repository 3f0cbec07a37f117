use std::sync::Arc;

use storage::CatalogRepository;
use survey_core::model::{GenericQuestion, SimilarCandidate};
use survey_core::{CategoryFilter, Threshold};

use crate::selection::SelectionState;
use crate::similarity::view::{
    CatalogEntry, QuestionGroup, SimilarMatch, SimilarOutcome, SimilarityViewModel,
};

/// Filters the catalog for display. Every method is a pure read of the catalog.
#[derive(Clone)]
pub struct SimilarityService {
    catalog: Arc<dyn CatalogRepository>,
}

impl SimilarityService {
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn catalog(&self) -> &dyn CatalogRepository {
        self.catalog.as_ref()
    }

    /// Filter choices: `All` followed by the catalog's categories.
    #[must_use]
    pub fn category_options(&self) -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(
                self.catalog
                    .list_categories()
                    .into_iter()
                    .cloned()
                    .map(CategoryFilter::Category),
            )
            .collect()
    }

    /// Questions for the filter in catalog order. Unknown categories yield nothing.
    #[must_use]
    pub fn visible_questions(&self, filter: &CategoryFilter) -> Vec<&GenericQuestion> {
        match filter {
            CategoryFilter::All => self.catalog.all_questions(),
            CategoryFilter::Category(name) => self.catalog.questions_for(name).iter().collect(),
        }
    }

    /// Same selection as `visible_questions`, grouped under category headings.
    #[must_use]
    pub fn visible_question_groups(&self, filter: &CategoryFilter) -> Vec<QuestionGroup> {
        self.catalog
            .categories()
            .iter()
            .filter(|category| match filter {
                CategoryFilter::All => true,
                CategoryFilter::Category(name) => category.name() == name,
            })
            .map(|category| QuestionGroup {
                category: category.name().clone(),
                questions: category.questions().to_vec(),
            })
            .collect()
    }

    /// Candidates for `selected` scoring at least `threshold`, in catalog order.
    ///
    /// A threshold outside `[0, 1]` (or NaN) matches nothing.
    #[must_use]
    pub fn visible_similar(&self, selected: Option<&str>, threshold: f64) -> SimilarOutcome {
        let Some(question) = selected else {
            return SimilarOutcome::NothingSelected;
        };

        let candidates = self.catalog.similar_to(question);
        if candidates.is_empty() {
            return SimilarOutcome::NoSimilarQuestions;
        }

        if !(Threshold::MIN..=Threshold::MAX).contains(&threshold) {
            tracing::warn!(threshold, "similarity threshold out of range");
            return SimilarOutcome::NoMatchesAtThreshold { threshold };
        }

        let matches: Vec<SimilarMatch> = candidates
            .iter()
            .filter(|candidate| candidate.meets(threshold))
            .map(|candidate| SimilarMatch {
                candidate: candidate.clone(),
                band: candidate.score().band(),
            })
            .collect();

        if matches.is_empty() {
            SimilarOutcome::NoMatchesAtThreshold { threshold }
        } else {
            SimilarOutcome::Matches { matches }
        }
    }

    /// Every generic question in catalog order with its candidate count and best score.
    #[must_use]
    pub fn catalog_overview(&self) -> Vec<CatalogEntry> {
        self.catalog
            .all_questions()
            .into_iter()
            .map(|question| {
                let candidates = self.catalog.similar_to(question.text());
                let best_score = candidates
                    .iter()
                    .map(SimilarCandidate::score)
                    .reduce(|best, score| if score > best { score } else { best });
                CatalogEntry {
                    category: question.category().clone(),
                    question: question.text().to_owned(),
                    candidate_count: candidates.len(),
                    best_score,
                }
            })
            .collect()
    }

    /// Build the full view for the current inputs.
    #[must_use]
    pub fn render(
        &self,
        selection: &SelectionState,
        filter: &CategoryFilter,
        threshold: f64,
    ) -> SimilarityViewModel {
        let similar = self.visible_similar(selection.current(), threshold);
        tracing::debug!(
            filter = %filter,
            threshold,
            selected = selection.current().unwrap_or("-"),
            matches = similar.matches().len(),
            "rendered similarity view"
        );

        SimilarityViewModel {
            category_options: self.category_options(),
            category_filter: filter.clone(),
            threshold,
            question_groups: self.visible_question_groups(filter),
            selected: selection.current().map(str::to_owned),
            similar,
        }
    }
}
