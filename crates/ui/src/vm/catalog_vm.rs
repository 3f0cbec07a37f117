use services::CatalogEntry;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogRowVm {
    pub category_label: String,
    pub question: String,
    pub candidates_label: String,
    pub best_score_label: String,
}

#[must_use]
pub fn map_catalog_rows(entries: &[CatalogEntry]) -> Vec<CatalogRowVm> {
    entries
        .iter()
        .map(|entry| CatalogRowVm {
            category_label: entry.category.label(),
            question: entry.question.clone(),
            candidates_label: entry.candidate_count.to_string(),
            best_score_label: entry
                .best_score
                .map_or_else(|| "n/a".to_string(), |score| score.percent_label()),
        })
        .collect()
}
