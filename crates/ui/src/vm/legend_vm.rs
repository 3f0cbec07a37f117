use survey_core::model::SimilarityBand;

use crate::vm::band_modifier;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegendEntryVm {
    pub label: &'static str,
    pub modifier: &'static str,
}

#[must_use]
pub fn legend_entries() -> Vec<LegendEntryVm> {
    SimilarityBand::ALL
        .into_iter()
        .map(|band| LegendEntryVm {
            label: legend_label(band),
            modifier: band_modifier(band),
        })
        .collect()
}

fn legend_label(band: SimilarityBand) -> &'static str {
    match band {
        SimilarityBand::High => "High Similarity (≥85%)",
        SimilarityBand::Medium => "Medium Similarity (75-84%)",
        SimilarityBand::Low => "Lower Similarity (<75%)",
    }
}
