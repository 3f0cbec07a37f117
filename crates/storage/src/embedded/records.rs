use serde::Deserialize;

/// On-disk shape of the catalog seed.
///
/// Arrays rather than maps so declaration order survives deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct CatalogRecord {
    pub categories: Vec<CategoryRecord>,
    #[serde(default)]
    pub similar_questions: Vec<SimilarEntryRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct CategoryRecord {
    pub name: String,
    pub questions: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct SimilarEntryRecord {
    pub question: String,
    pub candidates: Vec<CandidateRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct CandidateRecord {
    pub survey: String,
    pub question: String,
    pub similarity: f64,
}
