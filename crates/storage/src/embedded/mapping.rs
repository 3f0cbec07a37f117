use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use survey_core::model::{
    Category, CategoryName, GenericQuestion, SimilarCandidate, SimilarityScore,
};

use crate::embedded::records::{CandidateRecord, CatalogRecord, CategoryRecord};
use crate::repository::CatalogError;

pub(crate) struct MappedCatalog {
    pub categories: Vec<Category>,
    pub similar: HashMap<String, Vec<SimilarCandidate>>,
}

pub(crate) fn map_catalog(record: CatalogRecord) -> Result<MappedCatalog, CatalogError> {
    let categories = map_categories(record.categories)?;
    let known: HashSet<&str> = categories
        .iter()
        .flat_map(Category::questions)
        .map(GenericQuestion::text)
        .collect();

    let mut similar = HashMap::new();
    for entry in record.similar_questions {
        let question = entry.question;
        if !known.contains(question.as_str()) {
            return Err(CatalogError::UnknownQuestion(question));
        }
        if entry.candidates.is_empty() {
            return Err(CatalogError::EmptyCandidates(question));
        }
        let candidates = entry
            .candidates
            .into_iter()
            .map(|candidate| map_candidate(&question, candidate))
            .collect::<Result<Vec<_>, _>>()?;

        match similar.entry(question) {
            Entry::Occupied(occupied) => {
                return Err(CatalogError::DuplicateSimilarEntry(occupied.key().clone()));
            }
            Entry::Vacant(vacant) => {
                vacant.insert(candidates);
            }
        }
    }

    Ok(MappedCatalog {
        categories,
        similar,
    })
}

fn map_categories(records: Vec<CategoryRecord>) -> Result<Vec<Category>, CatalogError> {
    let mut seen_names = HashSet::new();
    let mut seen_questions = HashSet::new();
    let mut categories = Vec::with_capacity(records.len());

    for record in records {
        let name = CategoryName::new(record.name.as_str()).map_err(|source| {
            CatalogError::InvalidCategory {
                name: record.name.clone(),
                source,
            }
        })?;
        if !seen_names.insert(name.clone()) {
            return Err(CatalogError::DuplicateCategory(name.to_string()));
        }
        for question in &record.questions {
            if !seen_questions.insert(question.clone()) {
                return Err(CatalogError::DuplicateQuestion(question.clone()));
            }
        }
        let category = Category::new(name, record.questions).map_err(|source| {
            CatalogError::InvalidCategory {
                name: record.name,
                source,
            }
        })?;
        categories.push(category);
    }

    Ok(categories)
}

fn map_candidate(
    question: &str,
    record: CandidateRecord,
) -> Result<SimilarCandidate, CatalogError> {
    let score =
        SimilarityScore::new(record.similarity).map_err(|source| CatalogError::InvalidScore {
            question: question.to_string(),
            source,
        })?;
    Ok(SimilarCandidate::new(record.survey, record.question, score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_core::model::CategoryError;

    fn parse(raw: &str) -> Result<MappedCatalog, CatalogError> {
        let record: CatalogRecord = serde_json::from_str(raw)?;
        map_catalog(record)
    }

    #[test]
    fn rejects_duplicate_category() {
        let raw = r#"{"categories": [
            {"name": "usability", "questions": ["A?"]},
            {"name": "usability", "questions": ["B?"]}
        ]}"#;
        let err = parse(raw).err().unwrap();
        assert!(matches!(err, CatalogError::DuplicateCategory(name) if name == "usability"));
    }

    #[test]
    fn rejects_duplicate_question_across_categories() {
        let raw = r#"{"categories": [
            {"name": "one", "questions": ["Same?"]},
            {"name": "two", "questions": ["Same?"]}
        ]}"#;
        let err = parse(raw).err().unwrap();
        assert!(matches!(err, CatalogError::DuplicateQuestion(q) if q == "Same?"));
    }

    #[test]
    fn rejects_reserved_category_name() {
        let raw = r#"{"categories": [{"name": "all", "questions": ["A?"]}]}"#;
        let err = parse(raw).err().unwrap();
        assert!(matches!(
            err,
            CatalogError::InvalidCategory {
                source: CategoryError::ReservedName,
                ..
            }
        ));
    }

    #[test]
    fn rejects_orphan_similar_entry() {
        let raw = r#"{
            "categories": [{"name": "one", "questions": ["A?"]}],
            "similar_questions": [
                {"question": "Z?", "candidates": [{"survey": "S", "question": "Q", "similarity": 0.5}]}
            ]
        }"#;
        let err = parse(raw).err().unwrap();
        assert!(matches!(err, CatalogError::UnknownQuestion(q) if q == "Z?"));
    }

    #[test]
    fn rejects_empty_candidate_list() {
        let raw = r#"{
            "categories": [{"name": "one", "questions": ["A?"]}],
            "similar_questions": [{"question": "A?", "candidates": []}]
        }"#;
        let err = parse(raw).err().unwrap();
        assert!(matches!(err, CatalogError::EmptyCandidates(q) if q == "A?"));
    }

    #[test]
    fn rejects_out_of_range_score() {
        let raw = r#"{
            "categories": [{"name": "one", "questions": ["A?"]}],
            "similar_questions": [
                {"question": "A?", "candidates": [{"survey": "S", "question": "Q", "similarity": 1.2}]}
            ]
        }"#;
        let err = parse(raw).err().unwrap();
        assert!(matches!(err, CatalogError::InvalidScore { question, .. } if question == "A?"));
    }

    #[test]
    fn rejects_duplicate_similar_entry() {
        let raw = r#"{
            "categories": [{"name": "one", "questions": ["A?"]}],
            "similar_questions": [
                {"question": "A?", "candidates": [{"survey": "S", "question": "Q", "similarity": 0.5}]},
                {"question": "A?", "candidates": [{"survey": "S", "question": "R", "similarity": 0.6}]}
            ]
        }"#;
        let err = parse(raw).err().unwrap();
        assert!(matches!(err, CatalogError::DuplicateSimilarEntry(q) if q == "A?"));
    }

    #[test]
    fn question_without_entry_is_allowed() {
        let raw = r#"{"categories": [{"name": "one", "questions": ["A?", "B?"]}]}"#;
        let mapped = parse(raw).unwrap();
        assert_eq!(mapped.categories[0].questions().len(), 2);
        assert!(mapped.similar.is_empty());
    }
}
