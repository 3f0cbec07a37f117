use services::QuestionGroup;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionButtonVm {
    pub key: String,
    pub text: String,
    pub is_selected: bool,
}

/// A category heading with its clickable questions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionGroupVm {
    pub heading: String,
    pub questions: Vec<QuestionButtonVm>,
}

#[must_use]
pub fn map_question_groups(
    groups: &[QuestionGroup],
    selected: Option<&str>,
) -> Vec<QuestionGroupVm> {
    groups
        .iter()
        .map(|group| QuestionGroupVm {
            heading: group.category.label(),
            questions: group
                .questions
                .iter()
                .map(|question| QuestionButtonVm {
                    key: format!("btn_{}_{}", group.category, question.text()),
                    text: question.text().to_owned(),
                    is_selected: selected == Some(question.text()),
                })
                .collect(),
        })
        .collect()
}
