use survey_core::CategoryFilter;

/// UI-ready entry for the category `select`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryOptionVm {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[must_use]
pub fn map_category_options(
    options: &[CategoryFilter],
    current: &CategoryFilter,
) -> Vec<CategoryOptionVm> {
    options
        .iter()
        .map(|option| CategoryOptionVm {
            value: option.value().to_owned(),
            label: option.label(),
            selected: option == current,
        })
        .collect()
}
