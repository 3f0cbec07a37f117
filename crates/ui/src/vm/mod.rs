mod catalog_vm;
mod category_vm;
mod legend_vm;
mod question_vm;
mod similar_vm;

pub use catalog_vm::{CatalogRowVm, map_catalog_rows};
pub use category_vm::{CategoryOptionVm, map_category_options};
pub use legend_vm::{LegendEntryVm, legend_entries};
pub use question_vm::{QuestionButtonVm, QuestionGroupVm, map_question_groups};
pub use similar_vm::{
    SimilarCardVm, SimilarPanelBody, SimilarPanelVm, band_modifier, map_similar_panel,
};
