use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::map_catalog_rows;

#[component]
pub fn CatalogView() -> Element {
    let ctx = use_context::<AppContext>();
    let rows = map_catalog_rows(&ctx.similarity().catalog_overview());

    rsx! {
        div { class: "page catalog-page",
            header { class: "view-header",
                h2 { class: "view-title", "Catalog" }
                p { class: "view-subtitle", "Every generic question with its pre-scored matches." }
            }
            div { class: "view-divider" }
            if rows.is_empty() {
                p { "The catalog is empty." }
            } else {
                table { class: "catalog-table",
                    thead {
                        tr {
                            th { "Category" }
                            th { "Question" }
                            th { "Similar questions" }
                            th { "Best match" }
                        }
                    }
                    tbody {
                        for row in rows {
                            tr {
                                td { "{row.category_label}" }
                                td { "{row.question}" }
                                td { "{row.candidates_label}" }
                                td { "{row.best_score_label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
