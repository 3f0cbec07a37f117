use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{CatalogView, SimilarityView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", SimilarityView)] Similarity {},
        #[route("/catalog", CatalogView)] Catalog {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Surveys" }
            ul {
                li { Link { to: Route::Similarity {}, "Similarity" } }
                li { Link { to: Route::Catalog {}, "Catalog" } }
            }
        }
    }
}
