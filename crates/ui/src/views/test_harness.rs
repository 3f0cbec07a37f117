use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{AppServices, SimilarityService};
use storage::StaticCatalog;

use crate::context::{UiApp, ViewDefaults, build_app_context};
use crate::views::{CatalogView, SimilarityView};

#[derive(Clone)]
struct TestApp {
    similarity: Arc<SimilarityService>,
    defaults: ViewDefaults,
}

impl UiApp for TestApp {
    fn similarity(&self) -> Arc<SimilarityService> {
        Arc::clone(&self.similarity)
    }

    fn view_defaults(&self) -> ViewDefaults {
        self.defaults.clone()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Similarity,
    Catalog,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    match props.view {
        ViewKind::Similarity => rsx! { SimilarityView {} },
        ViewKind::Catalog => rsx! { CatalogView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        self.dom.process_events();
        self.dom.render_immediate(&mut NoOpMutations);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn setup_view_harness(view: ViewKind, defaults: ViewDefaults) -> ViewHarness {
    let services = AppServices::new_embedded().expect("embedded services");
    build_harness(view, defaults, services)
}

pub fn setup_view_harness_with_catalog(
    view: ViewKind,
    defaults: ViewDefaults,
    catalog: StaticCatalog,
) -> ViewHarness {
    let services = AppServices::from_catalog(Arc::new(catalog));
    build_harness(view, defaults, services)
}

fn build_harness(view: ViewKind, defaults: ViewDefaults, services: AppServices) -> ViewHarness {
    let app = Arc::new(TestApp {
        similarity: services.similarity(),
        defaults,
    });
    let dom = VirtualDom::new_with_props(ViewHarnessRoot, ViewHarnessProps { app, view });
    ViewHarness { dom }
}
