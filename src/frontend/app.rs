//! Application root: shared context and the single form view.

use dioxus::prelude::*;

use crate::backend::generator::GenerateClient;
use crate::frontend::components::GenerateForm;
use crate::frontend::services::FormConfig;

const STYLESHEET: &str = include_str!("../../assets/style.css");

#[component]
pub fn App() -> Element {
    use_context_provider(|| crate::app_config().clone());
    use_context_provider(crate::generate_client);

    rsx! {
        style {
            dangerous_inner_html: STYLESHEET
        }

        main {
            class: "app",
            GenerateForm { config: FormConfig::strict() }
        }
    }
}
