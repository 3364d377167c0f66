//! Progressbar component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ProgressBarProps {
    pub show: bool,
    /// 0–100, rendered as the bar width.
    pub progress: f32,
    pub status: String,
}

#[component]
pub fn ProgressBar(props: ProgressBarProps) -> Element {
    let ProgressBarProps {
        show,
        progress,
        status,
    } = props;

    if !show {
        return rsx! { div {} };
    }

    rsx! {
        div {
            class: "progress-container",
            style: "--progress-width: {progress}%",

            div {
                class: "progress-text",
                "{status}"
            }

            div {
                class: "progress-bar",
                div { class: "progress" }
            }
        }
    }
}
