//! The generate form: URL input, submit control, progress indicator and
//! result rendering, all driven by the submission phase.

use dioxus::{events::KeyboardEvent, prelude::*};
use log::error;

use crate::backend::generator::{GenerateClient, GenerateOutcome, download_artifact};
use crate::backend::utils::AppConfig;
use crate::frontend::components::common::{Button, ButtonSize, ButtonVariant, ProgressBar};
use crate::frontend::services::progress::SimulatedProgress;
use crate::frontend::services::submission::{
    FormConfig, SubmissionPhase, SubmissionView, drive_submission,
};

/// Saving the generated artifact to disk, with real byte progress.
#[derive(Debug, Clone, PartialEq, Default)]
enum SaveState {
    #[default]
    Idle,
    Saving(f32),
    Saved(String),
    Failed(String),
}

/// Signal-backed view for `drive_submission`. Each submission gets its own
/// sequence number; once a newer one takes over, this one's late writes are
/// suppressed so it cannot hide the successor's progress bar.
struct FormView {
    seq: u64,
    active: Signal<u64>,
    phase: Signal<SubmissionPhase>,
    progress: Signal<SimulatedProgress>,
    progress_visible: Signal<bool>,
}

impl SubmissionView for FormView {
    fn set_phase(&mut self, phase: SubmissionPhase) {
        self.phase.set(phase);
    }

    fn show_progress(&mut self) {
        self.progress.set(SimulatedProgress::new());
        self.progress_visible.set(true);
    }

    fn tick_progress(&mut self) {
        self.progress.write().tick();
    }

    fn finish_progress(&mut self) {
        self.progress.write().finish();
    }

    fn hide_progress(&mut self) {
        self.progress_visible.set(false);
    }

    fn is_stale(&self) -> bool {
        (self.active)() != self.seq
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct GenerateFormProps {
    pub config: FormConfig,
}

#[component]
pub fn GenerateForm(props: GenerateFormProps) -> Element {
    let client = use_context::<GenerateClient>();
    let app_config = use_context::<AppConfig>();

    let mut url = use_signal(String::new);
    let mut phase = use_signal(SubmissionPhase::default);
    let progress = use_signal(SimulatedProgress::new);
    let progress_visible = use_signal(|| false);
    let mut save = use_signal(SaveState::default);
    let mut active_submission = use_signal(|| 0u64);

    let submit = use_callback({
        let client = client.clone();
        let config = props.config.clone();
        move |()| {
            // One request in flight at a time; the button is disabled while
            // loading, this also covers the Enter key.
            if phase.read().is_loading() {
                return;
            }

            let input = url.read().trim().to_string();
            if let Some(err) = config.validate(&input) {
                phase.set(SubmissionPhase::Error(config.message_for(&err)));
                return;
            }

            // Entered synchronously so a second event in the same batch hits
            // the guard above; drive_submission sets it again harmlessly.
            phase.set(SubmissionPhase::Loading);
            save.set(SaveState::Idle);
            let seq = active_submission() + 1;
            active_submission.set(seq);

            let client = client.clone();
            let config = config.clone();
            spawn(async move {
                let mut view = FormView {
                    seq,
                    active: active_submission,
                    phase,
                    progress,
                    progress_visible,
                };
                let request = async {
                    let result = client.generate(&input).await;
                    if let Err(err) = &result {
                        error!("generation failed: {err}");
                    }
                    result
                };
                drive_submission(&mut view, &config, request).await;
            });
        }
    });

    let on_save = use_callback({
        let client = client.clone();
        let download_dir = app_config.download_dir();
        move |outcome: GenerateOutcome| {
            let client = client.clone();
            let dir = download_dir.clone();
            save.set(SaveState::Saving(0.0));

            spawn(async move {
                let result = download_artifact(&client, &outcome, &dir, move |p| {
                    save.set(SaveState::Saving(p.percent().unwrap_or(0.0)));
                })
                .await;

                match result {
                    Ok(path) => save.set(SaveState::Saved(path.display().to_string())),
                    Err(err) => {
                        error!("saving book failed: {err}");
                        save.set(SaveState::Failed("Could not save the book.".to_string()));
                    }
                }
            });
        }
    });

    let on_keypress = move |event: KeyboardEvent| {
        if event.key() == Key::Enter {
            submit.call(());
        }
    };

    let phase_view = phase.read().clone();
    let loading = phase_view.is_loading();
    let percent = progress.read().percent();

    let status_view = match &phase_view {
        SubmissionPhase::Idle => rsx! {},
        SubmissionPhase::Loading => rsx! {
            div {
                class: "loading-state",
                div { class: "spinner" }
                p { "Generating your book…" }
            }
        },
        SubmissionPhase::Error(message) => rsx! {
            div {
                class: "alert alert-error fade-in",
                "{message}"
            }
        },
        SubmissionPhase::Success(_) => rsx! {
            div {
                class: "alert alert-success fade-in",
                "Book generated successfully!"
            }
        },
    };

    let download_view = match &phase_view {
        SubmissionPhase::Success(outcome) => {
            let ready_name = outcome.suggested_filename();
            let save_view = save.read().clone();
            let save_action = match &save_view {
                SaveState::Idle | SaveState::Failed(_) => {
                    let label = if matches!(save_view, SaveState::Failed(_)) {
                        "Try again"
                    } else {
                        "Save book"
                    };
                    let outcome = outcome.clone();
                    rsx! {
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| on_save.call(outcome.clone()),
                            "{label}"
                        }
                    }
                }
                SaveState::Saving(pct) => {
                    let pct = *pct;
                    rsx! { p { class: "saving", "Saving… {pct:.0}%" } }
                }
                SaveState::Saved(path) => rsx! {
                    p { class: "saved", "Saved to {path}" }
                },
            };
            let save_error = match &save_view {
                SaveState::Failed(message) => rsx! {
                    div { class: "alert alert-error", "{message}" }
                },
                _ => rsx! {},
            };

            rsx! {
                section {
                    class: "download-section fade-in",
                    p { "Your book is ready: {ready_name}" }
                    {save_error}
                    {save_action}
                }
            }
        }
        _ => rsx! {},
    };

    rsx! {
        section {
            class: "generate-form",

            h1 {
                class: "form-title",
                "Turn a blog into a book"
            }
            p {
                class: "form-hint",
                "Paste a blog URL and get it back as a readable book."
            }

            div {
                class: "form-row",
                input {
                    class: "url-input",
                    r#type: "text",
                    placeholder: "https://blog.example.com",
                    value: "{url()}",
                    oninput: move |event| url.set(event.value()),
                    onkeypress: on_keypress,
                }
                Button {
                    size: ButtonSize::Lg,
                    variant: ButtonVariant::Solid,
                    disabled: loading,
                    onclick: move |_| submit.call(()),
                    if loading { "Generating…" } else { "Generate book" }
                }
            }

            div {
                class: "status",
                {status_view}
            }

            ProgressBar {
                show: progress_visible(),
                progress: percent,
                status: format!("{percent:.0}%"),
            }

            {download_view}
        }
    }
}
