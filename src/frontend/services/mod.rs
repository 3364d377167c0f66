//! Non-visual state behind the UI components.

pub mod progress;
pub mod submission;

pub use progress::SimulatedProgress;
pub use submission::{
    FormConfig, SubmissionPhase, SubmissionView, drive_submission, phase_after_response,
};
