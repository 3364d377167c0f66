//! UI components. `generate_form.rs` carries the submit/request/result
//! wiring; everything under `common/` is presentational.

pub mod common;
pub mod generate_form;

pub use generate_form::GenerateForm;
