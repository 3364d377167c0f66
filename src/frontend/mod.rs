//! Frontend module for the Bookbinder application.

pub mod app;
pub mod components;
pub mod services;
