//! Non-UI plumbing: the generate-service client and app configuration.

pub mod generator;
pub mod utils;
