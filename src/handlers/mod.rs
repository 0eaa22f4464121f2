//! HTTP handlers, one module per feature.
//!
//! Handlers stay thin: extract, validate (through `ValidatedJson`), call the
//! feature service built from the shared repository, and pick the status code.

pub mod about;
pub mod auth;
pub mod contact;
pub mod course;
pub mod dashboard;
pub mod event;
pub mod faculty;
pub mod faq;
pub mod footer;
pub mod gallery;
pub mod homepage;
pub mod public;
pub mod service;
