//! Adboard core - domain models and services for the campaign dashboard.
//!
//! This crate is transport-agnostic: it defines the campaign and session
//! models, the filtering and sorting engine, form validation rules, and the
//! service/repository traits the data-access layer and the CLI build on.

pub mod auth;
pub mod campaigns;
pub mod constants;
pub mod errors;
pub mod events;
pub mod filters;
pub mod forms;
