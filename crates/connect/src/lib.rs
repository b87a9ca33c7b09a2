//! Adboard Connect - remote data access for the campaign backend.
//!
//! This crate owns everything that touches the wire: the shared reqwest
//! client, the snake_case wire shapes and their normalization into domain
//! models, the token endpoints, and the cached campaign repository.

mod auth_api;
mod client;
mod repository;
mod wire;

pub use auth_api::AuthApi;
pub use client::ApiClient;
pub use repository::{CampaignApiTrait, CampaignRepository};
pub use wire::{ApiCampaign, ApiCampaignPayload, ApiChannel, ApiChannelRef};
