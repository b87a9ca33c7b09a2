//! Session and authentication: token pair, the two-state auth machine, and
//! the service tying the in-memory session to the durable token store.

mod auth_model;
mod auth_service;
mod auth_traits;
mod session_store;

pub use auth_model::{AuthState, Session, TokenPair};
pub use auth_service::{AuthService, AuthServiceTrait};
pub use auth_traits::{AccessTokenProviderTrait, AuthApiTrait, TokenStoreTrait};
pub use session_store::SessionStore;
