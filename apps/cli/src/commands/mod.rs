//! Command handlers: thin delegation from the parsed CLI surface to the
//! service context.

pub mod auth;
pub mod campaigns;

use anyhow::anyhow;

use crate::context::ServiceContext;

/// Gate for protected commands; mirrors the login redirect of a web
/// dashboard.
pub(crate) fn require_signin(context: &ServiceContext) -> anyhow::Result<()> {
    context
        .auth_service
        .require_authenticated()
        .map_err(|_| anyhow!("Not signed in. Run `adboard login` first."))
}
