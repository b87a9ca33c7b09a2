//! Session commands.

use anyhow::Context as _;

use adboard_core::auth::AuthState;

use super::require_signin;
use crate::context::ServiceContext;

pub async fn login(
    context: &ServiceContext,
    username: &str,
    password: &str,
) -> anyhow::Result<()> {
    context
        .auth_service
        .login(username, password)
        .await
        .context("Login failed. Please check your credentials.")?;
    println!("Login successful!");
    Ok(())
}

pub fn logout(context: &ServiceContext) -> anyhow::Result<()> {
    context.auth_service.logout()?;
    println!("Signed out.");
    Ok(())
}

pub fn status(context: &ServiceContext) -> anyhow::Result<()> {
    match context.auth_service.state() {
        AuthState::Authenticated => println!("Signed in."),
        AuthState::Unauthenticated => println!("Not signed in."),
    }
    Ok(())
}

pub async fn refresh(context: &ServiceContext) -> anyhow::Result<()> {
    require_signin(context)?;
    context
        .auth_service
        .refresh()
        .await
        .context("Token refresh failed; the session has been cleared.")?;
    println!("Session refreshed.");
    Ok(())
}
