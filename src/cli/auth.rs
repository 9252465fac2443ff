//! `paceline auth` subcommands.

use clap::Subcommand;
use dialoguer::Password;

use super::context::AppContext;
use super::output;
use crate::error::Result;
use crate::port::outbound::auth::AuthProvider;

#[derive(Subcommand, Debug)]
pub enum AuthCommand {
    /// Register a new account and store the opened session
    SignUp {
        /// Email address to register
        email: String,
    },
    /// Sign in and store the session
    Login {
        /// Email address of the account
        email: String,
    },
    /// Sign out and clear the stored session
    Logout,
    /// Show the signed-in user
    Whoami,
}

pub async fn run(command: AuthCommand, ctx: &AppContext) -> Result<()> {
    match command {
        AuthCommand::SignUp { email } => {
            let password = prompt_password()?;
            let session = ctx.auth().sign_up(&email, &password).await?;
            ctx.sessions.save(&session)?;
            ctx.client.set_access_token(Some(session.access_token.clone()));
            output::ok(&format!("signed up as {}", session.user.email));
        }
        AuthCommand::Login { email } => {
            let password = prompt_password()?;
            let session = ctx.auth().sign_in(&email, &password).await?;
            ctx.sessions.save(&session)?;
            ctx.client.set_access_token(Some(session.access_token.clone()));
            output::ok(&format!("signed in as {}", session.user.email));
        }
        AuthCommand::Logout => match ctx.sessions.load()? {
            Some(session) => {
                ctx.auth().sign_out(&session.access_token).await?;
                ctx.sessions.clear()?;
                output::ok("signed out");
            }
            None => output::note("not signed in"),
        },
        AuthCommand::Whoami => match ctx.sessions.load()? {
            Some(session) => match ctx.auth().current_user(&session.access_token).await? {
                Some(user) => {
                    output::key_value("user", &user.email);
                    output::key_value("id", user.id);
                }
                None => output::note("session expired; sign in again"),
            },
            None => output::note("not signed in"),
        },
    }
    Ok(())
}

fn prompt_password() -> Result<String> {
    Ok(Password::new().with_prompt("Password").interact()?)
}
