//! CLI arguments for the demo accounts and the allowed frontend origin.

use crate::api::handlers::auth::{
    DemoAccounts, DEFAULT_LOGIN_EMAIL, DEFAULT_LOGIN_PASSWORD, DEFAULT_TAKEN_EMAIL,
};
use anyhow::{Context, Result};
use clap::{Arg, Command};
use secrecy::SecretString;

pub const ARG_FRONTEND_BASE_URL: &str = "frontend-base-url";
pub const ARG_DEMO_EMAIL: &str = "demo-email";
pub const ARG_DEMO_PASSWORD: &str = "demo-password";
pub const ARG_DEMO_TAKEN_EMAIL: &str = "demo-taken-email";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_FRONTEND_BASE_URL)
                .long(ARG_FRONTEND_BASE_URL)
                .help("Frontend base URL allowed by CORS")
                .env("ENSALUTI_FRONTEND_BASE_URL")
                .default_value("http://localhost:3000"),
        )
        .arg(
            Arg::new(ARG_DEMO_EMAIL)
                .long(ARG_DEMO_EMAIL)
                .help("Email of the demo account that can sign in")
                .env("ENSALUTI_DEMO_EMAIL")
                .default_value(DEFAULT_LOGIN_EMAIL),
        )
        .arg(
            Arg::new(ARG_DEMO_PASSWORD)
                .long(ARG_DEMO_PASSWORD)
                .help("Password of the demo account")
                .env("ENSALUTI_DEMO_PASSWORD")
                .default_value(DEFAULT_LOGIN_PASSWORD),
        )
        .arg(
            Arg::new(ARG_DEMO_TAKEN_EMAIL)
                .long(ARG_DEMO_TAKEN_EMAIL)
                .help("Email that signup reports as already registered")
                .env("ENSALUTI_DEMO_TAKEN_EMAIL")
                .default_value(DEFAULT_TAKEN_EMAIL),
        )
}

pub struct Options {
    pub frontend_base_url: String,
    pub accounts: DemoAccounts,
}

impl Options {
    /// Read the demo options out of parsed matches.
    ///
    /// # Errors
    /// Returns an error if a defaulted argument is somehow missing.
    pub fn parse(matches: &clap::ArgMatches) -> Result<Self> {
        let frontend_base_url = matches
            .get_one::<String>(ARG_FRONTEND_BASE_URL)
            .cloned()
            .context("missing required argument: --frontend-base-url")?;
        let login_email = matches
            .get_one::<String>(ARG_DEMO_EMAIL)
            .cloned()
            .context("missing required argument: --demo-email")?;
        let login_password = matches
            .get_one::<String>(ARG_DEMO_PASSWORD)
            .cloned()
            .context("missing required argument: --demo-password")?;
        let taken_email = matches
            .get_one::<String>(ARG_DEMO_TAKEN_EMAIL)
            .cloned()
            .context("missing required argument: --demo-taken-email")?;

        Ok(Self {
            frontend_base_url,
            accounts: DemoAccounts::new(
                login_email,
                SecretString::from(login_password),
                taken_email,
            ),
        })
    }
}
