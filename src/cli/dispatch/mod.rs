//! Command-line argument dispatch.
//!
//! This module maps validated CLI arguments to the appropriate action,
//! currently only starting the API server with its demo configuration.

use crate::cli::actions::Action;
use crate::cli::commands::demo;
use anyhow::Result;

/// Map validated CLI matches to a server action.
///
/// # Errors
/// Returns an error if required arguments are missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>("port").copied().unwrap_or(8080);
    let demo_opts = demo::Options::parse(matches)?;

    Ok(Action::Server {
        port,
        frontend_base_url: demo_opts.frontend_base_url,
        demo: demo_opts.accounts,
    })
}
