//! Demo login and signup flows over a mock authentication API.
//!
//! The `api` module serves the demo endpoints, `forms` holds the headless
//! form controllers and their collaborators, and `cli` wires the server
//! binary together.

pub mod api;
pub mod cli;
pub mod forms;
