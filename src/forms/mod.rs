//! Headless login and signup form controllers. Each controller owns its input
//! values, validation errors, loading flag and result notice, and talks to the
//! auth API through the [`client::AuthApi`] trait so views and tests can stay
//! decoupled from the network.

pub mod client;
pub mod fields;
pub mod guards;
pub mod login;
pub mod navigator;
pub mod session;
pub mod signup;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{AuthApi, ClientError, RemoteAuthClient};
pub use fields::{FieldErrors, FieldId, Notice, NoticeKind, SubmitOutcome};
pub use login::LoginForm;
pub use navigator::{Navigator, RecordingNavigator};
pub use session::SessionStore;
pub use signup::{PasswordStrength, SignupForm};
