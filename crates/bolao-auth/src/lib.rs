//! Login and registration for the bolão app.
//!
//! [`Authenticator`] resolves or creates a user against an injected
//! [`UserStore`](bolao_db::UserStore) and hands the result to a callback.
//! [`AuthScreen`] wraps it with the form state a front end keeps between
//! submits.

pub mod authenticator;
pub mod credentials;
pub mod error;
pub mod policy;
pub mod screen;

pub use authenticator::Authenticator;
pub use credentials::PasswordScheme;
pub use error::AuthError;
pub use screen::AuthScreen;
