//! Request extractors and middleware.
//!
//! - [`session::AdminSession`] -- resolves the session cookie into an
//!   [`AuthContext`](eskipara_core::auth::AuthContext).
//! - [`login_redirect`] -- points login redirects at the configured path.

pub mod session;

mod redirect;

pub use redirect::login_redirect;
