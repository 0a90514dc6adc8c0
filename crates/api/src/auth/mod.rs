//! Operator authentication.
//!
//! - [`password`] -- Argon2id hashing and the configured operator account.
//! - [`session`] -- signed `admin_session` cookie.

pub mod password;
pub mod session;
