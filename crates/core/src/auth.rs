//! Per-request admin capability.

use crate::error::CoreError;

/// Whether the current request carries a valid admin session.
///
/// Built once per request from the session cookie and passed explicitly into
/// every mutating listing operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AuthContext {
    pub is_admin: bool,
}

impl AuthContext {
    pub const fn admin() -> Self {
        Self { is_admin: true }
    }

    pub const fn anonymous() -> Self {
        Self { is_admin: false }
    }

    /// Fail with [`CoreError::Unauthorized`] unless this is an admin request.
    pub fn require_admin(&self) -> Result<(), CoreError> {
        if self.is_admin {
            Ok(())
        } else {
            Err(CoreError::Unauthorized("Admin session required".into()))
        }
    }
}
