use std::sync::Arc;

use crate::config::AdminConfig;

/// Client-local persistence for the "admin unlocked" flag. This is a session
/// convenience, not a security boundary; the flag carries no integrity
/// protection.
pub trait SessionStore: Send + Sync {
    fn set_authenticated(&self, authenticated: bool) -> Result<(), SessionStoreError>;
    fn is_authenticated(&self) -> Result<bool, SessionStoreError>;
    fn clear(&self) -> Result<(), SessionStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}

/// The configured admin access code. Absence is tolerated at startup and
/// surfaces as a configuration error only when someone attempts to log in.
#[derive(Debug, Clone, Default)]
pub struct AdminAccess {
    access_code: Option<String>,
}

impl AdminAccess {
    pub fn new(access_code: Option<String>) -> Self {
        let access_code = access_code
            .map(|code| code.trim().to_string())
            .filter(|code| !code.is_empty());
        Self { access_code }
    }

    pub fn from_config(config: &AdminConfig) -> Self {
        Self::new(config.access_code.clone())
    }

    pub fn is_configured(&self) -> bool {
        self.access_code.is_some()
    }

    /// Exact-equality check of the trimmed attempt against the configured
    /// code.
    pub fn verify(&self, attempt: &str) -> Result<(), AdminAccessError> {
        let configured = self
            .access_code
            .as_deref()
            .ok_or(AdminAccessError::NotConfigured)?;

        if attempt.trim() == configured {
            Ok(())
        } else {
            Err(AdminAccessError::InvalidCode)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdminAccessError {
    #[error("admin access code is not configured; set ADMIN_ACCESS_CODE")]
    NotConfigured,
    #[error("admin access code does not match")]
    InvalidCode,
}

/// Explicit session context for the admin view: login sets the stored flag,
/// logout clears it, and the guarded endpoints read it.
pub struct AdminSessionService<S> {
    access: AdminAccess,
    store: Arc<S>,
}

impl<S> AdminSessionService<S>
where
    S: SessionStore + 'static,
{
    pub fn new(access: AdminAccess, store: Arc<S>) -> Self {
        Self { access, store }
    }

    pub fn login(&self, attempt: &str) -> Result<(), AdminSessionError> {
        self.access.verify(attempt)?;
        self.store.set_authenticated(true)?;
        Ok(())
    }

    pub fn logout(&self) -> Result<(), AdminSessionError> {
        self.store.clear()?;
        Ok(())
    }

    pub fn is_authenticated(&self) -> Result<bool, AdminSessionError> {
        Ok(self.store.is_authenticated()?)
    }
}

/// Error raised by the admin session flow.
#[derive(Debug, thiserror::Error)]
pub enum AdminSessionError {
    #[error(transparent)]
    Access(#[from] AdminAccessError),
    #[error(transparent)]
    Store(#[from] SessionStoreError),
}
