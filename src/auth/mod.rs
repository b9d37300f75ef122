//! Password gate for the interactive session
//!
//! The credential check is a pluggable capability so a real deployment could
//! substitute an external provider; here it is a stub comparing against a
//! fixed secret. Exhausting the attempt budget denies the session only; the
//! stored records are untouched.

use crate::error::{TrackerError, TrackerResult};

/// A credential-checking capability
pub trait CredentialCheck {
    /// Check whether the supplied input unlocks the session
    fn verify(&self, input: &str) -> bool;
}

/// Stub checker that compares against a fixed secret
pub struct StaticPassword {
    secret: String,
}

impl StaticPassword {
    /// Create a checker for the given secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl CredentialCheck for StaticPassword {
    fn verify(&self, input: &str) -> bool {
        input == self.secret
    }
}

/// Limits password attempts before denying the session
pub struct PasswordGate<C> {
    checker: C,
    max_attempts: u32,
}

impl<C: CredentialCheck> PasswordGate<C> {
    /// Default attempt budget
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

    /// Create a gate with the default attempt budget
    pub fn new(checker: C) -> Self {
        Self::with_max_attempts(checker, Self::DEFAULT_MAX_ATTEMPTS)
    }

    /// Create a gate with a custom attempt budget
    pub fn with_max_attempts(checker: C, max_attempts: u32) -> Self {
        Self {
            checker,
            max_attempts,
        }
    }

    /// The configured attempt budget
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Run the gate, pulling attempts from the supplied closure
    ///
    /// The closure receives the number of attempts remaining (including the
    /// one being requested), so a caller can report earlier failures before
    /// prompting again. Returns [`TrackerError::AccessDenied`] once the
    /// budget is exhausted.
    pub fn unlock<F>(&self, mut read_attempt: F) -> TrackerResult<()>
    where
        F: FnMut(u32) -> TrackerResult<String>,
    {
        for remaining in (1..=self.max_attempts).rev() {
            let input = read_attempt(remaining)?;
            if self.checker.verify(&input) {
                return Ok(());
            }
        }
        Err(TrackerError::AccessDenied)
    }
}
