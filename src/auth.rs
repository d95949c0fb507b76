//! Person Gallery - Authentication Gate
//!
//! External yes/no authentication consumed before the hidden records
//! may be revealed. The gate itself is host-provided (biometrics on a
//! phone, a PIN on the CLI); the store only ever sees the outcome.
//!
//! Unlocking requires an [`AuthProof`], and the only way to mint one is
//! [`request_unlock`], so callers cannot skip the gate.

use crate::error::{GalleryError, GalleryResult};

/// Whether the gate can authenticate at all on this host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    Available,
    /// Human-readable reason, surfaced to the user verbatim.
    Unavailable { reason: String },
}

/// Why an authentication attempt produced no proof.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthFailure {
    /// The user tried and was rejected.
    Failed { reason: String },
    /// The user backed out of the prompt.
    Cancelled,
}

/// Evidence of a successful gate decision.
///
/// Cannot be constructed outside this module; pass it to
/// [`GalleryStore::unlock`](crate::gallery::GalleryStore::unlock).
pub struct AuthProof {
    _private: (),
}

/// Host-side authentication gate.
pub trait AuthenticationGate: Send + Sync {
    /// Probe whether authentication can be attempted at all.
    fn availability(&self) -> Availability;

    /// Run the authentication flow, showing `prompt` to the user.
    fn authenticate(&self, prompt: &str) -> Result<(), AuthFailure>;
}

/// Run the full gate flow: availability probe, then the prompt.
///
/// Each failure mode maps to its own error variant so the caller can
/// show a distinct message per case.
pub fn request_unlock(gate: &dyn AuthenticationGate, prompt: &str) -> GalleryResult<AuthProof> {
    match gate.availability() {
        Availability::Unavailable { reason } => {
            return Err(GalleryError::AuthUnavailable(reason));
        }
        Availability::Available => {}
    }

    match gate.authenticate(prompt) {
        Ok(()) => Ok(AuthProof { _private: () }),
        Err(AuthFailure::Failed { reason }) => Err(GalleryError::AuthFailed(reason)),
        Err(AuthFailure::Cancelled) => Err(GalleryError::AuthCancelled),
    }
}

/// PIN-based gate for hosts without biometrics.
pub struct PinGate {
    expected: String,
    provided: String,
}

impl PinGate {
    pub fn new(expected: impl Into<String>, provided: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
            provided: provided.into(),
        }
    }
}

impl AuthenticationGate for PinGate {
    fn availability(&self) -> Availability {
        Availability::Available
    }

    fn authenticate(&self, _prompt: &str) -> Result<(), AuthFailure> {
        if self.provided == self.expected {
            Ok(())
        } else {
            Err(AuthFailure::Failed {
                reason: "Wrong PIN".into(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DenyingGate;

    impl AuthenticationGate for DenyingGate {
        fn availability(&self) -> Availability {
            Availability::Available
        }

        fn authenticate(&self, _prompt: &str) -> Result<(), AuthFailure> {
            Err(AuthFailure::Failed {
                reason: "Biometrics authentication failed".into(),
            })
        }
    }

    struct AbsentGate;

    impl AuthenticationGate for AbsentGate {
        fn availability(&self) -> Availability {
            Availability::Unavailable {
                reason: "Biometrics authentication is not available".into(),
            }
        }

        fn authenticate(&self, _prompt: &str) -> Result<(), AuthFailure> {
            unreachable!("authenticate must not be called when unavailable")
        }
    }

    #[test]
    fn test_pin_gate() {
        let gate = PinGate::new("1234", "1234");
        assert!(request_unlock(&gate, "Unlock").is_ok());

        let gate = PinGate::new("1234", "0000");
        assert!(matches!(
            request_unlock(&gate, "Unlock"),
            Err(GalleryError::AuthFailed(_))
        ));
    }

    #[test]
    fn test_unavailable_gate_is_not_prompted() {
        assert!(matches!(
            request_unlock(&AbsentGate, "Unlock"),
            Err(GalleryError::AuthUnavailable(_))
        ));
    }

    #[test]
    fn test_denied_gate_yields_no_proof() {
        assert!(matches!(
            request_unlock(&DenyingGate, "Unlock"),
            Err(GalleryError::AuthFailed(_))
        ));
    }

    #[test]
    fn test_cancelled_maps_to_cancelled() {
        struct CancellingGate;
        impl AuthenticationGate for CancellingGate {
            fn availability(&self) -> Availability {
                Availability::Available
            }
            fn authenticate(&self, _prompt: &str) -> Result<(), AuthFailure> {
                Err(AuthFailure::Cancelled)
            }
        }

        assert!(matches!(
            request_unlock(&CancellingGate, "Unlock"),
            Err(GalleryError::AuthCancelled)
        ));
    }
}
