//! Factorization status reporting
//!
//! Numerical failures come back from the backend as integer status codes.
//! They are carried to the caller verbatim: the adapter neither interprets,
//! retries nor suppresses them. Zero maps to `Ok(())`; anything else to a
//! [`FactorError`] holding the native code unchanged, with the sign and
//! magnitude conventions of the specific routine (positive: numerical
//! failure such as an exactly singular pivot; negative: invalid argument
//! position).

/// A nonzero status code from a factorization routine, reported verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{routine} returned status {status}")]
pub struct FactorError {
    /// Native routine family the status came from (e.g. `"gesv"`).
    pub routine: &'static str,
    /// The backend's status code, unchanged.
    pub status: i32,
}

impl FactorError {
    /// The native status code.
    pub fn status(&self) -> i32 {
        self.status
    }
}

pub(crate) fn check(routine: &'static str, status: i32) -> Result<(), FactorError> {
    if status == 0 {
        Ok(())
    } else {
        Err(FactorError { routine, status })
    }
}
