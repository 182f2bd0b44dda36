use crate::auth::AuthDecodeError;
use crate::xdr::XdrDecodeError;

#[derive(Debug, Clone, PartialEq)]
pub enum CallDecodeError {
    /// The fixed header integers could not be read.
    CorruptHeader(XdrDecodeError),

    /// The credential bytes are truncated or internally inconsistent.
    MalformedCredential(AuthDecodeError),

    /// The verifier bytes are truncated or internally inconsistent.
    MalformedVerifier(AuthDecodeError),

    /// Attempted to read through a decoder that already failed.
    ReadAfterFailure,
}
