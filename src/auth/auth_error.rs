use crate::xdr::XdrDecodeError;

#[derive(Debug, Clone, PartialEq)]
pub enum AuthDecodeError {
    /// The declared body length runs past the bytes actually available,
    /// or the body's own fields run past the declared length.
    TruncatedBody { needed: usize, remaining: usize },

    /// The declared body length exceeds the protocol's 400-byte cap.
    OversizedBody { declared: usize },

    /// An AUTH_UNIX machine name is not valid UTF-8.
    BadMachineName,
}

impl From<XdrDecodeError> for AuthDecodeError {
    fn from(e: XdrDecodeError) -> Self {
        match e {
            XdrDecodeError::UnexpectedEof { needed, remaining } => {
                AuthDecodeError::TruncatedBody { needed, remaining }
            }
        }
    }
}
