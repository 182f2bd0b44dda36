mod auth_codec;
mod auth_credential;
mod auth_error;

pub use auth_codec::AuthCodec;
pub use auth_credential::{RpcAuth, UnixAuth};
pub use auth_error::AuthDecodeError;
