mod xdr_cursor;
mod xdr_encoder;
mod xdr_error;

pub use xdr_cursor::XdrCursor;
pub use xdr_encoder::XdrEncoder;
pub use xdr_error::XdrDecodeError;
