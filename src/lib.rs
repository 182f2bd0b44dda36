pub mod auth;
pub mod call;
pub mod constants;
pub mod message;
pub mod utils;
pub mod xdr;
