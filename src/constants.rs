// Call header related constants
pub const CALL_RPC_VERS_OFFSET: usize = 0;
pub const CALL_PROG_OFFSET: usize = 4;
pub const CALL_VERS_OFFSET: usize = 8;
pub const CALL_PROC_OFFSET: usize = 12;

/// Size in bytes of the fixed call header: rpcvers, prog, vers, proc,
/// each a 4-byte big-endian integer.
pub const CALL_HEADER_SIZE: usize = 16;

/// RPC protocol version written when construction options omit one.
pub const RPC_VERSION: u32 = 2;

/// Size in bytes of one XDR unit. Every encoded item occupies a
/// multiple of this, zero-padded as needed.
pub const XDR_UNIT_SIZE: usize = 4;

/// Flavor discriminant for AUTH_NONE.
pub const AUTH_FLAVOR_NONE: u32 = 0;

/// Flavor discriminant for AUTH_UNIX (AUTH_SYS).
pub const AUTH_FLAVOR_UNIX: u32 = 1;

/// Flavor discriminant for AUTH_SHORT.
pub const AUTH_FLAVOR_SHORT: u32 = 2;

/// Flavor discriminant for AUTH_DES.
pub const AUTH_FLAVOR_DES: u32 = 3;

/// Upper bound on an auth body length, per the protocol definition.
pub const AUTH_MAX_BODY_SIZE: usize = 400;

/// Wire size of an empty auth structure: a 4-byte flavor plus a 4-byte
/// zero body length.
pub const AUTH_EMPTY_SIZE: usize = 8;

/// Bytes reserved ahead of any payload by `RpcCall::serialize`: the fixed
/// call header, an 8-byte empty credential, and an 8-byte null verifier.
pub const CALL_SERIALIZE_RESERVED: usize = CALL_HEADER_SIZE + 2 * AUTH_EMPTY_SIZE;
