use crate::constants::{AUTH_FLAVOR_NONE, AUTH_FLAVOR_UNIX};

/// Unix-style (AUTH_SYS) identity attached to a call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnixAuth {
    /// Arbitrary caller-chosen stamp, typically a boot time or counter.
    pub stamp: u32,

    /// Name of the calling machine.
    pub machine_name: String,

    pub uid: u32,
    pub gid: u32,

    /// Supplementary group ids.
    pub gids: Vec<u32>,
}

/// Credential or verifier attached to an RPC call.
///
/// The credential asserts an identity; the verifier, carried in the same
/// wire shape, authenticates the credential itself. Known flavors decode
/// to structured variants; anything else is carried through as `Opaque`
/// raw bytes so unrecognized authentication schemes survive a
/// decode/encode round trip untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RpcAuth {
    /// AUTH_NONE: no identity asserted.
    None,

    /// AUTH_UNIX (AUTH_SYS): uid/gid identity.
    Unix(UnixAuth),

    /// Unrecognized flavor, body preserved verbatim.
    Opaque { flavor: u32, body: Vec<u8> },
}

impl RpcAuth {
    /// The wire flavor discriminant this value encodes under.
    pub fn flavor(&self) -> u32 {
        match self {
            RpcAuth::None => AUTH_FLAVOR_NONE,
            RpcAuth::Unix(_) => AUTH_FLAVOR_UNIX,
            RpcAuth::Opaque { flavor, .. } => *flavor,
        }
    }
}
