use std::fmt;

use crate::auth::{AuthCodec, RpcAuth};
use crate::constants::{CALL_SERIALIZE_RESERVED, RPC_VERSION};
use crate::message::{MessageDirection, RpcEnvelope, RpcMessageType};
use crate::utils::generate_xid;
use crate::xdr::XdrEncoder;

/// Construction options for `RpcCall`.
///
/// `direction` is the only field without a usable default; everything
/// else falls back: a freshly generated xid, RPC protocol version 2, and
/// empty credential/verifier.
pub struct CallOptions {
    pub direction: MessageDirection,
    pub xid: Option<u32>,
    pub rpc_vers: Option<u32>,
    pub prog: u32,
    pub vers: u32,
    pub proc: u32,
    pub credential: Option<RpcAuth>,
    pub verifier: Option<RpcAuth>,
}

/// One RPC call message: the envelope identity, the four integers that
/// select the remote procedure, and the credential/verifier pair
/// asserting who is calling.
#[derive(Debug, Clone, PartialEq)]
pub struct RpcCall {
    pub envelope: RpcEnvelope,
    pub rpc_vers: u32,
    pub prog: u32,
    pub vers: u32,
    pub proc: u32,
    pub credential: RpcAuth,
    pub verifier: RpcAuth,
}

impl RpcCall {
    pub fn new(opts: CallOptions) -> Self {
        Self {
            envelope: RpcEnvelope::new(
                opts.xid.unwrap_or_else(generate_xid),
                RpcMessageType::Call,
                opts.direction,
            ),
            rpc_vers: opts.rpc_vers.unwrap_or(RPC_VERSION),
            prog: opts.prog,
            vers: opts.vers,
            proc: opts.proc,
            credential: opts.credential.unwrap_or(RpcAuth::None),
            verifier: opts.verifier.unwrap_or(RpcAuth::None),
        }
    }

    pub fn xid(&self) -> u32 {
        self.envelope.xid
    }

    /// True when the credential is Unix-flavored and its uid matches any
    /// candidate. Accepts a single id or a sequence of ids.
    pub fn is_user<I: Into<IdSet>>(&self, users: I) -> bool {
        let users = users.into();

        match &self.credential {
            RpcAuth::Unix(unix) => users.contains(unix.uid),
            _ => false,
        }
    }

    /// True when the credential is Unix-flavored and its primary gid, or
    /// any supplementary gid, matches any candidate.
    pub fn is_in_group<I: Into<IdSet>>(&self, groups: I) -> bool {
        let groups = groups.into();

        match &self.credential {
            RpcAuth::Unix(unix) => {
                groups.contains(unix.gid) || unix.gids.iter().any(|gid| groups.contains(*gid))
            }
            _ => false,
        }
    }

    /// Serializes the fixed call header.
    ///
    /// Reserves the 16-byte call header plus an 8-byte credential slot
    /// and an 8-byte null verifier slot, with room for `size_hint`
    /// payload bytes on top; the caller appends the argument payload to
    /// the returned encoder.
    ///
    /// The credential slot always carries an empty credential:
    /// arbitrary-length credential encoding is not supported on this
    /// path, whatever `self.credential` holds.
    pub fn serialize(&self, size_hint: Option<usize>) -> XdrEncoder {
        let mut xdr = XdrEncoder::with_reserved(CALL_SERIALIZE_RESERVED, size_hint);

        xdr.write_u32(self.rpc_vers);
        xdr.write_u32(self.prog);
        xdr.write_u32(self.vers);
        xdr.write_u32(self.proc);

        AuthCodec::encode(&RpcAuth::None, &mut xdr);
        AuthCodec::encode(&RpcAuth::None, &mut xdr); // verifier

        xdr
    }
}

impl fmt::Display for RpcCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RpcCall <xid={}, prog={}, vers={}, proc={}>",
            self.envelope.xid, self.prog, self.vers, self.proc
        )
    }
}

/// Candidate id list for the credential predicates: a single id or an
/// ordered sequence, normalized to one shape before comparison.
pub struct IdSet(Vec<u32>);

impl IdSet {
    fn contains(&self, id: u32) -> bool {
        self.0.iter().any(|candidate| *candidate == id)
    }
}

impl From<u32> for IdSet {
    fn from(id: u32) -> Self {
        IdSet(vec![id])
    }
}

impl From<Vec<u32>> for IdSet {
    fn from(ids: Vec<u32>) -> Self {
        IdSet(ids)
    }
}

impl From<&[u32]> for IdSet {
    fn from(ids: &[u32]) -> Self {
        IdSet(ids.to_vec())
    }
}

impl<const N: usize> From<[u32; N]> for IdSet {
    fn from(ids: [u32; N]) -> Self {
        IdSet(ids.to_vec())
    }
}
