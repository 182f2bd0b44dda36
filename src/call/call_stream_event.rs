use crate::call::RpcCall;

/// Events produced by `CallStreamDecoder::read_bytes`.
#[derive(Debug, Clone)]
pub enum CallStreamEvent {
    /// The fixed header and both auth structures resolved.
    Header { xid: u32, call: RpcCall },

    /// Argument payload bytes, forwarded verbatim.
    PayloadChunk { xid: u32, bytes: Vec<u8> },
}
