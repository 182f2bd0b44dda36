use crate::message::{MessageDirection, RpcMessageType};

/// Fields common to every RPC message kind.
///
/// A call embeds an envelope rather than extending one. The transaction
/// id lives here and is read-only from the call's perspective; the
/// surrounding transport demultiplexes inbound messages by it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcEnvelope {
    pub xid: u32,
    pub msg_type: RpcMessageType,
    pub direction: MessageDirection,
}

impl RpcEnvelope {
    pub fn new(xid: u32, msg_type: RpcMessageType, direction: MessageDirection) -> Self {
        Self {
            xid,
            msg_type,
            direction,
        }
    }

    pub fn direction_is_incoming(&self) -> bool {
        self.direction == MessageDirection::Incoming
    }
}
