use std::fmt;

use crate::auth::AuthCodec;
use crate::call::{CallDecodeError, CallOptions, CallStreamEvent, RpcCall};
use crate::constants::CALL_HEADER_SIZE;
use crate::message::MessageDirection;
use crate::xdr::XdrCursor;

/// Streaming decoder for one inbound call message.
///
/// Transport chunks may arrive arbitrarily sized and truncated; bytes
/// below the 16-byte fixed-header boundary are carried over until enough
/// accumulate to decode. Header decoding is one-shot per instance: once
/// the four header integers and both auth structures resolve, every later
/// byte is forwarded verbatim as argument payload.
///
/// A decoder constructed with the `Outgoing` direction forwards
/// everything untouched, so the same component can sit transparently in
/// a bidirectional pipeline.
pub struct CallStreamDecoder {
    state: CallDecoderState,
    direction: MessageDirection,
    xid: u32,
    call: Option<RpcCall>,
    pending: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallDecoderState {
    /// Fewer than the fixed header's 16 bytes seen so far.
    Accumulating,

    /// Header decoded; remaining bytes are payload.
    Forwarding,

    /// A previous chunk failed to decode; the instance is unusable.
    Failed,
}

impl CallStreamDecoder {
    /// `xid` is owned by the envelope layer, which demultiplexes inbound
    /// messages before handing their bytes here.
    pub fn new(xid: u32, direction: MessageDirection) -> Self {
        Self {
            state: CallDecoderState::Accumulating,
            direction,
            xid,
            call: None,
            pending: Vec::new(),
        }
    }

    pub fn state(&self) -> CallDecoderState {
        self.state
    }

    pub fn xid(&self) -> u32 {
        self.xid
    }

    /// The decoded call, once the header has resolved.
    pub fn call(&self) -> Option<&RpcCall> {
        self.call.as_ref()
    }

    /// Number of bytes carried over while below the fixed-header
    /// boundary.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Feeds one transport chunk through the decoder.
    ///
    /// Chunks must be delivered in transport order; a zero-length chunk
    /// is a no-op. Events come back in decode order: at most one
    /// `Header`, then a `PayloadChunk` for any bytes past the verifier,
    /// then one `PayloadChunk` per later chunk.
    pub fn read_bytes(&mut self, chunk: &[u8]) -> Result<Vec<CallStreamEvent>, CallDecodeError> {
        let mut events = Vec::new();

        if self.direction == MessageDirection::Outgoing {
            if !chunk.is_empty() {
                events.push(CallStreamEvent::PayloadChunk {
                    xid: self.xid,
                    bytes: chunk.to_vec(),
                });
            }
            return Ok(events);
        }

        match self.state {
            CallDecoderState::Accumulating => {
                self.pending.extend_from_slice(chunk);

                // Not enough for the fixed header yet; carry everything
                // over and wait for the next chunk.
                if self.pending.len() < CALL_HEADER_SIZE {
                    return Ok(events);
                }

                let buffered = std::mem::take(&mut self.pending);

                match self.decode_header(&buffered, &mut events) {
                    Ok(()) => {
                        self.state = CallDecoderState::Forwarding;
                    }
                    Err(e) => {
                        tracing::warn!(xid = self.xid, "call header decode failed: {:?}", e);
                        self.state = CallDecoderState::Failed;
                        return Err(e);
                    }
                }
            }
            CallDecoderState::Forwarding => {
                if !chunk.is_empty() {
                    events.push(CallStreamEvent::PayloadChunk {
                        xid: self.xid,
                        bytes: chunk.to_vec(),
                    });
                }
            }
            CallDecoderState::Failed => {
                return Err(CallDecodeError::ReadAfterFailure);
            }
        }

        Ok(events)
    }

    fn decode_header(
        &mut self,
        buffered: &[u8],
        events: &mut Vec<CallStreamEvent>,
    ) -> Result<(), CallDecodeError> {
        let mut cursor = XdrCursor::new(buffered);

        let rpc_vers = cursor.read_u32().map_err(CallDecodeError::CorruptHeader)?;
        let prog = cursor.read_u32().map_err(CallDecodeError::CorruptHeader)?;
        let vers = cursor.read_u32().map_err(CallDecodeError::CorruptHeader)?;
        let proc = cursor.read_u32().map_err(CallDecodeError::CorruptHeader)?;

        // Credential and verifier ride the same cursor so remaining-byte
        // accounting stays correct for the payload boundary.
        let credential =
            AuthCodec::decode(&mut cursor).map_err(CallDecodeError::MalformedCredential)?;
        let verifier =
            AuthCodec::decode(&mut cursor).map_err(CallDecodeError::MalformedVerifier)?;

        let call = RpcCall::new(CallOptions {
            direction: self.direction,
            xid: Some(self.xid),
            rpc_vers: Some(rpc_vers),
            prog,
            vers,
            proc,
            credential: Some(credential),
            verifier: Some(verifier),
        });

        events.push(CallStreamEvent::Header {
            xid: self.xid,
            call: call.clone(),
        });

        if cursor.remaining() > 0 {
            events.push(CallStreamEvent::PayloadChunk {
                xid: self.xid,
                bytes: cursor.slice_remaining().to_vec(),
            });
        }

        self.call = Some(call);

        Ok(())
    }
}

impl fmt::Display for CallStreamDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.call {
            Some(call) => write!(
                f,
                "CallStreamDecoder <xid={}, prog={}, vers={}, proc={}>",
                self.xid, call.prog, call.vers, call.proc
            ),
            None => write!(
                f,
                "CallStreamDecoder <xid={}, prog=-, vers=-, proc=->",
                self.xid
            ),
        }
    }
}
