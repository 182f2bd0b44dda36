mod call_error;
mod call_stream_decoder;
mod call_stream_event;
mod rpc_call;

pub use call_error::CallDecodeError;
pub use call_stream_decoder::{CallDecoderState, CallStreamDecoder};
pub use call_stream_event::CallStreamEvent;
pub use rpc_call::{CallOptions, IdSet, RpcCall};
