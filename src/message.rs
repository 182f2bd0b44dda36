mod message_direction;
mod message_envelope;
mod message_type;

pub use message_direction::MessageDirection;
pub use message_envelope::RpcEnvelope;
pub use message_type::RpcMessageType;
