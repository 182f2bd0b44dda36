use oncwire::message::{MessageDirection, RpcEnvelope, RpcMessageType};
use std::convert::TryFrom;

#[test]
fn message_type_discriminants_match_the_wire() {
    assert_eq!(RpcMessageType::Call as u32, 0);
    assert_eq!(RpcMessageType::Reply as u32, 1);

    assert_eq!(RpcMessageType::try_from(0), Ok(RpcMessageType::Call));
    assert_eq!(RpcMessageType::try_from(1), Ok(RpcMessageType::Reply));
    assert!(RpcMessageType::try_from(7).is_err());
}

#[test]
fn envelope_reports_direction() {
    let envelope = RpcEnvelope::new(42, RpcMessageType::Call, MessageDirection::Incoming);
    assert!(envelope.direction_is_incoming());
    assert_eq!(envelope.xid, 42);

    let envelope = RpcEnvelope::new(43, RpcMessageType::Call, MessageDirection::Outgoing);
    assert!(!envelope.direction_is_incoming());
}
