use oncwire::auth::{RpcAuth, UnixAuth};
use oncwire::call::{CallOptions, RpcCall};
use oncwire::constants::{
    CALL_PROC_OFFSET, CALL_PROG_OFFSET, CALL_RPC_VERS_OFFSET, CALL_SERIALIZE_RESERVED,
    CALL_VERS_OFFSET, RPC_VERSION,
};
use oncwire::message::MessageDirection;

fn unix_call(uid: u32, gid: u32, gids: Vec<u32>) -> RpcCall {
    RpcCall::new(CallOptions {
        direction: MessageDirection::Incoming,
        xid: Some(1),
        rpc_vers: None,
        prog: 100003,
        vers: 3,
        proc: 1,
        credential: Some(RpcAuth::Unix(UnixAuth {
            stamp: 0,
            machine_name: "client1".to_string(),
            uid,
            gid,
            gids,
        })),
        verifier: None,
    })
}

#[test]
fn defaults_fill_in_missing_options() {
    let call = RpcCall::new(CallOptions {
        direction: MessageDirection::Outgoing,
        xid: None,
        rpc_vers: None,
        prog: 100000,
        vers: 3,
        proc: 5,
        credential: None,
        verifier: None,
    });

    assert_eq!(call.rpc_vers, RPC_VERSION);
    assert_eq!(call.credential, RpcAuth::None);
    assert_eq!(call.verifier, RpcAuth::None);
    assert!(!call.envelope.direction_is_incoming());
}

#[test]
fn generated_xids_are_distinct() {
    let opts = || CallOptions {
        direction: MessageDirection::Outgoing,
        xid: None,
        rpc_vers: None,
        prog: 100000,
        vers: 3,
        proc: 5,
        credential: None,
        verifier: None,
    };

    let a = RpcCall::new(opts());
    let b = RpcCall::new(opts());
    assert_ne!(a.xid(), b.xid());
}

#[test]
fn is_user_matches_unix_uid() {
    let call = unix_call(1001, 20, vec![]);

    assert!(call.is_user(1001));
    assert!(!call.is_user(1002));
    assert!(call.is_user(vec![5, 1001]));
    assert!(call.is_user(&[5, 1001][..]));
    assert!(!call.is_user(vec![5, 6]));
}

#[test]
fn is_user_is_false_without_a_unix_credential() {
    let mut call = unix_call(1001, 20, vec![]);
    call.credential = RpcAuth::None;

    assert!(!call.is_user(1001));
    assert!(!call.is_in_group(20));
}

#[test]
fn is_in_group_matches_primary_and_supplementary_gids() {
    let call = unix_call(1001, 50, vec![30]);

    assert!(call.is_in_group([20, 30])); // matches supplementary gid 30
    assert!(!call.is_in_group(99));
    assert!(call.is_in_group(50)); // primary gid
}

#[test]
fn serialized_header_layout_is_fixed() {
    let call = RpcCall::new(CallOptions {
        direction: MessageDirection::Outgoing,
        xid: Some(7),
        rpc_vers: None,
        prog: 100000,
        vers: 3,
        proc: 5,
        credential: None,
        verifier: None,
    });

    let bytes = call.serialize(None).into_bytes();

    assert_eq!(bytes.len(), CALL_SERIALIZE_RESERVED);
    assert_eq!(
        &bytes[CALL_RPC_VERS_OFFSET..CALL_RPC_VERS_OFFSET + 4],
        &RPC_VERSION.to_be_bytes()
    );
    assert_eq!(
        &bytes[CALL_PROG_OFFSET..CALL_PROG_OFFSET + 4],
        &100000u32.to_be_bytes()
    );
    assert_eq!(
        &bytes[CALL_VERS_OFFSET..CALL_VERS_OFFSET + 4],
        &3u32.to_be_bytes()
    );
    assert_eq!(
        &bytes[CALL_PROC_OFFSET..CALL_PROC_OFFSET + 4],
        &5u32.to_be_bytes()
    );

    // Empty credential and null verifier slots
    assert!(bytes[16..].iter().all(|b| *b == 0));
}

#[test]
fn serialize_always_writes_the_empty_credential_slots() {
    // Even a configured Unix credential serializes as the fixed empty
    // 8-byte credential/verifier reservation.
    let call = unix_call(1001, 20, vec![20]);
    let bytes = call.serialize(None).into_bytes();

    assert_eq!(bytes.len(), CALL_SERIALIZE_RESERVED);
    assert!(bytes[16..].iter().all(|b| *b == 0));
}

#[test]
fn serialize_leaves_the_encoder_appendable() {
    let call = RpcCall::new(CallOptions {
        direction: MessageDirection::Outgoing,
        xid: Some(7),
        rpc_vers: None,
        prog: 100000,
        vers: 3,
        proc: 5,
        credential: None,
        verifier: None,
    });

    let mut xdr = call.serialize(Some(8));
    xdr.write_u32(0xdead_beef);
    xdr.write_u32(0x0bad_f00d);

    let bytes = xdr.into_bytes();
    assert_eq!(bytes.len(), CALL_SERIALIZE_RESERVED + 8);
    assert_eq!(&bytes[32..36], &0xdead_beefu32.to_be_bytes());
}

#[test]
fn display_renders_identifying_fields() {
    let call = unix_call(1001, 20, vec![]);
    assert_eq!(
        format!("{}", call),
        "RpcCall <xid=1, prog=100003, vers=3, proc=1>"
    );
}
