use crate::auth::{AuthDecodeError, RpcAuth, UnixAuth};
use crate::constants::{AUTH_FLAVOR_NONE, AUTH_FLAVOR_UNIX, AUTH_MAX_BODY_SIZE, XDR_UNIT_SIZE};
use crate::xdr::{XdrCursor, XdrEncoder};

/// Encodes and decodes the credential/verifier structure shared by every
/// call message: a u32 flavor, a u32 body length, and `length` body bytes
/// padded to the XDR unit.
pub struct AuthCodec;

impl AuthCodec {
    /// Decodes one credential or verifier at the cursor position.
    ///
    /// The shared cursor is advanced past the flavor, length, body, and
    /// padding, so remaining-byte accounting stays correct for whatever
    /// follows (another auth structure, or the argument payload).
    pub fn decode(cursor: &mut XdrCursor) -> Result<RpcAuth, AuthDecodeError> {
        let flavor = cursor.read_u32()?;
        let len = cursor.read_u32()? as usize;

        if len > AUTH_MAX_BODY_SIZE {
            return Err(AuthDecodeError::OversizedBody { declared: len });
        }

        let body = cursor.read_opaque(len)?;

        match flavor {
            AUTH_FLAVOR_NONE if body.is_empty() => Ok(RpcAuth::None),
            AUTH_FLAVOR_UNIX => Self::decode_unix(body).map(RpcAuth::Unix),
            _ => Ok(RpcAuth::Opaque {
                flavor,
                body: body.to_vec(),
            }),
        }
    }

    /// Encodes a credential or verifier, appending to `out`.
    pub fn encode(auth: &RpcAuth, out: &mut XdrEncoder) {
        match auth {
            RpcAuth::None => {
                out.write_u32(AUTH_FLAVOR_NONE);
                out.write_u32(0);
            }
            RpcAuth::Unix(unix) => {
                let mut body = XdrEncoder::new();
                body.write_u32(unix.stamp);
                body.write_var_opaque(unix.machine_name.as_bytes());
                body.write_u32(unix.uid);
                body.write_u32(unix.gid);
                body.write_u32(unix.gids.len() as u32);
                for gid in &unix.gids {
                    body.write_u32(*gid);
                }

                out.write_u32(AUTH_FLAVOR_UNIX);
                out.write_var_opaque(body.as_bytes());
            }
            RpcAuth::Opaque { flavor, body } => {
                out.write_u32(*flavor);
                out.write_var_opaque(body);
            }
        }
    }

    fn decode_unix(body: &[u8]) -> Result<UnixAuth, AuthDecodeError> {
        let mut cursor = XdrCursor::new(body);

        let stamp = cursor.read_u32()?;

        let machine_name = std::str::from_utf8(cursor.read_var_opaque()?)
            .map_err(|_| AuthDecodeError::BadMachineName)?
            .to_string();

        let uid = cursor.read_u32()?;
        let gid = cursor.read_u32()?;

        let gid_count = cursor.read_u32()? as usize;

        // Bound the allocation before trusting the declared count.
        if gid_count > cursor.remaining() / XDR_UNIT_SIZE {
            return Err(AuthDecodeError::TruncatedBody {
                needed: gid_count * XDR_UNIT_SIZE,
                remaining: cursor.remaining(),
            });
        }

        let mut gids = Vec::with_capacity(gid_count);
        for _ in 0..gid_count {
            gids.push(cursor.read_u32()?);
        }

        Ok(UnixAuth {
            stamp,
            machine_name,
            uid,
            gid,
            gids,
        })
    }
}
