use std::convert::TryFrom;

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcMessageType {
    Call = 0,
    Reply = 1,
}

impl TryFrom<u32> for RpcMessageType {
    type Error = ();

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(RpcMessageType::Call),
            1 => Ok(RpcMessageType::Reply),
            _ => Err(()),
        }
    }
}
