/// Which half of the transform a message participates in.
///
/// Fixed at construction and never mutated: an `Incoming` call is decoded
/// from received chunks, an `Outgoing` call is serialized locally and
/// passes received chunks through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageDirection {
    Incoming,
    Outgoing,
}
