#[derive(Debug, Clone, PartialEq)]
pub enum XdrDecodeError {
    /// A read requested more bytes than the cursor has left.
    UnexpectedEof { needed: usize, remaining: usize },
}
