use crate::constants::XDR_UNIT_SIZE;

/// Growable big-endian writer for XDR-encoded data.
///
/// `with_reserved` pre-allocates room for a fixed header region plus an
/// optional payload size hint, so serializing a message header and then
/// appending its argument bytes does not reallocate.
pub struct XdrEncoder {
    buf: Vec<u8>,
}

impl XdrEncoder {
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    pub fn with_reserved(header_size: usize, size_hint: Option<usize>) -> Self {
        Self {
            buf: Vec::with_capacity(header_size + size_hint.unwrap_or(0)),
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn write_u32(&mut self, value: u32) {
        self.buf.extend(&value.to_be_bytes());
    }

    pub fn write_u64(&mut self, value: u64) {
        self.buf.extend(&value.to_be_bytes());
    }

    /// Fixed-length opaque: the bytes plus zero pad to the XDR unit, no
    /// length prefix.
    pub fn write_opaque(&mut self, data: &[u8]) {
        let pad = (XDR_UNIT_SIZE - data.len() % XDR_UNIT_SIZE) % XDR_UNIT_SIZE;

        self.buf.extend_from_slice(data);
        self.buf.extend_from_slice(&[0u8; XDR_UNIT_SIZE][..pad]);
    }

    /// Variable-length opaque: a u32 length prefix, the bytes, then pad.
    pub fn write_var_opaque(&mut self, data: &[u8]) {
        self.write_u32(data.len() as u32);
        self.write_opaque(data);
    }

    /// Appends already-encoded bytes verbatim. The caller is responsible
    /// for their alignment.
    pub fn write_raw(&mut self, data: &[u8]) {
        self.buf.extend_from_slice(data);
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
