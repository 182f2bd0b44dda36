use crate::constants::XDR_UNIT_SIZE;
use crate::xdr::XdrDecodeError;

/// Positioned reader over an XDR-encoded byte slice.
///
/// All primitive reads consume network-byte-order (big-endian) values and
/// keep the cursor aligned to the 4-byte XDR unit. The cursor never copies
/// the underlying buffer; opaque reads hand back subslices of it.
///
/// A failed read leaves the cursor where it was, so a caller can inspect
/// `remaining()` and decide what to do with the unconsumed tail.
pub struct XdrCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> XdrCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Byte offset of the next read.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of unread bytes left under the cursor.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Everything after the cursor, without consuming it.
    pub fn slice_remaining(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], XdrDecodeError> {
        if self.remaining() < len {
            return Err(XdrDecodeError::UnexpectedEof {
                needed: len,
                remaining: self.remaining(),
            });
        }

        let bytes = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    pub fn read_u32(&mut self) -> Result<u32, XdrDecodeError> {
        let bytes = self.take(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_u64(&mut self) -> Result<u64, XdrDecodeError> {
        let bytes = self.take(8)?;
        let mut raw = [0u8; 8];
        raw.copy_from_slice(bytes);
        Ok(u64::from_be_bytes(raw))
    }

    /// Fixed-length opaque: consumes `len` bytes plus the 0-3 zero pad
    /// bytes that keep the next field aligned to the XDR unit.
    pub fn read_opaque(&mut self, len: usize) -> Result<&'a [u8], XdrDecodeError> {
        let pad = (XDR_UNIT_SIZE - len % XDR_UNIT_SIZE) % XDR_UNIT_SIZE;

        if self.remaining() < len + pad {
            return Err(XdrDecodeError::UnexpectedEof {
                needed: len + pad,
                remaining: self.remaining(),
            });
        }

        let bytes = &self.buf[self.pos..self.pos + len];
        self.pos += len + pad;
        Ok(bytes)
    }

    /// Variable-length opaque: a u32 length prefix, the bytes, then pad.
    pub fn read_var_opaque(&mut self) -> Result<&'a [u8], XdrDecodeError> {
        let start = self.pos;
        let len = self.read_u32()? as usize;

        match self.read_opaque(len) {
            Ok(bytes) => Ok(bytes),
            Err(e) => {
                self.pos = start;
                Err(e)
            }
        }
    }
}
