//! Bounds-checked big-endian readers.
//!
//! Every decoder in the codec reads through these helpers instead of
//! indexing the buffer, so a truncated or hostile message surfaces as
//! [`WireError::BufferUnderrun`] instead of a panic.

use super::errors::WireError;

fn underrun(buf: &[u8], offset: usize, needed: usize) -> WireError {
    WireError::BufferUnderrun {
        offset,
        needed,
        available: buf.len(),
    }
}

/// Returns `needed` bytes starting at `offset` and the offset just past them.
pub fn read_bytes(buf: &[u8], offset: usize, needed: usize) -> Result<(&[u8], usize), WireError> {
    let end = offset
        .checked_add(needed)
        .ok_or_else(|| underrun(buf, offset, needed))?;
    buf.get(offset..end)
        .map(|bytes| (bytes, end))
        .ok_or_else(|| underrun(buf, offset, needed))
}

pub fn read_u8(buf: &[u8], offset: usize) -> Result<(u8, usize), WireError> {
    let (bytes, next) = read_bytes(buf, offset, 1)?;
    Ok((bytes[0], next))
}

pub fn read_u16_be(buf: &[u8], offset: usize) -> Result<(u16, usize), WireError> {
    let (bytes, next) = read_bytes(buf, offset, 2)?;
    Ok((u16::from_be_bytes([bytes[0], bytes[1]]), next))
}

pub fn read_u32_be(buf: &[u8], offset: usize) -> Result<(u32, usize), WireError> {
    let (bytes, next) = read_bytes(buf, offset, 4)?;
    Ok((
        u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
        next,
    ))
}
