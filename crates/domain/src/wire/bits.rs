//! Sub-octet field packing used by the header flag bytes.
//!
//! Bit index 0 is the most significant bit of the octet, matching the
//! diagrams in RFC 1035 §4.1.1:
//!
//! ```text
//!   0  1  2  3  4  5  6  7
//! +--+--+--+--+--+--+--+--+
//! |QR|   Opcode  |AA|TC|RD|
//! +--+--+--+--+--+--+--+--+
//! ```
//!
//! Both functions are total over `index + width <= 8`. Values wider than the
//! declared width are truncated to their low `width` bits rather than
//! rejected.

const OCTET_MAX_INDEX: u32 = 7;

fn mask(width: u32) -> u8 {
    debug_assert!((1..=8).contains(&width));
    (0xFFu16 >> (8 - width)) as u8
}

fn shift(index: u32, width: u32) -> u32 {
    debug_assert!(index + width <= 8);
    OCTET_MAX_INDEX - (index + width - 1)
}

/// Places the low `width` bits of `value` at bit `index`; every other bit of
/// the result is zero.
pub fn set_bits_at(value: u8, index: u32, width: u32) -> u8 {
    (value & mask(width)) << shift(index, width)
}

/// Extracts the `width`-bit field starting at bit `index`.
pub fn get_bits_at(octet: u8, index: u32, width: u32) -> u8 {
    (octet >> shift(index, width)) & mask(width)
}
