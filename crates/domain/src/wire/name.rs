//! Domain name encoding and (compression-aware) decoding, RFC 1035 §3.1 and §4.1.4.

use super::errors::WireError;
use super::primitives::{read_bytes, read_u8};

/// RFC 1035 §2.3.4
pub const MAX_NAME_WIRE_OCTETS: usize = 255;

/// RFC 1035 §2.3.4
pub const MAX_LABEL_OCTETS: usize = 63;

/// Upper bound on pointer follows while resolving one name.
///
/// Every label takes at least two octets including its length byte and the
/// root label is never reached through a pointer to a pointer, so a
/// well-formed message cannot need more than this. Chains that revisit a
/// pointer exhaust the budget and fail; this bounds the work spent on a
/// cyclic name to this many follows, it does not detect the cycle itself.
pub const MAX_COMPRESSION_POINTERS: usize = (MAX_NAME_WIRE_OCTETS + 1) / 2 - 2;

const MIN_QNAME_LABELS: usize = 2;

const LABEL_MASK: u8 = 0xC0;
const POINTER_TAG: u8 = 0xC0;
const LENGTH_TAG: u8 = 0x00;
const POINTER_OFFSET_MASK: u8 = 0x3F;

/// Appends the root dot if `name` does not already end with one.
pub fn to_fqdn(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}

/// Encodes a dotted name as length-prefixed labels ending in the root octet.
///
/// One trailing dot is accepted. Compression is never emitted.
pub fn encode_name(name: &str) -> Result<Vec<u8>, WireError> {
    let relative = name.strip_suffix('.').unwrap_or(name);
    let labels: Vec<&str> = relative.split('.').collect();

    if labels.len() < MIN_QNAME_LABELS {
        return Err(WireError::MalformedQName(name.to_string()));
    }

    let mut out = Vec::with_capacity(relative.len() + 2);
    for label in labels {
        if label.is_empty() {
            return Err(WireError::EmptyLabel(name.to_string()));
        }
        if label.len() > MAX_LABEL_OCTETS {
            return Err(WireError::LabelTooLong {
                label: label.to_string(),
                len: label.len(),
            });
        }
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0x00);

    if out.len() > MAX_NAME_WIRE_OCTETS {
        return Err(WireError::DomainTooLong);
    }

    Ok(out)
}

/// Decodes the labels of the name starting at `offset`.
///
/// The returned cursor is the position just after the name as it appears at
/// `offset`: after the root octet for an uncompressed name, or after the
/// first two-byte pointer otherwise.
pub fn decode_labels(buf: &[u8], offset: usize) -> Result<(Vec<String>, usize), WireError> {
    let mut labels = Vec::new();
    let mut cursor = offset;
    let mut resume_at: Option<usize> = None;
    let mut pointers_followed = 0usize;
    let mut label_octets = 0usize;

    loop {
        let (octet, after_octet) = read_u8(buf, cursor)?;

        match octet & LABEL_MASK {
            LENGTH_TAG if octet == 0 => {
                return Ok((labels, resume_at.unwrap_or(after_octet)));
            }
            LENGTH_TAG => {
                let len = octet as usize;
                let (label, next) = read_bytes(buf, after_octet, len)?;

                label_octets += len + 1;
                // +1 for the root octet that must still follow
                if label_octets + 1 > MAX_NAME_WIRE_OCTETS {
                    return Err(WireError::DomainTooLong);
                }

                labels.push(String::from_utf8_lossy(label).into_owned());
                cursor = next;
            }
            POINTER_TAG => {
                if pointers_followed >= MAX_COMPRESSION_POINTERS {
                    return Err(WireError::TooManyCompressionPointers);
                }
                let (low, next) = read_u8(buf, after_octet)?;
                resume_at.get_or_insert(next);
                pointers_followed += 1;
                cursor = (usize::from(octet & POINTER_OFFSET_MASK) << 8) | usize::from(low);
            }
            _ => {
                return Err(WireError::MalformedLabel {
                    offset: cursor,
                    octet,
                })
            }
        }
    }
}

/// Decodes the name at `offset` into its dotted, trailing-dot form.
pub fn decode_name(buf: &[u8], offset: usize) -> Result<(String, usize), WireError> {
    let (labels, next) = decode_labels(buf, offset)?;
    Ok((render_labels(&labels), next))
}

/// Dots and backslashes inside a label are escaped the way dig prints them,
/// so `\x03a.b\x00` renders as `a\.b.` and not as two labels.
fn render_labels(labels: &[String]) -> String {
    if labels.is_empty() {
        return ".".to_string();
    }
    let mut name = String::new();
    for label in labels {
        for ch in label.chars() {
            if ch == '.' || ch == '\\' {
                name.push('\\');
            }
            name.push(ch);
        }
        name.push('.');
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_simple_name() {
        let bytes = encode_name("example.com").unwrap();
        assert_eq!(
            bytes,
            b"\x07example\x03com\x00".to_vec()
        );
    }

    #[test]
    fn test_encode_accepts_trailing_dot() {
        assert_eq!(
            encode_name("example.com.").unwrap(),
            encode_name("example.com").unwrap()
        );
    }

    #[test]
    fn test_encode_rejects_single_label() {
        assert!(matches!(
            encode_name("localhost"),
            Err(WireError::MalformedQName(_))
        ));
        assert!(matches!(encode_name("."), Err(WireError::MalformedQName(_))));
        assert!(matches!(encode_name(""), Err(WireError::MalformedQName(_))));
    }

    #[test]
    fn test_encode_rejects_empty_label() {
        assert!(matches!(
            encode_name("www..example.com"),
            Err(WireError::EmptyLabel(_))
        ));
        assert!(matches!(
            encode_name(".example.com"),
            Err(WireError::EmptyLabel(_))
        ));
    }

    #[test]
    fn test_encode_rejects_long_label() {
        let name = format!("{}.com", "a".repeat(64));
        assert!(matches!(
            encode_name(&name),
            Err(WireError::LabelTooLong { len: 64, .. })
        ));
        let name = format!("{}.com", "a".repeat(63));
        assert!(encode_name(&name).is_ok());
    }

    #[test]
    fn test_encode_rejects_long_name() {
        let label = "a".repeat(63);
        let name = vec![label.as_str(); 4].join(".");
        assert_eq!(encode_name(&name), Err(WireError::DomainTooLong));
    }

    #[test]
    fn test_decode_uncompressed_name() {
        let buf = b"\x03www\x07example\x03com\x00\xAA";
        let (name, next) = decode_name(buf, 0).unwrap();
        assert_eq!(name, "www.example.com.");
        assert_eq!(next, 17);
    }

    #[test]
    fn test_decode_root_name() {
        let buf = [0x00, 0x00, 0x29];
        let (name, next) = decode_name(&buf, 0).unwrap();
        assert_eq!(name, ".");
        assert_eq!(next, 1);
    }

    #[test]
    fn test_decode_pointer_only() {
        let mut buf = b"\x07example\x03com\x00".to_vec();
        buf.extend_from_slice(&[0xC0, 0x00]);
        let (name, next) = decode_name(&buf, 13).unwrap();
        assert_eq!(name, "example.com.");
        assert_eq!(next, 15);
    }

    #[test]
    fn test_decode_labels_then_pointer() {
        let mut buf = b"\x07example\x03com\x00".to_vec();
        buf.extend_from_slice(b"\x04mail\xC0\x00");
        let (name, next) = decode_name(&buf, 13).unwrap();
        assert_eq!(name, "mail.example.com.");
        assert_eq!(next, buf.len());
    }

    #[test]
    fn test_decode_pointer_uses_fourteen_bit_offset() {
        let mut buf = vec![0u8; 0x0105];
        buf[0x0100..0x0105].copy_from_slice(b"\x01a\x01b\x00");
        buf.extend_from_slice(&[0xC1, 0x00]);
        let start = buf.len() - 2;
        let (name, _) = decode_name(&buf, start).unwrap();
        assert_eq!(name, "a.b.");
    }

    #[test]
    fn test_decode_pointer_loop_terminates() {
        let buf = [0xC0, 0x02, 0xC0, 0x00];
        assert_eq!(
            decode_name(&buf, 0),
            Err(WireError::TooManyCompressionPointers)
        );
    }

    #[test]
    fn test_decode_self_pointer_terminates() {
        let buf = [0xC0, 0x00];
        assert_eq!(
            decode_name(&buf, 0),
            Err(WireError::TooManyCompressionPointers)
        );
    }

    #[test]
    fn test_decode_label_loop_hits_length_limit() {
        let buf = b"\x03abc\xC0\x00";
        assert_eq!(decode_name(buf, 0), Err(WireError::DomainTooLong));
    }

    #[test]
    fn test_decode_name_too_long() {
        let mut buf = Vec::new();
        for _ in 0..4 {
            buf.push(63);
            buf.extend_from_slice(&[b'a'; 63]);
        }
        buf.push(0);
        assert_eq!(decode_name(&buf, 0), Err(WireError::DomainTooLong));
    }

    #[test]
    fn test_decode_malformed_label_prefix() {
        let buf = [0x40, 0x61, 0x00];
        assert_eq!(
            decode_name(&buf, 0),
            Err(WireError::MalformedLabel {
                offset: 0,
                octet: 0x40
            })
        );
        let buf = [0x80, 0x61, 0x00];
        assert!(matches!(
            decode_name(&buf, 0),
            Err(WireError::MalformedLabel { octet: 0x80, .. })
        ));
    }

    #[test]
    fn test_decode_truncated_label() {
        let buf = b"\x07exam";
        assert!(matches!(
            decode_name(buf, 0),
            Err(WireError::BufferUnderrun { .. })
        ));
    }

    #[test]
    fn test_decode_missing_terminator() {
        let buf = b"\x03com";
        assert!(matches!(
            decode_name(buf, 0),
            Err(WireError::BufferUnderrun { offset: 4, .. })
        ));
    }

    #[test]
    fn test_decode_truncated_pointer() {
        let buf = [0xC0];
        assert!(matches!(
            decode_name(&buf, 0),
            Err(WireError::BufferUnderrun { .. })
        ));
    }

    #[test]
    fn test_decode_pointer_out_of_range() {
        let buf = [0xC0, 0x40];
        assert!(matches!(
            decode_name(&buf, 0),
            Err(WireError::BufferUnderrun { offset: 0x40, .. })
        ));
    }

    #[test]
    fn test_round_trip_through_encoder() {
        for name in ["example.com", "a.b.c.d.e.", "xn--bcher-kva.example"] {
            let bytes = encode_name(name).unwrap();
            let (decoded, next) = decode_name(&bytes, 0).unwrap();
            assert_eq!(decoded, to_fqdn(name));
            assert_eq!(next, bytes.len());
        }
    }

    #[test]
    fn test_to_fqdn() {
        assert_eq!(to_fqdn("example.com"), "example.com.");
        assert_eq!(to_fqdn("example.com."), "example.com.");
    }

    #[test]
    fn test_decode_escapes_dot_inside_label() {
        let (name, next) = decode_name(b"\x03a.b\x00", 0).unwrap();
        assert_eq!(name, "a\\.b.");
        assert_eq!(next, 5);

        let (two_labels, _) = decode_name(b"\x01a\x01b\x00", 0).unwrap();
        assert_ne!(name, two_labels);
    }

    #[test]
    fn test_decode_escapes_backslash_inside_label() {
        let (name, _) = decode_name(b"\x03a\\b\x03com\x00", 0).unwrap();
        assert_eq!(name, "a\\\\b.com.");
    }
}
