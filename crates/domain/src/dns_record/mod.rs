mod category;
mod record_class;
mod record_type;

pub use category::RecordCategory;
pub use record_class::RecordClass;
pub use record_type::RecordType;

/// Mnemonic for a raw TYPE code; unregistered codes use the RFC 3597
/// `TYPEnnn` form.
pub fn type_mnemonic(code: u16) -> String {
    match RecordType::from_u16(code) {
        Some(record_type) => record_type.as_str().to_string(),
        None => format!("TYPE{}", code),
    }
}
