use std::fmt;

/// How the codec treats a registered record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordCategory {
    /// RDATA is decoded into a typed value.
    Decoded,

    /// Current type without an RDATA decoder.
    Current,

    /// Query-only or meta types (OPT, IXFR, AXFR, ANY).
    Pseudo,

    /// Defined by the registry but retired.
    Obsolete,
}

impl RecordCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordCategory::Decoded => "decoded",
            RecordCategory::Current => "current",
            RecordCategory::Pseudo => "pseudo",
            RecordCategory::Obsolete => "obsolete",
        }
    }

    pub fn all() -> &'static [RecordCategory] {
        &[
            RecordCategory::Decoded,
            RecordCategory::Current,
            RecordCategory::Pseudo,
            RecordCategory::Obsolete,
        ]
    }
}

impl fmt::Display for RecordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
