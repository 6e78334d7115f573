use super::RecordCategory;
use std::fmt;
use std::str::FromStr;

/// Resource record TYPE codes known to the registry (RFC 1035 §3.2.2 and later
/// IANA assignments).
///
/// A code absent from this enum is reported as an unknown record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    NS,
    MD,
    MF,
    CNAME,
    SOA,
    MB,
    MG,
    MR,
    NULL,
    WKS,
    PTR,
    HINFO,
    MINFO,
    MX,
    TXT,
    RP,
    AFSDB,
    X25,
    ISDN,
    RT,
    NSAP,
    NSAPPTR,
    SIG,
    KEY,
    PX,
    GPOS,
    AAAA,
    LOC,
    NXT,
    EID,
    NIMLOC,
    SRV,
    ATMA,
    NAPTR,
    KX,
    CERT,
    A6,
    DNAME,
    SINK,
    OPT,
    APL,
    DS,
    SSHFP,
    IPSECKEY,
    RRSIG,
    NSEC,
    DNSKEY,
    DHCID,
    NSEC3,
    NSEC3PARAM,
    TLSA,
    SMIMEA,
    HIP,
    NINFO,
    RKEY,
    TALINK,
    CDS,
    CDNSKEY,
    OPENPGPKEY,
    CSYNC,
    ZONEMD,
    SVCB,
    HTTPS,
    SPF,
    UINFO,
    UID,
    GID,
    UNSPEC,
    NID,
    L32,
    L64,
    LP,
    EUI48,
    EUI64,
    TKEY,
    TSIG,
    IXFR,
    AXFR,
    MAILB,
    MAILA,
    ANY,
    URI,
    CAA,
    DOA,
    TA,
    DLV,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::NS => "NS",
            RecordType::MD => "MD",
            RecordType::MF => "MF",
            RecordType::CNAME => "CNAME",
            RecordType::SOA => "SOA",
            RecordType::MB => "MB",
            RecordType::MG => "MG",
            RecordType::MR => "MR",
            RecordType::NULL => "NULL",
            RecordType::WKS => "WKS",
            RecordType::PTR => "PTR",
            RecordType::HINFO => "HINFO",
            RecordType::MINFO => "MINFO",
            RecordType::MX => "MX",
            RecordType::TXT => "TXT",
            RecordType::RP => "RP",
            RecordType::AFSDB => "AFSDB",
            RecordType::X25 => "X25",
            RecordType::ISDN => "ISDN",
            RecordType::RT => "RT",
            RecordType::NSAP => "NSAP",
            RecordType::NSAPPTR => "NSAP-PTR",
            RecordType::SIG => "SIG",
            RecordType::KEY => "KEY",
            RecordType::PX => "PX",
            RecordType::GPOS => "GPOS",
            RecordType::AAAA => "AAAA",
            RecordType::LOC => "LOC",
            RecordType::NXT => "NXT",
            RecordType::EID => "EID",
            RecordType::NIMLOC => "NIMLOC",
            RecordType::SRV => "SRV",
            RecordType::ATMA => "ATMA",
            RecordType::NAPTR => "NAPTR",
            RecordType::KX => "KX",
            RecordType::CERT => "CERT",
            RecordType::A6 => "A6",
            RecordType::DNAME => "DNAME",
            RecordType::SINK => "SINK",
            RecordType::OPT => "OPT",
            RecordType::APL => "APL",
            RecordType::DS => "DS",
            RecordType::SSHFP => "SSHFP",
            RecordType::IPSECKEY => "IPSECKEY",
            RecordType::RRSIG => "RRSIG",
            RecordType::NSEC => "NSEC",
            RecordType::DNSKEY => "DNSKEY",
            RecordType::DHCID => "DHCID",
            RecordType::NSEC3 => "NSEC3",
            RecordType::NSEC3PARAM => "NSEC3PARAM",
            RecordType::TLSA => "TLSA",
            RecordType::SMIMEA => "SMIMEA",
            RecordType::HIP => "HIP",
            RecordType::NINFO => "NINFO",
            RecordType::RKEY => "RKEY",
            RecordType::TALINK => "TALINK",
            RecordType::CDS => "CDS",
            RecordType::CDNSKEY => "CDNSKEY",
            RecordType::OPENPGPKEY => "OPENPGPKEY",
            RecordType::CSYNC => "CSYNC",
            RecordType::ZONEMD => "ZONEMD",
            RecordType::SVCB => "SVCB",
            RecordType::HTTPS => "HTTPS",
            RecordType::SPF => "SPF",
            RecordType::UINFO => "UINFO",
            RecordType::UID => "UID",
            RecordType::GID => "GID",
            RecordType::UNSPEC => "UNSPEC",
            RecordType::NID => "NID",
            RecordType::L32 => "L32",
            RecordType::L64 => "L64",
            RecordType::LP => "LP",
            RecordType::EUI48 => "EUI48",
            RecordType::EUI64 => "EUI64",
            RecordType::TKEY => "TKEY",
            RecordType::TSIG => "TSIG",
            RecordType::IXFR => "IXFR",
            RecordType::AXFR => "AXFR",
            RecordType::MAILB => "MAILB",
            RecordType::MAILA => "MAILA",
            RecordType::ANY => "ANY",
            RecordType::URI => "URI",
            RecordType::CAA => "CAA",
            RecordType::DOA => "DOA",
            RecordType::TA => "TA",
            RecordType::DLV => "DLV",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::MD => 3,
            RecordType::MF => 4,
            RecordType::CNAME => 5,
            RecordType::SOA => 6,
            RecordType::MB => 7,
            RecordType::MG => 8,
            RecordType::MR => 9,
            RecordType::NULL => 10,
            RecordType::WKS => 11,
            RecordType::PTR => 12,
            RecordType::HINFO => 13,
            RecordType::MINFO => 14,
            RecordType::MX => 15,
            RecordType::TXT => 16,
            RecordType::RP => 17,
            RecordType::AFSDB => 18,
            RecordType::X25 => 19,
            RecordType::ISDN => 20,
            RecordType::RT => 21,
            RecordType::NSAP => 22,
            RecordType::NSAPPTR => 23,
            RecordType::SIG => 24,
            RecordType::KEY => 25,
            RecordType::PX => 26,
            RecordType::GPOS => 27,
            RecordType::AAAA => 28,
            RecordType::LOC => 29,
            RecordType::NXT => 30,
            RecordType::EID => 31,
            RecordType::NIMLOC => 32,
            RecordType::SRV => 33,
            RecordType::ATMA => 34,
            RecordType::NAPTR => 35,
            RecordType::KX => 36,
            RecordType::CERT => 37,
            RecordType::A6 => 38,
            RecordType::DNAME => 39,
            RecordType::SINK => 40,
            RecordType::OPT => 41,
            RecordType::APL => 42,
            RecordType::DS => 43,
            RecordType::SSHFP => 44,
            RecordType::IPSECKEY => 45,
            RecordType::RRSIG => 46,
            RecordType::NSEC => 47,
            RecordType::DNSKEY => 48,
            RecordType::DHCID => 49,
            RecordType::NSEC3 => 50,
            RecordType::NSEC3PARAM => 51,
            RecordType::TLSA => 52,
            RecordType::SMIMEA => 53,
            RecordType::HIP => 55,
            RecordType::NINFO => 56,
            RecordType::RKEY => 57,
            RecordType::TALINK => 58,
            RecordType::CDS => 59,
            RecordType::CDNSKEY => 60,
            RecordType::OPENPGPKEY => 61,
            RecordType::CSYNC => 62,
            RecordType::ZONEMD => 63,
            RecordType::SVCB => 64,
            RecordType::HTTPS => 65,
            RecordType::SPF => 99,
            RecordType::UINFO => 100,
            RecordType::UID => 101,
            RecordType::GID => 102,
            RecordType::UNSPEC => 103,
            RecordType::NID => 104,
            RecordType::L32 => 105,
            RecordType::L64 => 106,
            RecordType::LP => 107,
            RecordType::EUI48 => 108,
            RecordType::EUI64 => 109,
            RecordType::TKEY => 249,
            RecordType::TSIG => 250,
            RecordType::IXFR => 251,
            RecordType::AXFR => 252,
            RecordType::MAILB => 253,
            RecordType::MAILA => 254,
            RecordType::ANY => 255,
            RecordType::URI => 256,
            RecordType::CAA => 257,
            RecordType::DOA => 259,
            RecordType::TA => 32768,
            RecordType::DLV => 32769,
        }
    }

    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            1 => Some(RecordType::A),
            2 => Some(RecordType::NS),
            3 => Some(RecordType::MD),
            4 => Some(RecordType::MF),
            5 => Some(RecordType::CNAME),
            6 => Some(RecordType::SOA),
            7 => Some(RecordType::MB),
            8 => Some(RecordType::MG),
            9 => Some(RecordType::MR),
            10 => Some(RecordType::NULL),
            11 => Some(RecordType::WKS),
            12 => Some(RecordType::PTR),
            13 => Some(RecordType::HINFO),
            14 => Some(RecordType::MINFO),
            15 => Some(RecordType::MX),
            16 => Some(RecordType::TXT),
            17 => Some(RecordType::RP),
            18 => Some(RecordType::AFSDB),
            19 => Some(RecordType::X25),
            20 => Some(RecordType::ISDN),
            21 => Some(RecordType::RT),
            22 => Some(RecordType::NSAP),
            23 => Some(RecordType::NSAPPTR),
            24 => Some(RecordType::SIG),
            25 => Some(RecordType::KEY),
            26 => Some(RecordType::PX),
            27 => Some(RecordType::GPOS),
            28 => Some(RecordType::AAAA),
            29 => Some(RecordType::LOC),
            30 => Some(RecordType::NXT),
            31 => Some(RecordType::EID),
            32 => Some(RecordType::NIMLOC),
            33 => Some(RecordType::SRV),
            34 => Some(RecordType::ATMA),
            35 => Some(RecordType::NAPTR),
            36 => Some(RecordType::KX),
            37 => Some(RecordType::CERT),
            38 => Some(RecordType::A6),
            39 => Some(RecordType::DNAME),
            40 => Some(RecordType::SINK),
            41 => Some(RecordType::OPT),
            42 => Some(RecordType::APL),
            43 => Some(RecordType::DS),
            44 => Some(RecordType::SSHFP),
            45 => Some(RecordType::IPSECKEY),
            46 => Some(RecordType::RRSIG),
            47 => Some(RecordType::NSEC),
            48 => Some(RecordType::DNSKEY),
            49 => Some(RecordType::DHCID),
            50 => Some(RecordType::NSEC3),
            51 => Some(RecordType::NSEC3PARAM),
            52 => Some(RecordType::TLSA),
            53 => Some(RecordType::SMIMEA),
            55 => Some(RecordType::HIP),
            56 => Some(RecordType::NINFO),
            57 => Some(RecordType::RKEY),
            58 => Some(RecordType::TALINK),
            59 => Some(RecordType::CDS),
            60 => Some(RecordType::CDNSKEY),
            61 => Some(RecordType::OPENPGPKEY),
            62 => Some(RecordType::CSYNC),
            63 => Some(RecordType::ZONEMD),
            64 => Some(RecordType::SVCB),
            65 => Some(RecordType::HTTPS),
            99 => Some(RecordType::SPF),
            100 => Some(RecordType::UINFO),
            101 => Some(RecordType::UID),
            102 => Some(RecordType::GID),
            103 => Some(RecordType::UNSPEC),
            104 => Some(RecordType::NID),
            105 => Some(RecordType::L32),
            106 => Some(RecordType::L64),
            107 => Some(RecordType::LP),
            108 => Some(RecordType::EUI48),
            109 => Some(RecordType::EUI64),
            249 => Some(RecordType::TKEY),
            250 => Some(RecordType::TSIG),
            251 => Some(RecordType::IXFR),
            252 => Some(RecordType::AXFR),
            253 => Some(RecordType::MAILB),
            254 => Some(RecordType::MAILA),
            255 => Some(RecordType::ANY),
            256 => Some(RecordType::URI),
            257 => Some(RecordType::CAA),
            259 => Some(RecordType::DOA),
            32768 => Some(RecordType::TA),
            32769 => Some(RecordType::DLV),
            _ => None,
        }
    }

    pub fn category(&self) -> RecordCategory {
        match self {
            RecordType::A
            | RecordType::NS
            | RecordType::CNAME
            | RecordType::SOA
            | RecordType::PTR
            | RecordType::MX
            | RecordType::TXT
            | RecordType::AAAA => RecordCategory::Decoded,

            RecordType::OPT
            | RecordType::IXFR
            | RecordType::AXFR
            | RecordType::ANY => RecordCategory::Pseudo,

            RecordType::MD
            | RecordType::MF
            | RecordType::MB
            | RecordType::MG
            | RecordType::MR
            | RecordType::NULL
            | RecordType::WKS
            | RecordType::HINFO
            | RecordType::MINFO
            | RecordType::RP
            | RecordType::X25
            | RecordType::ISDN
            | RecordType::RT
            | RecordType::NSAP
            | RecordType::NSAPPTR
            | RecordType::SIG
            | RecordType::KEY
            | RecordType::PX
            | RecordType::GPOS
            | RecordType::NXT
            | RecordType::EID
            | RecordType::NIMLOC
            | RecordType::ATMA
            | RecordType::A6
            | RecordType::SINK
            | RecordType::APL
            | RecordType::NINFO
            | RecordType::RKEY
            | RecordType::TALINK
            | RecordType::SPF
            | RecordType::UINFO
            | RecordType::UID
            | RecordType::GID
            | RecordType::UNSPEC
            | RecordType::NID
            | RecordType::L32
            | RecordType::L64
            | RecordType::LP
            | RecordType::EUI48
            | RecordType::EUI64
            | RecordType::MAILB
            | RecordType::MAILA
            | RecordType::DOA => RecordCategory::Obsolete,

            _ => RecordCategory::Current,
        }
    }

    /// Defined by the registry but retired.
    pub fn is_obsolete(&self) -> bool {
        matches!(self.category(), RecordCategory::Obsolete)
    }

    /// Has an RDATA decoder in this crate.
    pub fn is_decoded(&self) -> bool {
        matches!(self.category(), RecordCategory::Decoded)
    }

    pub fn by_category(category: RecordCategory) -> Vec<RecordType> {
        ALL.iter()
            .copied()
            .filter(|record_type| record_type.category() == category)
            .collect()
    }

    pub fn all() -> &'static [RecordType] {
        ALL
    }
}

const ALL: &[RecordType] = &[
    RecordType::A,
    RecordType::NS,
    RecordType::MD,
    RecordType::MF,
    RecordType::CNAME,
    RecordType::SOA,
    RecordType::MB,
    RecordType::MG,
    RecordType::MR,
    RecordType::NULL,
    RecordType::WKS,
    RecordType::PTR,
    RecordType::HINFO,
    RecordType::MINFO,
    RecordType::MX,
    RecordType::TXT,
    RecordType::RP,
    RecordType::AFSDB,
    RecordType::X25,
    RecordType::ISDN,
    RecordType::RT,
    RecordType::NSAP,
    RecordType::NSAPPTR,
    RecordType::SIG,
    RecordType::KEY,
    RecordType::PX,
    RecordType::GPOS,
    RecordType::AAAA,
    RecordType::LOC,
    RecordType::NXT,
    RecordType::EID,
    RecordType::NIMLOC,
    RecordType::SRV,
    RecordType::ATMA,
    RecordType::NAPTR,
    RecordType::KX,
    RecordType::CERT,
    RecordType::A6,
    RecordType::DNAME,
    RecordType::SINK,
    RecordType::OPT,
    RecordType::APL,
    RecordType::DS,
    RecordType::SSHFP,
    RecordType::IPSECKEY,
    RecordType::RRSIG,
    RecordType::NSEC,
    RecordType::DNSKEY,
    RecordType::DHCID,
    RecordType::NSEC3,
    RecordType::NSEC3PARAM,
    RecordType::TLSA,
    RecordType::SMIMEA,
    RecordType::HIP,
    RecordType::NINFO,
    RecordType::RKEY,
    RecordType::TALINK,
    RecordType::CDS,
    RecordType::CDNSKEY,
    RecordType::OPENPGPKEY,
    RecordType::CSYNC,
    RecordType::ZONEMD,
    RecordType::SVCB,
    RecordType::HTTPS,
    RecordType::SPF,
    RecordType::UINFO,
    RecordType::UID,
    RecordType::GID,
    RecordType::UNSPEC,
    RecordType::NID,
    RecordType::L32,
    RecordType::L64,
    RecordType::LP,
    RecordType::EUI48,
    RecordType::EUI64,
    RecordType::TKEY,
    RecordType::TSIG,
    RecordType::IXFR,
    RecordType::AXFR,
    RecordType::MAILB,
    RecordType::MAILA,
    RecordType::ANY,
    RecordType::URI,
    RecordType::CAA,
    RecordType::DOA,
    RecordType::TA,
    RecordType::DLV,
];

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        if upper == "*" {
            return Ok(RecordType::ANY);
        }
        ALL.iter()
            .copied()
            .find(|record_type| record_type.as_str() == upper)
            .ok_or_else(|| format!("Unknown record type: {}", s))
    }
}
