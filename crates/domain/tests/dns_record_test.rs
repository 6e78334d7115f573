use dnsprobe_domain::dns_record::type_mnemonic;
use dnsprobe_domain::{RecordCategory, RecordClass, RecordType};
use std::collections::HashSet;

#[test]
fn test_codes_round_trip_for_every_registered_type() {
    for record_type in RecordType::all() {
        assert_eq!(
            RecordType::from_u16(record_type.to_u16()),
            Some(*record_type),
            "{} did not round trip",
            record_type
        );
    }
}

#[test]
fn test_codes_and_mnemonics_are_unique() {
    let codes: HashSet<u16> = RecordType::all().iter().map(|t| t.to_u16()).collect();
    let names: HashSet<&str> = RecordType::all().iter().map(|t| t.as_str()).collect();
    assert_eq!(codes.len(), RecordType::all().len());
    assert_eq!(names.len(), RecordType::all().len());
}

#[test]
fn test_mnemonics_parse_back() {
    for record_type in RecordType::all() {
        assert_eq!(record_type.as_str().parse::<RecordType>(), Ok(*record_type));
    }
}

#[test]
fn test_parse_is_case_insensitive() {
    assert_eq!("aaaa".parse::<RecordType>(), Ok(RecordType::AAAA));
    assert_eq!("Mx".parse::<RecordType>(), Ok(RecordType::MX));
    assert_eq!("*".parse::<RecordType>(), Ok(RecordType::ANY));
    assert!("BOGUS".parse::<RecordType>().is_err());
}

#[test]
fn test_well_known_codes() {
    assert_eq!(RecordType::A.to_u16(), 1);
    assert_eq!(RecordType::SOA.to_u16(), 6);
    assert_eq!(RecordType::HINFO.to_u16(), 13);
    assert_eq!(RecordType::AAAA.to_u16(), 28);
    assert_eq!(RecordType::OPT.to_u16(), 41);
    assert_eq!(RecordType::ANY.to_u16(), 255);
    assert_eq!(RecordType::CAA.to_u16(), 257);
    assert_eq!(RecordType::DLV.to_u16(), 32769);
    assert_eq!(RecordType::from_u16(999), None);
}

#[test]
fn test_categories_partition_the_registry() {
    let total: usize = RecordCategory::all()
        .iter()
        .map(|category| RecordType::by_category(*category).len())
        .sum();
    assert_eq!(total, RecordType::all().len());
}

#[test]
fn test_decoded_category() {
    let decoded = RecordType::by_category(RecordCategory::Decoded);
    for record_type in [
        RecordType::A,
        RecordType::NS,
        RecordType::CNAME,
        RecordType::SOA,
        RecordType::PTR,
        RecordType::MX,
        RecordType::TXT,
        RecordType::AAAA,
    ] {
        assert!(decoded.contains(&record_type));
        assert!(record_type.is_decoded());
    }
    assert_eq!(decoded.len(), 8);
}

#[test]
fn test_obsolete_and_pseudo_types() {
    assert!(RecordType::HINFO.is_obsolete());
    assert!(RecordType::MD.is_obsolete());
    assert!(RecordType::SPF.is_obsolete());
    assert!(!RecordType::CAA.is_obsolete());
    assert_eq!(RecordType::CAA.category(), RecordCategory::Current);
    assert_eq!(RecordType::OPT.category(), RecordCategory::Pseudo);
    assert_eq!(RecordType::AXFR.category(), RecordCategory::Pseudo);
}

#[test]
fn test_unregistered_mnemonics() {
    assert_eq!(type_mnemonic(1), "A");
    assert_eq!(type_mnemonic(999), "TYPE999");
    assert_eq!(RecordClass::mnemonic(1), "IN");
    assert_eq!(RecordClass::mnemonic(42), "CLASS42");
}

#[test]
fn test_record_class_parse() {
    assert_eq!("in".parse::<RecordClass>(), Ok(RecordClass::IN));
    assert_eq!("CH".parse::<RecordClass>(), Ok(RecordClass::CH));
    assert!("XX".parse::<RecordClass>().is_err());
}
