//! Tests for names, labels and the text form.

use tola_flags::names::{from_name, label_of, name_of, parse, to_names};
use tola_flags::prelude::*;
use tola_flags::Error;

symbolic! {
    /// Access rights with a composite symbol.
    #[flags]
    pub struct Access: u8 {
        #[label = "read access"]
        READ = 0b001,
        WRITE = 0b010,
        EXEC = 0b100,
        /// Read and write.
        RW = Self::READ.0 | Self::WRITE.0,
    }

    #[flags]
    pub struct Opts: u16 {
        NONE = 0,
        VERBOSE = 1,
    }

    pub struct Mode: u8 {
        #[label = "plain text"]
        ASCII = 1,
        BINARY = 2,
    }
}

#[test]
fn test_name_and_label() {
    assert_eq!(name_of(Access::READ), Some("READ"));
    assert_eq!(name_of(Access::READ | Access::WRITE), Some("RW"));
    assert_eq!(name_of(Access::READ | Access::EXEC), None);

    assert_eq!(label_of(Access::READ), Some("read access"));
    assert_eq!(label_of(Access::WRITE), None);
    assert_eq!(label_of(Mode::ASCII), Some("plain text"));
    assert_eq!(label_of(Mode::from_repr(9)), None);
}

#[test]
fn test_from_name() {
    assert_eq!(from_name::<Access>("EXEC"), Ok(Access::EXEC));
    assert_eq!(from_name::<Mode>("BINARY"), Ok(Mode::BINARY));
    assert!(matches!(from_name::<Mode>("binary"), Err(Error::UnknownSymbol { .. })));
}

#[test]
fn test_display_combinable() {
    assert_eq!(Access::READ.to_string(), "READ");
    assert_eq!((Access::READ | Access::WRITE).to_string(), "RW");
    assert_eq!((Access::READ | Access::EXEC).to_string(), "READ | EXEC");
    assert_eq!(Access::from_repr(0b111).to_string(), "READ | WRITE | EXEC");
    assert_eq!(Access::from_repr(0x41).to_string(), "READ | 0x40");
    assert_eq!(Access::from_repr(0x80).to_string(), "0x80");
    assert_eq!(Access::default().to_string(), "0");
}

#[test]
fn test_display_declared_zero() {
    assert_eq!(Opts::default().to_string(), "NONE");
    assert_eq!(Opts::VERBOSE.to_string(), "VERBOSE");
}

#[test]
fn test_display_discrete() {
    assert_eq!(Mode::BINARY.to_string(), "BINARY");
    assert_eq!(Mode::from_repr(7).to_string(), "0x7");
}

#[test]
fn test_debug() {
    assert_eq!(format!("{:?}", Access::READ | Access::EXEC), "Access(READ | EXEC)");
    assert_eq!(format!("{:?}", Mode::ASCII), "Mode(ASCII)");
}

#[test]
fn test_parse_combinable() {
    assert_eq!(parse::<Access>("READ | EXEC"), Ok(Access::READ | Access::EXEC));
    assert_eq!(parse::<Access>("  WRITE|EXEC "), Ok(Access::WRITE | Access::EXEC));
    assert_eq!(parse::<Access>("RW"), Ok(Access::READ | Access::WRITE));
    assert_eq!(parse::<Access>("READ | 0x40"), Ok(Access::from_repr(0x41)));
    assert_eq!(parse::<Access>("0"), Ok(Access::default()));
    assert_eq!(parse::<Access>("12"), Ok(Access::from_repr(12)));
}

#[test]
fn test_parse_rejects() {
    assert!(parse::<Access>("").is_err());
    assert!(parse::<Access>("READ |").is_err());
    assert!(parse::<Access>("SUDO").is_err());
    // literal wider than the representation
    assert!(parse::<Access>("0x100").is_err());
    // discrete types take a single term
    assert!(parse::<Mode>("ASCII | BINARY").is_err());
}

#[test]
fn test_parse_discrete() {
    assert_eq!(parse::<Mode>("ASCII"), Ok(Mode::ASCII));
    assert_eq!(parse::<Mode>("0x2"), Ok(Mode::BINARY));
}

#[test]
fn test_from_str_round_trips_display() {
    for raw in 0..=0xFFu8 {
        let value = Access::from_repr(raw);
        let text = value.to_string();
        assert_eq!(text.parse::<Access>(), Ok(value), "{text}");
    }
    for raw in 0..=0xFFu8 {
        let value = Mode::from_repr(raw);
        assert_eq!(value.to_string().parse::<Mode>(), Ok(value));
    }
}

#[test]
fn test_to_names() {
    assert_eq!(to_names(Access::READ | Access::WRITE), vec!["READ", "WRITE", "RW"]);
    assert_eq!(to_names(Access::EXEC), vec!["EXEC"]);
    assert_eq!(to_names(Mode::BINARY), vec!["BINARY"]);
    assert!(to_names(Mode::from_repr(0)).is_empty());
}
