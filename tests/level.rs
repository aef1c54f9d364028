//! Tests for log level ordering and parsing.

use treelog::Level;

#[test]
fn level_ordering() {
    assert!(Level::Nothing < Level::Err);
    assert!(Level::Err < Level::Warn);
    assert!(Level::Warn < Level::Info);
    assert!(Level::Info < Level::Everything);
}

#[test]
fn level_display() {
    assert_eq!(Level::Nothing.to_string(), "nothing");
    assert_eq!(Level::Err.to_string(), "err");
    assert_eq!(Level::Warn.to_string(), "warn");
    assert_eq!(Level::Info.to_string(), "info");
    assert_eq!(Level::Everything.to_string(), "everything");
}

#[test]
fn level_from_str() {
    assert_eq!("nothing".parse::<Level>().unwrap(), Level::Nothing);
    assert_eq!("off".parse::<Level>().unwrap(), Level::Nothing);
    assert_eq!("ERROR".parse::<Level>().unwrap(), Level::Err);
    assert_eq!("warning".parse::<Level>().unwrap(), Level::Warn);
    assert_eq!("Info".parse::<Level>().unwrap(), Level::Info);
    assert_eq!("all".parse::<Level>().unwrap(), Level::Everything);
}

#[test]
fn level_from_str_invalid() {
    assert!("invalid".parse::<Level>().is_err());
}

#[test]
fn level_default() {
    assert_eq!(Level::default(), Level::Info);
}

#[test]
fn level_all_is_ordered() {
    let all = Level::all();
    assert_eq!(all.len(), 5);
    assert!(all.windows(2).all(|pair| pair[0] < pair[1]));
}
