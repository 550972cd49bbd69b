use crate::analysis::{build_frequency_table, FrequencyEntry};
use crate::errors::SubwordError;
use crate::listing::{
    read_frequency_listing, read_token_listing, write_frequency_listing, write_token_listing,
};
use crate::subtitles::Token;

#[test]
fn test_frequency_listing_format() -> Result<(), SubwordError> {
    let entries = vec![FrequencyEntry::new("the", 3), FrequencyEntry::new("don't", 1)];
    let mut out = Vec::new();
    write_frequency_listing(&mut out, &entries)?;
    assert_eq!(String::from_utf8(out).unwrap(), "the\t3\ndon't\t1\n");
    Ok(())
}

#[test]
fn test_token_listing_format() -> Result<(), SubwordError> {
    let tokens = vec![Token::new("get", 4.5), Token::new("out", 72.0)];
    let mut out = Vec::new();
    write_token_listing(&mut out, &tokens)?;
    assert_eq!(String::from_utf8(out).unwrap(), "1\tget\t4.5\n2\tout\t72\n");
    Ok(())
}

#[test]
fn test_listings_read_back() -> Result<(), SubwordError> {
    let tokens = vec![
        Token::new("8:45", 303.75),
        Token::new("hi", 0.001),
        Token::new("hi", 3600.0),
    ];
    let entries = build_frequency_table(&tokens);

    let mut token_text = Vec::new();
    write_token_listing(&mut token_text, &tokens)?;
    assert_eq!(read_token_listing(token_text.as_slice())?, tokens);

    let mut freq_text = Vec::new();
    write_frequency_listing(&mut freq_text, &entries)?;
    assert_eq!(read_frequency_listing(freq_text.as_slice())?, entries);
    Ok(())
}

#[test]
fn test_malformed_listing_lines() {
    let missing = read_frequency_listing("word\n".as_bytes());
    assert!(matches!(missing, Err(SubwordError::Parse(_))));

    let bad_count = read_frequency_listing("word\tmany\n".as_bytes());
    match bad_count {
        Err(SubwordError::Parse(err)) => assert!(err.message.starts_with("line 1:")),
        other => panic!("expected parse error, got {:?}", other),
    }

    let out_of_order = read_token_listing("2\thi\t1.0\n".as_bytes());
    assert!(matches!(out_of_order, Err(SubwordError::Parse(_))));

    let blank_lines = read_token_listing("\n1\thi\t1.5\n\n".as_bytes()).unwrap();
    assert_eq!(blank_lines, vec![Token::new("hi", 1.5)]);
}
