use std::fs::{self, File};
use std::io::BufReader;
use subword::listing::{read_frequency_listing, read_token_listing};
use subword::{AnalysisSession, SubwordError};

#[test]
fn test_session_listings_round_trip() -> Result<(), SubwordError> {
    let dir = tempfile::tempdir()?;
    let mut session = AnalysisSession::default();
    session.open(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/sample.srt"
    ))?;

    let counts_path = dir.path().join("wordcount.tsv");
    let words_path = dir.path().join("words.tsv");
    session.export_frequency_listing(&counts_path)?;
    session.export_token_listing(&words_path)?;

    let counts_text = fs::read_to_string(&counts_path)?;
    assert!(counts_text.starts_with("feel\t2\ngreat\t2\ni\t2\n8:45\t1\n"));

    let words_text = fs::read_to_string(&words_path)?;
    assert_eq!(words_text.lines().next(), Some("1\thow\t33"));
    assert_eq!(words_text.lines().count(), 20);

    let entries = read_frequency_listing(BufReader::new(File::open(&counts_path)?))?;
    assert_eq!(entries, session.frequency_table());

    let tokens = read_token_listing(BufReader::new(File::open(&words_path)?))?;
    assert_eq!(tokens.as_slice(), session.tokens());
    Ok(())
}

#[test]
fn test_export_into_missing_directory_is_io_error() {
    let session = AnalysisSession::default();
    let result = session.export_token_listing("/nonexistent-dir/for/sure/words.tsv");
    assert!(matches!(result, Err(SubwordError::Io(_))));
}
