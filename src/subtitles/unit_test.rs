use crate::errors::SubwordError;
use crate::subtitles::{
    decode_latin1, format_timestamp, load_cues, load_cues_from_bytes, load_cues_with_report,
    parse_time_range, scan_words, tokenize_cue, tokenize_cues, Cue,
};
use std::time::Duration;

#[cfg(test)]
mod test_helpers {
    use super::*;

    pub const SAMPLE_SRT: &str = "1\n\
00:00:01,000 --> 00:00:04,500\n\
(laughs) Get out!\n\
\n\
2\n\
00:01:10,250 --> 00:01:12,000\n\
HAN: How you feeling, kid?\n\
\n\
3\n\
00:05:00,000 --> 00:05:03,750\n\
A well-known fact\n\
at 8:45 sharp.\n";

    pub fn words(text: &str) -> Vec<String> {
        let mut out = Vec::new();
        scan_words(text, |w| out.push(w));
        out
    }

    pub fn cue(text: &str, end_secs: u64) -> Cue {
        Cue::new(1, Duration::ZERO, Duration::from_secs(end_secs), text)
    }
}

#[test]
fn test_load_sample_cues() -> Result<(), SubwordError> {
    use test_helpers::*;
    let cues = load_cues(SAMPLE_SRT)?;
    assert_eq!(cues.len(), 3);
    assert_eq!(cues[0].index, 1);
    assert_eq!(cues[0].text, "(laughs) Get out!");
    assert_eq!(cues[0].end_time, Duration::from_millis(4500));
    assert_eq!(cues[1].start_time, Duration::from_millis(70_250));
    assert_eq!(cues[2].text, "A well-known fact\nat 8:45 sharp.");
    Ok(())
}

#[test]
fn test_preamble_and_crlf_are_skipped() -> Result<(), SubwordError> {
    let raw = "Downloaded from somewhere 2019\r\n\r\n1\r\n00:00:02,000 --> 00:00:03,000\r\nHello\r\n";
    let cues = load_cues(raw)?;
    assert_eq!(cues.len(), 1);
    assert_eq!(cues[0].text, "Hello");
    assert_eq!(cues[0].end_time, Duration::from_secs(3));
    Ok(())
}

#[test]
fn test_malformed_block_is_skipped_and_reported() -> Result<(), SubwordError> {
    let raw = "1\n00:00:01,000 --> 00:00:02,000\nfirst\n\n2\nnot a time\nbroken\n\n3\n00:00:05,000 --> 00:00:06,000\nthird\n";
    let report = load_cues_with_report(raw)?;
    assert_eq!(report.cues.len(), 2);
    assert_eq!(report.cues[1].text, "third");
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].line, 5);
    Ok(())
}

#[test]
fn test_overflowing_hours_are_rejected() -> Result<(), SubwordError> {
    let huge = "99999999999999999:00:00,000 --> 99999999999999999:00:01,000";
    assert!(parse_time_range(huge).is_none());

    let raw = format!("1\n00:00:01,000 --> 00:00:02,000\nfirst\n\n2\n{}\nlost\n", huge);
    let report = load_cues_with_report(&raw)?;
    assert_eq!(report.cues.len(), 1);
    assert_eq!(report.cues[0].text, "first");
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].line, 5);
    Ok(())
}

#[test]
fn test_text_without_cues_is_parse_error() {
    let result = load_cues("just some words\nwith no timing at all\n");
    assert!(matches!(result, Err(SubwordError::Parse(_))));

    let empty = load_cues("");
    assert!(matches!(empty, Err(SubwordError::Parse(_))));
}

#[test]
fn test_latin1_bytes_decode() -> Result<(), SubwordError> {
    let mut raw = b"1\n00:00:01,000 --> 00:00:02,000\nCaf".to_vec();
    raw.push(0xe9);
    raw.extend_from_slice(b" ol\xe9\n");
    let cues = load_cues_from_bytes(&raw)?;
    assert_eq!(cues[0].text, "Café olé");
    assert_eq!(decode_latin1(&[0x41, 0xff]), "A\u{ff}");
    Ok(())
}

#[test]
fn test_parse_time_range_variants() {
    let (start, end) = parse_time_range("00:00:01.5 --> 01:02:03,040 X1:10").unwrap();
    assert_eq!(start, Duration::from_millis(1500));
    assert_eq!(end, Duration::from_millis(3_723_040));
    assert!(parse_time_range("00:00:01,000 -->").is_none());
    assert!(parse_time_range("00:61:01,000 --> 00:00:02,000").is_none());
    assert_eq!(format_timestamp(3723.04), "01:02:03,040");
}

#[test]
fn test_single_clean_word() {
    use test_helpers::*;
    let tokens = tokenize_cue(&cue("Hello", 42));
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].word, "hello");
    assert_eq!(tokens[0].end_time_seconds, 42.0);
}

#[test]
fn test_bracketed_noise_is_removed() {
    use test_helpers::*;
    assert_eq!(words("(laughs) Get out!"), ["get", "out"]);
    assert_eq!(words("[DOOR SLAMS] Run"), ["run"]);
    assert_eq!(words("{\\an8}Up here"), ["up", "here"]);
    assert_eq!(words("<i>Hello</i> there"), ["hello", "there"]);
}

#[test]
fn test_speaker_labels_are_removed() {
    use test_helpers::*;
    assert_eq!(words("HAN: How you feeling, kid?"), ["how", "you", "feeling", "kid"]);
    assert_eq!(words("LUKE- Wait for me"), ["wait", "for", "me"]);
    // a dash after a space no longer touches the already emitted word
    assert_eq!(words("LUKE - Wait"), ["luke", "wait"]);
    assert_eq!(words("- Move it!"), ["move", "it"]);
}

#[test]
fn test_hyphen_splits_compounds() {
    use test_helpers::*;
    assert_eq!(words("well-known fact"), ["well", "known", "fact"]);
    // trailing hyphen is nulled, the word still ends at the text end
    assert_eq!(words("stop-"), ["stop"]);
}

#[test]
fn test_colon_rules() {
    use test_helpers::*;
    assert_eq!(words("at 8:45 sharp"), ["at", "8:45", "sharp"]);
    assert_eq!(words(":start"), ["start"]);
    assert_eq!(words("end:"), ["end"]);
    assert_eq!(words("a:b"), ["ab"]);
}

#[test]
fn test_apostrophes_kept_and_punctuation_dropped() {
    use test_helpers::*;
    assert_eq!(words("Don't go, O.K.?"), ["don't", "go", "ok"]);
    assert_eq!(words("line one\nline two"), ["line", "one", "line", "two"]);
    // tabs and non-ASCII letters are dropped without ending the word
    assert_eq!(words("a\tb café"), ["ab", "caf"]);
}

#[test]
fn test_bracket_edge_cases() {
    use test_helpers::*;
    // unclosed group runs to the end of the text
    assert_eq!(words("hello (whispering to"), ["hello"]);
    assert!(words("(").is_empty());
    // closer on the last character still ends the pending word
    assert_eq!(words("hello(sigh)"), ["hello"]);
    // the character after a closed group is only tested against later kinds
    assert_eq!(words("(a)(b)"), ["b"]);
    assert_eq!(words("(a)[b] c"), ["c"]);
}

#[test]
fn test_empty_text_yields_nothing() {
    use test_helpers::*;
    assert!(words("").is_empty());
    assert!(tokenize_cue(&cue("", 3)).is_empty());
    assert!(words("... !!").is_empty());
}

#[test]
fn test_tokens_inherit_cue_end_time() -> Result<(), SubwordError> {
    use test_helpers::*;
    let cues = load_cues(SAMPLE_SRT)?;
    let tokens = tokenize_cues(&cues);
    let listed: Vec<&str> = tokens.iter().map(|t| t.word.as_str()).collect();
    assert_eq!(
        listed,
        [
            "get", "out", "how", "you", "feeling", "kid", "a", "well", "known", "fact", "at",
            "8:45", "sharp"
        ]
    );
    assert!(tokens[..2].iter().all(|t| t.end_time_seconds == 4.5));
    assert!(tokens[2..6].iter().all(|t| t.end_time_seconds == 72.0));
    assert!(tokens[6..].iter().all(|t| t.end_time_seconds == 303.75));
    Ok(())
}

#[test]
fn test_tokenizing_is_deterministic() -> Result<(), SubwordError> {
    use test_helpers::*;
    let cues = load_cues(SAMPLE_SRT)?;
    assert_eq!(tokenize_cues(&cues), tokenize_cues(&cues));
    Ok(())
}

#[test]
fn test_cue_display_is_srt_block() -> Result<(), SubwordError> {
    let cue = Cue::new(
        7,
        Duration::from_millis(1500),
        Duration::from_millis(3_723_040),
        "Hello there",
    );
    let block = cue.to_string();
    assert_eq!(block, "7\n00:00:01,500 --> 01:02:03,040\nHello there");
    assert_eq!(load_cues(&block)?, vec![cue]);
    Ok(())
}
