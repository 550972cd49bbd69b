//! Cue text tokenizer.
//!
//! Turns the free text of each cue into lowercase word tokens stamped with the
//! cue's end time. The scanner drops bracketed noise (sound effects, font and
//! style tags), speaker labels written as `NAME:` or `NAME -`, and splits
//! hyphenated compounds:
//!
//! ```
//! use subword::subtitles::scan_words;
//!
//! let mut words = Vec::new();
//! scan_words("HAN: (sighs) A well-known <i>fact</i>", |w| words.push(w));
//! assert_eq!(words, ["a", "well", "known", "fact"]);
//! ```
//!
//! Only `0-9`, `A-Z`, `a-z`, `'` and digit-flanked `:` (as in `8:45`) make it into
//! a word. Other punctuation is dropped without ending the word; words end at a
//! space, a newline, or the end of the text.

use super::types::{Cue, Token};
use log::debug;

/// Bracket pairs whose content is discarded, in the order they are tested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Group {
    Paren,
    Square,
    Curly,
    Angle,
}

impl Group {
    const ORDER: [Group; 4] = [Group::Paren, Group::Square, Group::Curly, Group::Angle];

    const fn opener(self) -> char {
        match self {
            Group::Paren => '(',
            Group::Square => '[',
            Group::Curly => '{',
            Group::Angle => '<',
        }
    }

    const fn closer(self) -> char {
        match self {
            Group::Paren => ')',
            Group::Square => ']',
            Group::Curly => '}',
            Group::Angle => '>',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    InGroup(Group),
}

/// Character-level scanner over one cue text.
///
/// `current` is the character under examination after rewriting; `None` stands for
/// a nulled character, which neither joins a word nor ends one (except on the last
/// position, where every non-admitted character ends the word).
struct Scanner {
    chars: Vec<char>,
    pos: usize,
    state: ScanState,
    word: String,
}

impl Scanner {
    fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
            state: ScanState::Normal,
            word: String::new(),
        }
    }

    fn last(&self) -> usize {
        self.chars.len().saturating_sub(1)
    }

    fn at(&self, pos: usize) -> char {
        self.chars[pos]
    }

    fn run<F: FnMut(String)>(mut self, emit: &mut F) {
        while self.pos < self.chars.len() {
            let mut current = Some(self.at(self.pos));

            // The following character is re-tested against the later bracket
            // kinds only, within the same step.
            for group in Group::ORDER {
                if current == Some(group.opener()) {
                    current = self.skip_group(group);
                }
            }

            current = match current {
                Some('-') => self.rewrite_hyphen(),
                Some(':') => self.rewrite_colon(),
                other => other,
            };

            match current {
                Some(c) if is_word_char(c) => self.word.push(c),
                _ => {
                    let terminates =
                        matches!(current, Some(' ') | Some('\n')) || self.pos == self.last();
                    if terminates {
                        self.flush(emit);
                    }
                }
            }

            self.pos += 1;
        }

        self.flush(emit);
    }

    /// Consume a bracketed group starting at the opener under `pos`.
    ///
    /// Leaves `pos` on the character after the closer, or on the closer itself when
    /// it is the last character. An unclosed group consumes the rest of the text.
    fn skip_group(&mut self, group: Group) -> Option<char> {
        self.state = ScanState::InGroup(group);

        while let ScanState::InGroup(open) = self.state {
            if self.pos >= self.last() {
                self.pos = self.last();
                self.state = ScanState::Normal;
                return None;
            }
            self.pos += 1;
            if self.at(self.pos) == open.closer() {
                self.state = ScanState::Normal;
                if self.pos < self.last() {
                    self.pos += 1;
                }
            }
        }

        Some(self.at(self.pos))
    }

    fn rewrite_hyphen(&mut self) -> Option<char> {
        if self.pos < self.last() {
            if self.at(self.pos + 1) == ' ' {
                // speaker label such as "HAN - ..."
                self.word.clear();
                Some('-')
            } else {
                Some(' ')
            }
        } else {
            None
        }
    }

    fn rewrite_colon(&mut self) -> Option<char> {
        if self.pos == 0 || self.pos >= self.last() {
            return None;
        }

        let (prev, next) = (self.at(self.pos - 1), self.at(self.pos + 1));
        if next == ' ' {
            // speaker label such as "HAN: ..."
            self.word.clear();
            Some(' ')
        } else if prev.is_ascii_digit() && next.is_ascii_digit() {
            Some(':')
        } else {
            None
        }
    }

    fn flush<F: FnMut(String)>(&mut self, emit: &mut F) {
        if !self.word.is_empty() {
            emit(self.word.to_ascii_lowercase());
            self.word.clear();
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '\'' || c == ':'
}

/// Scan one cue text and hand every recognised lowercase word to `emit`, in order
pub fn scan_words<F: FnMut(String)>(text: &str, mut emit: F) {
    if text.is_empty() {
        return;
    }
    Scanner::new(text).run(&mut emit);
}

/// Tokenize a single cue; every token carries the cue end time
pub fn tokenize_cue(cue: &Cue) -> Vec<Token> {
    let end = cue.end_seconds();
    let mut tokens = Vec::new();
    scan_words(&cue.text, |word| tokens.push(Token::new(word, end)));
    tokens
}

/// Tokenize cues in input order into one token stream
pub fn tokenize_cues(cues: &[Cue]) -> Vec<Token> {
    let mut tokens = Vec::new();
    for cue in cues {
        let end = cue.end_seconds();
        scan_words(&cue.text, |word| tokens.push(Token::new(word, end)));
    }
    debug!("Tokenized {} cues into {} tokens", cues.len(), tokens.len());
    tokens
}
