use super::types::{Phrase, PhraseMatch};
use crate::subtitles::Token;

/// Streaming phrase matcher with a single "words matched so far" counter.
///
/// A token equal to the phrase word at the counter advances it; reaching the phrase
/// length reports a match and restarts at 0. Any other token resets the counter to
/// 0 without being re-tested against the first phrase word, so matches never
/// overlap and a partial match is never resumed. For example, `a b` is not found
/// in `a a b`, and `the cat the cat` is not found in `the cat the the cat`.
#[derive(Debug, Clone)]
pub struct PhraseMatcher<'p> {
    phrase: &'p Phrase,
    matched: usize,
}

impl<'p> PhraseMatcher<'p> {
    pub fn new(phrase: &'p Phrase) -> Self {
        Self { phrase, matched: 0 }
    }

    /// Feed the next word; returns true when it completes an occurrence
    pub fn feed(&mut self, word: &str) -> bool {
        let words = self.phrase.words();
        if words.is_empty() {
            return false;
        }

        if words[self.matched] == word {
            self.matched += 1;
            if self.matched == words.len() {
                self.matched = 0;
                return true;
            }
        } else {
            self.matched = 0;
        }
        false
    }

    pub fn reset(&mut self) {
        self.matched = 0;
    }
}

/// Every occurrence of `phrase` in `tokens`, reported at its completing token
pub fn find_matches(tokens: &[Token], phrase: &Phrase) -> Vec<PhraseMatch> {
    let mut matcher = PhraseMatcher::new(phrase);
    tokens
        .iter()
        .enumerate()
        .filter(|(_, token)| matcher.feed(&token.word))
        .map(|(token_index, token)| PhraseMatch {
            token_index,
            end_time_seconds: token.end_time_seconds,
        })
        .collect()
}

/// Number of occurrences of `phrase` in `tokens`
pub fn count_matches(tokens: &[Token], phrase: &Phrase) -> usize {
    let mut matcher = PhraseMatcher::new(phrase);
    tokens.iter().filter(|token| matcher.feed(&token.word)).count()
}
