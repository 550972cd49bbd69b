use serde::{Deserialize, Serialize};

/// Window used when a view does not specify its own
pub const DEFAULT_WINDOW_MINUTES: f64 = 5.0;

/// Time windows (in minutes) used by the session's chart views
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    pub phrase_window_minutes: f64,
    pub word_count_window_minutes: f64,
    pub word_variety_window_minutes: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            phrase_window_minutes: 0.1,
            word_count_window_minutes: 0.1,
            word_variety_window_minutes: 1.0 / 60.0,
        }
    }
}

impl AnalysisConfig {
    /// Same window for every view
    pub fn uniform(window_minutes: f64) -> Self {
        Self {
            phrase_window_minutes: window_minutes,
            word_count_window_minutes: window_minutes,
            word_variety_window_minutes: window_minutes,
        }
    }

    pub fn with_phrase_window(mut self, minutes: f64) -> Self {
        self.phrase_window_minutes = minutes;
        self
    }

    pub fn with_word_count_window(mut self, minutes: f64) -> Self {
        self.word_count_window_minutes = minutes;
        self
    }

    pub fn with_word_variety_window(mut self, minutes: f64) -> Self {
        self.word_variety_window_minutes = minutes;
        self
    }
}
