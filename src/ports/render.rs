use crate::analysis::TimeSeries;
use crate::errors::SubwordResult;
use serde::Serialize;
use std::path::PathBuf;

/// Everything a renderer needs to draw one time-series chart
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChartRequest {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: TimeSeries,
}

impl ChartRequest {
    pub fn phrase_frequency(phrase: &str, series: TimeSeries) -> Self {
        Self {
            title: format!("Frequency of \"{}\" in Film", phrase),
            x_label: "Time (minutes)".to_string(),
            y_label: "Frequency".to_string(),
            series,
        }
    }

    pub fn word_count(series: TimeSeries) -> Self {
        Self {
            title: "Total Words in Film".to_string(),
            x_label: "Time (minutes)".to_string(),
            y_label: "Word Count".to_string(),
            series,
        }
    }

    pub fn word_variety(series: TimeSeries) -> Self {
        Self {
            title: "Unique Words in Film".to_string(),
            x_label: "Time (minutes)".to_string(),
            y_label: "Unique Words".to_string(),
            series,
        }
    }
}

/// Presentation-layer chart backend; returns where the rendered chart was stored
pub trait ChartRenderer {
    fn render(&self, request: &ChartRequest) -> SubwordResult<PathBuf>;
}
