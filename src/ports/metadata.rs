use crate::errors::SubwordResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Film details shown next to the analysis
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct FilmInfo {
    pub title: String,
    pub year: Option<u16>,
    pub director: Option<String>,
    pub cast: Vec<String>,
    pub runtime_minutes: Option<u32>,
}

impl FilmInfo {
    /// Lead cast as a comma-separated line (first three names)
    pub fn lead_cast(&self) -> String {
        self.cast
            .iter()
            .take(3)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Remote film database lookup
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    async fn lookup(&self, query: &str) -> SubwordResult<FilmInfo>;
}
