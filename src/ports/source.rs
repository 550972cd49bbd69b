use crate::errors::SubwordResult;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Supplier of raw subtitle bytes (a local file, a download, a test fixture)
pub trait CueSource {
    /// Human-readable origin, used in log lines
    fn describe(&self) -> String;

    /// Fetch the complete raw content
    fn fetch(&self) -> SubwordResult<Vec<u8>>;
}

/// Local file wrapper
#[derive(Debug, Clone)]
pub struct FileCueSource(PathBuf);

impl FileCueSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        FileCueSource(path.as_ref().to_path_buf())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl CueSource for FileCueSource {
    fn describe(&self) -> String {
        self.0.display().to_string()
    }

    fn fetch(&self) -> SubwordResult<Vec<u8>> {
        let data = fs::read(&self.0)?;
        info!("Read {} bytes from {}", data.len(), self.0.display());
        Ok(data)
    }
}

/// In-memory source
#[derive(Debug, Clone)]
pub struct BytesCueSource {
    name: String,
    data: Vec<u8>,
}

impl BytesCueSource {
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }
}

impl CueSource for BytesCueSource {
    fn describe(&self) -> String {
        self.name.clone()
    }

    fn fetch(&self) -> SubwordResult<Vec<u8>> {
        Ok(self.data.clone())
    }
}
