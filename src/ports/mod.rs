//! Narrow interfaces to the collaborators around the analysis core.
//!
//! The core reads subtitle bytes through [`CueSource`] and hands finished series to
//! a [`ChartRenderer`]; film details come from a [`MetadataProvider`]. None of the
//! implementations beyond the local and in-memory sources live in this crate.

mod metadata;
mod render;
mod source;

pub use metadata::{FilmInfo, MetadataProvider};
pub use render::{ChartRenderer, ChartRequest};
pub use source::{BytesCueSource, CueSource, FileCueSource};
