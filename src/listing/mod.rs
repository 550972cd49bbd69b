//! Tab-delimited listings of analysis artifacts.
//!
//! Two plain-text formats, one record per line:
//!
//! - frequency listing: `word<TAB>count`, in table order
//! - token listing: `ordinal<TAB>word<TAB>seconds`, ordinal starting at 1
//!
//! Both can be read back within the same session.

mod export;
mod import;

pub use export::{
    write_frequency_listing, write_frequency_listing_to, write_token_listing,
    write_token_listing_to,
};
pub use import::{read_frequency_listing, read_token_listing};

#[cfg(test)]
pub mod unit_test;
