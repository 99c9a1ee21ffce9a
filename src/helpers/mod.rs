//! Helper functions shared by the index, the export and the CLI

mod date;
mod url;

pub use date::*;
pub use url::*;
