//! Keyword analysis: frequency cloud and consistency matrix.

pub mod cloud;
pub mod consistency;
pub mod stopwords;

pub use cloud::{CloudEntry, KeywordCloud};
pub use consistency::{Consistency, ConsistencyMatrix};
