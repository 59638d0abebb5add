//! Data transfer objects (DTOs) for remote APIs and our own responses.
//!
//! - `tree`: TreeNode, RepoCoordinate
//! - `github`: ContentEntry, EntryKind from the GitHub contents API
//! - `analysis`: AnalyzeRequest, AnalyzeResponse, GenerationCheck

pub mod analysis;
pub mod github;
pub mod tree;

pub use analysis::*;
pub use github::*;
pub use tree::*;
