pub mod client;
pub mod url;
pub mod walker;

pub use client::GitHubClient;
pub use url::parse_repo_url;
pub use walker::TreeWalker;
