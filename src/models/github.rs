//! GitHub contents API DTOs.
//!
//! - `ContentEntry`: One item of a `GET /repos/{owner}/{repo}/contents/{path}` listing
//! - `EntryKind`: The listing's `type` field

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ContentEntry {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default)]
    pub download_url: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
    Symlink,
    Submodule,
    #[serde(other)]
    Other,
}

impl EntryKind {
    /// Only files and directories end up in the tree.
    pub fn is_expandable(self) -> bool {
        matches!(self, EntryKind::File | EntryKind::Dir)
    }
}
