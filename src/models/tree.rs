//! Tree and repository-related DTOs.
//!
//! - `TreeNode`: Recursive file/directory node with fetched content
//! - `RepoCoordinate`: Owner/name pair identifying a remote repository

use std::fmt;

use serde::{Deserialize, Serialize};

/// One entry of a remote repository.
///
/// Files carry their decoded content and directories carry their children,
/// never both. Serialized as `{"type": "file", .., "content": ..}` or
/// `{"type": "dir", .., "contents": [..]}` for the frontend's tree view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum TreeNode {
    #[serde(rename = "file")]
    File {
        name: String,
        path: String,
        content: String,
    },
    #[serde(rename = "dir")]
    Directory {
        name: String,
        path: String,
        #[serde(rename = "contents")]
        children: Vec<TreeNode>,
    },
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name, .. } | TreeNode::Directory { name, .. } => name,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            TreeNode::File { path, .. } | TreeNode::Directory { path, .. } => path,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, TreeNode::File { .. })
    }

    /// Depth-first, pre-order iterator over `nodes` and all their descendants.
    pub fn walk(nodes: &[TreeNode]) -> Walk<'_> {
        Walk {
            stack: nodes.iter().rev().collect(),
        }
    }
}

pub struct Walk<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let TreeNode::Directory { children, .. } = node {
            self.stack.extend(children.iter().rev());
        }
        Some(node)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoCoordinate {
    pub owner: String,
    pub name: String,
}

impl fmt::Display for RepoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn file(path: &str, content: &str) -> TreeNode {
        TreeNode::File {
            name: path.rsplit('/').next().unwrap().to_string(),
            path: path.to_string(),
            content: content.to_string(),
        }
    }

    fn dir(path: &str, children: Vec<TreeNode>) -> TreeNode {
        TreeNode::Directory {
            name: path.rsplit('/').next().unwrap().to_string(),
            path: path.to_string(),
            children,
        }
    }

    #[test]
    fn serializes_in_frontend_shape() {
        let nodes = vec![file("README.md", "hello"), dir("docs", vec![])];
        let value = serde_json::to_value(&nodes).unwrap();
        assert_eq!(
            value,
            json!([
                { "type": "file", "name": "README.md", "path": "README.md", "content": "hello" },
                { "type": "dir", "name": "docs", "path": "docs", "contents": [] }
            ])
        );
    }

    #[test]
    fn file_never_serializes_children_and_dir_never_content() {
        let value = serde_json::to_value(dir("src", vec![file("src/main.rs", "fn main() {}")])).unwrap();
        assert!(value.get("content").is_none());
        let child = &value["contents"][0];
        assert!(child.get("contents").is_none());
        assert_eq!(child["content"], "fn main() {}");
    }

    #[test]
    fn walk_is_depth_first_preorder() {
        let nodes = vec![
            dir("a", vec![file("a/x", ""), dir("a/b", vec![file("a/b/y", "")])]),
            file("z", ""),
        ];
        let paths: Vec<&str> = TreeNode::walk(&nodes).map(TreeNode::path).collect();
        assert_eq!(paths, vec!["a", "a/x", "a/b", "a/b/y", "z"]);
    }

    #[test]
    fn coordinate_displays_as_owner_slash_name() {
        let repo = RepoCoordinate {
            owner: "rust-lang".to_string(),
            name: "cargo".to_string(),
        };
        assert_eq!(repo.to_string(), "rust-lang/cargo");
    }
}
