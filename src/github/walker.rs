//! Recursive expansion of a remote repository into a `TreeNode` tree.
//!
//! Each directory level is one listing call. Every file leaf costs one raw
//! content fetch, and every subdirectory costs one recursive expansion.
//! Siblings go through `buffered(concurrency)`, so at most `concurrency`
//! entries per level are in flight. Results still come back in listing
//! order. The first failure aborts the whole walk, and no partial tree is
//! returned.

use futures::future::BoxFuture;
use futures::{stream, FutureExt, StreamExt, TryStreamExt};

use crate::error::{AppError, Result};
use crate::github::GitHubClient;
use crate::models::{ContentEntry, EntryKind, RepoCoordinate, TreeNode};

pub struct TreeWalker {
    client: GitHubClient,
    concurrency: usize,
}

impl TreeWalker {
    pub fn new(client: GitHubClient, concurrency: usize) -> Self {
        Self {
            client,
            concurrency: concurrency.max(1),
        }
    }

    /// Lists `path` (root when empty) and expands every file and
    /// subdirectory below it.
    pub fn list_and_expand<'a>(
        &'a self,
        repo: &'a RepoCoordinate,
        path: &'a str,
    ) -> BoxFuture<'a, Result<Vec<TreeNode>>> {
        async move {
            let entries = self.client.list_directory(repo, path).await?;
            tracing::debug!(repo = %repo, path, entries = entries.len(), "listed directory");

            stream::iter(entries)
                .filter(|entry| {
                    let keep = entry.kind.is_expandable();
                    if !keep {
                        tracing::debug!(path = %entry.path, kind = ?entry.kind, "skipping entry");
                    }
                    futures::future::ready(keep)
                })
                .map(move |entry| self.expand_entry(repo, entry))
                .buffered(self.concurrency)
                .try_collect::<Vec<TreeNode>>()
                .await
        }
        .boxed()
    }

    async fn expand_entry(&self, repo: &RepoCoordinate, entry: ContentEntry) -> Result<TreeNode> {
        let ContentEntry {
            name,
            path,
            kind,
            download_url,
        } = entry;

        if kind == EntryKind::Dir {
            let children = self.list_and_expand(repo, &path).await?;
            return Ok(TreeNode::Directory {
                name,
                path,
                children,
            });
        }

        let download_url = download_url.ok_or_else(|| AppError::Fetch {
            path: path.clone(),
            reason: "listing has no download_url".to_string(),
        })?;
        let content = self.client.fetch_file_content(&path, &download_url).await?;

        Ok(TreeNode::File {
            name,
            path,
            content,
        })
    }
}
