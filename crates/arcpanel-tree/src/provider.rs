//! The pull contract a host tree view drives the panel through.

use async_trait::async_trait;

use arcpanel_core::result::AppResult;

use crate::model::ArchiveTree;
use crate::node::TreeNode;
use crate::notify::ChangeListener;
use crate::render::{self, TreeItem};

/// Tree views pull data: children on expansion, a display descriptor per
/// row, and a change signal telling them to re-pull from the root.
#[async_trait]
pub trait TreeDataProvider: Send + Sync {
    /// Children of `parent`, or the root entries when `parent` is `None`.
    ///
    /// Returns `Ok(None)` for leaf kinds that can never have children.
    async fn children(&self, parent: Option<&TreeNode>) -> AppResult<Option<Vec<TreeNode>>>;

    /// Display descriptor for one node.
    fn tree_item(&self, node: &TreeNode) -> AppResult<TreeItem>;

    /// Listener for the change signal.
    fn subscribe(&self) -> ChangeListener;
}

#[async_trait]
impl TreeDataProvider for ArchiveTree {
    async fn children(&self, parent: Option<&TreeNode>) -> AppResult<Option<Vec<TreeNode>>> {
        match parent {
            None => {
                let roots = self.roots().await?;
                Ok(Some(roots.into_iter().map(TreeNode::from).collect()))
            }
            Some(node) => Ok(render::expand(node)),
        }
    }

    fn tree_item(&self, node: &TreeNode) -> AppResult<TreeItem> {
        Ok(render::render(node))
    }

    fn subscribe(&self) -> ChangeListener {
        ArchiveTree::subscribe(self)
    }
}
