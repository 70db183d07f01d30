//! # arcpanel-tree
//!
//! The panel core: the materialized archive tree, node rendering, change
//! notification, the panel command set, and the boundary traits a host
//! implements to supply dialogs and document handling.
//!
//! The tree is the single source of truth for what the panel shows. Hosts
//! pull nodes through [`TreeDataProvider`], render them with the display
//! descriptors from [`render`], and run user actions through
//! [`ArchiveActions`]. Every mutation fires the change signal exactly
//! once; consumers then re-read the tree from the root.

pub mod actions;
pub mod command;
pub mod host;
pub mod model;
pub mod node;
pub mod notify;
pub mod provider;
pub mod render;

pub use actions::ArchiveActions;
pub use command::{PanelCommand, VIEW_ID};
pub use host::HostSurface;
pub use model::ArchiveTree;
pub use node::{TreeEntry, TreeNode};
pub use notify::{ChangeListener, ChangeNotifier};
pub use provider::TreeDataProvider;
pub use render::{ContextTag, Icon, TreeItem};
