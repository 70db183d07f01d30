//! Node rendering: the stateless mapping from tree nodes to display
//! descriptors, and the expansion rules for synthesized children.

use serde::Serialize;

use crate::command::PanelCommand;
use crate::node::TreeNode;

/// Icon tag attached to a display descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    /// Archive without downloadable content.
    Archive,
    /// Archive carrying downloadable content.
    ArchiveWithFiles,
    /// Description row.
    Book,
    /// File grouping row.
    Files,
    /// Single file row.
    FileText,
}

impl Icon {
    /// The icon tag as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Archive => "archive",
            Self::ArchiveWithFiles => "archive-with-files",
            Self::Book => "book",
            Self::Files => "files",
            Self::FileText => "file-text",
        }
    }
}

/// Context tag a host uses to decide which affordances a row offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ContextTag {
    /// Archive without downloadable content.
    Archive,
    /// Archive carrying downloadable content.
    ArchiveWithFiles,
    /// File grouping row.
    Files,
    /// Single file row.
    File,
    /// Load-more row.
    More,
}

impl ContextTag {
    /// The context tag as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Archive => "archive",
            Self::ArchiveWithFiles => "archiveWithFiles",
            Self::Files => "files",
            Self::File => "file",
            Self::More => "more",
        }
    }
}

/// Display descriptor for one tree row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeItem {
    /// Text shown on the row.
    pub label: String,
    /// Icon tag, if the row carries one.
    pub icon: Option<Icon>,
    /// Whether the row can be expanded.
    pub expandable: bool,
    /// Hover text, if any.
    pub tooltip: Option<String>,
    /// Context tag for host affordances, if any.
    pub context: Option<ContextTag>,
    /// Command fired when the row is activated, if any.
    pub command: Option<PanelCommand>,
}

/// Map a node to its display descriptor.
///
/// Total over the node union; a node outside a command's domain is
/// rejected at the action boundary, not here.
pub fn render(node: &TreeNode) -> TreeItem {
    match node {
        TreeNode::Archive(archive) => {
            let with_files = archive.has_downloadable_content();
            TreeItem {
                label: archive.title.clone(),
                icon: Some(if with_files {
                    Icon::ArchiveWithFiles
                } else {
                    Icon::Archive
                }),
                expandable: true,
                tooltip: Some(format!(
                    "{}\n{}\n{}",
                    archive.id,
                    archive.description,
                    archive.last_updated.to_rfc3339()
                )),
                context: Some(if with_files {
                    ContextTag::ArchiveWithFiles
                } else {
                    ContextTag::Archive
                }),
                command: None,
            }
        }
        TreeNode::Description(text) => TreeItem {
            label: text.clone(),
            icon: Some(Icon::Book),
            expandable: false,
            tooltip: None,
            context: None,
            command: None,
        },
        TreeNode::FileGroup { .. } => TreeItem {
            label: "files".to_string(),
            icon: Some(Icon::Files),
            expandable: true,
            tooltip: None,
            context: Some(ContextTag::Files),
            command: None,
        },
        TreeNode::File(file) => TreeItem {
            label: file.name.clone(),
            icon: Some(Icon::FileText),
            expandable: false,
            tooltip: Some(format!("{}\n{}", file.id, file.content)),
            context: Some(ContextTag::File),
            command: None,
        },
        TreeNode::LoadMore { next_page } => TreeItem {
            label: "...".to_string(),
            icon: None,
            expandable: false,
            tooltip: Some("Load the next set of items".to_string()),
            context: Some(ContextTag::More),
            command: Some(PanelCommand::LoadNextPage { page: *next_page }),
        },
    }
}

/// Children synthesized for a node, or `None` for kinds that can never
/// have any.
///
/// An archive expands to its description row plus, when it has
/// downloadable content, the grouping row for its files. The load-more
/// row expands to an empty list rather than `None`: it is a real row the
/// host may probe, not a leaf kind.
pub fn expand(node: &TreeNode) -> Option<Vec<TreeNode>> {
    match node {
        TreeNode::Archive(archive) => {
            let mut children = vec![TreeNode::Description(archive.description.clone())];
            if let Some(files) = &archive.files {
                children.push(TreeNode::FileGroup {
                    files: files.clone(),
                });
            }
            Some(children)
        }
        TreeNode::FileGroup { files } => {
            Some(files.iter().cloned().map(TreeNode::File).collect())
        }
        TreeNode::LoadMore { .. } => Some(Vec::new()),
        TreeNode::Description(_) | TreeNode::File(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcpanel_core::types::ArchiveId;
    use arcpanel_entity::{Archive, FileAsset};
    use chrono::Utc;

    fn archive(files: Option<Vec<FileAsset>>) -> Archive {
        Archive {
            id: ArchiveId::new(),
            internal_id: 7,
            title: "Archive 7".to_string(),
            description: "Lorem Ipsum".to_string(),
            last_updated: Utc::now(),
            files,
        }
    }

    #[test]
    fn test_render_archive_varies_with_content() {
        let plain = render(&TreeNode::Archive(archive(None)));
        assert_eq!(plain.label, "Archive 7");
        assert!(plain.expandable);
        assert_eq!(plain.icon, Some(Icon::Archive));
        assert_eq!(plain.context, Some(ContextTag::Archive));

        let with_files = render(&TreeNode::Archive(archive(Some(vec![]))));
        assert_eq!(with_files.icon, Some(Icon::ArchiveWithFiles));
        assert_eq!(with_files.context, Some(ContextTag::ArchiveWithFiles));
    }

    #[test]
    fn test_render_archive_tooltip_fields() {
        let record = archive(None);
        let id = record.id.to_string();
        let item = render(&TreeNode::Archive(record));
        let tooltip = item.tooltip.unwrap();
        assert!(tooltip.contains(&id));
        assert!(tooltip.contains("Lorem Ipsum"));
    }

    #[test]
    fn test_render_load_more_row() {
        let item = render(&TreeNode::LoadMore { next_page: 3 });
        assert_eq!(item.label, "...");
        assert!(!item.expandable);
        assert_eq!(item.tooltip.as_deref(), Some("Load the next set of items"));
        assert_eq!(item.context, Some(ContextTag::More));
        assert_eq!(item.command, Some(PanelCommand::LoadNextPage { page: 3 }));
    }

    #[test]
    fn test_render_file_row() {
        let file = FileAsset::new("File 2", "k3x9p");
        let id = file.id.to_string();
        let item = render(&TreeNode::File(file));
        assert_eq!(item.label, "File 2");
        assert_eq!(item.icon, Some(Icon::FileText));
        let tooltip = item.tooltip.unwrap();
        assert!(tooltip.contains(&id));
        assert!(tooltip.contains("k3x9p"));
    }

    #[test]
    fn test_expand_archive_children() {
        let file = FileAsset::new("File 1", "aaaaa");
        let children = expand(&TreeNode::Archive(archive(Some(vec![file])))).unwrap();
        assert_eq!(children.len(), 2);
        assert!(matches!(&children[0], TreeNode::Description(text) if text == "Lorem Ipsum"));
        assert!(matches!(&children[1], TreeNode::FileGroup { files } if files.len() == 1));

        let bare = expand(&TreeNode::Archive(archive(None))).unwrap();
        assert_eq!(bare.len(), 1);
    }

    #[test]
    fn test_expand_leaves() {
        assert_eq!(
            expand(&TreeNode::LoadMore { next_page: 1 }).map(|children| children.len()),
            Some(0)
        );
        assert!(expand(&TreeNode::Description("text".to_string())).is_none());
        assert!(expand(&TreeNode::File(FileAsset::new("File 1", "aaaaa"))).is_none());
    }

    #[test]
    fn test_wire_names_match_tags() {
        assert_eq!(
            serde_json::to_string(&Icon::ArchiveWithFiles).unwrap(),
            "\"archive-with-files\""
        );
        assert_eq!(
            serde_json::to_string(&ContextTag::ArchiveWithFiles).unwrap(),
            "\"archiveWithFiles\""
        );
        assert_eq!(Icon::FileText.as_str(), "file-text");
        assert_eq!(ContextTag::More.as_str(), "more");
    }
}
