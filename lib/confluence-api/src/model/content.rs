use serde::Deserialize;

use super::{ContainerId, Date, ExtensionPosition, Links, Space, User};

/// Page, blog post, comment or attachment.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Content {
    /// Content id.
    pub id: String,
    /// One of the `TYPE_*` constants.
    #[serde(rename = "type")]
    pub content_type: String,
    /// One of the `STATUS_*` constants.
    pub status: String,
    /// Title.
    pub title: String,
    /// Type-specific extensions.
    pub extensions: Option<Extensions>,
    /// Labels and attachment media type.
    pub metadata: Option<Metadata>,
    /// Page or space holding this content.
    pub container: Option<Container>,
    /// Space of the content.
    pub space: Option<Space>,
    /// Current version.
    pub version: Option<Version>,
    /// Operations the current user may perform.
    pub operations: Vec<Operation>,
    /// Direct children, by type.
    pub children: Option<Contents>,
    /// Parent pages, root first.
    pub ancestors: Vec<Content>,
    /// All descendants, by type.
    pub descendants: Option<Contents>,
    /// Rendered or stored body.
    pub body: Option<Body>,
    /// Links.
    #[serde(rename = "_links")]
    pub links: Option<Links>,
}

impl Content {
    /// Attachment content type.
    pub const TYPE_ATTACHMENT: &'static str = "attachment";
    /// Blog post content type.
    pub const TYPE_BLOGPOST: &'static str = "blogpost";
    /// Comment content type.
    pub const TYPE_COMMENT: &'static str = "comment";
    /// Page content type.
    pub const TYPE_PAGE: &'static str = "page";

    /// Published content.
    pub const STATUS_CURRENT: &'static str = "current";
    /// Content in the trash.
    pub const STATUS_TRASHED: &'static str = "trashed";
    /// Unpublished draft.
    pub const STATUS_DRAFT: &'static str = "draft";

    /// Returns `true` for attachments.
    #[must_use]
    pub fn is_attachment(&self) -> bool {
        self.content_type == Self::TYPE_ATTACHMENT
    }

    /// Returns `true` for blog posts.
    #[must_use]
    pub fn is_blogpost(&self) -> bool {
        self.content_type == Self::TYPE_BLOGPOST
    }

    /// Returns `true` for comments.
    #[must_use]
    pub fn is_comment(&self) -> bool {
        self.content_type == Self::TYPE_COMMENT
    }

    /// Returns `true` for pages.
    #[must_use]
    pub fn is_page(&self) -> bool {
        self.content_type == Self::TYPE_PAGE
    }

    /// Returns `true` if the content is in the trash.
    #[must_use]
    pub fn is_trashed(&self) -> bool {
        self.status == Self::STATUS_TRASHED
    }

    /// Returns `true` for unpublished drafts.
    #[must_use]
    pub fn is_draft(&self) -> bool {
        self.status == Self::STATUS_DRAFT
    }
}

/// Page of content.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContentCollection {
    /// Content of this page.
    pub results: Vec<Content>,
    /// Index of the first entry.
    pub start: u32,
    /// Requested page size.
    pub limit: u32,
    /// Number of entries in this page.
    pub size: u32,
}

/// Children or descendants, grouped by content type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Contents {
    /// Attachments.
    #[serde(rename = "attachment")]
    pub attachments: Option<ContentCollection>,
    /// Comments.
    #[serde(rename = "comment")]
    pub comments: Option<ContentCollection>,
    /// Pages.
    #[serde(rename = "page")]
    pub pages: Option<ContentCollection>,
    /// Blog posts.
    #[serde(rename = "blogpost", alias = "blogposts")]
    pub blogposts: Option<ContentCollection>,
}

/// Body representations. Only the expanded ones are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Body {
    /// Rendered view.
    pub view: Option<View>,
    /// Export view.
    pub export_view: Option<View>,
    /// Styled view.
    pub styled_view: Option<View>,
    /// Storage format.
    #[serde(rename = "storage")]
    pub storage_view: Option<View>,
}

/// One body representation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct View {
    /// `view`, `storage`, ...
    pub representation: String,
    /// Markup.
    pub value: String,
}

/// Content version.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Version {
    /// Change message.
    pub message: String,
    /// Author of the version.
    pub by: Option<User>,
    /// Creation time.
    pub when: Option<Date>,
    /// Version number.
    pub number: u32,
    /// Content at this version.
    pub content: Option<Box<Content>>,
    /// Minor edit, no notification sent.
    pub minor_edit: bool,
    /// Hidden version.
    pub hidden: bool,
}

/// Type-specific fields. Which are set depends on the content type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Extensions {
    /// Page position among siblings.
    pub position: ExtensionPosition,
    /// Attachment media type.
    pub media_type: String,
    /// Attachment size in bytes.
    pub file_size: u64,
    /// Attachment comment.
    pub comment: String,
    /// Comment location (`inline`, `footer`).
    pub location: String,
    /// Inline comment resolution.
    pub resolution: Option<Resolution>,
}

/// Resolution state of an inline comment.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Resolution {
    /// `open`, `resolved`, ...
    pub status: String,
    /// Who last changed the state.
    pub last_modifier: Option<User>,
    /// When the state last changed.
    pub last_modified_date: Option<Date>,
}

/// Operation permitted on content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Operation {
    /// Operation name, e.g. `read`.
    #[serde(rename = "operation")]
    pub name: String,
    /// Target type, e.g. `page`.
    pub target_type: String,
}

/// Content metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Metadata {
    /// Page labels.
    pub labels: Option<LabelCollection>,
    /// Attachment media type.
    pub media_type: String,
}

/// Content history.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct History {
    /// Creator.
    pub created_by: Option<User>,
    /// Creation time.
    pub created_date: Option<Date>,
    /// Latest version.
    pub last_updated: Option<Version>,
    /// Version before the requested one.
    pub previous_version: Option<Version>,
    /// Version after the requested one.
    pub next_version: Option<Version>,
    /// Contributors.
    pub contributors: Option<Contributors>,
    /// Whether this is the latest version.
    pub latest: bool,
}

/// Contributors of a piece of content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Contributors {
    /// Users who published a version.
    pub publishers: Option<Publishers>,
}

/// Publishing users.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Publishers {
    /// Expanded users.
    pub users: Vec<User>,
    /// Keys of all publishers.
    pub user_keys: Vec<String>,
}

/// Page or space holding a piece of content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Container {
    /// Container id.
    pub id: ContainerId,
    /// Space key, for spaces.
    pub key: String,
    /// Space name, for spaces.
    pub name: String,
    /// Title, for pages and blog posts.
    pub title: String,
    /// Links.
    #[serde(rename = "_links")]
    pub links: Option<Links>,
}

impl Container {
    /// Returns `true` if the container is a page or blog post.
    #[must_use]
    pub fn is_page(&self) -> bool {
        !self.title.is_empty()
    }

    /// Returns `true` if the container is a space.
    #[must_use]
    pub fn is_space(&self) -> bool {
        !self.key.is_empty()
    }
}

/// Page of labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LabelCollection {
    /// Labels of this page.
    pub results: Vec<Label>,
    /// Index of the first label.
    pub start: u32,
    /// Requested page size.
    pub limit: u32,
    /// Number of labels in this page.
    pub size: u32,
}

/// Content label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Label {
    /// `global`, `my` or `team`.
    pub prefix: String,
    /// Label name.
    pub name: String,
    /// Label id.
    pub id: String,
}
