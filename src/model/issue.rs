//! Jira REST response shapes.
//!
//! Typed views over the payloads that carry ADF rich-text fields. These are
//! pure data: fetching them is the HTTP layer's job. Known attributes are
//! typed strictly; everything else on the `fields` object (custom fields,
//! future additions) passes through untyped in [`IssueFields::extra`].

use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

use super::Document;

/// A single Jira issue.
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    /// Fields expanded by the server for this issue
    pub expand: String,

    /// Unique issue ID
    pub id: String,

    /// URL of this issue resource
    #[serde(rename = "self")]
    pub self_url: String,

    /// Issue key, e.g. `PROJ-123`
    pub key: String,

    /// The issue's field values
    pub fields: IssueFields,
}

/// The `fields` object of an issue.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueFields {
    /// When the status category last changed (ISO 8601)
    #[serde(rename = "statuscategorychangedate")]
    pub status_category_change_date: String,

    /// The issue's status category
    #[serde(rename = "statusCategory")]
    pub status_category: StatusCategory,

    /// Resolution object, shape left opaque
    #[serde(default)]
    pub resolution: Option<Value>,

    /// Labels set on the issue
    pub labels: Vec<String>,

    /// When the issue was last viewed (ISO 8601)
    #[serde(rename = "lastViewed", default)]
    pub last_viewed: Option<String>,

    /// Issue priority
    pub priority: Priority,

    /// Affected versions, shape left opaque
    pub versions: Vec<Value>,

    /// Fix versions, shape left opaque
    #[serde(rename = "fixVersions")]
    pub fix_versions: Vec<Value>,

    /// Issue links, shape left opaque
    #[serde(rename = "issuelinks")]
    pub issue_links: Vec<Value>,

    /// Assignee, if any
    #[serde(default)]
    pub assignee: Option<User>,

    /// Current status
    pub status: Status,

    /// Components, shape left opaque
    pub components: Vec<Value>,

    /// Remaining estimate in seconds
    #[serde(rename = "timeestimate", default)]
    pub time_estimate: Option<i64>,

    /// Aggregated original estimate in seconds
    #[serde(rename = "aggregatetimeoriginalestimate", default)]
    pub aggregate_time_original_estimate: Option<i64>,

    /// The user who created the issue
    pub creator: User,

    /// Subtasks of this issue
    pub subtasks: Vec<Subtask>,

    /// The user who reported the issue
    pub reporter: User,

    /// Aggregated progress
    #[serde(rename = "aggregateprogress")]
    pub aggregate_progress: Progress,

    /// Issue progress
    pub progress: Progress,

    /// Vote information
    pub votes: Votes,

    /// Issue type
    #[serde(rename = "issuetype")]
    pub issue_type: IssueType,

    /// Time spent in seconds
    #[serde(rename = "timespent", default)]
    pub time_spent: Option<i64>,

    /// The project this issue belongs to
    pub project: ProjectMeta,

    /// Aggregated time spent in seconds
    #[serde(rename = "aggregatetimespent", default)]
    pub aggregate_time_spent: Option<i64>,

    /// When the issue was resolved (ISO 8601)
    #[serde(rename = "resolutiondate", default)]
    pub resolution_date: Option<String>,

    /// Work ratio
    #[serde(rename = "workratio")]
    pub work_ratio: i64,

    /// Watcher information
    pub watches: Watches,

    /// When the issue was created (ISO 8601)
    pub created: String,

    /// When the issue was last updated (ISO 8601)
    pub updated: String,

    /// Original estimate in seconds
    #[serde(rename = "timeoriginalestimate", default)]
    pub time_original_estimate: Option<i64>,

    /// Issue description as an ADF document
    #[serde(default)]
    pub description: Option<Document>,

    /// Environment field, shape left opaque
    #[serde(default)]
    pub environment: Option<Value>,

    /// Due date
    #[serde(rename = "duedate", default)]
    pub due_date: Option<String>,

    /// Custom fields and anything else the server sends, preserved untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl IssueFields {
    /// Render the description to plain text, or `None` when the issue has no
    /// description.
    pub fn description_text(&self) -> Option<String> {
        self.description.as_ref().map(Document::to_plain_text)
    }
}

/// An issue status.
#[derive(Debug, Clone, Deserialize)]
pub struct Status {
    /// URL of this status resource
    #[serde(rename = "self")]
    pub self_url: String,

    /// Status description
    #[serde(default)]
    pub description: Option<String>,

    /// Status icon URL
    #[serde(rename = "iconUrl", default)]
    pub icon_url: Option<String>,

    /// Display name, e.g. `In Progress`
    pub name: String,

    /// Unique status ID
    pub id: String,

    /// The category this status belongs to
    #[serde(rename = "statusCategory")]
    pub status_category: StatusCategory,
}

/// A status category.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusCategory {
    /// URL of this category resource
    #[serde(rename = "self")]
    pub self_url: String,

    /// Unique category ID
    pub id: i64,

    /// Internal key, e.g. `indeterminate`
    pub key: String,

    /// Associated color name, e.g. `yellow`
    #[serde(rename = "colorName")]
    pub color_name: String,

    /// Display name
    pub name: String,
}

/// An issue type.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueType {
    /// URL of this issue type resource
    #[serde(rename = "self")]
    pub self_url: String,

    /// Unique issue type ID
    pub id: String,

    /// Issue type description
    #[serde(default)]
    pub description: Option<String>,

    /// Issue type icon URL
    #[serde(rename = "iconUrl", default)]
    pub icon_url: Option<String>,

    /// Display name, e.g. `Bug`
    pub name: String,

    /// Whether this is a subtask type
    pub subtask: bool,

    /// Avatar ID
    #[serde(rename = "avatarId", default)]
    pub avatar_id: Option<i64>,

    /// Hierarchy level
    #[serde(rename = "hierarchyLevel", default)]
    pub hierarchy_level: Option<i64>,
}

/// A Jira user.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    /// URL of this user resource
    #[serde(rename = "self")]
    pub self_url: String,

    /// Atlassian account ID
    #[serde(rename = "accountId")]
    pub account_id: String,

    /// Email address, when visible
    #[serde(rename = "emailAddress", default)]
    pub email_address: Option<String>,

    /// Display name
    #[serde(rename = "displayName")]
    pub display_name: String,

    /// Whether the account is active
    pub active: bool,

    /// User time zone
    #[serde(rename = "timeZone", default)]
    pub time_zone: Option<String>,

    /// Avatar URLs keyed by size
    #[serde(rename = "avatarUrls")]
    pub avatar_urls: HashMap<String, String>,

    /// Account type, e.g. `atlassian`
    #[serde(rename = "accountType", default)]
    pub account_type: Option<String>,
}

/// An issue priority.
#[derive(Debug, Clone, Deserialize)]
pub struct Priority {
    /// URL of this priority resource
    #[serde(rename = "self")]
    pub self_url: String,

    /// Priority icon URL
    #[serde(rename = "iconUrl")]
    pub icon_url: String,

    /// Display name, e.g. `Lowest`
    pub name: String,

    /// Unique priority ID
    pub id: String,
}

/// Project metadata embedded in issue fields.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectMeta {
    /// URL of this project resource
    #[serde(rename = "self")]
    pub self_url: String,

    /// Unique project ID
    pub id: String,

    /// Project key
    pub key: String,

    /// Display name
    pub name: String,

    /// Project type key, e.g. `software`
    #[serde(rename = "projectTypeKey")]
    pub project_type_key: String,

    /// Whether this is a simplified (team-managed) project
    #[serde(default)]
    pub simplified: Option<bool>,

    /// Avatar URLs keyed by size
    #[serde(rename = "avatarUrls")]
    pub avatar_urls: HashMap<String, String>,

    /// Category the project belongs to
    #[serde(rename = "projectCategory", default)]
    pub project_category: Option<ProjectCategory>,
}

/// A project category.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectCategory {
    /// URL of this category resource
    #[serde(rename = "self")]
    pub self_url: String,

    /// Unique category ID
    pub id: String,

    /// Category description
    #[serde(default)]
    pub description: Option<String>,

    /// Display name
    pub name: String,
}

/// Progress counters on an issue.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Progress {
    /// Current progress value
    pub progress: i64,

    /// Total progress value
    pub total: i64,
}

/// Watcher information.
#[derive(Debug, Clone, Deserialize)]
pub struct Watches {
    /// URL of this watchers resource
    #[serde(rename = "self")]
    pub self_url: String,

    /// Number of watchers
    #[serde(rename = "watchCount")]
    pub watch_count: i64,

    /// Whether the current user is watching
    #[serde(rename = "isWatching")]
    pub is_watching: bool,
}

/// Vote information.
#[derive(Debug, Clone, Deserialize)]
pub struct Votes {
    /// URL of this votes resource
    #[serde(rename = "self")]
    pub self_url: String,

    /// Total number of votes
    pub votes: i64,

    /// Whether the current user has voted
    #[serde(rename = "hasVoted")]
    pub has_voted: bool,
}

/// A subtask reference (same envelope as an issue, fields left opaque).
#[derive(Debug, Clone, Deserialize)]
pub struct Subtask {
    /// Unique subtask ID
    pub id: String,

    /// Subtask key
    pub key: String,

    /// URL of this subtask resource
    #[serde(rename = "self")]
    pub self_url: String,

    /// Subtask fields, undecoded
    #[serde(default)]
    pub fields: Option<Value>,
}

/// Search results from the issue search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResults {
    /// Expanded metadata list
    #[serde(default)]
    pub expand: Option<String>,

    /// Start index of this page
    #[serde(rename = "startAt")]
    pub start_at: i64,

    /// Requested page size
    #[serde(rename = "maxResults")]
    pub max_results: i64,

    /// Total number of matching issues
    pub total: i64,

    /// Issues on this page
    pub issues: Vec<Issue>,
}

/// An uploaded attachment.
#[derive(Debug, Clone, Deserialize)]
pub struct Attachment {
    /// Unique attachment ID
    pub id: String,

    /// URL of this attachment resource
    #[serde(rename = "self")]
    pub self_url: String,

    /// File name
    pub filename: String,

    /// The user who uploaded the file
    pub author: User,

    /// When the attachment was created (ISO 8601)
    pub created: String,

    /// File size in bytes
    pub size: i64,

    /// MIME type
    #[serde(rename = "mimeType")]
    pub mime_type: String,

    /// Download URL
    #[serde(default)]
    pub content: Option<String>,

    /// Thumbnail URL, for images
    #[serde(default)]
    pub thumbnail: Option<String>,
}

/// Minimal information about a freshly created issue.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedIssue {
    /// Unique issue ID
    pub id: String,

    /// Issue key, e.g. `PROJ-456`
    pub key: String,

    /// URL of the created issue resource
    #[serde(rename = "self")]
    pub self_url: String,
}
