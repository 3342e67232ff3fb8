use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::error::ExportError;
use crate::util::markup::html_to_markdown;

/// Work item categories recognised by the export. There is no fallback
/// category: anything else is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemType {
    Bug,
    ProductBacklogItem,
    Task,
    Epic,
    Feature,
}

impl ItemType {
    pub const ALL: [ItemType; 5] = [
        ItemType::Bug,
        ItemType::ProductBacklogItem,
        ItemType::Task,
        ItemType::Epic,
        ItemType::Feature,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Bug => "bug",
            ItemType::ProductBacklogItem => "product backlog item",
            ItemType::Task => "task",
            ItemType::Epic => "epic",
            ItemType::Feature => "feature",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownItemType(pub String);

/// Matching ignores case and surrounding whitespace, and treats hyphens as
/// spaces so `product-backlog-item` and `Product Backlog Item` agree.
impl FromStr for ItemType {
    type Err = UnknownItemType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', " ");
        ItemType::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| UnknownItemType(s.to_string()))
    }
}

/// The JSON object printed by `az boards work-item show`. Only the fields the
/// export reads are declared; everything else in the response is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawWorkItem {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub fields: RawFields,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFields {
    #[serde(rename = "System.Id")]
    pub id: Option<u64>,
    #[serde(rename = "System.Title")]
    pub title: Option<String>,
    #[serde(rename = "System.WorkItemType")]
    pub work_item_type: Option<String>,
    #[serde(rename = "System.Tags")]
    pub tags: Option<String>,
    #[serde(rename = "System.State")]
    pub state: Option<String>,
    #[serde(rename = "System.Description")]
    pub description: Option<String>,
    #[serde(rename = "System.Parent")]
    pub parent: Option<u64>,
}

/// A normalized work item, one per exported row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItemRecord {
    pub id: u64,
    pub title: String,
    pub item_type: ItemType,
    pub tags: Vec<String>,
    pub status: String,
    /// Raw HTML as stored in Azure DevOps. Converted only when rendering a row.
    pub description: Option<String>,
    pub azure_url: String,
    /// Title of the immediate parent, filled in after the parent lookup.
    pub parent: Option<String>,
}

impl WorkItemRecord {
    pub const FIELDS: [&'static str; 8] = [
        "id",
        "title",
        "type",
        "tags",
        "status",
        "description",
        "azure_url",
        "parent",
    ];

    /// Build a record from the response fetched for `requested_id`. Errors
    /// are attributed to `requested_id`, since the response may lack its own.
    pub fn from_raw(raw: &RawWorkItem, requested_id: u64) -> Result<Self, ExportError> {
        let fields = &raw.fields;
        let missing = |field| ExportError::MalformedItem {
            item_id: requested_id,
            field,
        };
        let id = fields.id.ok_or_else(|| missing("System.Id"))?;
        let title = fields.title.clone().ok_or_else(|| missing("System.Title"))?;
        let raw_type = fields
            .work_item_type
            .as_deref()
            .ok_or_else(|| missing("System.WorkItemType"))?;
        let item_type = raw_type.parse::<ItemType>().map_err(|UnknownItemType(value)| {
            ExportError::UnknownItemType {
                item_id: requested_id,
                value,
            }
        })?;

        Ok(Self {
            id,
            title,
            item_type,
            tags: split_tags(fields.tags.as_deref().unwrap_or_default()),
            status: fields.state.clone().unwrap_or_default(),
            description: fields.description.clone(),
            azure_url: raw.url.clone().unwrap_or_default(),
            parent: None,
        })
    }

    /// Render the record as `(column, value)` pairs in header order.
    pub fn to_row(&self) -> Result<Vec<(&'static str, String)>, ExportError> {
        let description = match self.description.as_deref() {
            Some(html) if !html.is_empty() => {
                html_to_markdown(html).map_err(|source| ExportError::Markup {
                    item_id: self.id,
                    source,
                })?
            }
            _ => String::new(),
        };
        let tags = serde_json::to_string(&self.tags).map_err(|source| ExportError::TagEncode {
            item_id: self.id,
            source,
        })?;

        let values = [
            self.id.to_string(),
            self.title.clone(),
            self.item_type.as_str().to_string(),
            tags,
            self.status.clone(),
            description,
            self.azure_url.clone(),
            self.parent.clone().unwrap_or_default(),
        ];

        Ok(Self::FIELDS.into_iter().zip(values).collect())
    }
}

/// Split a semicolon separated `System.Tags` value. An empty value yields a
/// single empty tag, matching what Azure exports have always contained.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(';').map(|t| t.trim().to_lowercase()).collect()
}
