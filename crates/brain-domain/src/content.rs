use brain_core::BrainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};
use std::str::FromStr;

/// Opaque, stable identifier of a content item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(String);

impl ContentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ContentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Closed set of content categories. The discriminant indexes
/// [`CONTENT_TYPES`], so the variant order and the table order must agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Tweet,
    Article,
    Video,
    Audio,
    Bookmark,
}

/// Display metadata for one content category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentTypeInfo {
    pub kind: ContentType,
    pub key: &'static str,
    pub label: &'static str,
    pub plural_label: &'static str,
    pub icon: &'static str,
}

pub const CONTENT_TYPES: [ContentTypeInfo; 5] = [
    ContentTypeInfo {
        kind: ContentType::Tweet,
        key: "tweet",
        label: "Tweet",
        plural_label: "Tweets",
        icon: "@",
    },
    ContentTypeInfo {
        kind: ContentType::Article,
        key: "article",
        label: "Article",
        plural_label: "Articles",
        icon: "¶",
    },
    ContentTypeInfo {
        kind: ContentType::Video,
        key: "video",
        label: "Video",
        plural_label: "Videos",
        icon: "▶",
    },
    ContentTypeInfo {
        kind: ContentType::Audio,
        key: "audio",
        label: "Audio",
        plural_label: "Audio",
        icon: "♪",
    },
    ContentTypeInfo {
        kind: ContentType::Bookmark,
        key: "bookmark",
        label: "Bookmark",
        plural_label: "Bookmarks",
        icon: "★",
    },
];

impl ContentType {
    pub const ALL: [ContentType; 5] = [
        ContentType::Tweet,
        ContentType::Article,
        ContentType::Video,
        ContentType::Audio,
        ContentType::Bookmark,
    ];

    pub fn info(self) -> &'static ContentTypeInfo {
        &CONTENT_TYPES[self as usize]
    }

    pub fn key(self) -> &'static str {
        self.info().key
    }

    pub fn label(self) -> &'static str {
        self.info().label
    }

    pub fn plural_label(self) -> &'static str {
        self.info().plural_label
    }

    pub fn icon(self) -> &'static str {
        self.info().icon
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ContentType {
    type Err = BrainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        CONTENT_TYPES
            .iter()
            .find(|info| info.key.eq_ignore_ascii_case(needle))
            .map(|info| info.kind)
            .ok_or_else(|| BrainError::NotFound(format!("content type '{}'", s)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: ContentId,
    #[serde(rename = "type")]
    pub kind: ContentType,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub date_added: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl ContentItem {
    pub fn new(
        id: impl Into<ContentId>,
        kind: ContentType,
        title: impl Into<String>,
        content: impl Into<String>,
        date_added: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            content: content.into(),
            tags: Vec::new(),
            date_added,
            url: None,
            author: None,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Date rendered with a strftime pattern, e.g. `%-m/%-d/%Y`. A pattern
    /// chrono cannot render yields the ISO date instead.
    pub fn formatted_date(&self, format: &str) -> String {
        let mut out = String::new();
        if write!(out, "{}", self.date_added.format(format)).is_err() {
            tracing::warn!("Unusable date format '{}'", format);
            return self.date_added.to_string();
        }
        out
    }
}
