use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use tracing::warn;

use super::record::CommentRecord;

/// Columns a comment list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Comment,
    Likes,
    Author,
    AuthorUrl,
    PublishedAt,
}

impl SortField {
    pub const ALL: [SortField; 5] = [
        Self::Comment,
        Self::Likes,
        Self::Author,
        Self::AuthorUrl,
        Self::PublishedAt,
    ];

    /// Column header this field is exported under.
    pub fn header(self) -> &'static str {
        match self {
            Self::Comment => "Comment",
            Self::Likes => "Likes",
            Self::Author => "Author",
            Self::AuthorUrl => "Author URL",
            Self::PublishedAt => "Published At",
        }
    }

    /// Compare two records on this field. Likes compare numerically,
    /// everything else as text (timestamps are ISO-8601, so text order is
    /// chronological).
    fn compare(self, a: &CommentRecord, b: &CommentRecord) -> Ordering {
        match self {
            Self::Comment => a.comment.cmp(&b.comment),
            Self::Likes => a.likes.cmp(&b.likes),
            Self::Author => a.author.cmp(&b.author),
            Self::AuthorUrl => a.author_url.cmp(&b.author_url),
            Self::PublishedAt => a.published_at.cmp(&b.published_at),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown sort field: {0}")]
pub struct UnknownSortField(pub String);

impl FromStr for SortField {
    type Err = UnknownSortField;

    /// Accepts header names in any case, with spaces, `_` or `-` between
    /// words ("Published At", "published_at", "author-url").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = squash(s);
        Self::ALL
            .into_iter()
            .find(|field| squash(field.header()) == wanted)
            .ok_or_else(|| UnknownSortField(s.to_string()))
    }
}

fn squash(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Sort by a field given by name.
///
/// An unrecognised name means every record lacks that field, so all keys
/// compare equal and the input order is returned unchanged.
pub fn sort_comments(
    records: &[CommentRecord],
    sort_by: &str,
    ascending: bool,
) -> Vec<CommentRecord> {
    match sort_by.parse::<SortField>() {
        Ok(field) => sort_by_field(records, field, ascending),
        Err(e) => {
            warn!(sort_by, "{e}; keeping API order");
            records.to_vec()
        }
    }
}

/// Stable sort on `field`; ties keep their input order in both directions.
pub fn sort_by_field(
    records: &[CommentRecord],
    field: SortField,
    ascending: bool,
) -> Vec<CommentRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = field.compare(a, b);
        if ascending { ordering } else { ordering.reverse() }
    });
    sorted
}
