use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

/// Identifier of a heritage record, unique within one candidate pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        RecordId(id)
    }
}

/// UNESCO classification of a heritage site
///
/// `Mixed` sites are inscribed under both cultural and natural criteria.
/// Input is parsed through [`FromStr`]: English names in any case, or the
/// Japanese labels used by the upload front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum UnescoTag {
    Cultural,
    Natural,
    Mixed,
}

impl UnescoTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnescoTag::Cultural => "cultural",
            UnescoTag::Natural => "natural",
            UnescoTag::Mixed => "mixed",
        }
    }
}

impl TryFrom<String> for UnescoTag {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl std::fmt::Display for UnescoTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnescoTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "文化遺産" => return Ok(UnescoTag::Cultural),
            "自然遺産" => return Ok(UnescoTag::Natural),
            "複合遺産" => return Ok(UnescoTag::Mixed),
            _ => {}
        }
        match s.trim().to_ascii_lowercase().as_str() {
            "cultural" => Ok(UnescoTag::Cultural),
            "natural" => Ok(UnescoTag::Natural),
            "mixed" => Ok(UnescoTag::Mixed),
            _ => Err(Error::UnknownUnescoTag(s.to_string())),
        }
    }
}

/// A heritage site as stored by the persistence layer
///
/// Read-only input to distractor selection and quiz assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeritageRecord {
    pub id: RecordId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Short clue strings, in display order
    #[serde(default, alias = "simpleSummary", skip_serializing_if = "Option::is_none")]
    pub simple_summary: Option<Vec<String>>,
    #[serde(default, alias = "unescoTag")]
    pub unesco_tag: Option<UnescoTag>,
    /// Region names; the first entry is the primary region
    #[serde(default, deserialize_with = "null_as_default")]
    pub region: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub feature: BTreeSet<String>,
    /// UNESCO inscription criteria (i)–(x) as numbers
    #[serde(default, deserialize_with = "null_as_default")]
    pub criteria: Vec<u8>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: Vec<String>,
}

// The persistence layer emits `null` for empty tag columns.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl HeritageRecord {
    /// Create a record with only an id and a title
    #[inline]
    #[must_use]
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id: RecordId(id),
            title: title.into(),
            description: None,
            summary: None,
            simple_summary: None,
            unesco_tag: None,
            region: Vec::new(),
            feature: BTreeSet::new(),
            criteria: Vec::new(),
            country: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn with_unesco(mut self, tag: UnescoTag) -> Self {
        self.unesco_tag = Some(tag);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_regions<I, S>(mut self, regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.region = regions.into_iter().map(Into::into).collect();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.feature = features.into_iter().map(Into::into).collect();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_clues<I, S>(mut self, clues: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.simple_summary = Some(clues.into_iter().map(Into::into).collect());
        self
    }

    /// Primary region, if any
    pub fn primary_region(&self) -> Option<&str> {
        self.region.first().map(String::as_str)
    }

    /// Clue strings, empty when the record has none
    pub fn clues(&self) -> &[String] {
        self.simple_summary.as_deref().unwrap_or(&[])
    }

    /// Summary text when present and not blank
    pub fn summary_text(&self) -> Option<&str> {
        self.summary.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// True when the record carries no UNESCO tag, region, or feature
    pub fn is_untagged(&self) -> bool {
        self.unesco_tag.is_none() && self.region.is_empty() && self.feature.is_empty()
    }

    /// Check the invariants the persistence layer is expected to uphold
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::InvalidRecord(format!("record {} has an empty title", self.id)));
        }
        if let Some(c) = self.criteria.iter().find(|c| !(1..=10).contains(*c)) {
            return Err(Error::InvalidRecord(format!(
                "record {} has criterion {} outside 1..=10",
                self.id, c
            )));
        }
        Ok(())
    }
}
