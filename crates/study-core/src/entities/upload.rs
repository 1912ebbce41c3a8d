use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::null_as_default;

/// The processed artifact of one submitted document.
///
/// Produced by the backend ingestion pipeline and only ever read by the
/// client. The list endpoint sends `id`; the submit endpoint sends
/// `upload_id` and omits `filename`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadResult {
    #[serde(alias = "upload_id", deserialize_with = "crate::ids::wire_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub filename: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub study_plan: StudyPlan,
    #[serde(default, deserialize_with = "null_as_default")]
    pub videos: Vec<VideoLink>,
}

impl UploadResult {
    /// Fill in the filename when the backend response did not carry one.
    #[must_use]
    pub fn with_filename_fallback(mut self, filename: &str) -> Self {
        if self.filename.is_empty() {
            self.filename = filename.to_string();
        }
        self
    }
}

/// A recommended video.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoLink {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
}

/// Ordered stage → description entries, e.g. `week1 → "Read ch.1"`.
///
/// Kept as a list of pairs so the order the backend produced survives
/// decoding. Descriptions that are not JSON strings are kept as their JSON
/// text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudyPlan(Vec<(String, String)>);

impl StudyPlan {
    #[must_use]
    pub fn new(entries: Vec<(String, String)>) -> Self {
        Self(entries)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Look up the description for a stage label.
    #[must_use]
    pub fn get(&self, stage: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(label, _)| label == stage)
            .map(|(_, description)| description.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(label, description)| (label.as_str(), description.as_str()))
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for StudyPlan {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(label, description)| (label.to_string(), description.to_string()))
                .collect(),
        )
    }
}

impl Serialize for StudyPlan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, description) in &self.0 {
            map.serialize_entry(label, description)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for StudyPlan {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PlanVisitor;

        impl<'de> Visitor<'de> for PlanVisitor {
            type Value = StudyPlan;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of study stages to descriptions")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((label, value)) = access.next_entry::<String, serde_json::Value>()? {
                    let description = match value {
                        serde_json::Value::String(text) => text,
                        other => other.to_string(),
                    };
                    entries.push((label, description));
                }
                Ok(StudyPlan(entries))
            }
        }

        deserializer.deserialize_map(PlanVisitor)
    }
}
