// SPDX-License-Identifier: MPL-2.0
//! Memory items and the ordered sequence the gallery displays.
//!
//! A sequence is loaded once at startup from a `{ "memories": [...] }` JSON
//! document. Any failure to obtain or parse that document is recovered by
//! substituting [`GallerySequence::fallback`], so callers always end up with a
//! usable gallery.

use crate::error::DataLoadError;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::ops::Index;
use std::path::Path;

/// Number of placeholder entries in the fallback sequence.
pub const FALLBACK_LEN: usize = 9;

/// A single entry of the gallery. Never mutated after load.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemoryItem {
    pub id: String,
    pub title: String,
    pub image: String,
}

impl MemoryItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image: image.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct MemoriesDocument {
    memories: Vec<MemoryItem>,
}

/// Ordered, index-addressable list of memory items.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GallerySequence {
    items: Vec<MemoryItem>,
}

impl GallerySequence {
    pub fn new(items: Vec<MemoryItem>) -> Self {
        Self { items }
    }

    /// Deterministic sequence used whenever the real data is unusable.
    pub fn fallback() -> Self {
        let items = (1..=FALLBACK_LEN)
            .map(|i| {
                MemoryItem::new(
                    format!("memory{i}"),
                    format!("Memory {i}"),
                    format!("gallery/memory{i}.jpg"),
                )
            })
            .collect();
        Self { items }
    }

    /// Parses a memories document.
    ///
    /// Duplicate ids are rejected since ids must be unique within a gallery.
    pub fn parse(source: &str) -> Result<Self, DataLoadError> {
        let document: MemoriesDocument = serde_json::from_str(source)?;
        let mut seen = HashSet::with_capacity(document.memories.len());
        if let Some(duplicate) = document
            .memories
            .iter()
            .find(|item| !seen.insert(item.id.as_str()))
        {
            return Err(DataLoadError::Malformed(format!(
                "duplicate memory id `{}`",
                duplicate.id
            )));
        }
        Ok(Self::new(document.memories))
    }

    /// Reads and parses the document at `path`.
    pub fn read_from_path(path: &Path) -> Result<Self, DataLoadError> {
        let content = fs::read_to_string(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => DataLoadError::Missing,
            _ => DataLoadError::Unreadable(err.to_string()),
        })?;
        Self::parse(&content)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MemoryItem> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MemoryItem> {
        self.items.iter()
    }
}

impl Index<usize> for GallerySequence {
    type Output = MemoryItem;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl<'a> IntoIterator for &'a GallerySequence {
    type Item = &'a MemoryItem;
    type IntoIter = std::slice::Iter<'a, MemoryItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Result of resolving the gallery data source.
#[derive(Debug, Clone)]
pub struct LoadedMemories {
    pub sequence: GallerySequence,
    /// Set when the fallback sequence was substituted.
    pub recovered_from: Option<DataLoadError>,
}

/// Loads the gallery from an optional document path, never failing.
pub fn load_or_fallback(path: Option<&Path>) -> LoadedMemories {
    let result = match path {
        Some(path) => GallerySequence::read_from_path(path),
        None => Err(DataLoadError::Missing),
    };
    recover(result)
}

/// Same as [`load_or_fallback`] for an already-read document.
pub fn parse_or_fallback(source: Option<&str>) -> LoadedMemories {
    let result = match source {
        Some(source) => GallerySequence::parse(source),
        None => Err(DataLoadError::Missing),
    };
    recover(result)
}

fn recover(result: Result<GallerySequence, DataLoadError>) -> LoadedMemories {
    match result {
        Ok(sequence) => {
            tracing::debug!(count = sequence.len(), "loaded memories");
            LoadedMemories {
                sequence,
                recovered_from: None,
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "using fallback memories");
            LoadedMemories {
                sequence: GallerySequence::fallback(),
                recovered_from: Some(err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"{
        "memories": [
            { "id": "a", "title": "Title A", "image": "img/a.jpg" },
            { "id": "b", "title": "Title B", "image": "img/b.jpg" }
        ]
    }"#;

    #[test]
    fn parse_keeps_document_order() {
        let sequence = GallerySequence::parse(SAMPLE).expect("valid document");
        assert_eq!(sequence.len(), 2);
        assert_eq!(sequence[0].id, "a");
        assert_eq!(sequence[1].title, "Title B");
    }

    #[test]
    fn parse_accepts_empty_list() {
        let sequence = GallerySequence::parse(r#"{ "memories": [] }"#).expect("valid");
        assert!(sequence.is_empty());
    }

    #[test]
    fn parse_rejects_missing_memories_key() {
        let err = GallerySequence::parse(r#"{ "photos": [] }"#).unwrap_err();
        assert!(matches!(err, DataLoadError::Malformed(_)));
    }

    #[test]
    fn parse_rejects_duplicate_ids() {
        let doc = r#"{ "memories": [
            { "id": "x", "title": "1", "image": "1.jpg" },
            { "id": "x", "title": "2", "image": "2.jpg" }
        ] }"#;
        let err = GallerySequence::parse(doc).unwrap_err();
        assert!(matches!(err, DataLoadError::Malformed(msg) if msg.contains("`x`")));
    }

    #[test]
    fn parse_reports_first_repeated_id_in_large_document() {
        let mut items: Vec<String> = (0..2000)
            .map(|i| format!(r#"{{ "id": "m{i}", "title": "T", "image": "i.jpg" }}"#))
            .collect();
        let unique = format!(r#"{{ "memories": [{}] }}"#, items.join(","));
        assert_eq!(GallerySequence::parse(&unique).map(|s| s.len()), Ok(2000));

        items.push(r#"{ "id": "m1500", "title": "again", "image": "i.jpg" }"#.to_string());
        let repeated = format!(r#"{{ "memories": [{}] }}"#, items.join(","));
        let err = GallerySequence::parse(&repeated).unwrap_err();
        assert!(matches!(err, DataLoadError::Malformed(msg) if msg.contains("`m1500`")));
    }

    #[test]
    fn fallback_has_nine_numbered_entries() {
        let sequence = GallerySequence::fallback();
        assert_eq!(sequence.len(), FALLBACK_LEN);
        for (i, item) in sequence.iter().enumerate() {
            assert_eq!(item.id, format!("memory{}", i + 1));
            assert_eq!(item.title, format!("Memory {}", i + 1));
            assert_eq!(item.image, format!("gallery/memory{}.jpg", i + 1));
        }
    }

    #[test]
    fn malformed_source_recovers_with_fallback() {
        let loaded = parse_or_fallback(Some("not json at all"));
        assert_eq!(loaded.sequence, GallerySequence::fallback());
        assert!(matches!(
            loaded.recovered_from,
            Some(DataLoadError::Malformed(_))
        ));
    }

    #[test]
    fn absent_source_recovers_with_fallback() {
        let loaded = parse_or_fallback(None);
        assert_eq!(loaded.sequence.len(), FALLBACK_LEN);
        assert_eq!(loaded.recovered_from, Some(DataLoadError::Missing));
    }

    #[test]
    fn missing_file_is_reported_as_missing() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let loaded = load_or_fallback(Some(&temp_dir.path().join("memories.json")));
        assert_eq!(loaded.recovered_from, Some(DataLoadError::Missing));
    }

    #[test]
    fn valid_file_is_loaded_without_recovery() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("memories.json");
        fs::write(&path, SAMPLE).expect("failed to write memories");

        let loaded = load_or_fallback(Some(&path));
        assert!(loaded.recovered_from.is_none());
        assert_eq!(loaded.sequence.len(), 2);
    }
}
