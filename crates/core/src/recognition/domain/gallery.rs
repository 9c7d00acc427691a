use std::collections::BTreeMap;

use crate::recognition::domain::face_image::FaceImage;

/// A single enrolled face: the processed canvas plus its integer label.
///
/// The display name lives in the gallery's label→name map so a gallery
/// restored from disk can carry labels whose names were lost with the
/// companion artifact.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryEntry {
    pub label: u32,
    pub image: FaceImage,
}

/// Append-only collection of enrolled faces.
///
/// Labels are assigned monotonically starting at 0 and never reused within
/// a session. Entries are never mutated or removed individually; the whole
/// gallery is replaced on load.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Gallery {
    entries: Vec<GalleryEntry>,
    names: BTreeMap<u32, String>,
    next_label: u32,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a gallery from loaded parts. The next fresh label becomes
    /// max(label) + 1 regardless of gaps in the loaded sequence.
    pub fn from_parts(entries: Vec<GalleryEntry>, names: BTreeMap<u32, String>) -> Self {
        let next_label = entries
            .iter()
            .map(|e| e.label.saturating_add(1))
            .max()
            .unwrap_or(0);
        Self {
            entries,
            names,
            next_label,
        }
    }

    /// Appends a new entry under a fresh label, records its name, and
    /// returns the label. Repeated enrollments of the same name are allowed
    /// and produce distinct entries.
    pub fn add(&mut self, name: &str, image: FaceImage) -> u32 {
        let label = self.next_label;
        self.entries.push(GalleryEntry { label, image });
        self.names.insert(label, name.to_string());
        self.next_label += 1;
        label
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in append order.
    pub fn entries(&self) -> &[GalleryEntry] {
        &self.entries
    }

    pub fn name_of(&self, label: u32) -> Option<&str> {
        self.names.get(&label).map(String::as_str)
    }

    pub fn names(&self) -> &BTreeMap<u32, String> {
        &self.names
    }

    pub fn next_label(&self) -> u32 {
        self.next_label
    }
}
