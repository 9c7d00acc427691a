use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::recognition::domain::face_image::FaceImage;
use crate::recognition::domain::gallery::{Gallery, GalleryEntry};

/// Suffix appended to the primary path for the label→name artifact.
pub const NAMES_SUFFIX: &str = "names";

#[derive(Error, Debug)]
pub enum GalleryStoreError {
    #[error("gallery has no entries to save")]
    EmptyGallery,
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode gallery: {0}")]
    Encode(#[source] bincode::Error),
    #[error("failed to decode gallery from {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: bincode::Error,
    },
    #[error("gallery artifact {path} is inconsistent: {reason}")]
    Corrupt { path: PathBuf, reason: String },
}

/// On-disk shape of the primary artifact: the processed images in append
/// order and the parallel label list.
#[derive(Serialize, Deserialize)]
struct GalleryArtifact {
    images: Vec<Vec<u8>>,
    labels: Vec<u32>,
}

/// Writes the image+label artifact at `path` and the label→name mapping
/// beside it (`<path>.names`, one `<label> <name>` line per entry).
///
/// Fails when the gallery is empty or either artifact cannot be created.
/// Codec failures surface as error values, never as panics.
pub fn save_gallery(gallery: &Gallery, path: &Path) -> Result<(), GalleryStoreError> {
    if gallery.is_empty() {
        return Err(GalleryStoreError::EmptyGallery);
    }

    let artifact = GalleryArtifact {
        images: gallery
            .entries()
            .iter()
            .map(|e| e.image.pixels().to_vec())
            .collect(),
        labels: gallery.entries().iter().map(|e| e.label).collect(),
    };

    let file = File::create(path).map_err(|e| GalleryStoreError::Open {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);
    bincode::serialize_into(&mut writer, &artifact).map_err(GalleryStoreError::Encode)?;
    writer.flush().map_err(|e| GalleryStoreError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;

    let names_path = names_path(path);
    let names_file = File::create(&names_path).map_err(|e| GalleryStoreError::Open {
        path: names_path.clone(),
        source: e,
    })?;
    let mut names_writer = BufWriter::new(names_file);
    for (label, name) in gallery.names() {
        writeln!(names_writer, "{label} {name}").map_err(|e| GalleryStoreError::Write {
            path: names_path.clone(),
            source: e,
        })?;
    }
    names_writer.flush().map_err(|e| GalleryStoreError::Write {
        path: names_path.clone(),
        source: e,
    })?;

    log::debug!(
        "saved {} gallery entries to {}",
        gallery.len(),
        path.display()
    );
    Ok(())
}

/// Reads both artifacts and rebuilds the gallery, with the next fresh label
/// set past the highest label seen.
///
/// The mapping artifact is optional: when it cannot be read the gallery
/// comes back with labels but no names; matching keeps working, just
/// namelessly. A missing or unreadable primary artifact is an error and
/// leaves the caller's gallery untouched.
pub fn load_gallery(path: &Path) -> Result<Gallery, GalleryStoreError> {
    let file = File::open(path).map_err(|e| GalleryStoreError::Open {
        path: path.to_path_buf(),
        source: e,
    })?;
    let artifact: GalleryArtifact = bincode::deserialize_from(BufReader::new(file))
        .map_err(|e| GalleryStoreError::Decode {
            path: path.to_path_buf(),
            source: e,
        })?;

    if artifact.images.len() != artifact.labels.len() {
        return Err(GalleryStoreError::Corrupt {
            path: path.to_path_buf(),
            reason: format!(
                "{} images but {} labels",
                artifact.images.len(),
                artifact.labels.len()
            ),
        });
    }

    let mut entries = Vec::with_capacity(artifact.images.len());
    for (pixels, label) in artifact.images.into_iter().zip(artifact.labels) {
        let image = FaceImage::from_pixels(pixels).map_err(|e| GalleryStoreError::Corrupt {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        entries.push(GalleryEntry { label, image });
    }

    let names_path = names_path(path);
    let names = match fs::read_to_string(&names_path) {
        Ok(text) => parse_names(&text),
        Err(_) => {
            log::warn!(
                "gallery name mapping {} is unreadable; labels will have no names",
                names_path.display()
            );
            BTreeMap::new()
        }
    };

    log::debug!("loaded {} gallery entries from {}", entries.len(), path.display());
    Ok(Gallery::from_parts(entries, names))
}

fn names_path(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_os_string();
    os.push(".");
    os.push(NAMES_SUFFIX);
    PathBuf::from(os)
}

/// One `<label> <name>` pair per line. The name is the remainder of the
/// line and may contain spaces, never newlines. Unparseable lines are
/// skipped.
fn parse_names(text: &str) -> BTreeMap<u32, String> {
    let mut names = BTreeMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut parts = line.splitn(2, char::is_whitespace);
        let Some(label) = parts.next().and_then(|t| t.parse::<u32>().ok()) else {
            log::warn!("skipping malformed name mapping line: {line:?}");
            continue;
        };
        let name = parts.next().unwrap_or("").trim_start().to_string();
        names.insert(label, name);
    }
    names
}
