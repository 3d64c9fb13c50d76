//! Backend to front-end object mapping
//!
//! The backend lists storage objects as `{name, size, path, type}` where
//! `path` is the directory prefix ending in a slash (empty for the root).
//! The front end wants a flat record with the full path and a plain
//! `folder` boolean. The mapping is a direct transcription: no path
//! normalization happens here, so directory names must already carry their
//! trailing slash when they leave the backend.

use serde::{Deserialize, Serialize};

/// Kind of storage object as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObjectType {
    Directory,
    File,
    /// Any type string this crate does not know about
    #[serde(other)]
    Other,
}

/// File or folder metadata as returned by the storage service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendObject {
    pub name: String,
    pub size: u64,
    /// Directory prefix ending in a slash, empty for the root
    pub path: String,
    #[serde(rename = "type")]
    pub object_type: ObjectType,
}

/// Normalized shape consumed by the UI components
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontObject {
    /// Not sourced from the backend, always null
    pub last_modified: Option<String>,
    pub name: String,
    pub size: u64,
    /// Full path from the root folder, required for navigation
    pub path: String,
    pub folder: bool,
}

/// Map one backend object into the format the front end expects
///
/// Pure function of its input: `path` becomes the concatenation of the
/// backend prefix and the name, `folder` is true exactly for directories
/// and `lastModified` is always null.
pub fn map_object_to_front_format(obj: &BackendObject) -> FrontObject {
    FrontObject {
        last_modified: None,
        name: obj.name.clone(),
        size: obj.size,
        path: format!("{}{}", obj.path, obj.name),
        folder: obj.object_type == ObjectType::Directory,
    }
}
