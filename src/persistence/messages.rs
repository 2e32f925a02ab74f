//! Message types for annotation file operations.

use bevy::prelude::*;
use std::path::PathBuf;

#[derive(Message)]
pub struct ExportRequest {
    pub path: PathBuf,
}

#[derive(Message)]
pub struct ImportRequest {
    pub path: PathBuf,
}
