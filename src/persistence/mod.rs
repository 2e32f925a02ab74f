//! Annotation file export and import.
//!
//! ## Module Structure
//!
//! - [`format`] - Serialized document types and validation
//! - [`error`] - [`ImportError`] and [`ExportError`]
//! - [`messages`] - Export/import requests
//! - [`resources`] - Async operation state
//! - [`results`] - Result types for async operations
//! - [`export`] - Export system and task polling
//! - [`import`] - Import system and task polling

mod error;
mod export;
mod format;
mod import;
mod messages;
mod resources;
mod results;


// Re-exports - Messages
pub use messages::{ExportRequest, ImportRequest};

// Re-exports - Resources
pub use resources::{AsyncFileOperation, FileOperationError};

use bevy::prelude::*;

pub struct PersistencePlugin;

impl Plugin for PersistencePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AsyncFileOperation>()
            .init_resource::<FileOperationError>()
            .add_message::<ExportRequest>()
            .add_message::<ImportRequest>()
            .add_systems(
                Update,
                (
                    export::export_system.run_if(on_message::<ExportRequest>),
                    export::poll_export_tasks,
                    import::import_system.run_if(on_message::<ImportRequest>),
                    import::poll_import_tasks,
                ),
            );
    }
}
