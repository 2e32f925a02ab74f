//! Persisted user settings: remembered file locations and label visibility.
//!
//! Loaded once at startup from [`crate::paths::config_file`]. Systems change
//! settings by sending request messages; each change marks the config dirty
//! and queues a [`SaveConfigRequest`].

use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Startup set that reads the config file
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLoaded;

/// The on-disk settings. Missing fields take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfigData {
    /// Last file annotations were exported to (pre-fills the save dialog)
    #[serde(default)]
    pub last_export_path: Option<PathBuf>,

    /// Last file annotations were imported from
    #[serde(default)]
    pub last_import_path: Option<PathBuf>,

    /// Whether distance and annotation labels are drawn
    #[serde(default = "default_show_labels")]
    pub show_labels: bool,
}

fn default_show_labels() -> bool {
    true
}

impl Default for AppConfigData {
    fn default() -> Self {
        Self {
            last_export_path: None,
            last_import_path: None,
            show_labels: default_show_labels(),
        }
    }
}

#[derive(Resource)]
pub struct AppConfig {
    pub data: AppConfigData,
    pub config_path: PathBuf,
    /// Changed since the last write
    pub dirty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: AppConfigData::default(),
            config_path: crate::paths::config_file(),
            dirty: false,
        }
    }
}

/// Set when an unreadable config file was replaced by defaults
#[derive(Resource, Default)]
pub struct ConfigResetNotification {
    pub show: bool,
    pub reason: Option<String>,
}

/// Write the config if it is dirty
#[derive(Message)]
pub struct SaveConfigRequest;

/// Remember the file annotations were last exported to
#[derive(Message)]
pub struct UpdateLastExportPathRequest {
    pub path: PathBuf,
}

/// Remember the file annotations were last imported from
#[derive(Message)]
pub struct UpdateLastImportPathRequest {
    pub path: PathBuf,
}

/// Show or hide measurement and annotation labels
#[derive(Message)]
pub struct SetShowLabelsRequest {
    pub show: bool,
}

/// Settings read at startup, plus why they fell back to defaults if they did
struct LoadedConfig {
    data: AppConfigData,
    reset_reason: Option<String>,
}

fn read_config_file(path: &Path) -> LoadedConfig {
    if !path.exists() {
        info!("No config at {:?}, starting with defaults", path);
        return LoadedConfig {
            data: AppConfigData::default(),
            reset_reason: None,
        };
    }

    let parsed = std::fs::read_to_string(path)
        .map_err(|e| format!("Could not read configuration file: {}", e))
        .and_then(|json| {
            serde_json::from_str::<AppConfigData>(&json)
                .map_err(|e| format!("Configuration file was corrupted: {}", e))
        });

    match parsed {
        Ok(data) => {
            info!("Loaded config from {:?}", path);
            LoadedConfig {
                data,
                reset_reason: None,
            }
        }
        Err(reason) => {
            warn!("{}", reason);
            LoadedConfig {
                data: AppConfigData::default(),
                reset_reason: Some(reason),
            }
        }
    }
}

fn write_config_file(config: &AppConfig) {
    let json = match serde_json::to_string_pretty(&config.data) {
        Ok(json) => json,
        Err(e) => {
            error!("Failed to serialize config: {}", e);
            return;
        }
    };

    match std::fs::write(&config.config_path, json) {
        Ok(()) => debug!("Config written to {:?}", config.config_path),
        Err(e) => error!("Failed to save config to {:?}: {}", config.config_path, e),
    }
}

fn load_config_system(
    mut config: ResMut<AppConfig>,
    mut reset_notification: ResMut<ConfigResetNotification>,
) {
    let loaded = read_config_file(&config.config_path);
    config.data = loaded.data;
    config.dirty = false;

    if let Some(reason) = loaded.reset_reason {
        reset_notification.show = true;
        reset_notification.reason = Some(reason);
    }
}

fn save_config_system(
    mut events: MessageReader<SaveConfigRequest>,
    mut config: ResMut<AppConfig>,
) {
    // Several requests in one frame collapse into one write
    if events.read().count() > 0 && config.dirty {
        write_config_file(&config);
        config.dirty = false;
    }
}

/// Mark the config dirty and queue a save
fn mark_changed(config: &mut AppConfig, save_events: &mut MessageWriter<SaveConfigRequest>) {
    config.dirty = true;
    save_events.write(SaveConfigRequest);
}

fn update_last_export_path_system(
    mut events: MessageReader<UpdateLastExportPathRequest>,
    mut config: ResMut<AppConfig>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) {
    if let Some(event) = events.read().last() {
        config.data.last_export_path = Some(event.path.clone());
        mark_changed(&mut config, &mut save_events);
    }
}

fn update_last_import_path_system(
    mut events: MessageReader<UpdateLastImportPathRequest>,
    mut config: ResMut<AppConfig>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) {
    if let Some(event) = events.read().last() {
        config.data.last_import_path = Some(event.path.clone());
        mark_changed(&mut config, &mut save_events);
    }
}

fn set_show_labels_system(
    mut events: MessageReader<SetShowLabelsRequest>,
    mut config: ResMut<AppConfig>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) {
    let Some(show) = events.read().last().map(|e| e.show) else {
        return;
    };
    if config.data.show_labels != show {
        config.data.show_labels = show;
        mark_changed(&mut config, &mut save_events);
        info!("Labels {}", if show { "shown" } else { "hidden" });
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AppConfig>()
            .init_resource::<ConfigResetNotification>()
            .add_message::<SaveConfigRequest>()
            .add_message::<UpdateLastExportPathRequest>()
            .add_message::<UpdateLastImportPathRequest>()
            .add_message::<SetShowLabelsRequest>()
            .add_systems(Startup, load_config_system.in_set(ConfigLoaded))
            .add_systems(
                Update,
                (
                    update_last_export_path_system
                        .run_if(on_message::<UpdateLastExportPathRequest>),
                    update_last_import_path_system
                        .run_if(on_message::<UpdateLastImportPathRequest>),
                    set_show_labels_system.run_if(on_message::<SetShowLabelsRequest>),
                    save_config_system.run_if(on_message::<SaveConfigRequest>),
                )
                    .chain(),
            );
    }
}
