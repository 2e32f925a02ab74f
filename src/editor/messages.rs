//! Command surface of the annotation editor.

use bevy::prelude::*;

use super::tools::AnnotationMode;

/// Switch the active editing mode
#[derive(Message, Debug, Clone, Copy)]
pub struct SetModeRequest {
    pub mode: AnnotationMode,
}

#[derive(Message, Debug, Clone, Copy)]
pub struct ClearAllRequest;

#[derive(Message, Debug, Clone, Copy)]
pub struct UndoRequest;

#[derive(Message, Debug, Clone, Copy)]
pub struct RedoRequest;

/// Commit the pending annotation point with this text
#[derive(Message, Debug, Clone)]
pub struct ConfirmAnnotationRequest {
    pub text: String,
}

#[derive(Message, Debug, Clone, Copy)]
pub struct CancelAnnotationRequest;
