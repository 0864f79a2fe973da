//! Per-slot upload lifecycle.
//!
//! Each file input in an editing form (main image, one of the secondary
//! images, avatar, video, thumbnail) is one independent slot: the client
//! previews the selected file locally, uploads it asynchronously, and swaps
//! the preview for the durable URL on completion. Slots do not share a queue
//! or a cancellation scope.
//!
//! This model is the server crate's client-facing contract for that flow;
//! admin tooling drives one `UploadSlot` per file input.

use serde::Serialize;

/// Invalid transition attempted on an [`UploadSlot`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid upload-slot transition: {event} while {from}")]
pub struct InvalidTransition {
    pub from: &'static str,
    pub event: &'static str,
}

/// One upload slot's state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum UploadSlot {
    /// No file selected.
    Idle,
    /// A file is selected and previewed from a local, revocable reference.
    Previewing { local_ref: String },
    /// Upload in flight; `progress` is a fraction in `0.0..=1.0`.
    Uploading { local_ref: String, progress: f32 },
    /// Upload finished; the local preview reference has been released.
    Done { url: String },
    /// Upload failed; the slot keeps the error until the next selection.
    Failed { error: String },
}

impl UploadSlot {
    /// A fresh, empty slot.
    pub fn new() -> Self {
        Self::Idle
    }

    fn state_name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Previewing { .. } => "previewing",
            Self::Uploading { .. } => "uploading",
            Self::Done { .. } => "done",
            Self::Failed { .. } => "failed",
        }
    }

    /// Select a file. Valid from any state: picking a new file replaces
    /// whatever the slot held before.
    pub fn select(&mut self, local_ref: impl Into<String>) {
        *self = Self::Previewing {
            local_ref: local_ref.into(),
        };
    }

    /// Begin the upload for the previewed file.
    pub fn begin_upload(&mut self) -> Result<(), InvalidTransition> {
        match self {
            Self::Previewing { local_ref } => {
                *self = Self::Uploading {
                    local_ref: std::mem::take(local_ref),
                    progress: 0.0,
                };
                Ok(())
            }
            other => Err(InvalidTransition {
                from: other.state_name(),
                event: "begin_upload",
            }),
        }
    }

    /// Record fractional progress, clamped to `0.0..=1.0`.
    pub fn set_progress(&mut self, fraction: f32) -> Result<(), InvalidTransition> {
        match self {
            Self::Uploading { progress, .. } => {
                *progress = fraction.clamp(0.0, 1.0);
                Ok(())
            }
            other => Err(InvalidTransition {
                from: other.state_name(),
                event: "set_progress",
            }),
        }
    }

    /// Complete the upload with the durable URL. Dropping the uploading
    /// state releases the local preview reference.
    pub fn complete(&mut self, url: impl Into<String>) -> Result<(), InvalidTransition> {
        match self {
            Self::Uploading { .. } => {
                *self = Self::Done { url: url.into() };
                Ok(())
            }
            other => Err(InvalidTransition {
                from: other.state_name(),
                event: "complete",
            }),
        }
    }

    /// Fail the upload. Valid while previewing or uploading.
    pub fn fail(&mut self, error: impl Into<String>) -> Result<(), InvalidTransition> {
        match self {
            Self::Previewing { .. } | Self::Uploading { .. } => {
                *self = Self::Failed {
                    error: error.into(),
                };
                Ok(())
            }
            other => Err(InvalidTransition {
                from: other.state_name(),
                event: "fail",
            }),
        }
    }

    /// The local preview reference, while one is held.
    pub fn local_ref(&self) -> Option<&str> {
        match self {
            Self::Previewing { local_ref } | Self::Uploading { local_ref, .. } => {
                Some(local_ref)
            }
            _ => None,
        }
    }

    /// The durable URL, once the slot is done.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Done { url } => Some(url),
            _ => None,
        }
    }
}

impl Default for UploadSlot {
    fn default() -> Self {
        Self::new()
    }
}
