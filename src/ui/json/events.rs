//! Shared JSON event types.
//!
//! Every event carries `event` (its kind) and `command`.

use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value};

use grove::domain::value_objects::PresenceMap;

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Event emitted when a command finishes; `stats` are flattened in.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    #[serde(flatten)]
    pub stats: Map<String, Value>,
}

impl<'a> CompleteEvent<'a> {
    pub fn success(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
            duration_ms: None,
            stats: Map::new(),
        }
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn with_stat(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.stats.insert(key.to_string(), value.into());
        self
    }
}

/// Event emitted when a command fails.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            message: message.into(),
        }
    }
}

/// Presence of every slot for one species.
#[derive(Debug, Clone, Serialize)]
pub struct SpeciesEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub species: &'a str,
    pub complete: bool,
    pub models: &'a PresenceMap,
}

impl<'a> SpeciesEvent<'a> {
    pub fn new(
        command: &'a str,
        species: &'a str,
        complete: bool,
        models: &'a PresenceMap,
    ) -> Self {
        Self {
            event: "species",
            command,
            species,
            complete,
            models,
        }
    }
}

/// An expected model file that does not exist.
#[derive(Debug, Clone, Serialize)]
pub struct MissingEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub file: &'a str,
}

impl<'a> MissingEvent<'a> {
    pub fn new(command: &'a str, file: &'a str) -> Self {
        Self {
            event: "missing",
            command,
            file,
        }
    }
}

/// A placeholder copied from a substitute source.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub file: &'a str,
    pub source: &'a str,
    pub dry_run: bool,
}

impl<'a> CreatedEvent<'a> {
    pub fn new(command: &'a str, file: &'a str, source: &'a str, dry_run: bool) -> Self {
        Self {
            event: "created",
            command,
            file,
            source,
            dry_run,
        }
    }
}

/// A gap no fallback source could fill.
#[derive(Debug, Clone, Serialize)]
pub struct UnresolvedEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub file: &'a str,
}

impl<'a> UnresolvedEvent<'a> {
    pub fn new(command: &'a str, file: &'a str) -> Self {
        Self {
            event: "unresolved",
            command,
            file,
        }
    }
}

/// A model handled by the client mirror.
#[derive(Debug, Clone, Serialize)]
pub struct MirroredEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub file: &'a str,
    pub already_synced: bool,
}

impl<'a> MirroredEvent<'a> {
    pub fn copied(command: &'a str, file: &'a str) -> Self {
        Self {
            event: "mirrored",
            command,
            file,
            already_synced: false,
        }
    }

    pub fn already_synced(command: &'a str, file: &'a str) -> Self {
        Self {
            already_synced: true,
            ..Self::copied(command, file)
        }
    }
}

/// One exported model file.
#[derive(Debug, Clone, Serialize)]
pub struct ExportedEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub name: &'a str,
    pub format: &'a str,
    pub path: String,
    pub objects: &'a [String],
}

impl<'a> ExportedEvent<'a> {
    pub fn new(
        command: &'a str,
        name: &'a str,
        format: &'a str,
        path: &Path,
        objects: &'a [String],
    ) -> Self {
        Self {
            event: "exported",
            command,
            name,
            format,
            path: path.display().to_string(),
            objects,
        }
    }
}

/// An export job whose selection matched nothing.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub name: &'a str,
    pub selection: &'a str,
}

impl<'a> SkippedEvent<'a> {
    pub fn new(command: &'a str, name: &'a str, selection: &'a str) -> Self {
        Self {
            event: "skipped",
            command,
            name,
            selection,
        }
    }
}

/// A non-fatal problem.
#[derive(Debug, Clone, Serialize)]
pub struct WarningEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub message: String,
}

impl<'a> WarningEvent<'a> {
    pub fn new(command: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "warning",
            command,
            message: message.into(),
        }
    }
}
