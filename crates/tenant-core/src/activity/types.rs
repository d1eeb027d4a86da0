use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Activity event categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    SystemBoot,
    TenantCreated,
    TenantUpdated,
    TenantDeleted,
    CapacityExceeded,
    TenantNotFound,
    DeletionNotConfirmed,
    SubdomainConflict,
    PersistenceFailed,
    RecordDiscarded,
    GenerationSucceeded,
    GenerationFailed,
}

impl ActivityKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::SystemBoot => "system_boot",
            Self::TenantCreated => "tenant_created",
            Self::TenantUpdated => "tenant_updated",
            Self::TenantDeleted => "tenant_deleted",
            Self::CapacityExceeded => "capacity_exceeded",
            Self::TenantNotFound => "tenant_not_found",
            Self::DeletionNotConfirmed => "deletion_not_confirmed",
            Self::SubdomainConflict => "subdomain_conflict",
            Self::PersistenceFailed => "persistence_failed",
            Self::RecordDiscarded => "record_discarded",
            Self::GenerationSucceeded => "generation_succeeded",
            Self::GenerationFailed => "generation_failed",
        }
    }
}

/// Entry severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActivityLevel {
    Info,
    Warn,
    Error,
}

impl ActivityLevel {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    /// Three-letter tag used in the console rendering
    pub fn tag(&self) -> &str {
        match self {
            Self::Info => "INF",
            Self::Warn => "WRN",
            Self::Error => "ERR",
        }
    }
}

/// Single ledger entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub recorded_at: DateTime<Utc>,
    pub level: ActivityLevel,
    pub kind: ActivityKind,
    pub tenant_id: Option<String>,
    pub message: String,
}

impl ActivityEntry {
    /// Create builder for fluent API
    pub fn builder(kind: ActivityKind) -> ActivityEntryBuilder {
        ActivityEntryBuilder::new(kind)
    }
}

impl fmt::Display for ActivityEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} {}] {}",
            self.recorded_at.format("%H:%M:%S"),
            self.level.tag(),
            self.message
        )
    }
}

/// Builder pattern for ActivityEntry
pub struct ActivityEntryBuilder {
    entry: ActivityEntry,
}

impl ActivityEntryBuilder {
    pub fn new(kind: ActivityKind) -> Self {
        Self {
            entry: ActivityEntry {
                recorded_at: Utc::now(),
                level: ActivityLevel::Info,
                kind,
                tenant_id: None,
                message: String::new(),
            },
        }
    }

    pub fn level(mut self, level: ActivityLevel) -> Self {
        self.entry.level = level;
        self
    }

    pub fn warn(self) -> Self {
        self.level(ActivityLevel::Warn)
    }

    pub fn error(self) -> Self {
        self.level(ActivityLevel::Error)
    }

    pub fn tenant(mut self, id: impl Into<String>) -> Self {
        self.entry.tenant_id = Some(id.into());
        self
    }

    pub fn message(mut self, content: impl Into<String>) -> Self {
        self.entry.message = content.into();
        self
    }

    pub fn recorded_at(mut self, at: DateTime<Utc>) -> Self {
        self.entry.recorded_at = at;
        self
    }

    pub fn build(self) -> ActivityEntry {
        self.entry
    }
}
