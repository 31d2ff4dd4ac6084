//! Configuration schema definitions.
//!
//! Two formats live here: the current agent format ([`NewConfig`]) and the
//! legacy format ([`OldConfig`]) it is migrated from. Both decode
//! leniently: unknown keys are ignored and missing or `null` fields fall back
//! to their zero value, so a partially filled document still loads.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Decode `null` as the zero value of `T`, as a missing key would be.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Root of the current agent configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct NewConfig {
    /// Agent-wide settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent: Option<AgentSection>,

    /// Metrics collection. Ignored by [`are_equal`](crate::config::compare::are_equal).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<MetricsSection>,

    /// Log collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logs: Option<LogsSection>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AgentSection {
    /// Collection interval in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics_collection_interval: Option<u64>,

    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub region: String,

    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub logfile: String,

    /// Agent log level (e.g. "info", "debug").
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub log_level: String,
}

/// Metric name to collected value. Entry order carries no meaning.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MetricsSection {
    #[serde(skip_serializing_if = "BTreeMap::is_empty", deserialize_with = "null_as_default")]
    pub append_dimensions: BTreeMap<String, Value>,

    #[serde(deserialize_with = "null_as_default")]
    pub metrics_collected: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct LogsSection {
    #[serde(deserialize_with = "null_as_default")]
    pub logs_collected: LogsCollected,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct LogsCollected {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<FilesSection>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub windows_events: Option<WindowsEventsSection>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct FilesSection {
    #[serde(deserialize_with = "null_as_default")]
    pub collect_list: Vec<FileCollectEntry>,
}

/// A single log file to tail.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct FileCollectEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub file_path: String,

    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub log_group_name: String,

    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub log_stream_name: String,

    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub timestamp_format: String,

    /// "Local" or "UTC".
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub timezone: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct WindowsEventsSection {
    #[serde(deserialize_with = "null_as_default")]
    pub collect_list: Vec<EventCollectEntry>,
}

/// A Windows event log channel to collect.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct EventCollectEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub event_name: String,

    /// Levels such as "ERROR", "WARNING", "INFORMATION".
    #[serde(deserialize_with = "null_as_default")]
    pub event_levels: Vec<String>,

    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub log_group_name: String,

    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub log_stream_name: String,
}

/// Root of the legacy configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default, rename_all = "PascalCase")]
pub struct OldConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub is_enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub engine_configuration: EngineConfiguration,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default, rename_all = "PascalCase")]
pub struct EngineConfiguration {
    /// Poll interval in the legacy "00:00:15" form.
    #[serde(deserialize_with = "null_as_default")]
    pub poll_interval: String,

    #[serde(deserialize_with = "null_as_default")]
    pub components: Vec<Component>,

    #[serde(deserialize_with = "null_as_default")]
    pub flows: Flows,
}

/// A legacy source or sink. Parameters vary by `full_name`, so they stay untyped.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default, rename_all = "PascalCase")]
pub struct Component {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub parameters: BTreeMap<String, Value>,
}

/// Routing between components, e.g. `"(ApplicationEventLog,SystemEventLog),CloudWatchLogs"`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default, rename_all = "PascalCase")]
pub struct Flows {
    #[serde(deserialize_with = "null_as_default")]
    pub flows: Vec<String>,
}
