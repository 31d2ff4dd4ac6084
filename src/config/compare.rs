//! Equality between two configurations in the current format.

use crate::config::schema::NewConfig;

/// Whether `a` and `b` are the same configuration.
///
/// The `metrics` section is left out entirely: its `metrics_collected` map has
/// no stable key order between generators, so both content and presence of
/// the section are ignored. Every other field is compared deeply; a missing
/// list and an empty list are the same value.
pub fn are_equal(a: &NewConfig, b: &NewConfig) -> bool {
    // Destructured so a new field has to be placed on one side of the exclusion.
    let NewConfig {
        agent: agent_a,
        metrics: _,
        logs: logs_a,
    } = a;
    let NewConfig {
        agent: agent_b,
        metrics: _,
        logs: logs_b,
    } = b;

    let equal = agent_a == agent_b && logs_a == logs_b;
    tracing::trace!(equal, "Compared configurations");
    equal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{
        AgentSection, FileCollectEntry, FilesSection, LogsCollected, LogsSection, MetricsSection,
    };
    use serde_json::json;

    fn base() -> NewConfig {
        NewConfig {
            agent: Some(AgentSection {
                metrics_collection_interval: Some(60),
                region: "us-west-2".into(),
                logfile: String::new(),
                log_level: "info".into(),
            }),
            metrics: None,
            logs: Some(LogsSection {
                logs_collected: LogsCollected {
                    files: Some(FilesSection {
                        collect_list: vec![FileCollectEntry {
                            file_path: "C:\\logs\\app.log".into(),
                            log_group_name: "app".into(),
                            ..Default::default()
                        }],
                    }),
                    windows_events: None,
                },
            }),
        }
    }

    fn with_metrics(collected: serde_json::Value) -> NewConfig {
        let mut cfg = base();
        cfg.metrics = Some(MetricsSection {
            metrics_collected: serde_json::from_value(collected).unwrap(),
            ..Default::default()
        });
        cfg
    }

    #[test]
    fn test_metrics_content_is_ignored() {
        let a = with_metrics(json!({"cpu": 1}));
        let b = with_metrics(json!({"mem": 2}));
        assert!(are_equal(&a, &b));
    }

    #[test]
    fn test_metrics_presence_is_ignored() {
        let a = with_metrics(json!({"cpu": 1}));
        assert!(are_equal(&a, &base()));
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let a = with_metrics(json!({"cpu": 1}));
        let b = with_metrics(json!({"mem": 2}));
        let (a_before, b_before) = (a.clone(), b.clone());

        are_equal(&a, &b);
        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }

    #[test]
    fn test_log_level_difference() {
        let a = base();
        let mut b = base();
        b.agent.as_mut().unwrap().log_level = "debug".into();
        assert!(!are_equal(&a, &b));
    }

    #[test]
    fn test_section_presence_difference() {
        let a = base();
        let mut b = base();
        b.logs = None;
        assert!(!are_equal(&a, &b));

        // An empty section is still a present section.
        b.logs = Some(LogsSection::default());
        assert!(!are_equal(&a, &b));
    }

    #[test]
    fn test_collect_list_difference() {
        let a = base();
        let mut b = base();
        if let Some(files) = b
            .logs
            .as_mut()
            .and_then(|logs| logs.logs_collected.files.as_mut())
        {
            files.collect_list[0].timezone = "UTC".into();
        }
        assert!(!are_equal(&a, &b));
    }

    #[test]
    fn test_missing_and_empty_lists_are_equal() {
        let a: NewConfig = serde_json::from_value(json!({"logs": {"logs_collected": {"files": {}}}}))
            .unwrap();
        let b: NewConfig = serde_json::from_value(
            json!({"logs": {"logs_collected": {"files": {"collect_list": []}}}}),
        )
        .unwrap();
        assert!(are_equal(&a, &b));
    }
}
