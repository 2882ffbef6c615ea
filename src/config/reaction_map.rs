// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::Config;
use crate::errors::ConfigurationError;
use std::collections::HashMap;

/// A type-safe registry mapping event tags to their ordered reaction files.
///
/// The `ReactionMap` is the lookup table behind tag resolution. It is built
/// once from the `reactor` configuration list and is read-only afterward, so
/// lookups are safe to run repeatedly and concurrently. Tags are exact-match
/// keys; the file list attached to a tag keeps its configured order, and a
/// tag declared in more than one entry has its lists concatenated in
/// declaration order.
///
/// # Examples
///
/// ## Creating and populating a reaction map
/// ```
/// use event_reactor::config::ReactionMap;
///
/// let mut map = ReactionMap::new();
/// map.insert("old_runner".to_string(), vec!["/srv/reactor/old_runner.sls".to_string()]);
/// map.insert("old_runner".to_string(), vec!["/srv/reactor/audit.sls".to_string()]);
///
/// assert_eq!(
///     map.files_for("old_runner"),
///     ["/srv/reactor/old_runner.sls", "/srv/reactor/audit.sls"]
/// );
/// assert!(map.files_for("unknown_tag").is_empty());
/// ```
pub struct ReactionMap {
    entries: HashMap<String, Vec<String>>,
    tags: Vec<String>,
}

impl ReactionMap {
    /// Create a new empty reaction map
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            tags: Vec::new(),
        }
    }

    /// Create a ReactionMap from configuration, failing fast on malformed entries
    pub fn from_config(cfg: &Config) -> Result<Self, ConfigurationError> {
        let mut map = Self::new();

        for (index, entry) in cfg.reactor.iter().enumerate() {
            if entry.len() != 1 {
                return Err(ConfigurationError::NotASingleKeyEntry {
                    index,
                    key_count: entry.len(),
                });
            }
            let Some((tag, files_value)) = entry.iter().next() else {
                continue;
            };

            let files = match files_value {
                serde_yaml::Value::Sequence(seq) => {
                    let mut paths = Vec::with_capacity(seq.len());
                    for item in seq {
                        match item {
                            serde_yaml::Value::String(path) => paths.push(path.clone()),
                            other => {
                                return Err(ConfigurationError::InvalidFileList {
                                    tag: tag.clone(),
                                    reason: format!("file entry is not a string: {:?}", other),
                                })
                            }
                        }
                    }
                    paths
                }
                _ => {
                    return Err(ConfigurationError::InvalidFileList {
                        tag: tag.clone(),
                        reason: "value is not a sequence of file paths".to_string(),
                    })
                }
            };

            map.insert(tag.clone(), files);
        }

        Ok(map)
    }

    /// Insert a tag's reaction files, extending the list if the tag exists
    pub fn insert(&mut self, tag: String, files: Vec<String>) {
        match self.entries.get_mut(&tag) {
            Some(existing) => existing.extend(files),
            None => {
                self.tags.push(tag.clone());
                self.entries.insert(tag, files);
            }
        }
    }

    /// Get the ordered reaction files for a tag; empty for unknown tags
    pub fn files_for(&self, tag: &str) -> &[String] {
        self.entries.get(tag).map(|f| f.as_slice()).unwrap_or(&[])
    }

    /// Check if a tag has a configured entry
    pub fn contains_tag(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    /// Get all tags in first-declared order
    pub fn tags(&self) -> impl Iterator<Item = &String> {
        self.tags.iter()
    }

    /// Get the number of configured tags
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the reaction map is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ReactionMap {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ReactionMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReactionMap")
            .field("tag_count", &self.entries.len())
            .field("tags", &self.tags)
            .finish()
    }
}

impl From<HashMap<String, Vec<String>>> for ReactionMap {
    fn from(map: HashMap<String, Vec<String>>) -> Self {
        let tags = map.keys().cloned().collect();
        Self { entries: map, tags }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_from(yaml: &str) -> Config {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_from_config_table_driven() {
        struct TestCase {
            name: &'static str,
            yaml: &'static str,
            lookups: Vec<(&'static str, Vec<&'static str>)>,
        }

        let test_cases = vec![
            TestCase {
                name: "empty config",
                yaml: "{}",
                lookups: vec![("anything", vec![])],
            },
            TestCase {
                name: "single tag single file",
                yaml: r#"
reactor:
  - 'old_runner':
      - /srv/reactor/old_runner.sls
"#,
                lookups: vec![
                    ("old_runner", vec!["/srv/reactor/old_runner.sls"]),
                    ("new_runner", vec![]),
                ],
            },
            TestCase {
                name: "file order preserved",
                yaml: r#"
reactor:
  - 'node/web1/start':
      - /srv/reactor/start.sls
      - /srv/reactor/motd.sls
      - /srv/reactor/audit.sls
"#,
                lookups: vec![(
                    "node/web1/start",
                    vec![
                        "/srv/reactor/start.sls",
                        "/srv/reactor/motd.sls",
                        "/srv/reactor/audit.sls",
                    ],
                )],
            },
            TestCase {
                name: "duplicate tag extends in declaration order",
                yaml: r#"
reactor:
  - 'old_runner':
      - /srv/reactor/old_runner.sls
  - 'new_wheel':
      - /srv/reactor/new_wheel.sls
  - 'old_runner':
      - /srv/reactor/audit.sls
"#,
                lookups: vec![
                    (
                        "old_runner",
                        vec!["/srv/reactor/old_runner.sls", "/srv/reactor/audit.sls"],
                    ),
                    ("new_wheel", vec!["/srv/reactor/new_wheel.sls"]),
                ],
            },
        ];

        for test_case in test_cases {
            let map = ReactionMap::from_config(&config_from(test_case.yaml)).unwrap();

            for (tag, expected) in &test_case.lookups {
                assert_eq!(
                    map.files_for(tag),
                    expected.as_slice(),
                    "Test case '{}': unexpected files for tag '{}'",
                    test_case.name,
                    tag
                );
            }
        }
    }

    #[test]
    fn test_from_config_multi_key_entry_fails() {
        let cfg = config_from(
            r#"
reactor:
  - 'a_tag':
      - /srv/reactor/a.sls
    'second_tag':
      - /srv/reactor/b.sls
"#,
        );

        let result = ReactionMap::from_config(&cfg);
        assert!(matches!(
            result,
            Err(ConfigurationError::NotASingleKeyEntry {
                index: 0,
                key_count: 2
            })
        ));
    }

    #[test]
    fn test_from_config_non_sequence_value_fails() {
        let cfg = config_from(
            r#"
reactor:
  - 'a_tag': /srv/reactor/a.sls
"#,
        );

        let result = ReactionMap::from_config(&cfg);
        assert!(matches!(
            result,
            Err(ConfigurationError::InvalidFileList { .. })
        ));
    }

    #[test]
    fn test_from_config_non_string_file_fails() {
        let cfg = config_from(
            r#"
reactor:
  - 'a_tag':
      - 42
"#,
        );

        let result = ReactionMap::from_config(&cfg);
        assert!(matches!(
            result,
            Err(ConfigurationError::InvalidFileList { tag, .. }) if tag == "a_tag"
        ));
    }

    #[test]
    fn test_tags_keep_first_declared_order() {
        let cfg = config_from(
            r#"
reactor:
  - 'c_tag':
      - /srv/reactor/c.sls
  - 'a_tag':
      - /srv/reactor/a.sls
  - 'c_tag':
      - /srv/reactor/c2.sls
  - 'b_tag':
      - /srv/reactor/b.sls
"#,
        );

        let map = ReactionMap::from_config(&cfg).unwrap();
        let tags: Vec<&String> = map.tags().collect();
        assert_eq!(tags, ["c_tag", "a_tag", "b_tag"]);
        assert_eq!(map.len(), 3);
    }
}
