// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::DEFAULT_MAX_CONCURRENCY;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main configuration structure for the reactor.
///
/// The `reactor` key is an ordered list of single-key mappings, each binding
/// one event tag to the reaction files rendered when that tag fires. The list
/// order is load-bearing: later reaction files may depend on side effects of
/// earlier ones, so first-defined-first-applied is preserved all the way
/// through rendering.
///
/// # Example
/// ```yaml
/// reactor:
///   - 'node/web1/start':
///       - /srv/reactor/start.sls
///   - 'old_runner':
///       - /srv/reactor/old_runner.sls
/// dispatch:
///   max_concurrency: 4
/// ```
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub reactor: Vec<HashMap<String, serde_yaml::Value>>,
    #[serde(default)]
    pub dispatch: DispatchOptions,
}

/// Dispatch-specific configuration options.
///
/// # Fields
/// * `max_concurrency` - Bound on concurrently executing async dispatches (optional)
#[derive(Debug, Deserialize)]
pub struct DispatchOptions {
    pub max_concurrency: Option<usize>,
}

impl Default for DispatchOptions {
    fn default() -> Self {
        Self {
            max_concurrency: None,
        }
    }
}

impl DispatchOptions {
    /// Get the async dispatch bound, using the built-in default if not configured.
    pub fn get_max_concurrency(&self) -> usize {
        self.max_concurrency.unwrap_or(DEFAULT_MAX_CONCURRENCY)
    }
}

/// Load a config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let cfg: Config = serde_yaml::from_str(&content)?;
    Ok(cfg)
}

/// Load and validate a config from a YAML file
///
/// Malformed `reactor` entries fail here, before any reactor is built from
/// the config. Non-fatal findings (duplicate tags, empty file lists) are
/// logged as warnings.
pub fn load_and_validate_config<P: AsRef<Path>>(
    path: P,
) -> Result<Config, Box<dyn std::error::Error>> {
    let cfg = load_config(path)?;

    crate::config::ReactionMap::from_config(&cfg)?;

    for warning in crate::config::validate_reactor_config(&cfg) {
        tracing::warn!("{}", warning);
    }

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic_config() {
        let yaml = r#"
reactor:
  - 'node/web1/start':
      - /srv/reactor/start.sls
      - /srv/reactor/motd.sls
  - 'old_runner':
      - /srv/reactor/old_runner.sls
dispatch:
  max_concurrency: 8
"#;

        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.reactor.len(), 2);
        assert!(cfg.reactor[0].contains_key("node/web1/start"));
        assert_eq!(cfg.dispatch.max_concurrency, Some(8));
    }

    #[test]
    fn dispatch_options_default_when_absent() {
        let yaml = r#"
reactor:
  - 'old_runner':
      - /srv/reactor/old_runner.sls
"#;

        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.dispatch.max_concurrency, None);
        assert_eq!(cfg.dispatch.get_max_concurrency(), DEFAULT_MAX_CONCURRENCY);
    }

    #[test]
    fn empty_config_has_no_reactions() {
        let cfg: Config = serde_yaml::from_str("{}").unwrap();
        assert!(cfg.reactor.is_empty());
    }

    #[test]
    fn test_load_and_validate_valid_config() {
        let yaml = r#"
reactor:
  - 'new_wheel':
      - /srv/reactor/new_wheel.sls
"#;

        let temp_dir = tempfile::tempdir().unwrap();
        let temp_file = temp_dir.path().join("reactor.yaml");
        std::fs::write(&temp_file, yaml).unwrap();

        let result = load_and_validate_config(&temp_file);
        assert!(result.is_ok());
    }

    #[test]
    fn test_load_and_validate_malformed_entry() {
        let yaml = r#"
reactor:
  - 'a_tag':
      - /srv/reactor/a.sls
    'second_tag':
      - /srv/reactor/b.sls
"#;

        let temp_dir = tempfile::tempdir().unwrap();
        let temp_file = temp_dir.path().join("reactor.yaml");
        std::fs::write(&temp_file, yaml).unwrap();

        let result = load_and_validate_config(&temp_file);
        assert!(result.is_err());
        let error_msg = result.unwrap_err().to_string();
        assert!(error_msg.contains("not a single-key mapping"));
    }
}
