//! Reactor-configuration validation.
//!
//! Structural problems in `reactor` entries (non-single-key mappings, file
//! lists that are not string sequences) fail hard in
//! [`ReactionMap::from_config`](crate::config::ReactionMap::from_config);
//! this pass reports the findings that are survivable but usually indicate an
//! authoring mistake:
//!
//! 1. **Duplicate tags**: a tag declared in more than one entry has its file
//!    lists merged in declaration order, which is supported but easy to do by
//!    accident when several teams edit the same config.
//! 2. **Empty file lists**: a tag with no reaction files can never fire.

use crate::config::Config;
use crate::errors::ValidationWarning;
use std::collections::HashSet;

/// Validate the `reactor` configuration list, returning all non-fatal findings.
///
/// Run by [`load_and_validate_config`](crate::config::load_and_validate_config),
/// which logs each warning; callers building a reactor from an already-loaded
/// `Config` can run it directly.
pub fn validate_reactor_config(cfg: &Config) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let mut seen = HashSet::new();

    for entry in &cfg.reactor {
        for (tag, files) in entry {
            if !seen.insert(tag.clone()) {
                warnings.push(ValidationWarning::DuplicateTag { tag: tag.clone() });
            }
            if matches!(files, serde_yaml::Value::Sequence(seq) if seq.is_empty()) {
                warnings.push(ValidationWarning::EmptyFileList { tag: tag.clone() });
            }
        }
    }

    warnings
}
