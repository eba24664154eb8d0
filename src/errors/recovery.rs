// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 eomp-ets contributors

//! Error recovery suggestions
//!
//! Provides actionable suggestions for recovering from errors.

use super::EompError;

/// A recovery suggestion with concrete steps
#[derive(Debug, Clone)]
pub struct RecoverySuggestion {
    /// Brief description of what to do
    pub action: String,
    /// Detailed steps
    pub steps: Vec<String>,
    /// Commands to run
    pub commands: Vec<String>,
}

impl RecoverySuggestion {
    /// Pick a suggestion for an error, if there is anything useful to say
    pub fn for_error(error: &EompError) -> Option<Self> {
        match error {
            EompError::SchemaUnavailable { .. } => Some(Self::sync_schema()),
            EompError::MalformedRecord { .. } | EompError::MissingRecordId => {
                Some(Self::fix_record())
            }
            EompError::SuiteFailed { failures } => Some(Self::review_failures(
                &failures.iter().map(|o| o.id.clone()).collect::<Vec<_>>(),
            )),
            EompError::Fetch { url, .. } => Some(Self::check_network(url)),
            _ => None,
        }
    }

    /// Suggest synchronising the schema bundle
    pub fn sync_schema() -> Self {
        Self {
            action: "Cache the EOMP schema".into(),
            steps: vec![
                "Schema validation needs a local copy of the bundled EOMP schema".into(),
                "Fetch it once; later runs reuse the cached copy".into(),
            ],
            commands: vec![
                "eomp bundle sync".into(),
                "".into(),
                "# Or from a mirror:".into(),
                "eomp --schema-url <URL-or-path> bundle sync".into(),
            ],
        }
    }

    /// Suggest fixing a record that could not be ingested
    pub fn fix_record() -> Self {
        Self {
            action: "Fix the record document".into(),
            steps: vec![
                "The record must be a single JSON object".into(),
                "It must carry a top-level 'id' property".into(),
            ],
            commands: vec![],
        }
    }

    /// Point at the requirements that failed
    pub fn review_failures(ids: &[String]) -> Self {
        Self {
            action: format!("Review {} failed requirement(s)", ids.len()),
            steps: ids.to_vec(),
            commands: vec![
                "# Show the full report:".into(),
                "eomp record validate <FILE_OR_URL>".into(),
            ],
        }
    }

    /// Suggest checking connectivity to a remote source
    pub fn check_network(url: &str) -> Self {
        Self {
            action: format!("Check that {} is reachable", url),
            steps: vec!["Verify the URL and your network connection".into()],
            commands: vec![],
        }
    }
}

impl std::fmt::Display for RecoverySuggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "→ {}", self.action)?;

        for step in &self.steps {
            writeln!(f, "  {}", step)?;
        }

        if !self.commands.is_empty() {
            writeln!(f)?;
            for cmd in &self.commands {
                writeln!(f, "  {}", cmd)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_unavailable_suggests_sync() {
        let err = EompError::SchemaUnavailable {
            reason: "missing".into(),
        };
        let suggestion = RecoverySuggestion::for_error(&err).unwrap();
        assert!(suggestion.to_string().contains("eomp bundle sync"));
    }

    #[test]
    fn test_no_suggestion_for_io() {
        let err = EompError::Io {
            message: "boom".into(),
        };
        assert!(RecoverySuggestion::for_error(&err).is_none());
    }
}
