//! Cassette data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded call through a port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Position in the recording, assigned by the recorder.
    pub seq: u64,
    /// Port name (`git` or `shell`).
    pub port: String,
    /// Method name invoked on the port.
    pub method: String,
    /// Arguments the port was called with.
    #[serde(default)]
    pub input: serde_json::Value,
    /// Result in the `{"ok": ..}` / `{"err": ".."}` convention.
    pub output: serde_json::Value,
}

/// A recorded session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Human-readable name for this cassette.
    pub name: String,
    /// When this cassette was recorded.
    pub recorded_at: DateTime<Utc>,
    /// HEAD commit of the recorded repository.
    pub commit: String,
    /// Ordered list of interactions.
    pub interactions: Vec<Interaction>,
}

impl Cassette {
    /// Reads and parses a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a cassette.
    pub fn load(path: &std::path::Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hand_written_cassette() {
        let yaml = r#"
name: profile-change
recorded_at: 2025-03-15T14:30:00Z
commit: abc123
interactions:
  - seq: 0
    port: git
    method: diff_names
    input: { dir: /r, base: master }
    output: { ok: ["site/profile/manifests/db.pp"] }
  - seq: 1
    port: git
    method: toplevel
    output: { err: "not a git repository" }
"#;
        let cassette: Cassette = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(cassette.interactions.len(), 2);
        assert_eq!(cassette.interactions[0].method, "diff_names");
        assert!(cassette.interactions[1].input.is_null());
    }
}
