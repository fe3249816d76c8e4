//! Roster file loading and validation.
//!
//! The roster file is a JSON array of `{id, name, bio}` objects describing
//! which penguins the daycare looks after. It is read exactly once at
//! startup; any failure here is fatal because there is no valid empty
//! roster.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use super::{Penguin, PenguinId};
use crate::error::DaycareError;

/// One entry of the roster file. Counters are never read from the file.
#[derive(Debug, Deserialize)]
struct RosterEntry {
    id: PenguinId,
    #[serde(default)]
    name: String,
    #[serde(default)]
    bio: String,
}

/// Reads and validates the roster file at `path`.
///
/// # Errors
///
/// Returns [`DaycareError::RosterUnreadable`] if the file cannot be read,
/// [`DaycareError::RosterMalformed`] if it is not a JSON roster, and
/// [`DaycareError::InvalidRoster`] if it is empty or repeats an id.
pub async fn load_roster(path: &Path) -> Result<Vec<Penguin>, DaycareError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| DaycareError::RosterUnreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
    let penguins = parse_roster(&raw)?;
    tracing::info!(path = %path.display(), penguins = penguins.len(), "roster loaded");
    Ok(penguins)
}

/// Parses and validates a roster from its JSON text.
///
/// # Errors
///
/// Returns [`DaycareError::RosterMalformed`] on invalid JSON and
/// [`DaycareError::InvalidRoster`] if the roster is empty or repeats an id.
pub fn parse_roster(raw: &str) -> Result<Vec<Penguin>, DaycareError> {
    let entries: Vec<RosterEntry> =
        serde_json::from_str(raw).map_err(|e| DaycareError::RosterMalformed(e.to_string()))?;
    validate(
        entries
            .into_iter()
            .map(|e| Penguin::new(e.id, e.name, e.bio))
            .collect(),
    )
}

/// Checks the roster invariants: non-empty, unique ids.
///
/// # Errors
///
/// Returns [`DaycareError::InvalidRoster`] naming the first violation.
pub fn validate(penguins: Vec<Penguin>) -> Result<Vec<Penguin>, DaycareError> {
    if penguins.is_empty() {
        return Err(DaycareError::InvalidRoster(
            "roster contains no penguins".to_string(),
        ));
    }
    let mut seen = HashSet::with_capacity(penguins.len());
    for penguin in &penguins {
        if !seen.insert(penguin.id.as_str()) {
            return Err(DaycareError::InvalidRoster(format!(
                "duplicate penguin id {}",
                penguin.id
            )));
        }
    }
    Ok(penguins)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn parses_in_file_order_with_zero_counters() {
        let raw = r#"[
            {"id": "p1", "name": "Pingu", "bio": "Noot noot"},
            {"id": "p2", "name": "Pinga", "bio": "Little sister", "visit_count": 40}
        ]"#;
        let Ok(penguins) = parse_roster(raw) else {
            panic!("valid roster rejected");
        };
        let ids: Vec<&str> = penguins.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p1", "p2"]);
        assert!(penguins.iter().all(|p| p.counters.visit_count == 0));
    }

    #[test]
    fn rejects_malformed_json() {
        let result = parse_roster("[{\"id\": \"p1\",");
        assert!(matches!(result, Err(DaycareError::RosterMalformed(_))));
    }

    #[test]
    fn rejects_entry_without_id() {
        let result = parse_roster(r#"[{"name": "Nameless"}]"#);
        assert!(matches!(result, Err(DaycareError::RosterMalformed(_))));
    }

    #[test]
    fn rejects_empty_roster() {
        let result = parse_roster("[]");
        assert!(matches!(result, Err(DaycareError::InvalidRoster(_))));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let raw = r#"[{"id": "p1", "name": "A"}, {"id": "p1", "name": "B"}]"#;
        let Err(DaycareError::InvalidRoster(msg)) = parse_roster(raw) else {
            panic!("duplicate ids accepted");
        };
        assert!(msg.contains("p1"));
    }

    #[tokio::test]
    async fn missing_file_is_unreadable() {
        let path = std::env::temp_dir().join("penguin-daycare-no-such-roster.json");
        let result = load_roster(&path).await;
        assert!(matches!(result, Err(DaycareError::RosterUnreadable { .. })));
    }

    #[tokio::test]
    async fn loads_from_disk() {
        let path = std::env::temp_dir().join(format!(
            "penguin-daycare-roster-{}.json",
            std::process::id()
        ));
        let written = tokio::fs::write(&path, r#"[{"id": "p1", "name": "Pingu", "bio": ""}]"#).await;
        assert!(written.is_ok());

        let result = load_roster(&path).await;
        let _ = tokio::fs::remove_file(&path).await;

        let Ok(penguins) = result else {
            panic!("roster should load");
        };
        assert_eq!(penguins.len(), 1);
    }
}
