//! Penguin DTOs for the roster listing and stat endpoints.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Penguin, PenguinId};

/// One element of the `GET /penguins` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PenguinDto {
    /// Penguin identifier from the roster file.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short biography.
    pub bio: String,
    /// Visits as of the last cache refresh.
    pub visit_count: i64,
    /// Fish fed as of the last cache refresh.
    pub fish_count: i64,
    /// Belly rubs as of the last cache refresh.
    pub bellyrub_count: i64,
}

impl From<Penguin> for PenguinDto {
    fn from(penguin: Penguin) -> Self {
        Self {
            id: penguin.id.into_inner(),
            name: penguin.name,
            bio: penguin.bio,
            visit_count: penguin.counters.visit_count,
            fish_count: penguin.counters.fish_count,
            bellyrub_count: penguin.counters.bellyrub_count,
        }
    }
}

/// The `id` parameter of the `/stat/*` endpoints, taken from the
/// urlencoded body or the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct StatParams {
    /// Penguin to credit. A missing id is the empty id, which never matches.
    #[serde(default)]
    pub id: String,
}

impl StatParams {
    /// Builds params from decoded key/value pairs, keeping the first `id`.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = &'a (String, String)>,
    {
        let id = pairs
            .into_iter()
            .find(|(key, _)| key == "id")
            .map(|(_, value)| value.clone())
            .unwrap_or_default();
        Self { id }
    }

    /// Returns the requested id as a [`PenguinId`].
    #[must_use]
    pub fn penguin_id(self) -> PenguinId {
        PenguinId::from(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn first_id_wins() {
        let params = StatParams::from_pairs(&pairs(&[("x", "1"), ("id", "p1"), ("id", "p2")]));
        assert_eq!(params.id, "p1");
    }

    #[test]
    fn missing_id_is_empty() {
        let params = StatParams::from_pairs(&pairs(&[("name", "Pingu")]));
        assert_eq!(params, StatParams::default());
        assert_eq!(params.penguin_id().as_str(), "");
    }
}
