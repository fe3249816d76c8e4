//! Penguin records and their mutable stat counters.

use super::PenguinId;

/// The three mutable counters tracked per penguin.
///
/// Mirrored between the in-memory roster and the counter store. Every
/// counter starts at zero and only ever grows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatCounters {
    /// Number of times the penguin's page was visited.
    pub visit_count: i64,
    /// Number of fish fed to the penguin.
    pub fish_count: i64,
    /// Number of belly rubs the penguin received.
    pub bellyrub_count: i64,
}

impl StatCounters {
    /// Increments the counter selected by `kind` by one.
    pub fn bump(&mut self, kind: StatKind) {
        let counter = match kind {
            StatKind::Visit => &mut self.visit_count,
            StatKind::Fish => &mut self.fish_count,
            StatKind::Bellyrub => &mut self.bellyrub_count,
        };
        *counter = counter.saturating_add(1);
    }

    /// Returns the value of the counter selected by `kind`.
    #[must_use]
    pub const fn get(&self, kind: StatKind) -> i64 {
        match kind {
            StatKind::Visit => self.visit_count,
            StatKind::Fish => self.fish_count,
            StatKind::Bellyrub => self.bellyrub_count,
        }
    }
}

/// Which counter an event increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    /// `/stat/visit`
    Visit,
    /// `/stat/fish`
    Fish,
    /// `/stat/bellyrub`
    Bellyrub,
}

impl StatKind {
    /// All stat kinds, in endpoint order.
    pub const ALL: [Self; 3] = [Self::Visit, Self::Fish, Self::Bellyrub];

    /// Returns the kind as used in the endpoint path and logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Visit => "visit",
            Self::Fish => "fish",
            Self::Bellyrub => "bellyrub",
        }
    }
}

/// A roster entry: static profile plus the counters last loaded from the
/// store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Penguin {
    /// Unique penguin identifier (immutable).
    pub id: PenguinId,
    /// Display name (static, from the roster file).
    pub name: String,
    /// Short biography (static, from the roster file).
    pub bio: String,
    /// Counters as of the last cache refresh.
    pub counters: StatCounters,
}

impl Penguin {
    /// Creates a penguin with all counters at zero.
    #[must_use]
    pub fn new(id: PenguinId, name: impl Into<String>, bio: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            bio: bio.into(),
            counters: StatCounters::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bump_touches_exactly_one_counter() {
        for kind in StatKind::ALL {
            let mut counters = StatCounters::default();
            counters.bump(kind);
            for other in StatKind::ALL {
                let expected = i64::from(other == kind);
                assert_eq!(counters.get(other), expected, "{kind:?} bumped {other:?}");
            }
        }
    }

    #[test]
    fn bump_saturates() {
        let mut counters = StatCounters {
            fish_count: i64::MAX,
            ..StatCounters::default()
        };
        counters.bump(StatKind::Fish);
        assert_eq!(counters.fish_count, i64::MAX);
    }

    #[test]
    fn new_penguin_starts_at_zero() {
        let penguin = Penguin::new(PenguinId::from("p1"), "Pingu", "Noot noot");
        assert_eq!(penguin.counters, StatCounters::default());
        assert_eq!(penguin.name, "Pingu");
    }

    #[test]
    fn kind_names_match_endpoints() {
        let names: Vec<&str> = StatKind::ALL.iter().map(StatKind::as_str).collect();
        assert_eq!(names, ["visit", "fish", "bellyrub"]);
    }
}
