use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{CoreError, Result};

/// Team identity and static strength ranking.
///
/// Ranking is the pre-tournament world ranking: lower means stronger. Form is
/// deliberately not stored here; it lives in the [`FormTable`](crate::FormTable)
/// state object threaded through the simulation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,

    /// ISO-style code, the lookup key everywhere in the engine
    pub code: String,

    /// World ranking, lower = stronger
    pub ranking: i32,
}

impl Team {
    pub fn new(name: impl Into<String>, code: impl Into<String>, ranking: i32) -> Self {
        Team {
            name: name.into(),
            code: code.into(),
            ranking,
        }
    }
}

/// Code-indexed team lookup, built once from the group lists.
///
/// Replaces repeated linear searches over the group vectors with a single
/// indexed table passed down to whatever needs to resolve a code.
#[derive(Clone, Debug, Default)]
pub struct TeamIndex {
    teams: HashMap<String, Team>,
}

impl TeamIndex {
    /// Build the index from every team across all groups.
    pub fn from_groups<'a, I>(groups: I) -> Self
    where
        I: IntoIterator<Item = &'a Vec<Team>>,
    {
        let mut teams = HashMap::new();
        for group in groups {
            for team in group {
                teams.insert(team.code.clone(), team.clone());
            }
        }
        TeamIndex { teams }
    }

    pub fn get(&self, code: &str) -> Option<&Team> {
        self.teams.get(code)
    }

    /// Resolve a code or report it as a missing team reference.
    pub fn require(&self, code: &str) -> Result<&Team> {
        self.teams.get(code).ok_or_else(|| CoreError::MissingTeam {
            code: code.to_string(),
        })
    }

    pub fn contains(&self, code: &str) -> bool {
        self.teams.contains_key(code)
    }

    pub fn codes(&self) -> impl Iterator<Item = &String> {
        self.teams.keys()
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}
