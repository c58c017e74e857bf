use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::constants::GROUP_SIZE;
use crate::error::{CoreError, Result};
use crate::team::{Team, TeamIndex};

/// One exhibition match as supplied by the data source: opponent code plus the
/// final score as a `"<int>-<int>"` string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExhibitionRecord {
    pub opponent: String,
    pub score: String,
}

impl ExhibitionRecord {
    pub fn new(opponent: impl Into<String>, score: impl Into<String>) -> Self {
        ExhibitionRecord {
            opponent: opponent.into(),
            score: score.into(),
        }
    }
}

/// Exhibition match with the score string already parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExhibitionMatch {
    pub opponent: String,
    pub score: (i32, i32),
}

/// Raw tournament input from the external data collaborator.
///
/// Groups are keyed by identifier in a `BTreeMap`, fixing the order every
/// stage walks them in. Exhibitions map team code to that team's exhibition
/// history in played order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TournamentInput {
    pub groups: BTreeMap<String, Vec<Team>>,
    pub exhibitions: HashMap<String, Vec<ExhibitionRecord>>,
}

/// Input after fail-fast validation: all scores parsed, every referenced code
/// resolvable, every group of regulation size, every team with history.
#[derive(Clone, Debug)]
pub struct ValidatedInput {
    pub groups: BTreeMap<String, Vec<Team>>,
    pub index: TeamIndex,
    pub exhibitions: HashMap<String, Vec<ExhibitionMatch>>,
}

/// Parse a `"<int>-<int>"` score pair.
pub fn parse_score_pair(raw: &str) -> Result<(i32, i32)> {
    let malformed = || CoreError::MalformedScore {
        raw: raw.to_string(),
    };

    let (left, right) = raw.split_once('-').ok_or_else(malformed)?;
    let home: i32 = left.trim().parse().map_err(|_| malformed())?;
    let away: i32 = right.trim().parse().map_err(|_| malformed())?;
    Ok((home, away))
}

impl TournamentInput {
    /// Validate the raw input, producing the indexed form the engine runs on.
    ///
    /// Checks, in order: every group has exactly 4 teams; every score string
    /// parses; every exhibition key and opponent code resolves against the
    /// group index; every group team has at least one exhibition match (an
    /// empty history would poison the base-score average with NaN).
    pub fn validate(self) -> Result<ValidatedInput> {
        for (id, teams) in &self.groups {
            if teams.len() != GROUP_SIZE {
                return Err(CoreError::GroupSize {
                    group: id.clone(),
                    len: teams.len(),
                    expected: GROUP_SIZE,
                });
            }
        }

        let index = TeamIndex::from_groups(self.groups.values());

        let mut exhibitions: HashMap<String, Vec<ExhibitionMatch>> = HashMap::new();
        for (code, records) in &self.exhibitions {
            index.require(code)?;
            let mut parsed = Vec::with_capacity(records.len());
            for record in records {
                index.require(&record.opponent)?;
                parsed.push(ExhibitionMatch {
                    opponent: record.opponent.clone(),
                    score: parse_score_pair(&record.score)?,
                });
            }
            exhibitions.insert(code.clone(), parsed);
        }

        for teams in self.groups.values() {
            for team in teams {
                match exhibitions.get(&team.code) {
                    Some(history) if !history.is_empty() => {}
                    _ => {
                        return Err(CoreError::EmptyExhibitionHistory {
                            code: team.code.clone(),
                        })
                    }
                }
            }
        }

        Ok(ValidatedInput {
            groups: self.groups,
            index,
            exhibitions,
        })
    }
}
