use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::bracket::{quarterfinal_pairs, select_top_eight};
use crate::error::Result;
use crate::form::FormTable;
use crate::input::TournamentInput;
use crate::knockout::{play_knockout, EliminationResults};
use crate::schedule::{play_group, GroupMatchResult};
use crate::simulate::{average_game_total, MatchRng, UniformDraws};
use crate::standings::{compute_standings, StandingEntry};
use crate::team::{Team, TeamIndex};

/// One tournament run: group stage, seeding, knockout.
///
/// Owns the single mutable form table and threads it through every match in
/// the fixed overall order (groups in key order, fixtures in schedule order,
/// then the bracket). Form compounds across both stages and is never reset,
/// so build a fresh `Tournament` per run.
pub struct Tournament {
    groups: BTreeMap<String, Vec<Team>>,
    index: TeamIndex,
    averages: HashMap<String, f64>,
    form: FormTable,
}

/// Everything the reporting collaborator reads, as plain immutable data.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TournamentReport {
    /// Group results keyed by group, in schedule order
    pub group_results: BTreeMap<String, Vec<GroupMatchResult>>,

    /// Final sorted standings per group
    pub standings: BTreeMap<String, Vec<StandingEntry>>,

    /// The seeded knockout field in pot order
    pub top_eight: Vec<StandingEntry>,

    /// Quarterfinal through bronze results
    pub elimination: EliminationResults,
}

impl Tournament {
    /// Validate the input and prepare the run: build the code index, derive
    /// per-team exhibition scoring averages, seed the form table.
    pub fn new(input: TournamentInput) -> Result<Self> {
        let validated = input.validate()?;

        let averages = validated
            .exhibitions
            .iter()
            .map(|(code, history)| (code.clone(), average_game_total(history)))
            .collect();
        let form = FormTable::seed(&validated.index, &validated.exhibitions)?;

        Ok(Tournament {
            groups: validated.groups,
            index: validated.index,
            averages,
            form,
        })
    }

    /// Run the whole tournament on a ChaCha stream, optionally seeded for a
    /// reproducible outcome.
    pub fn run(&mut self, seed: Option<u64>) -> TournamentReport {
        let mut rng = UniformDraws(match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_entropy(),
        });
        self.run_with(&mut rng)
    }

    /// Run the whole tournament on a caller-supplied random source.
    pub fn run_with<R: MatchRng + ?Sized>(&mut self, rng: &mut R) -> TournamentReport {
        let mut group_results = BTreeMap::new();
        let mut standings = BTreeMap::new();

        for (id, teams) in &self.groups {
            info!("playing group {}", id);
            let results = play_group(teams, &self.averages, &mut self.form, rng);
            standings.insert(id.clone(), compute_standings(teams, &results));
            group_results.insert(id.clone(), results);
        }

        let top_eight = select_top_eight(&standings);
        let pairs: Vec<(Team, Team)> = quarterfinal_pairs(&top_eight)
            .into_iter()
            .map(|(a, b)| (a.team(), b.team()))
            .collect();
        let elimination = play_knockout(pairs, &self.averages, &mut self.form, rng);

        TournamentReport {
            group_results,
            standings,
            top_eight,
            elimination,
        }
    }

    /// Current form value for a team code; 0 for unknown codes.
    pub fn form_of(&self, code: &str) -> f64 {
        self.form.get(code)
    }

    pub fn index(&self) -> &TeamIndex {
        &self.index
    }
}
