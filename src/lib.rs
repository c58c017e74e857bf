//! Hoops Core - basketball tournament simulation engine.
//!
//! Simulates a group stage followed by an 8-team knockout bracket: form is
//! seeded from exhibition results, match scores combine ranking, form and
//! randomness, group tables feed a cross-group seeding rule, and the bracket
//! runs quarterfinals through the final and bronze match. Loading input data
//! and rendering results belong to external collaborators; this crate only
//! turns validated records into immutable result structures.

pub mod bracket;
pub mod constants;
pub mod error;
pub mod form;
pub mod input;
pub mod knockout;
pub mod margin;
pub mod schedule;
pub mod simulate;
pub mod standings;
pub mod team;
pub mod tournament;

pub use bracket::{quarterfinal_pairs, select_top_eight};
pub use error::{CoreError, Result};
pub use form::FormTable;
pub use input::{ExhibitionMatch, ExhibitionRecord, TournamentInput, ValidatedInput};
pub use knockout::{play_knockout, EliminationMatch, EliminationResults};
pub use margin::expected_margin;
pub use schedule::{play_group, GroupMatchResult, ROUND_PAIRINGS};
pub use simulate::{average_game_total, base_score, simulate_match, MatchRng, UniformDraws};
pub use standings::{compute_standings, standings_order, StandingEntry};
pub use team::{Team, TeamIndex};
pub use tournament::{Tournament, TournamentReport};
