use log::debug;
use rand::Rng;

use crate::constants::{
    DEFENSIVE_ADJUSTMENT, FORM_WEIGHT, RANK_WEIGHT, SWING_MAX, SWING_MIN, VARIANCE_RANGE,
};
use crate::form::FormTable;
use crate::input::ExhibitionMatch;
use crate::team::Team;

/// Randomness seam of the match simulator.
///
/// Production code wraps any [`Rng`] in [`UniformDraws`]; tests substitute a
/// scripted source to make scores exactly recomputable. Draw order per match
/// is fixed: variance for team1, variance for team2, then the shared swing.
pub trait MatchRng {
    /// Per-team variance draw, uniform in `[0, 15)`.
    fn variance(&mut self) -> f64;

    /// Shared swing draw, uniform in `[-4, 6)`, added to one side and
    /// subtracted from the other.
    fn swing(&mut self) -> f64;
}

/// Uniform model draws on top of any random source.
pub struct UniformDraws<R>(pub R);

impl<R: Rng> MatchRng for UniformDraws<R> {
    fn variance(&mut self) -> f64 {
        self.0.gen_range(0.0..VARIANCE_RANGE)
    }

    fn swing(&mut self) -> f64 {
        self.0.gen_range(SWING_MIN..SWING_MAX)
    }
}

/// Average per-game total points of one team's exhibition history.
///
/// Per-match halves are summed as reals and floored once over the sum, then
/// averaged across matches. Callers guarantee a nonempty history; validation
/// rejects teams without one.
pub fn average_game_total(history: &[ExhibitionMatch]) -> f64 {
    debug_assert!(!history.is_empty());
    let halves: f64 = history
        .iter()
        .map(|m| (m.score.0 + m.score.1) as f64 / 2.0)
        .sum();
    halves.floor() / history.len() as f64
}

/// Matchup base score from both teams' exhibition scoring averages.
pub fn base_score(avg_total1: f64, avg_total2: f64) -> f64 {
    ((avg_total1 + avg_total2) / 4.0).floor() - DEFENSIVE_ADJUSTMENT
}

/// Simulate one match and return the rounded score pair.
///
/// Combines the static ranking gap, the current form gap, the exhibition base
/// score and the random draws. Scores are not clamped: negative or tied
/// scores are possible and resolved by the downstream tie-break policies.
///
/// Side effect: feeds the rounded scores back into the form table before
/// returning.
pub fn simulate_match<R: MatchRng + ?Sized>(
    team1: &Team,
    team2: &Team,
    base: f64,
    form: &mut FormTable,
    rng: &mut R,
) -> (i32, i32) {
    let rank_diff = (team2.ranking - team1.ranking) as f64 * RANK_WEIGHT;
    let form_diff = (form.get(&team1.code) - form.get(&team2.code)) * FORM_WEIGHT;

    let variance1 = rng.variance().floor();
    let variance2 = rng.variance().floor();
    let swing = rng.swing();

    let score1 = (variance1 + base + rank_diff + form_diff + swing).round() as i32;
    let score2 = (variance2 + base - rank_diff - form_diff - swing).round() as i32;

    form.update(&team1.code, &team2.code, score1, score2);
    debug!(
        "{} {} - {} {} (base {}, rank diff {:.2}, form diff {:.2})",
        team1.code, score1, score2, team2.code, base, rank_diff, form_diff
    );

    (score1, score2)
}
