use log::info;
use serde::Serialize;
use std::collections::HashMap;

use crate::form::FormTable;
use crate::simulate::{base_score, simulate_match, MatchRng};
use crate::team::Team;

/// One knockout fixture, immutable once simulated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EliminationMatch {
    pub team1: Team,
    pub team2: Team,
    pub score1: i32,
    pub score2: i32,
}

impl EliminationMatch {
    /// Strict comparison; an exact tie goes to team2.
    pub fn winner(&self) -> &Team {
        if self.score1 > self.score2 {
            &self.team1
        } else {
            &self.team2
        }
    }

    pub fn loser(&self) -> &Team {
        if self.score1 > self.score2 {
            &self.team2
        } else {
            &self.team1
        }
    }
}

/// Full elimination-stage record: quarterfinals in bracket order, semifinals,
/// and the two closing matches.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EliminationResults {
    pub quarterfinals: Vec<EliminationMatch>,
    pub semifinals: Vec<EliminationMatch>,
    pub final_match: EliminationMatch,
    pub bronze: EliminationMatch,
}

/// Drive the 8-team elimination bracket.
///
/// Quarterfinal winners feed the semifinals in bracket order (winners of
/// pairs 0 and 1 meet, winners of 2 and 3 meet). Semifinal winners meet in
/// the final, losers in the bronze match, with pairing positions preserved.
/// Every match runs through the shared simulator, so form keeps compounding
/// through the bracket.
pub fn play_knockout<R: MatchRng + ?Sized>(
    pairs: Vec<(Team, Team)>,
    averages: &HashMap<String, f64>,
    form: &mut FormTable,
    rng: &mut R,
) -> EliminationResults {
    assert_eq!(pairs.len(), 4, "bracket requires 4 quarterfinal pairs");

    info!("playing quarterfinals");
    let quarterfinals: Vec<EliminationMatch> = pairs
        .into_iter()
        .map(|(team1, team2)| play_tie(team1, team2, averages, form, rng))
        .collect();

    info!("playing semifinals");
    let semifinals: Vec<EliminationMatch> = quarterfinals
        .chunks(2)
        .map(|pair| {
            play_tie(
                pair[0].winner().clone(),
                pair[1].winner().clone(),
                averages,
                form,
                rng,
            )
        })
        .collect();

    info!("playing final and bronze match");
    let final_match = play_tie(
        semifinals[0].winner().clone(),
        semifinals[1].winner().clone(),
        averages,
        form,
        rng,
    );
    let bronze = play_tie(
        semifinals[0].loser().clone(),
        semifinals[1].loser().clone(),
        averages,
        form,
        rng,
    );

    EliminationResults {
        quarterfinals,
        semifinals,
        final_match,
        bronze,
    }
}

fn play_tie<R: MatchRng + ?Sized>(
    team1: Team,
    team2: Team,
    averages: &HashMap<String, f64>,
    form: &mut FormTable,
    rng: &mut R,
) -> EliminationMatch {
    let base = base_score(averages[&team1.code], averages[&team2.code]);
    let (score1, score2) = simulate_match(&team1, &team2, base, form, rng);
    EliminationMatch {
        team1,
        team2,
        score1,
        score2,
    }
}
