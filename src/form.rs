use std::collections::HashMap;

use crate::constants::FORM_ALPHA;
use crate::error::Result;
use crate::input::ExhibitionMatch;
use crate::margin::expected_margin;
use crate::team::TeamIndex;

/// Per-team form state: a smoothed running estimate of performance relative
/// to expectation.
///
/// This is the single mutable table of the engine. It is owned by the
/// tournament driver and passed by mutable reference into every match
/// simulation, in the fixed overall match order, so updates compound the same
/// way on every run with the same draws. Never reset mid-run.
#[derive(Clone, Debug, Default)]
pub struct FormTable {
    forms: HashMap<String, f64>,
}

impl FormTable {
    /// Seed form from exhibition history.
    ///
    /// Every team starts at 0. Each exhibition record contributes its
    /// expected-margin signal to whichever side of the pairing holds the
    /// strictly smaller rank value - credit and blame always land on the
    /// favourite. At equal rank the record's own team takes it.
    pub fn seed(
        index: &TeamIndex,
        exhibitions: &HashMap<String, Vec<ExhibitionMatch>>,
    ) -> Result<FormTable> {
        let mut forms: HashMap<String, f64> =
            index.codes().map(|code| (code.clone(), 0.0)).collect();

        for (code, history) in exhibitions {
            let team = index.require(code)?;
            for exhibition in history {
                let opponent = index.require(&exhibition.opponent)?;
                let (own, opp) = exhibition.score;
                let signal = expected_margin(team.ranking, opponent.ranking, own, opp);

                let favourite = if opponent.ranking < team.ranking {
                    &opponent.code
                } else {
                    &team.code
                };
                *forms.entry(favourite.clone()).or_insert(0.0) += signal;
            }
        }

        Ok(FormTable { forms })
    }

    /// Exponential smoothing after a match, applied to both sides with their
    /// opposite-signed point differentials.
    pub fn update(&mut self, code1: &str, code2: &str, score1: i32, score2: i32) {
        let diff = (score1 - score2) as f64;
        self.smooth(code1, diff);
        self.smooth(code2, -diff);
    }

    pub fn get(&self, code: &str) -> f64 {
        self.forms.get(code).copied().unwrap_or(0.0)
    }

    fn smooth(&mut self, code: &str, diff: f64) {
        let entry = self.forms.entry(code.to_string()).or_insert(0.0);
        *entry = *entry * (1.0 - FORM_ALPHA) + diff * FORM_ALPHA;
    }
}
