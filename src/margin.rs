use crate::constants::{
    EXPECTED_EXPONENT, EXPECTED_FLOOR, EXPECTED_GAP_RANGE, EXPECTED_SPREAD, MARGIN_SCALE,
    MISMATCH_GAP, MISMATCH_MARGIN_THRESHOLD,
};

/// Expected winning margin for the favourite at a given rank gap.
pub fn expected_for_gap(rank_gap: i32) -> f64 {
    EXPECTED_FLOOR + EXPECTED_SPREAD * (rank_gap as f64 / EXPECTED_GAP_RANGE).powf(EXPECTED_EXPONENT)
}

/// Normalized point-margin signal: how much better or worse than expected the
/// higher-ranked side did, scaled down to form units.
///
/// `actual_diff` is the margin in favour of whichever side holds the smaller
/// rank value. For close rankings the result is the surplus over the expected
/// curve; for mismatches (gap above [`MISMATCH_GAP`]) the favourite only earns
/// credit when its margin exceeds [`MISMATCH_MARGIN_THRESHOLD`], and a narrow
/// mismatch win scores nothing either way.
///
/// # Arguments
/// * `rank_home`, `rank_away` - static world rankings, lower = stronger
/// * `score_home`, `score_away` - observed final score
///
/// # Returns
/// The rounded margin signal in form units.
pub fn expected_margin(rank_home: i32, rank_away: i32, score_home: i32, score_away: i32) -> f64 {
    let actual_diff = if rank_home < rank_away {
        (score_home - score_away) as f64
    } else {
        (score_away - score_home) as f64
    };
    let rank_gap = (rank_home - rank_away).abs();

    if rank_gap > MISMATCH_GAP {
        if actual_diff > MISMATCH_MARGIN_THRESHOLD {
            (actual_diff / MARGIN_SCALE).round()
        } else {
            0.0
        }
    } else {
        ((actual_diff - expected_for_gap(rank_gap)) / MARGIN_SCALE).round()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_ranks_equal_scores() {
        // Zero gap, zero margin: the favourite fell short of the base expected
        // margin, so the signal is round((0 - 4) / 3) = -1.
        let expected = ((0.0 - expected_for_gap(0)) / MARGIN_SCALE).round();
        assert_eq!(expected_margin(8, 8, 75, 75), expected);
        assert_eq!(expected_margin(8, 8, 75, 75), -1.0);
    }

    #[test]
    fn test_close_ranking_surplus() {
        // Gap 3 expects ~4.82; a 10-point win is ~5.18 over par, /3 rounds to 2.
        assert_eq!(expected_margin(2, 5, 80, 70), 2.0);
        // Same matchup seen from the weaker side's perspective.
        assert_eq!(expected_margin(5, 2, 70, 80), 2.0);
    }

    #[test]
    fn test_mismatch_narrow_win_scores_nothing() {
        assert_eq!(expected_margin(1, 30, 80, 80), 0.0);
        assert_eq!(expected_margin(1, 30, 78, 80), 0.0);
        // Favourite at zero margin sits exactly on the threshold, still nothing.
        assert_eq!(expected_margin(30, 1, 80, 80), 0.0);
    }

    #[test]
    fn test_mismatch_blowout_scaled() {
        // Favourite is the away side (rank 1); wins by 21, round(21 / 3) = 7.
        assert_eq!(expected_margin(30, 1, 70, 91), 7.0);
        assert_eq!(expected_margin(1, 30, 91, 70), 7.0);
    }

    #[test]
    fn test_expected_curve_monotonic() {
        let mut last = f64::NEG_INFINITY;
        for gap in 0..=40 {
            let expected = expected_for_gap(gap);
            assert!(expected > last, "curve must grow with the gap");
            last = expected;
        }
    }
}
