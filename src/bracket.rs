use std::collections::BTreeMap;

use crate::standings::{standings_order, StandingEntry};

/// Select the knockout field: 8 of the 9 teams placed top-3 in their groups.
///
/// Builds one pool per group place (winners, runners-up, thirds), sorts each
/// pool by the canonical standings order, concatenates winners + runners-up +
/// thirds and keeps the first 8. Exactly one third-place team, the weakest by
/// that ordering, misses out. The returned order is the pot order: positions
/// 0-1 are pot 1, 2-3 pot 2, 4-5 pot 3, 6-7 pot 4.
pub fn select_top_eight(standings: &BTreeMap<String, Vec<StandingEntry>>) -> Vec<StandingEntry> {
    let mut field = Vec::with_capacity(9);

    for place in 0..3 {
        let mut pool: Vec<StandingEntry> = standings
            .values()
            .filter_map(|table| table.get(place))
            .cloned()
            .collect();
        pool.sort_by(standings_order);
        field.extend(pool);
    }

    field.truncate(8);
    field
}

/// Quarterfinal pairings from the seeded field.
///
/// Pots of 2 are paired crosswise - pot `i` against pot `3 - i` - with the top
/// team of one pot meeting the bottom team of the mirror pot: `pot[i][0]` vs
/// `pot[3-i][1]` for each `i`. The bracket order of the returned pairs is the
/// order the quarterfinals are played in.
pub fn quarterfinal_pairs(field: &[StandingEntry]) -> Vec<(StandingEntry, StandingEntry)> {
    assert_eq!(field.len(), 8, "seeding requires exactly 8 teams");

    (0..4)
        .map(|i| {
            let top = field[2 * i].clone();
            let bottom = field[2 * (3 - i) + 1].clone();
            (top, bottom)
        })
        .collect()
}
