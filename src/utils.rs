use std::collections::BTreeMap;

use itertools::Itertools;

use crate::models::Player;

pub const LEVEL_BUCKET_WIDTH: i32 = 10;

/// First level of the bucket `level` falls into, rounding towards negative infinity.
pub fn level_bucket(level: i32) -> i32 {
    level.div_euclid(LEVEL_BUCKET_WIDTH) * LEVEL_BUCKET_WIDTH
}

pub fn level_bucket_label(start: i32) -> String {
    format!("{}-{}", start, start + LEVEL_BUCKET_WIDTH - 1)
}

pub fn group_by_level_bucket<'a>(iter: impl Iterator<Item = &'a Player>) -> BTreeMap<i32, u64> {
    iter.map(|p| (level_bucket(p.level), 1u64))
        .into_grouping_map()
        .sum()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_start_on_multiples_of_ten() {
        assert_eq!(level_bucket(0), 0);
        assert_eq!(level_bucket(9), 0);
        assert_eq!(level_bucket(10), 10);
        assert_eq!(level_bucket(57), 50);
        assert_eq!(level_bucket(100), 100);
        assert_eq!(level_bucket(-1), -10);
    }

    #[test]
    fn labels_span_ten_levels() {
        assert_eq!(level_bucket_label(0), "0-9");
        assert_eq!(level_bucket_label(20), "20-29");
        assert_eq!(level_bucket_label(-10), "-10--1");
    }

    #[test]
    fn grouping_counts_players_per_bucket() {
        let players: Vec<Player> = [1, 5, 12, 19, 20, 105]
            .into_iter()
            .map(|level| Player {
                level,
                ..Default::default()
            })
            .collect();

        let grouped = group_by_level_bucket(players.iter());

        assert_eq!(
            grouped.into_iter().collect::<Vec<_>>(),
            vec![(0, 2), (10, 2), (20, 1), (100, 1)]
        );
    }
}
