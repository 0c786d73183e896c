use super::super::domain::ColorUsageRecord;

/// Preference score in [0, 10] for `color` given the wearer's frequency-ordered history.
///
/// Histories of up to four colors use fixed rank tables. Larger histories fall back to
/// percentile bands over `(rank - 1) / total`, compared in integer arithmetic so band edges
/// such as 3/5 land in the band they name.
pub fn color_score(color: &str, history: &ColorUsageRecord) -> u8 {
    let total = history.len();
    if total == 0 {
        return 0;
    }

    let Some(rank) = history.rank_of(color) else {
        return 0;
    };

    match (total, rank) {
        (1, _) => 10,
        (2, 1) => 10,
        (2, _) => 5,
        (3 | 4, 1) => 10,
        (3 | 4, 2) => 7,
        (3 | 4, 3) => 5,
        (4, _) => 3,
        (_, 1) => 10,
        _ => percentile_band(rank, total),
    }
}

fn percentile_band(rank: usize, total: usize) -> u8 {
    // percentile <= n/10  <=>  10 * (rank - 1) <= n * total
    let scaled = 10 * (rank - 1);
    if scaled <= 3 * total {
        7
    } else if scaled <= 6 * total {
        5
    } else if scaled <= 9 * total {
        3
    } else {
        0
    }
}
