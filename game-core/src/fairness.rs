use game_types::PlayerStats;

const BASE_WEIGHT: f64 = 100.0;
/// Multipliers for gaps of 1, 2 and 3 rounds since the last impostor pick.
const RECENCY_PENALTIES: [f64; 3] = [0.05, 0.20, 0.50];
/// Gaps up to this size get no drought bonus.
const NEUTRAL_GAP: u32 = 5;
const DROUGHT_BONUS_PER_ROUND: f64 = 15.0;

/// Selection weight for a player about to be considered in `current_round`.
///
/// Players without stats weigh as if never picked. The result is always
/// strictly positive.
pub fn are_weight(stats: Option<&PlayerStats>, current_round: u32) -> f64 {
    let stats = stats.copied().unwrap_or_default();
    let mut weight = BASE_WEIGHT / (stats.total_impostor_count as f64 + 1.0);

    if let Some(last_round) = stats.last_impostor_round {
        let gap = current_round.saturating_sub(last_round);
        match gap {
            1..=3 => weight *= RECENCY_PENALTIES[(gap - 1) as usize],
            g if g > NEUTRAL_GAP => {
                weight += (g - NEUTRAL_GAP) as f64 * DROUGHT_BONUS_PER_ROUND;
            }
            _ => {}
        }
    }

    weight
}
