//! Scoring module - level completion stars and points
//!
//! Only timed levels with a limit are graded on speed:
//!
//! | time used / limit | stars |
//! |-------------------|-------|
//! | < 0.5             | 3     |
//! | < 0.75            | 2     |
//! | otherwise         | 1     |
//!
//! Every other level clears with 2 stars. Points are a flat base plus a
//! per-second bonus for whatever time remains on a timed level.

use crate::types::{LevelKind, BASE_CLEAR_SCORE, TIME_BONUS_PER_SECOND};

/// Completion grade for a cleared level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearResult {
    pub stars: u8,
    pub score: u32,
}

fn timed_limit(kind: LevelKind, time_limit: Option<u32>) -> Option<f64> {
    match (kind, time_limit) {
        (LevelKind::Timed, Some(limit)) if limit > 0 => Some(limit as f64),
        _ => None,
    }
}

/// Stars for a clear taking `time_used` seconds
pub fn calculate_stars(kind: LevelKind, time_limit: Option<u32>, time_used: f64) -> u8 {
    let Some(limit) = timed_limit(kind, time_limit) else {
        return 2;
    };
    let ratio = time_used / limit;
    if ratio < 0.5 {
        3
    } else if ratio < 0.75 {
        2
    } else {
        1
    }
}

/// Points for a clear taking `time_used` seconds
pub fn calculate_score(kind: LevelKind, time_limit: Option<u32>, time_used: f64) -> u32 {
    let bonus = match timed_limit(kind, time_limit) {
        Some(limit) => {
            let remaining = (limit - time_used).max(0.0);
            (remaining * TIME_BONUS_PER_SECOND as f64).floor() as u32
        }
        None => 0,
    };
    BASE_CLEAR_SCORE.saturating_add(bonus)
}

pub fn grade_clear(kind: LevelKind, time_limit: Option<u32>, time_used: f64) -> ClearResult {
    ClearResult {
        stars: calculate_stars(kind, time_limit, time_used),
        score: calculate_score(kind, time_limit, time_used),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timed_star_thresholds() {
        let t = LevelKind::Timed;
        assert_eq!(calculate_stars(t, Some(60), 10.0), 3);
        assert_eq!(calculate_stars(t, Some(60), 30.0), 2);
        assert_eq!(calculate_stars(t, Some(60), 44.9), 2);
        assert_eq!(calculate_stars(t, Some(60), 45.0), 1);
        assert_eq!(calculate_stars(t, Some(60), 90.0), 1);
    }

    #[test]
    fn test_untimed_levels_get_two_stars() {
        assert_eq!(calculate_stars(LevelKind::Normal, None, 5.0), 2);
        assert_eq!(calculate_stars(LevelKind::Challenge, Some(60), 5.0), 2);
        assert_eq!(calculate_stars(LevelKind::Timed, None, 5.0), 2);
    }

    #[test]
    fn test_score_time_bonus() {
        assert_eq!(calculate_score(LevelKind::Normal, None, 12.0), 500);
        assert_eq!(calculate_score(LevelKind::Timed, Some(60), 20.5), 500 + 197);
        assert_eq!(calculate_score(LevelKind::Timed, Some(60), 75.0), 500);
        assert_eq!(
            grade_clear(LevelKind::Timed, Some(60), 20.5),
            ClearResult {
                stars: 2,
                score: 697
            }
        );
    }
}
