use crate::models::{Resident, ScoringRules, WishDirection};

/// Calculate a compatibility score (0-100) for a mutually eligible pair
///
/// Scoring formula (default rules):
/// score = min(100,
///     50                                # base
///     + 30 if direction bonus applies   # see `direction_bonus_applies`
///     + 20 - 10 * floor_diff            # only while floor_diff <= 2
/// )
///
/// The caller is expected to have checked eligibility first.
pub fn calculate_exchange_score(
    subject: &Resident,
    candidate: &Resident,
    rules: &ScoringRules,
) -> u8 {
    let mut score = rules.base;

    if direction_bonus_applies(subject, candidate) {
        score = score.saturating_add(rules.direction_bonus);
    }

    score = score.saturating_add(floor_proximity_bonus(
        subject.floor.abs_diff(candidate.floor),
        rules,
    ));

    score.min(rules.max_score).min(u8::MAX as u32) as u8
}

/// Direction bonus, judged from the subject's side
///
/// Applies when the subject's wish names the candidate's direction, or either
/// resident has no direction preference. The candidate's concrete wish is
/// not compared here even though eligibility already required it to hold.
#[inline]
pub fn direction_bonus_applies(subject: &Resident, candidate: &Resident) -> bool {
    subject.wish_direction == WishDirection::Toward(candidate.direction)
        || subject.wish_direction == WishDirection::Any
        || candidate.wish_direction == WishDirection::Any
}

/// Bonus for floors close together; zero outside the window
#[inline]
pub fn floor_proximity_bonus(floor_diff: u32, rules: &ScoringRules) -> u32 {
    if floor_diff > rules.proximity_window {
        return 0;
    }
    rules
        .proximity_peak
        .saturating_sub(rules.proximity_step.saturating_mul(floor_diff))
}
