//! Score entry: validate raw input at the boundary, then re-propagate.

use crate::logic::propagate::propagate_winners;
use crate::models::{MatchId, Side, Tournament, TournamentError};
use std::num::IntErrorKind;

/// Parse a score field. Blank clears the score; anything else must be a non-negative whole number.
pub fn parse_score(raw: &str) -> Result<Option<u32>, TournamentError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    // `u32::from_str` also takes a leading '+'.
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TournamentError::InvalidScore(trimmed.to_string()));
    }
    trimmed.parse::<u32>().map(Some).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => TournamentError::ScoreTooLarge(trimmed.to_string()),
        _ => TournamentError::InvalidScore(trimmed.to_string()),
    })
}

/// Set one side's score and recompute the bracket. Nothing changes if the input is rejected.
pub fn enter_score(
    tournament: &mut Tournament,
    match_id: MatchId,
    side: Side,
    raw: &str,
) -> Result<(), TournamentError> {
    let score = parse_score(raw)?;
    let m = tournament
        .find_match_mut(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    if m.is_bye || m.team_a.is_none() || m.team_b.is_none() {
        return Err(TournamentError::MatchNotReady(match_id));
    }
    m.set_score(side, score);
    propagate_winners(&mut tournament.rounds);
    tournament.touch();
    Ok(())
}
