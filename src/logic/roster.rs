//! Roster changes: every change rebuilds the whole bracket.

use crate::logic::builder::build_bracket;
use crate::models::{check_team_name, SeedingMode, Tournament, TournamentError};

/// Replace the roster (in seed order) and rebuild. All teams are validated before anything changes.
pub fn set_teams(tournament: &mut Tournament, teams: Vec<String>) -> Result<(), TournamentError> {
    let mut roster: Vec<String> = Vec::with_capacity(teams.len());
    for name in &teams {
        let name = check_team_name(&roster, name)?;
        roster.push(name);
    }
    tournament.teams = roster;
    rebuild_bracket(tournament);
    Ok(())
}

/// Append a team as the lowest seed and rebuild.
pub fn add_team(tournament: &mut Tournament, name: &str) -> Result<(), TournamentError> {
    let name = tournament.validate_team_name(name)?;
    tournament.teams.push(name);
    rebuild_bracket(tournament);
    Ok(())
}

/// Remove a team (case-insensitive) and rebuild. Existing scores are discarded.
pub fn remove_team(tournament: &mut Tournament, name: &str) -> Result<(), TournamentError> {
    let name = name.trim();
    let idx = tournament
        .teams
        .iter()
        .position(|t| t.eq_ignore_ascii_case(name))
        .ok_or_else(|| TournamentError::TeamNotFound(name.to_string()))?;
    tournament.teams.remove(idx);
    rebuild_bracket(tournament);
    Ok(())
}

/// Change the seeding mode and rebuild.
pub fn set_seeding(tournament: &mut Tournament, seeding: SeedingMode) {
    tournament.seeding = seeding;
    rebuild_bracket(tournament);
}

/// Throw away the current bracket and build a fresh one from the roster.
pub fn rebuild_bracket(tournament: &mut Tournament) {
    let had_scores = tournament
        .rounds
        .iter()
        .flatten()
        .any(|m| !m.is_bye && (m.score_a.is_some() || m.score_b.is_some()));
    if had_scores {
        log::info!(
            "Tournament {}: roster changed, discarding entered scores",
            tournament.id
        );
    }
    tournament.rounds = build_bracket(&tournament.teams, tournament.seeding);
    tournament.touch();
}
