//! CSV roster import and results export.

use crate::logic::labels::round_labels;
use crate::models::{Tournament, TournamentError};
use std::io::Read;

/// Read team names from the first column, one per row.
///
/// Blank rows are skipped, as is a leading `team`/`name` header.
pub fn import_teams_csv<R: Read>(reader: R) -> Result<Vec<String>, TournamentError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut teams = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record.map_err(|e| TournamentError::Csv(e.to_string()))?;
        let name = record.get(0).unwrap_or("").trim();
        if name.is_empty() {
            continue;
        }
        if i == 0 && (name.eq_ignore_ascii_case("team") || name.eq_ignore_ascii_case("name")) {
            continue;
        }
        teams.push(name.to_string());
    }
    Ok(teams)
}

/// One row per match: round label, match number, teams, scores, winner.
pub fn export_results_csv(tournament: &Tournament) -> Result<String, TournamentError> {
    let labels = round_labels(tournament.rounds.len());
    let mut wtr = csv::Writer::from_writer(Vec::new());
    let csv_err = |e: csv::Error| TournamentError::Csv(e.to_string());

    wtr.write_record(["round", "match", "team_a", "score_a", "score_b", "team_b", "winner"])
        .map_err(csv_err)?;
    for (round, label) in tournament.rounds.iter().zip(&labels) {
        for m in round {
            let opt = |v: Option<u32>| v.map(|n| n.to_string()).unwrap_or_default();
            wtr.write_record([
                label.clone(),
                opt(m.match_number),
                m.team_a.clone().unwrap_or_default(),
                opt(m.score_a),
                opt(m.score_b),
                m.team_b.clone().unwrap_or_default(),
                m.winner.clone().unwrap_or_default(),
            ])
            .map_err(csv_err)?;
        }
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| TournamentError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| TournamentError::Csv(e.to_string()))
}
