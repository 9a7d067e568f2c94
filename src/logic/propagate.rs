//! Winner propagation: decide each match and forward winners along parent links.

use crate::models::Round;

/// Recompute every team slot fed by an earlier match, and every winner.
///
/// Runs round by round from the first round to the final:
/// 1. Each slot fed by a child match takes the child's advancing team, or
///    stays empty while the child is undecided. Seeded (bye) slots have no
///    child and are left alone.
/// 2. If a slot's occupant changed, the match's scores are stale and cleared,
///    so a corrected early result resets everything it used to decide.
/// 3. The winner is recomputed: a bye advances its only team; otherwise both
///    teams and both scores are needed, and a tie decides nothing.
///
/// Running it twice in a row changes nothing.
pub fn propagate_winners(rounds: &mut [Round]) {
    for r in 0..rounds.len() {
        if r > 0 {
            let (earlier, later) = rounds.split_at_mut(r);
            let children = &earlier[r - 1];
            for m in later[0].iter_mut() {
                let id = m.id;
                let mut changed = false;
                for child in children.iter().filter(|c| c.parent_id == Some(id)) {
                    let Some(side) = child.parent_side else {
                        continue;
                    };
                    let incoming = child.advancing_team().map(str::to_string);
                    changed |= m.set_team(side, incoming);
                }
                if changed && (m.score_a.is_some() || m.score_b.is_some()) {
                    log::debug!("Participants of match {} changed; clearing scores", m.id);
                    m.clear_scores();
                }
            }
        }
        for m in rounds[r].iter_mut() {
            m.winner = m.decide();
        }
    }
}
