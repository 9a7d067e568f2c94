//! Bracket construction: seed the roster, pick a layout, wire parent links.

use crate::logic::propagate::propagate_winners;
use crate::logic::tables::{PairingTable, SlotSource};
use crate::models::{BracketMatch, Round, SeedingMode, Side};
use rand::seq::SliceRandom;

/// How a bracket of a given size is laid out.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BracketLayout {
    /// Hand-authored chart (3 to 24 teams).
    Table(&'static PairingTable),
    /// Power-of-two first round with bye matches for the top seeds.
    Generic,
}

impl BracketLayout {
    pub fn for_team_count(teams: usize) -> Self {
        match PairingTable::for_team_count(teams) {
            Some(table) => BracketLayout::Table(table),
            None => BracketLayout::Generic,
        }
    }

    /// Lay out rounds for teams already in seed order.
    fn lay_out(self, seeded: &[String]) -> Vec<Round> {
        match self {
            BracketLayout::Table(table) => {
                let mut rounds = layout_from_table(table, seeded);
                append_later_rounds(&mut rounds);
                rounds
            }
            BracketLayout::Generic => {
                let mut rounds = layout_generic(seeded);
                append_later_rounds(&mut rounds);
                number_first_bye_games(&mut rounds);
                rounds
            }
        }
    }
}

/// Build a fresh bracket for the roster. Fewer than 2 teams gives no rounds.
///
/// Rounds are ordered earliest first; the last round holds the final alone.
/// Byes are resolved before returning.
pub fn build_bracket(teams: &[String], seeding: SeedingMode) -> Vec<Round> {
    if teams.len() < 2 {
        return Vec::new();
    }
    let mut seeded = teams.to_vec();
    if seeding == SeedingMode::Random {
        seeded.shuffle(&mut rand::thread_rng());
    }

    let layout = BracketLayout::for_team_count(seeded.len());
    let mut rounds = layout.lay_out(&seeded);
    propagate_winners(&mut rounds);
    log::debug!(
        "Built bracket: {} teams, {} rounds, {} layout",
        seeded.len(),
        rounds.len(),
        match layout {
            BracketLayout::Table(_) => "table",
            BracketLayout::Generic => "generic",
        }
    );
    rounds
}

/// Conventional seed order for a power-of-two bracket: [1, 4, 2, 3] for 4, [1, 8, 4, 5, 2, 7, 3, 6] for 8.
pub fn seed_order(size: usize) -> Vec<usize> {
    let mut order = vec![1];
    while order.len() < size {
        let mirror = order.len() * 2 + 1;
        order = order.iter().flat_map(|&s| [s, mirror - s]).collect();
    }
    order
}

fn link(child: &mut BracketMatch, parent: &BracketMatch, side: Side) {
    child.parent_id = Some(parent.id);
    child.parent_side = Some(side);
}

fn layout_from_table(table: &PairingTable, seeded: &[String]) -> Vec<Round> {
    let team = |seed: u8| seeded.get(usize::from(seed) - 1).cloned();

    let mut opening: Round = table
        .opening
        .iter()
        .enumerate()
        .map(|(slot, &(a, b))| {
            let mut m = BracketMatch::new(0, slot);
            m.team_a = team(a);
            m.team_b = team(b);
            m
        })
        .collect();

    let mut second: Round = Vec::with_capacity(table.second.len());
    for (slot, &(source_a, source_b)) in table.second.iter().enumerate() {
        let mut m = BracketMatch::new(1, slot);
        for (side, source) in [(Side::A, source_a), (Side::B, source_b)] {
            match source {
                SlotSource::Seed(seed) => {
                    m.set_team(side, team(seed));
                }
                SlotSource::Winner(index) => {
                    if let Some(child) = opening.get_mut(usize::from(index)) {
                        link(child, &m, side);
                    }
                }
            }
        }
        second.push(m);
    }

    // Opening games first, then the first game of each bye team.
    let mut number = 0;
    for m in &mut opening {
        number += 1;
        m.match_number = Some(number);
    }
    for (m, (a, b)) in second.iter_mut().zip(table.second) {
        if matches!(a, SlotSource::Seed(_)) || matches!(b, SlotSource::Seed(_)) {
            number += 1;
            m.match_number = Some(number);
        }
    }

    vec![opening, second]
}

fn layout_generic(seeded: &[String]) -> Vec<Round> {
    let size = seeded.len().next_power_of_two();
    let mut number = 0;
    let opening = seed_order(size)
        .chunks_exact(2)
        .enumerate()
        .map(|(slot, pair)| {
            let mut m = BracketMatch::new(0, slot);
            m.team_a = seeded.get(pair[0] - 1).cloned();
            m.team_b = seeded.get(pair[1] - 1).cloned();
            if m.team_b.is_none() {
                m.is_bye = true;
            } else {
                number += 1;
                m.match_number = Some(number);
            }
            m
        })
        .collect();
    vec![opening]
}

/// Continue numbering into round 1: the first game of each bye team.
fn number_first_bye_games(rounds: &mut [Round]) {
    let [opening, second, ..] = rounds else {
        return;
    };
    let mut number = opening.iter().filter_map(|m| m.match_number).max().unwrap_or(0);
    for m in second.iter_mut() {
        let fed_by_bye = opening
            .iter()
            .any(|c| c.is_bye && c.parent_id == Some(m.id));
        if fed_by_bye {
            number += 1;
            m.match_number = Some(number);
        }
    }
}

/// Pair the last round two by two until a single final remains.
fn append_later_rounds(rounds: &mut Vec<Round>) {
    loop {
        let round_index = rounds.len();
        let Some(last) = rounds.last_mut() else {
            break;
        };
        if last.len() <= 1 {
            break;
        }
        let next: Round = (0..last.len().div_ceil(2))
            .map(|slot| BracketMatch::new(round_index, slot))
            .collect();
        for (i, child) in last.iter_mut().enumerate() {
            let side = if i % 2 == 0 { Side::A } else { Side::B };
            link(child, &next[i / 2], side);
        }
        rounds.push(next);
    }
}
