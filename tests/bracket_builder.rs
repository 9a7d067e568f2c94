//! Integration tests for bracket construction: table layouts, generic layout, links and numbering.

use pe_tournament_bracket::{
    build_bracket, seed_order, BracketLayout, PairingTable, Round, SeedingMode,
};
use std::collections::HashMap;

fn roster(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("T{i}")).collect()
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn pair(rounds: &[Round], r: usize, s: usize) -> (Option<&str>, Option<&str>) {
    let m = &rounds[r][s];
    (m.team_a.as_deref(), m.team_b.as_deref())
}

#[test]
fn fewer_than_two_teams_builds_nothing() {
    assert!(build_bracket(&[], SeedingMode::Input).is_empty());
    assert!(build_bracket(&names(&["A"]), SeedingMode::Input).is_empty());
}

#[test]
fn two_teams_play_a_single_final() {
    let rounds = build_bracket(&names(&["A", "B"]), SeedingMode::Input);
    assert_eq!(rounds.len(), 1);
    assert_eq!(pair(&rounds, 0, 0), (Some("A"), Some("B")));
    assert_eq!(rounds[0][0].parent_id, None);
    assert_eq!(rounds[0][0].match_number, Some(1));
}

#[test]
fn three_teams_top_seed_waits_in_final() {
    let rounds = build_bracket(&names(&["A", "B", "C"]), SeedingMode::Input);
    assert_eq!(rounds.len(), 2);
    assert_eq!(rounds[0].len(), 1);
    assert_eq!(pair(&rounds, 0, 0), (Some("B"), Some("C")));
    assert_eq!(pair(&rounds, 1, 0), (Some("A"), None));
    assert_eq!(rounds[1][0].winner, None);
}

#[test]
fn four_teams_pair_one_v_four_and_two_v_three() {
    let rounds = build_bracket(&names(&["A", "B", "C", "D"]), SeedingMode::Input);
    assert_eq!(rounds.len(), 2);
    assert_eq!(pair(&rounds, 0, 0), (Some("A"), Some("D")));
    assert_eq!(pair(&rounds, 0, 1), (Some("B"), Some("C")));
    assert_eq!(pair(&rounds, 1, 0), (None, None));
}

#[test]
fn five_teams_only_four_and_five_play_first() {
    let rounds = build_bracket(&roster(5), SeedingMode::Input);
    assert_eq!(rounds.len(), 3);
    assert_eq!(rounds[0].len(), 1);
    assert_eq!(pair(&rounds, 0, 0), (Some("T4"), Some("T5")));
    assert_eq!(rounds[1].len(), 2);
    assert_eq!(pair(&rounds, 1, 0), (Some("T1"), None));
    assert_eq!(pair(&rounds, 1, 1), (Some("T2"), Some("T3")));
    assert_eq!(rounds[2].len(), 1);
}

#[test]
fn sixteen_teams_follow_the_seeding_chart() {
    let rounds = build_bracket(&roster(16), SeedingMode::Input);
    let expected = [(1, 16), (8, 9), (4, 13), (5, 12), (2, 15), (7, 10), (3, 14), (6, 11)];
    assert_eq!(rounds[0].len(), 8);
    for (slot, (a, b)) in expected.iter().enumerate() {
        let m = &rounds[0][slot];
        assert_eq!(m.team_a.as_deref(), Some(format!("T{a}").as_str()));
        assert_eq!(m.team_b.as_deref(), Some(format!("T{b}").as_str()));
    }
    assert_eq!(rounds.len(), 4);
}

#[test]
fn seed_order_matches_conventional_charts() {
    assert_eq!(seed_order(2), vec![1, 2]);
    assert_eq!(seed_order(4), vec![1, 4, 2, 3]);
    assert_eq!(seed_order(8), vec![1, 8, 4, 5, 2, 7, 3, 6]);
}

#[test]
fn tables_cover_three_to_twenty_four_only() {
    assert_eq!(BracketLayout::for_team_count(2), BracketLayout::Generic);
    assert_eq!(BracketLayout::for_team_count(25), BracketLayout::Generic);
    for n in 3..=24 {
        assert!(
            matches!(BracketLayout::for_team_count(n), BracketLayout::Table(t) if t.teams == n),
            "no table for {n} teams"
        );
    }
}

#[test]
fn opening_games_plus_byes_fill_half_the_slots() {
    for n in 3..=24usize {
        let total = n.next_power_of_two();
        let table = PairingTable::for_team_count(n).unwrap();
        let rounds = build_bracket(&roster(n), SeedingMode::Input);
        let byes = table.bye_seeds().len();
        assert_eq!(byes, total - n, "bye count for {n} teams");
        assert_eq!(rounds[0].len() + byes, total / 2, "slots for {n} teams");
    }
}

#[test]
fn byes_go_to_the_top_seeds() {
    for n in 3..=24 {
        let table = PairingTable::for_team_count(n).unwrap();
        let mut byes = table.bye_seeds();
        byes.sort_unstable();
        let expected: Vec<u8> = (1..=(n.next_power_of_two() - n) as u8).collect();
        assert_eq!(byes, expected, "byes for {n} teams");
    }
}

#[test]
fn every_team_is_placed_exactly_once() {
    for n in 2..=40 {
        let rounds = build_bracket(&roster(n), SeedingMode::Input);
        let mut seen: HashMap<String, usize> = HashMap::new();
        let mut placed = |team: &Option<String>| {
            if let Some(t) = team {
                *seen.entry(t.clone()).or_default() += 1;
            }
        };
        for m in &rounds[0] {
            placed(&m.team_a);
            placed(&m.team_b);
        }
        // Seeded second-round slots (no feeding match) hold the table byes.
        if n <= 24 && rounds.len() > 1 {
            for m in &rounds[1] {
                for side in [pe_tournament_bracket::Side::A, pe_tournament_bracket::Side::B] {
                    let fed = rounds[0]
                        .iter()
                        .any(|c| c.parent_id == Some(m.id) && c.parent_side == Some(side));
                    if !fed {
                        placed(&m.team(side).map(str::to_string));
                    }
                }
            }
        }
        assert_eq!(seen.len(), n, "teams placed for {n}");
        assert!(seen.values().all(|&c| c == 1), "duplicate placement for {n}");
    }
}

#[test]
fn every_match_but_the_final_feeds_the_next_round() {
    for n in 2..=40 {
        let rounds = build_bracket(&roster(n), SeedingMode::Input);
        let last = rounds.len() - 1;
        assert_eq!(rounds[last].len(), 1, "final round for {n}");
        assert_eq!(rounds[last][0].parent_id, None);
        for (r, round) in rounds.iter().enumerate() {
            for (s, m) in round.iter().enumerate() {
                assert_eq!((m.round_index, m.slot_index), (r, s));
                if r == last {
                    continue;
                }
                let parent = m.parent_id.expect("non-final match without parent");
                assert!(m.parent_side.is_some());
                assert!(rounds[r + 1].iter().any(|p| p.id == parent), "{n} teams, round {r}");
            }
        }
    }
}

#[test]
fn parents_have_at_most_one_child_per_side() {
    for n in 2..=40 {
        let rounds = build_bracket(&roster(n), SeedingMode::Input);
        let mut edges = HashMap::new();
        for m in rounds.iter().flatten() {
            if let (Some(p), Some(side)) = (m.parent_id, m.parent_side) {
                assert!(edges.insert((p, side), m.id).is_none(), "{n} teams");
            }
        }
    }
}

#[test]
fn match_numbers_cover_opening_games_and_first_bye_games() {
    let rounds = build_bracket(&roster(5), SeedingMode::Input);
    assert_eq!(rounds[0][0].match_number, Some(1));
    assert_eq!(rounds[1][0].match_number, Some(2));
    assert_eq!(rounds[1][1].match_number, Some(3));
    assert_eq!(rounds[2][0].match_number, None);

    let rounds = build_bracket(&roster(8), SeedingMode::Input);
    let numbers: Vec<_> = rounds[0].iter().map(|m| m.match_number).collect();
    assert_eq!(numbers, vec![Some(1), Some(2), Some(3), Some(4)]);
    assert!(rounds[1].iter().all(|m| m.match_number.is_none()));
}

#[test]
fn generic_numbering_continues_into_first_bye_games() {
    // 25 teams: 9 real opening games, then the 7 games where a bye seed first plays.
    let rounds = build_bracket(&roster(25), SeedingMode::Input);
    let opening: Vec<_> = rounds[0].iter().filter_map(|m| m.match_number).collect();
    assert_eq!(opening, (1..=9).collect::<Vec<_>>());

    assert_eq!(rounds[1][0].match_number, Some(10));
    assert_eq!(pair(&rounds, 1, 0), (Some("T1"), None));
    // T8 v T25 and T9 v T24 both still have to be played.
    assert_eq!(rounds[1][1].match_number, None);
    let second: Vec<_> = rounds[1].iter().filter_map(|m| m.match_number).collect();
    assert_eq!(second, (10..=16).collect::<Vec<_>>());
    assert!(rounds[2..].iter().flatten().all(|m| m.match_number.is_none()));
}

#[test]
fn generic_layout_gives_top_seeds_bye_matches() {
    let teams = roster(27);
    let rounds = build_bracket(&teams, SeedingMode::Input);
    assert_eq!(rounds.len(), 5);
    assert_eq!(rounds[0].len(), 16);

    let byes: Vec<_> = rounds[0].iter().filter(|m| m.is_bye).collect();
    assert_eq!(byes.len(), 5);
    for m in &byes {
        let seed: usize = m.team_a.as_deref().unwrap()[1..].parse().unwrap();
        assert!(seed <= 5);
        assert_eq!(m.team_b, None);
        assert_eq!(m.winner, m.team_a);
        assert_eq!(m.match_number, None);
    }
    let numbered = rounds[0].iter().filter(|m| m.match_number.is_some()).count();
    assert_eq!(numbered, 11);

    // Top seed's bye has already advanced; its opponent comes from T16 v T17.
    assert_eq!(pair(&rounds, 0, 1), (Some("T16"), Some("T17")));
    assert_eq!(pair(&rounds, 1, 0), (Some("T1"), None));
}

#[test]
fn random_seeding_keeps_the_same_teams() {
    let teams = roster(12);
    let rounds = build_bracket(&teams, SeedingMode::Random);
    let mut placed: Vec<String> = rounds[0]
        .iter()
        .flat_map(|m| [m.team_a.clone(), m.team_b.clone()])
        .chain(rounds[1].iter().flat_map(|m| [m.team_a.clone(), m.team_b.clone()]))
        .flatten()
        .collect();
    placed.sort();
    let mut expected = teams.clone();
    expected.sort();
    assert_eq!(placed, expected);
}

#[test]
fn fresh_bracket_has_no_scores() {
    for n in 2..=30 {
        let rounds = build_bracket(&roster(n), SeedingMode::Input);
        assert!(rounds
            .iter()
            .flatten()
            .all(|m| m.score_a.is_none() && m.score_b.is_none()));
    }
}
