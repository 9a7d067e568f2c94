//! Round labels, counted back from the final.

/// Labels for `round_count` rounds, earliest round first.
///
/// `round_labels(3)` is `["8강(Quarterfinal)", "Semi-Final", "Final"]`.
pub fn round_labels(round_count: usize) -> Vec<String> {
    (0..round_count)
        .map(|r| label_for(round_count - 1 - r))
        .collect()
}

fn label_for(rounds_before_final: usize) -> String {
    match rounds_before_final {
        0 => "Final".to_string(),
        1 => "Semi-Final".to_string(),
        2 => "8강(Quarterfinal)".to_string(),
        n => {
            let teams = 1u64 << (n + 1).min(63);
            format!("{}강(Round of {})", teams, teams)
        }
    }
}
