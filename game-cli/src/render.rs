use game_core::RoundReport;
use game_types::{Role, RoundOutcome};

/// Card-by-card view followed by the results screen, as plain text.
pub fn render_round(round_number: u32, outcome: &RoundOutcome) -> String {
    let report = RoundReport::from_outcome(outcome);
    let mut out = String::new();

    out.push_str(&format!(
        "=== Ronda {} · {} ===\n",
        round_number,
        outcome.round.category()
    ));
    for card in outcome.players() {
        out.push_str(&format!("  [{}] ve: {}\n", card.name, card.word));
    }

    out.push_str(&format!("--- {} ---\n", report.banner));
    out.push_str(&format!("  Comienza a hablar {}\n", report.starting_player));
    for line in &report.lines {
        let role = match line.role {
            Role::Civil => "Civil",
            Role::Impostor => "Impostor",
        };
        out.push_str(&format!(
            "  {:<12} {:<9} {}\n",
            line.name, role, line.real_word
        ));
    }
    if report.no_impostor {
        out.push_str("  Nadie era impostor.\n");
    }

    out
}
