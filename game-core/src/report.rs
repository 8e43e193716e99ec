use game_types::{Role, RoundOutcome, TrollScenario};

pub const TROLL_BANNER: &str = "¡EVENTO TROLL DETECTADO!";
pub const MISSION_BANNER: &str = "Estado de la Misión";

#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub name: String,
    pub role: Role,
    pub real_word: String,
}

/// What the results screen shows once identities are revealed.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundReport {
    pub banner: &'static str,
    pub starting_player: String,
    pub lines: Vec<ReportLine>,
    /// Set for falsa alarma: the troll flag was raised but nobody was an impostor.
    pub no_impostor: bool,
}

impl RoundReport {
    pub fn from_outcome(outcome: &RoundOutcome) -> Self {
        let players = outcome.players();
        let starting_player = players
            .iter()
            .find(|p| p.id == outcome.starting_player)
            .map(|p| p.name.clone())
            .unwrap_or_default();

        Self {
            banner: if outcome.is_troll_event() {
                TROLL_BANNER
            } else {
                MISSION_BANNER
            },
            starting_player,
            lines: players
                .iter()
                .map(|p| ReportLine {
                    name: p.name.clone(),
                    role: p.role,
                    real_word: p.real_word.clone(),
                })
                .collect(),
            no_impostor: outcome.troll_scenario() == Some(TrollScenario::FalsaAlarma),
        }
    }
}
