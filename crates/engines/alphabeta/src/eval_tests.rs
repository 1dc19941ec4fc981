use super::*;

/// Position stub with fixed mobilities for each player.
#[derive(Clone)]
struct Stub {
    ply: u32,
    board: usize,
    mobility: [usize; 2],
    terminal: bool,
}

impl Stub {
    fn new(ply: u32, board: usize, first: usize, second: usize) -> Self {
        Self {
            ply,
            board,
            mobility: [first, second],
            terminal: false,
        }
    }
}

impl GameState for Stub {
    type Move = u8;
    type Location = usize;

    fn actions(&self) -> Vec<u8> {
        Vec::new()
    }

    fn result(&self, _mv: u8) -> Self {
        self.clone()
    }

    fn is_terminal(&self) -> bool {
        self.terminal
    }

    fn utility(&self, _player: Player) -> Score {
        0.0
    }

    fn player(&self) -> Player {
        Player::First
    }

    fn location(&self, player: Player) -> Option<usize> {
        Some(player.idx())
    }

    fn liberties(&self, loc: Option<usize>) -> Vec<usize> {
        loc.map(|idx| vec![idx; self.mobility[idx]]).unwrap_or_default()
    }

    fn ply_count(&self) -> u32 {
        self.ply
    }

    fn board_size(&self) -> usize {
        self.board
    }
}

#[test]
fn test_mobility_difference() {
    let state = Stub::new(30, 100, 5, 3);
    assert_eq!(Heuristic::Mobility.evaluate(&state, Player::First), Ok(2.0));
    assert_eq!(Heuristic::Mobility.evaluate(&state, Player::Second), Ok(-2.0));
}

#[test]
fn test_phase_adaptive_early_game_is_offensive() {
    let state = Stub::new(30, 100, 5, 3);
    assert_eq!(fill_ratio(&state), 0.3);
    assert_eq!(Heuristic::PhaseAdaptive.evaluate(&state, Player::First), Ok(-1.0));
}

#[test]
fn test_phase_adaptive_late_game_is_defensive() {
    let state = Stub::new(70, 100, 5, 3);
    assert_eq!(Heuristic::PhaseAdaptive.evaluate(&state, Player::First), Ok(7.0));
}

#[test]
fn test_phase_boundary_counts_as_late_game() {
    let state = Stub::new(50, 100, 5, 3);
    assert_eq!(Heuristic::PhaseAdaptive.evaluate(&state, Player::First), Ok(7.0));
}

#[test]
fn test_terminal_position_is_rejected() {
    let mut state = Stub::new(10, 100, 0, 4);
    state.terminal = true;
    assert_eq!(
        Heuristic::Mobility.evaluate(&state, Player::First),
        Err(SearchError::TerminalEvaluation)
    );
    assert_eq!(
        Heuristic::PhaseAdaptive.evaluate(&state, Player::First),
        Err(SearchError::TerminalEvaluation)
    );
}

#[test]
fn test_heuristic_names_round_trip_through_toml() {
    #[derive(serde::Deserialize)]
    struct Wrapper {
        heuristic: Heuristic,
    }
    let parsed: Wrapper = toml::from_str("heuristic = \"phase-adaptive\"").unwrap();
    assert_eq!(parsed.heuristic, Heuristic::PhaseAdaptive);
    let parsed: Wrapper = toml::from_str("heuristic = \"baseline\"").unwrap();
    assert_eq!(parsed.heuristic, Heuristic::Mobility);
    assert_eq!(Heuristic::PhaseAdaptive.name(), "phase-adaptive");
}
