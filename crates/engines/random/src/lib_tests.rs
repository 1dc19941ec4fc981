use super::*;
use isolation_core::{Cell, Isolation};

fn cell(col: u8, row: u8) -> Cell {
    Cell::new(col, row).unwrap()
}

fn moves_for(state: &Isolation) -> Vec<Cell> {
    let agent = RandomAgent::new(state.player());
    let (queue, rx) = ActionQueue::unbounded();
    agent.get_action(state, &queue);
    drop(queue);
    rx.iter().collect()
}

#[test]
fn random_agent_returns_legal_move() {
    let state = Isolation::new().result(cell(5, 4)).result(cell(0, 0));
    let moves = moves_for(&state);

    assert_eq!(moves.len(), 1);
    assert!(state.actions().contains(&moves[0]));
}

#[test]
fn random_agent_places_anywhere_on_opening() {
    let state = Isolation::new();
    let moves = moves_for(&state);
    assert_eq!(moves.len(), 1);
    assert!(state.is_open(moves[0]));
}

#[test]
fn random_agent_handles_trapped_position() {
    let state = Isolation::with_blocked(&[cell(2, 1), cell(1, 2)])
        .result(cell(0, 0))
        .result(cell(10, 8));
    assert!(moves_for(&state).is_empty());
}
