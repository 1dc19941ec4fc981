//! Random playouts over the full rules.

use isolation_core::{GameState, Isolation, Player, BOARD_SIZE};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn playout(seed: u64) -> Isolation {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Isolation::new();
    while !game.is_terminal() {
        let actions = game.actions();
        let mv = *actions.choose(&mut rng).unwrap();
        game = game.apply(mv).unwrap();
    }
    game
}

#[test]
fn random_games_terminate_within_board_size() {
    for seed in 0..50 {
        let game = playout(seed);
        assert!(game.ply_count() as usize <= BOARD_SIZE);
        assert!(game.actions().is_empty());
    }
}

#[test]
fn terminal_utility_is_zero_sum() {
    for seed in 0..20 {
        let game = playout(seed);
        let loser = game.player();
        assert_eq!(game.utility(loser), f64::NEG_INFINITY);
        assert_eq!(game.utility(loser.other()), f64::INFINITY);
    }
}

#[test]
fn pieces_never_share_a_cell() {
    for seed in 100..120 {
        let game = playout(seed);
        let [a, b] = game.locs();
        assert!(a.is_some() && b.is_some());
        assert_ne!(a, b);
        assert_eq!(game.location(Player::First), a);
    }
}
