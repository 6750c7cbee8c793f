use crate::game::game_state::GameState;
use crate::game::mark::{Mark, Outcome};
use rand::Rng;

/// Plays uniformly random legal actions until the game is decided.
///
/// Takes the state by value: the playout only ever mutates its own copy.
pub fn simulate_playout<R: Rng + ?Sized>(mut state: GameState, rng: &mut R) -> Outcome {
    while !state.is_decided() {
        let legal_actions = state.legal_actions();
        let action = legal_actions[rng.random_range(0..legal_actions.len())];
        state.apply(action);
    }
    state.winner()
}

/// Reward of a decided result for `player`: +1 for a win, -1 for a loss,
/// and a coin flip between +1 and -1 for a tie.
pub fn outcome_reward<R: Rng + ?Sized>(outcome: Outcome, player: Mark, rng: &mut R) -> i8 {
    match outcome {
        Outcome::Tie => {
            if rng.random_bool(0.5) {
                1
            } else {
                -1
            }
        }
        Outcome::Win(mark) if mark == player => 1,
        _ => -1,
    }
}
