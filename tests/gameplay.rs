//! Full games driven through the public API

use capfill::game::{Controller, GameState};
use capfill::rules::{is_legal, round_points};
use capfill::{Board, CpuEngine, DecisionKind, Difficulty, EngineConfig, Player, Pos};

fn play_out(p1: Controller, p2: Controller, seed: u64) -> GameState {
    let mut engine = CpuEngine::with_seed(seed);
    let mut game = GameState::new(Player::P1);
    while !game.is_over() {
        let before = game.board;
        let player = game.current_turn;
        let controller = if player == Player::P1 { p1 } else { p2 };
        let decision = game.play_turn(&mut engine, controller).unwrap();
        let pos = decision.best_move.unwrap();
        assert!(is_legal(&before, pos, player), "{controller} played illegal {pos}");
        assert!(game.move_history.len() <= 25);
    }
    game
}

#[test]
fn every_tier_finishes_a_game() {
    for (i, tier) in Difficulty::ALL.into_iter().enumerate() {
        let game = play_out(Controller::Cpu(tier), Controller::Cpu(Difficulty::Easy), i as u64);
        assert!(game.is_over());
        // Every ply fills exactly one empty cell
        assert_eq!(
            game.move_history.len(),
            25 - game.board.empty_count(),
            "{tier}"
        );
    }
}

#[test]
fn shogo_seat_finishes_a_game() {
    let game = play_out(Controller::Shogo, Controller::Cpu(Difficulty::Medium), 11);
    assert!(game.is_over());
    if let Some(winner) = game.winner() {
        let points = game.round_points(3).unwrap();
        assert!((1..=3).contains(&points));
        assert_eq!(points, round_points(&game.board, winner, 3));
    }
}

#[test]
fn seeded_games_replay_identically() {
    let a = play_out(Controller::Cpu(Difficulty::Hard), Controller::Cpu(Difficulty::Easy), 42);
    let b = play_out(Controller::Cpu(Difficulty::Hard), Controller::Cpu(Difficulty::Easy), 42);
    assert_eq!(a.move_history, b.move_history);
    assert_eq!(a.board, b.board);
}

#[test]
fn hard_beats_random_from_a_winning_spot() {
    // P1 needs one cell for row 0
    let board: Board = "22220/00000/00000/00000/11100".parse().unwrap();
    let mut game = GameState::from_board(board, Player::P1);
    let mut engine = CpuEngine::with_seed(7);
    let decision = game
        .play_turn(&mut engine, Controller::Cpu(Difficulty::Hard))
        .unwrap();
    assert_eq!(decision.decision, DecisionKind::ImmediateWin);
    assert_eq!(game.winner(), Some(Player::P1));
}

#[test]
fn custom_config_flows_into_the_engine() {
    let config = EngineConfig::from_toml("[eval]\ncenter_bonus = 0\nline_weight = 20\n").unwrap();
    let mut engine = CpuEngine::with_config(config);
    let result = engine.find_cpu_move_with_stats(&Board::new(), Player::P1, Difficulty::Medium);
    // Without the bonus the center still touches the most lines
    assert_eq!(result.best_move, Some(Pos::new(2, 2)));
    assert_eq!(result.score, 4 * 20);
}
