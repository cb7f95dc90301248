//! capfill command-line front end
//!
//! ## Usage
//!
//! - `capfill` / `capfill demo` - Run the scripted engine scenarios
//! - `capfill play --p1 hard --p2 shogo --games 10` - CPU self-play
//! - `capfill move --board 00000/00000/00200/00000/00000 --player p2 --tier extreme`
//!
//! `RUST_LOG` controls logging (default `info`).

use std::path::{Path, PathBuf};

use anyhow::{bail, ensure, Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use capfill::config::DEFAULT_CONFIG_FILE;
use capfill::game::{Controller, GameState};
use capfill::rules::{apply_move, winning_lines};
use capfill::{Board, CpuEngine, DecisionKind, Difficulty, EngineConfig, Player, Pos};

/// capfill: 5×5 capture-and-fill with a CPU opponent
#[derive(Parser)]
#[command(name = "capfill")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Engine configuration file (defaults to ./capfill.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run scripted scenarios and report PASS/FAIL
    Demo,
    /// Let two CPU seats play each other
    Play {
        /// Controller for p1: easy, medium, hard, extreme or shogo
        #[arg(long, default_value = "hard")]
        p1: Controller,
        /// Controller for p2
        #[arg(long, default_value = "medium")]
        p2: Controller,
        /// Seed for reproducible games
        #[arg(long)]
        seed: Option<u64>,
        /// Number of games
        #[arg(long, default_value_t = 1)]
        games: u32,
        /// Print the board after every ply
        #[arg(long)]
        verbose: bool,
    },
    /// Ask the CPU for a single move
    Move {
        /// 25 digits 0-5, row by row; `/`, `,` and spaces are ignored
        #[arg(long)]
        board: Board,
        /// Side to move
        #[arg(long, default_value = "p1")]
        player: Player,
        /// Difficulty tier
        #[arg(long, default_value = "hard", conflicts_with = "shogo")]
        tier: Difficulty,
        /// Use the shogo selector instead of a tier
        #[arg(long)]
        shogo: bool,
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Play {
            p1,
            p2,
            seed,
            games,
            verbose,
        }) => run_play(config, p1, p2, seed, games, verbose),
        Some(Commands::Move {
            board,
            player,
            tier,
            shogo,
            seed,
        }) => run_move(config, &board, player, tier, shogo, seed),
        Some(Commands::Demo) | None => run_demo(config),
    }
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display())),
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            Ok(EngineConfig::load_or_default(DEFAULT_CONFIG_FILE))
        }
        None => Ok(EngineConfig::default()),
    }
}

fn make_engine(config: EngineConfig, seed: Option<u64>) -> CpuEngine<StdRng> {
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    CpuEngine::with_rng(config, rng)
}

fn run_move(
    config: EngineConfig,
    board: &Board,
    player: Player,
    tier: Difficulty,
    shogo: bool,
    seed: Option<u64>,
) -> Result<()> {
    let mut engine = make_engine(config, seed);
    let result = if shogo {
        engine.find_shogo_cpu_move_with_stats(board, player)
    } else {
        engine.find_cpu_move_with_stats(board, player, tier)
    };

    print!("{board}");
    match result.best_move {
        Some(pos) => {
            println!("{} plays {}", player, pos);
            println!(
                "  decision: {:?}, score: {}, nodes: {}, time: {}ms",
                result.decision, result.score, result.nodes, result.time_ms
            );
            if result.decision == DecisionKind::AlphaBeta {
                println!(
                    "  cutoffs: {}, cache hit rate: {:.1}%",
                    result.stats.cutoffs,
                    result.stats.cache_hit_rate()
                );
            }
            Ok(())
        }
        None => bail!("{} has no legal move", player),
    }
}

fn run_play(
    config: EngineConfig,
    p1: Controller,
    p2: Controller,
    seed: Option<u64>,
    games: u32,
    verbose: bool,
) -> Result<()> {
    let max_points = config.shogo.max_round_points;
    let mut engine = make_engine(config, seed);
    let mut wins = [0u32; 2];
    let mut points = [0u32; 2];

    for game_no in 1..=games {
        let first = if game_no % 2 == 1 { Player::P1 } else { Player::P2 };
        let mut game = GameState::new(first);

        while !game.is_over() {
            let player = game.current_turn;
            let controller = if player == Player::P1 { p1 } else { p2 };
            let decision = game.play_turn(&mut engine, controller)?;
            if let Some(pos) = decision.best_move {
                println!("  {} ({}) -> {} [{:?}]", player, controller, pos, decision.decision);
            }
            if verbose {
                print!("{}", game.board);
            }
        }

        match game.result {
            Some(result) => {
                let seat = usize::from(result.winner == Player::P2);
                wins[seat] += 1;
                let round = game.round_points(max_points).unwrap_or(1);
                points[seat] += round;
                println!(
                    "game {}: {} wins by {:?} in {} plies ({} pts)",
                    game_no,
                    result.winner,
                    result.win_type,
                    game.move_history.len(),
                    round
                );
            }
            None => println!("game {}: no winner", game_no),
        }
    }

    println!(
        "p1 ({}): {} wins, {} pts | p2 ({}): {} wins, {} pts",
        p1, wins[0], points[0], p2, wins[1], points[1]
    );
    Ok(())
}

fn run_demo(config: EngineConfig) -> Result<()> {
    println!("===========================================");
    println!("       capfill engine v{}", env!("CARGO_PKG_VERSION"));
    println!("===========================================\n");

    let mut engine = make_engine(config, Some(2024));
    let scenarios: [(&str, fn(&mut CpuEngine<StdRng>) -> Result<bool>); 8] = [
        ("Empty Board", demo_empty_board),
        ("Find Winning Move", demo_winning_move),
        ("Block Opponent Line", demo_block),
        ("Capture Run", demo_capture),
        ("Lock Wall", demo_lock_wall),
        ("Corner Rule", demo_corner_rule),
        ("Extreme Corner", demo_extreme_corner),
        ("Shogo Round Points", demo_shogo_points),
    ];

    let mut failed = 0;
    for (i, (name, scenario)) in scenarios.iter().enumerate() {
        println!("--- Test {}: {} ---", i + 1, name);
        let passed = scenario(&mut engine)?;
        println!("  Result: {}\n", if passed { "PASS" } else { "FAIL" });
        if !passed {
            failed += 1;
        }
    }

    println!("===========================================");
    println!("   {} of {} scenarios passed", scenarios.len() - failed, scenarios.len());
    println!("===========================================");
    ensure!(failed == 0, "{} scenario(s) failed", failed);
    Ok(())
}

fn parse_board(s: &str) -> Result<Board> {
    s.parse::<Board>()
        .with_context(|| format!("invalid demo board {s}"))
}

fn report(result: &capfill::MoveResult) {
    if let Some(m) = result.best_move {
        println!("  Plays: {}", m);
    }
    println!("  Decision: {:?}", result.decision);
    println!("  Time: {}ms, nodes: {}", result.time_ms, result.nodes);
    if result.decision == DecisionKind::AlphaBeta {
        println!(
            "  Cutoffs: {}, cache hit rate: {:.1}%",
            result.stats.cutoffs,
            result.stats.cache_hit_rate()
        );
    }
}

fn demo_empty_board(engine: &mut CpuEngine<StdRng>) -> Result<bool> {
    let result = engine.find_cpu_move_with_stats(&Board::new(), Player::P1, Difficulty::Medium);
    report(&result);
    println!("  Expected: center (2,2)");
    Ok(result.best_move == Some(Pos::new(2, 2)))
}

fn demo_winning_move(engine: &mut CpuEngine<StdRng>) -> Result<bool> {
    let board = parse_board("22220/00000/00000/00000/11100")?;
    let result = engine.find_cpu_move_with_stats(&board, Player::P1, Difficulty::Hard);
    report(&result);
    println!("  Expected: (0,4) - Immediate Win");
    Ok(result.best_move == Some(Pos::new(0, 4)) && result.decision == DecisionKind::ImmediateWin)
}

fn demo_block(engine: &mut CpuEngine<StdRng>) -> Result<bool> {
    let board = parse_board("20000/00000/00000/00000/11110")?;
    let result = engine.find_cpu_move_with_stats(&board, Player::P1, Difficulty::Hard);
    report(&result);
    println!("  Expected: (4,4) - only move that keeps row 4 open");
    Ok(result.best_move == Some(Pos::new(4, 4)))
}

fn demo_capture(_engine: &mut CpuEngine<StdRng>) -> Result<bool> {
    let board = parse_board("00000/00000/01112/00000/00000")?;
    let outcome = apply_move(&board, Pos::new(2, 0), Player::P1)?;
    print!("{}", outcome.board);
    println!("  Changed cells: {}", outcome.changed.len());
    Ok(outcome.captured() == 3 && outcome.board.get(Pos::new(2, 2)) == 2)
}

fn demo_lock_wall(_engine: &mut CpuEngine<StdRng>) -> Result<bool> {
    let board = parse_board("00000/00000/05120/00000/00000")?;
    let outcome = apply_move(&board, Pos::new(2, 0), Player::P1)?;
    print!("{}", outcome.board);
    println!("  Changed cells: {}", outcome.changed.len());
    Ok(outcome.changed.len() == 1 && outcome.board.get(Pos::new(2, 2)) == 1)
}

fn demo_corner_rule(_engine: &mut CpuEngine<StdRng>) -> Result<bool> {
    let board = parse_board("20002/00000/00000/00000/00000")?;
    let blocked = (1..=3).all(|c| apply_move(&board, Pos::new(0, c), Player::P1).is_err());
    for c in 1..=3 {
        if let Err(e) = apply_move(&board, Pos::new(0, c), Player::P1) {
            println!("  (0,{}): {}", c, e);
        }
    }
    let opponent_free = apply_move(&board, Pos::new(0, 2), Player::P2).is_ok();
    Ok(blocked && opponent_free)
}

fn demo_extreme_corner(engine: &mut CpuEngine<StdRng>) -> Result<bool> {
    let board = parse_board("10000/00000/00200/00000/00000")?;
    let result = engine.find_cpu_move_with_stats(&board, Player::P2, Difficulty::Extreme);
    report(&result);
    println!("  Expected: (4,4) - opposite corner");
    Ok(result.best_move == Some(Pos::new(4, 4)) && result.decision == DecisionKind::Corner)
}

fn demo_shogo_points(engine: &mut CpuEngine<StdRng>) -> Result<bool> {
    let board = parse_board("22220/02000/00200/00020/22220")?;
    let result = engine.find_shogo_cpu_move_with_stats(&board, Player::P1);
    report(&result);
    let Some(pos) = result.best_move else {
        return Ok(false);
    };
    let after = apply_move(&board, pos, Player::P1)?.board;
    println!("  Winning cells: {}", winning_lines(&after).count());
    println!("  Expected: (4,4) - row and diagonal for 2 points");
    Ok(pos == Pos::new(4, 4) && result.score == 2)
}
