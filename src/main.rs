use clap::Parser;
use std::path::PathBuf;

use ultimate_tic_tac_toe::logging::{setup_logging, LoggingConfig};
use ultimate_tic_tac_toe::mcts::{MCTSHyperparameters, MctsEngine};
use ultimate_tic_tac_toe::{GameServer, GameState, Mark, Outcome, ServerConfig};

#[derive(Parser, Debug)]
#[command(name = "ultimate_tic_tac_toe")]
struct Config {
    /// Mode de lancement
    #[arg(long, value_enum, default_value = "serve")]
    mode: RunMode,

    /// Address the HTTP server binds to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port of the HTTP server
    #[arg(short = 'p', long, default_value_t = 5000)]
    port: u16,

    /// Maximum number of concurrent games
    #[arg(long, default_value_t = 100)]
    max_games: usize,

    /// MCTS iterations per AI move
    #[arg(short = 's', long, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(1..))]
    mcts_trials: u64,

    /// UCB1 exploration constant of the tree policy
    #[arg(long, default_value_t = 0.1)]
    exploration: f64,

    /// Seconds without ping before a game is closed
    #[arg(long, default_value_t = 300)]
    idle_timeout_secs: u64,

    /// Number of games in self-play mode
    #[arg(short = 'g', long, default_value_t = 10)]
    num_games: usize,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Directory for rotated log files (stderr only when absent)
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum RunMode {
    /// HTTP game server
    Serve,
    /// AI against AI, results logged
    SelfPlay,
}

// ============================================================================
// SELF-PLAY
// ============================================================================

fn run_self_play(engine: &MctsEngine, num_games: usize, trials: usize) {
    let (mut x_wins, mut o_wins, mut ties) = (0usize, 0usize, 0usize);

    for game in 1..=num_games {
        let mut state = GameState::new();
        let mut plies = 0usize;
        while let Some(action) = engine.choose_move(&state, trials) {
            state.apply(action);
            plies += 1;
        }

        match state.winner() {
            Outcome::Win(mark) if mark == Mark::X => x_wins += 1,
            Outcome::Win(_) => o_wins += 1,
            _ => ties += 1,
        }
        log::info!(
            "🎲 Game {}/{}: {} after {} actions",
            game,
            num_games,
            state.winner().describe().unwrap_or_default(),
            plies
        );
        log::debug!("Final position:\n{}", state);
    }

    log::info!(
        "📊 Self-play finished: X {} / O {} / Tie {}",
        x_wins,
        o_wins,
        ties
    );
}

// ============================================================================
// FONCTION PRINCIPALE
// ============================================================================

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();

    let _logger = setup_logging(&LoggingConfig {
        level: config.log_level.clone(),
        directory: config.log_dir.clone(),
    })?;

    let hyperparameters = MCTSHyperparameters {
        exploration_constant: config.exploration,
        ..Default::default()
    };
    hyperparameters.validate()?;

    match config.mode {
        RunMode::Serve => {
            let server = GameServer::new(ServerConfig {
                host: config.host,
                port: config.port,
                max_games: config.max_games,
                mcts_trials: config.mcts_trials as usize,
                idle_timeout_secs: config.idle_timeout_secs,
                hyperparameters,
            });
            server.start().await?;
        }
        RunMode::SelfPlay => {
            let engine = MctsEngine::new(hyperparameters);
            let trials = config.mcts_trials as usize;
            let num_games = config.num_games;
            tokio::task::spawn_blocking(move || run_self_play(&engine, num_games, trials))
                .await?;
        }
    }
    Ok(())
}
