use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use draw_poker::agents::{DealerConfig, DealerPolicy};
use draw_poker::game::{Game, GameConfig};
use draw_poker::tui::{app::AppState, controller};
use log::error;
use ratatui::prelude::*;
use std::error::Error;
use std::fs::File;
use std::io::{self, IsTerminal, Stdout};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed for reproducible deals.
    #[arg(long)]
    seed: Option<u64>,
    /// The dealer keeps a flush whose top card value is above this.
    #[arg(long, default_value_t = DealerConfig::DEFAULT_FLUSH_STAND_PAT,
           value_parser = clap::value_parser!(u8).range(2..=14))]
    flush_stand_pat: u8,
    /// The dealer keeps a straight whose top card value is above this.
    #[arg(long, default_value_t = DealerConfig::DEFAULT_STRAIGHT_STAND_PAT,
           value_parser = clap::value_parser!(u8).range(2..=14))]
    straight_stand_pat: u8,
    /// Never break a high-card hand to draw to a straight.
    #[arg(long)]
    no_straight_draws: bool,
    /// Write logs here while the TUI is running.
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Play N rounds without a terminal, dealer policy on both sides.
    #[arg(long, value_name = "N")]
    simulate: Option<u64>,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        let dealer = DealerConfig::default()
            .with_flush_stand_pat(self.flush_stand_pat)
            .with_straight_stand_pat(self.straight_stand_pat)
            .with_straight_draws(!self.no_straight_draws);
        let config = GameConfig::default().with_dealer(dealer);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn init_logger(level: log::LevelFilter, log_file: Option<&PathBuf>) -> io::Result<()> {
    let mut builder = env_logger::builder();
    builder.filter_level(level).parse_default_env().format_target(false).format_timestamp_millis();
    if let Some(path) = log_file {
        builder.target(env_logger::Target::Pipe(Box::new(File::create(path)?)));
    }
    builder.init();
    Ok(())
}

fn simulate(config: GameConfig, rounds: u64) -> Result<(), Box<dyn Error>> {
    let player = DealerPolicy::new(config.dealer);
    let mut game = Game::new(config)?;
    for _ in 0..rounds {
        let discards = player.choose_discards(game.round().player_hand());
        game.finish_round(discards)?;
        game.new_round()?;
    }
    let stats = game.stats();
    println!(
        "rounds: {}  player: {}  dealer: {}  ties: {}  player win rate: {:.2}%",
        stats.total,
        stats.player_wins,
        stats.dealer_wins,
        stats.ties,
        stats.win_rate()
    );
    Ok(())
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let config = cli.game_config();

    if let Some(rounds) = cli.simulate {
        // per-round verdicts are info; keep stderr quiet unless RUST_LOG asks
        init_logger(log::LevelFilter::Warn, None)?;
        if let Err(e) = simulate(config, rounds) {
            error!("{e}");
            return Err(e);
        }
        return Ok(());
    }

    if !io::stdout().is_terminal() {
        println!(
            "draw-poker TUI requires a real terminal (TTY).\nUse --simulate N for a headless run. Version: {}",
            draw_poker::VERSION
        );
        return Ok(());
    }

    // stderr would scribble over the alternate screen, so only log to a file
    if let Some(path) = cli.log_file.as_ref() {
        init_logger(log::LevelFilter::Info, Some(path))?;
    }

    let mut app = AppState::new(config)?;
    let mut terminal = setup_terminal()?;
    let res = controller::run(&mut terminal, &mut app, Duration::from_millis(250));

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    if let Err(e) = &res {
        error!("{e}");
    }
    Ok(res?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_build_the_game_config() {
        let cli = Cli::parse_from([
            "draw-poker",
            "--seed",
            "7",
            "--straight-stand-pat",
            "4",
            "--no-straight-draws",
        ]);
        let config = cli.game_config();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.dealer.straight_stand_pat, 4);
        assert_eq!(config.dealer.flush_stand_pat, DealerConfig::DEFAULT_FLUSH_STAND_PAT);
        assert!(!config.dealer.straight_draws);
        assert_eq!(cli.simulate, None);
    }

    #[test]
    fn thresholds_outside_card_values_are_rejected() {
        assert!(Cli::try_parse_from(["draw-poker", "--flush-stand-pat", "15"]).is_err());
    }
}
