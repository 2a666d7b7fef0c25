mod ui;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use dragon_math::constants::{LOG_ENV_VAR, LOG_FILE_NAME, TICK_INTERVAL_MS};
use dragon_math::save_manager::{save_progress, CounterStore, JsonFileStore};
use dragon_math::utils::persistence::save_path;
use dragon_math::{DragonGame, GameEvent, PlayerProgress, Screen};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("dragon-math {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Dragon Math - feed the dragon by solving arithmetic problems\n");
                println!("Usage: dragon-math [option]\n");
                println!("Options:");
                println!("  --reset    Reset level and coins");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                println!();
                println!("Set {} to control logging (default: info).", LOG_ENV_VAR);
                std::process::exit(0);
            }
            "--reset" => {
                let mut store = JsonFileStore::new()?;
                save_progress(&mut store, &PlayerProgress::default())?;
                println!("Progress reset in {}", store.path().display());
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'dragon-math --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    init_logging();

    let store = JsonFileStore::new()?;
    info!(path = %store.path().display(), "loading progress");
    let mut game = DragonGame::new(store);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_game(&mut terminal, &mut game);

    // Restore terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Logs go to ~/.dragon-math/dragon-math.log so they never touch the screen.
fn init_logging() {
    let file = match save_path(LOG_FILE_NAME)
        .and_then(|path| OpenOptions::new().create(true).append(true).open(path))
    {
        Ok(file) => file,
        Err(_) => return,
    };

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}

fn run_game<S: CounterStore>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    game: &mut DragonGame<S>,
) -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let tick_interval = Duration::from_millis(TICK_INTERVAL_MS);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw_ui(frame, game))?;

        let timeout = tick_interval.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind != KeyEventKind::Press {
                    continue;
                }
                match (game.screen(), key_event.code) {
                    (Screen::Title, KeyCode::Enter) => game.start(&mut rng),
                    (Screen::Title, KeyCode::Char('q') | KeyCode::Esc) => break,
                    (Screen::Playing, KeyCode::Char(c)) if c.is_ascii_digit() => {
                        game.press_digit(c as u8 - b'0');
                    }
                    (Screen::Playing, KeyCode::Backspace) => {
                        game.press_delete();
                    }
                    (Screen::Playing, KeyCode::Enter) => {
                        game.press_check();
                    }
                    (Screen::Playing, KeyCode::Char('p') | KeyCode::Esc) => game.pause(),
                    (Screen::Paused, KeyCode::Char('p') | KeyCode::Esc) => game.resume(),
                    (Screen::Paused, KeyCode::Char('h')) => game.quit_to_title(),
                    (_, KeyCode::Char('s')) => game.toggle_sound(),
                    _ => {}
                }
            }
        }

        if last_tick.elapsed() >= tick_interval {
            game.tick(&mut rng);
            last_tick = Instant::now();
        }

        play_events(game.drain_events(), game.sound_enabled());
    }

    Ok(())
}

/// Terminal bell stands in for sound effects.
fn play_events(events: Vec<GameEvent>, sound_enabled: bool) {
    if !sound_enabled {
        return;
    }
    let audible = events.iter().any(|event| {
        matches!(
            event,
            GameEvent::AnswerCorrect
                | GameEvent::AnswerIncorrect
                | GameEvent::LevelUp
                | GameEvent::SpecialReward
        )
    });
    if audible {
        let mut stdout = io::stdout();
        if let Err(err) = stdout.write_all(b"\x07").and_then(|_| stdout.flush()) {
            warn!(%err, "failed to ring terminal bell");
        }
    }
}
