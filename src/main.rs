mod ui;

use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyCode, KeyModifiers, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    time::{Duration, Instant},
};

use fokus::config::{Config, ConfigStore, FileConfigStore};
use fokus::countdown::{Completion, Countdown, MAX_FOCUS_MINUTES, MIN_FOCUS_MINUTES};
use fokus::journey;
use fokus::mood::Mood;
use fokus::runtime::{CrosstermEventSource, FixedTicker, FokusEvent, Runner};
use fokus::scene::Scene;
use fokus::stats::{FileStatsStore, Statistics, StatsStore};
use fokus::TICK_RATE_MS;

/// terminal focus timer with an animated space journey
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A terminal focus timer. Start a session and ride a starfield towards a distant planet; the closer you get, the faster you travel. Fidgeting mid-session makes the planet angry. Completed sessions are tallied locally."
)]
pub struct Cli {
    /// focus duration in minutes
    #[clap(short = 'd', long, value_parser = clap::value_parser!(u16).range(1..=120))]
    duration: Option<u16>,

    /// print persisted session statistics and exit
    #[clap(long)]
    stats: bool,
}

#[derive(Debug)]
pub struct App {
    pub countdown: Countdown,
    pub mood: Mood,
    pub scene: Scene,
    pub statistics: Statistics,
}

impl App {
    pub fn new(focus_minutes: u16, statistics: Statistics) -> Self {
        Self {
            countdown: Countdown::new(focus_minutes),
            mood: Mood::new(),
            scene: Scene::new(),
            statistics,
        }
    }

    /// Nudge the configured duration by `delta` minutes, clamped to the
    /// allowed range. Returns true if the value actually changed.
    pub fn adjust_duration(&mut self, delta: i32) -> bool {
        let current = self.countdown.focus_minutes();
        let wanted = (current as i32 + delta)
            .clamp(MIN_FOCUS_MINUTES as i32, MAX_FOCUS_MINUTES as i32) as u16;
        if wanted == current {
            return false;
        }
        self.countdown.set_focus_minutes(wanted);
        true
    }

    /// Non-control interaction (stray key, mouse press). Only an active
    /// session takes offense.
    pub fn provoke(&mut self, now: Instant) {
        if self.countdown.is_running() {
            self.mood.provoke(now);
        }
    }

    /// One runner tick: advance the countdown, apply completion side
    /// effects, expire the mood window, and animate the scene.
    pub fn on_tick(&mut self, now: Instant) -> Option<Completion> {
        let completion = self.countdown.on_tick(TICK_RATE_MS);
        if let Some(ref completion) = completion {
            self.statistics.record(completion);
            // Wake-up nudge at the end of the journey
            self.mood.provoke(now);
        }
        self.mood.update(now);

        let stage = journey::params_at(self.countdown.progress());
        self.scene.advance(
            TICK_RATE_MS as f64 / 1000.0,
            &stage,
            self.countdown.is_running(),
            self.mood.is_angry(),
        );
        completion
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let stats_store = FileStatsStore::new();
    if cli.stats {
        println!("{}", stats_store.load().summary());
        return Ok(());
    }

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let config_store = FileConfigStore::new();
    let config = config_store.load();
    let focus_minutes = cli.duration.unwrap_or(config.focus_minutes);

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(focus_minutes, stats_store.load());
    let res = start_tui(&mut terminal, &mut app, &stats_store, &config_store);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    res
}

fn start_tui<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    stats_store: &impl StatsStore,
    config_store: &impl ConfigStore,
) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(TICK_RATE_MS)),
    );

    terminal.draw(|f| ui(app, f))?;

    loop {
        match runner.step() {
            FokusEvent::Tick => {
                if app.on_tick(Instant::now()).is_some() {
                    // Best effort; a failed save never interrupts the session
                    let _ = stats_store.save(&app.statistics);
                }
                terminal.draw(|f| ui(app, f))?;
            }
            FokusEvent::Resize => {
                terminal.draw(|f| ui(app, f))?;
            }
            FokusEvent::Mouse(mouse) => {
                if matches!(mouse.kind, MouseEventKind::Down(_)) {
                    app.provoke(Instant::now());
                    terminal.draw(|f| ui(app, f))?;
                }
            }
            FokusEvent::Key(key) => {
                match key.code {
                    KeyCode::Esc => break,
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                    KeyCode::Char('q') => break,
                    KeyCode::Char(' ') => app.countdown.toggle(),
                    KeyCode::Char('r') | KeyCode::Char('R') => app.countdown.reset(),
                    KeyCode::Up => {
                        if app.adjust_duration(1) {
                            let _ = config_store.save(&Config {
                                focus_minutes: app.countdown.focus_minutes(),
                            });
                        }
                    }
                    KeyCode::Down => {
                        if app.adjust_duration(-1) {
                            let _ = config_store.save(&Config {
                                focus_minutes: app.countdown.focus_minutes(),
                            });
                        }
                    }
                    _ => app.provoke(Instant::now()),
                }
                terminal.draw(|f| ui(app, f))?;
            }
        }
    }

    Ok(())
}

fn ui(app: &mut App, f: &mut Frame) {
    f.render_widget(&*app, f.area());
}
