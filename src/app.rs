use std::{
    io::{self, Write},
    time::Instant,
};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{
        Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use log::{debug, info};

use crate::{
    config::Config,
    error::Result,
    grid::Grid,
    life::{Life, Tick},
    render::render,
};

pub const QUIT_HINT: &str = "press q to quit";
pub const STABLE_BANNER: &str = "REACHED STABILITY!!";

/// How the animation ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Quit,
    Stable,
}

pub struct App {
    config: Config,
    life: Life,
}

impl App {
    pub fn new(config: Config, grid: Grid) -> Self {
        Self {
            config,
            life: Life::new(grid),
        }
    }

    pub fn life(&self) -> &Life {
        &self.life
    }

    /// The full frame: padding, the canvas, then a footer.
    pub fn view(&self) -> String {
        let stable = self.life.is_stable();
        let canvas = render(
            self.life.grid(),
            &self.config.glyphs,
            self.config.palette(stable),
        );
        let footer = if stable {
            STABLE_BANNER.to_string()
        } else {
            format!("generation {} · {QUIT_HINT}", self.life.generation())
        };
        format!("\n\n{canvas}\n\n{footer}\n\n")
    }

    /// Advances one generation. Returns the outcome once the loop should end.
    pub fn on_tick(&mut self) -> Option<Outcome> {
        match self.life.tick() {
            Tick::Advanced => None,
            Tick::Stable => {
                info!(
                    "stable after {} generations, population {}",
                    self.life.generation(),
                    self.life.population()
                );
                None
            }
            Tick::Done => Some(Outcome::Stable),
        }
    }

    /// Takes over the terminal and animates until stability or a quit key.
    /// The terminal is restored however the loop ends.
    pub fn run(&mut self) -> Result<Outcome> {
        let mut stdout = io::stdout();
        let _guard = TerminalGuard::enter(&mut stdout)?;
        self.event_loop(&mut stdout)
    }

    fn event_loop(&mut self, out: &mut impl Write) -> Result<Outcome> {
        let mut last_tick = Instant::now();
        self.draw(out)?;
        loop {
            let timeout = self.config.refresh.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if is_quit(&key) => {
                        info!("quit at generation {}", self.life.generation());
                        return Ok(Outcome::Quit);
                    }
                    Event::Resize(cols, rows) => {
                        debug!("terminal resized to {rows}x{cols}");
                        self.draw(out)?;
                    }
                    _ => (),
                }
            }
            if last_tick.elapsed() >= self.config.refresh {
                last_tick = Instant::now();
                if let Some(outcome) = self.on_tick() {
                    return Ok(outcome);
                }
                self.draw(out)?;
            }
        }
    }

    fn draw(&self, out: &mut impl Write) -> Result<()> {
        // Raw mode does not return the carriage on '\n', so position each line.
        for (y, line) in self.view().lines().enumerate() {
            let y = u16::try_from(y).unwrap_or(u16::MAX);
            queue!(out, MoveTo(0, y), Print(line), Clear(ClearType::UntilNewLine))?;
        }
        queue!(out, Clear(ClearType::FromCursorDown))?;
        out.flush()?;
        Ok(())
    }
}

pub fn is_quit(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

struct TerminalGuard;

impl TerminalGuard {
    fn enter(out: &mut impl Write) -> Result<Self> {
        enable_raw_mode()?;
        let guard = Self;
        execute!(out, EnterAlternateScreen, Hide)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}
