//! Terminal front end.
//!
//! Owns the screen and the keyboard; every game decision is made by the
//! `Tabletop`. Keys: `q` stock, `w` talon, `e r t y` foundations,
//! `a s d f g h j` tableau. Press a source then a destination. Esc, Enter
//! or Ctrl-C quits; Ctrl-L redraws.

use std::fs::File;
use std::io::{self, Stdout, Write};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{
    Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetForegroundColor,
};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rust_klondike::core::{CardFace, Color, PileSelector, TableConfig, FOUNDATION_COUNT};
use rust_klondike::tabletop::Tabletop;

/// Klondike solitaire in the terminal.
#[derive(Parser, Debug)]
#[command(name = "klondike", about = "Klondike solitaire with two-key moves")]
struct Args {
    /// Deal seed (overrides the config file).
    #[arg(long)]
    seed: Option<u64>,

    /// JSON config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file. Filter with RUST_LOG (default: debug).
    #[arg(long)]
    log: Option<PathBuf>,
}

/// Column width of one card slot.
const SLOT: u16 = 6;

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    }

    let mut config = match &args.config {
        Some(path) => TableConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => TableConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut rng = config.rng();
    let mut table = Tabletop::deal_with_config(&config, &mut rng);
    info!(seed = rng.seed(), "starting game");

    let won = {
        let mut screen = Screen::enter()?;
        run(&mut screen, &mut table, &config)?
    };

    if won {
        println!("You won! (seed {})", rng.seed());
    }
    Ok(())
}

/// Event loop. Returns whether the game was won.
fn run(screen: &mut Screen, table: &mut Tabletop, config: &TableConfig) -> Result<bool> {
    screen.draw(table, config)?;

    loop {
        if table.is_won() {
            info!("game won");
            return Ok(true);
        }

        match event::read().context("failed to read terminal event")? {
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) => {
                let ctrl = modifiers.contains(KeyModifiers::CONTROL);
                match code {
                    KeyCode::Esc | KeyCode::Enter => return Ok(false),
                    KeyCode::Char('c') if ctrl => return Ok(false),
                    KeyCode::Char('l') if ctrl => screen.draw(table, config)?,
                    KeyCode::Char(key) => {
                        table.select_key(key, &config.keymap);
                        screen.draw(table, config)?;
                    }
                    _ => {}
                }
            }
            Event::Resize(..) => screen.draw(table, config)?,
            _ => {}
        }
    }
}

/// Raw-mode alternate screen, restored on drop.
struct Screen {
    out: Stdout,
}

impl Screen {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        let mut out = io::stdout();
        execute!(out, EnterAlternateScreen, Hide).context("failed to initialize terminal")?;
        Ok(Self { out })
    }

    fn draw(&mut self, table: &Tabletop, config: &TableConfig) -> Result<()> {
        let selected = table.selection().source();
        let keymap = &config.keymap;
        queue!(self.out, Clear(ClearType::All))?;

        // Top row: stock, talon, a gap, then the foundations.
        let mut top_row = vec![(0, PileSelector::Stock), (1, PileSelector::Talon)];
        for i in 0..FOUNDATION_COUNT {
            top_row.push((i as u16 + 3, PileSelector::Foundation(i as u8)));
        }
        for (slot, pile) in top_row {
            self.key_label(slot * SLOT + 1, 1, keymap.key_for(pile), selected == Some(pile))?;
            if let Some(card) = table.top(pile) {
                self.card(slot * SLOT, 3, CardFace::Up(card))?;
            }
        }

        for (i, pile) in table.tableaus().iter().enumerate() {
            let x = i as u16 * SLOT;
            let selector = PileSelector::Tableau(i as u8);
            self.key_label(x + 1, 6, keymap.key_for(selector), selected == Some(selector))?;
            for (row, face) in pile.faces().enumerate() {
                self.card(x, 8 + row as u16, face)?;
            }
        }

        self.out.flush()?;
        Ok(())
    }

    fn key_label(&mut self, x: u16, y: u16, key: char, selected: bool) -> io::Result<()> {
        let attr = if selected { Attribute::Reverse } else { Attribute::NoReverse };
        queue!(
            self.out,
            MoveTo(x, y),
            SetAttribute(attr),
            Print(key),
            SetAttribute(Attribute::Reset)
        )
    }

    fn card(&mut self, x: u16, y: u16, face: CardFace) -> io::Result<()> {
        let (text, color) = match face.card() {
            Some(card) => {
                let color = match card.color() {
                    Color::Red => TermColor::Red,
                    Color::Black => TermColor::Reset,
                };
                (format!("{:<2}{}", card.rank(), card.suit()), color)
            }
            None => (format!(" {face} "), TermColor::Reset),
        };
        queue!(self.out, MoveTo(x, y), SetForegroundColor(color), Print(text), ResetColor)
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = execute!(self.out, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
