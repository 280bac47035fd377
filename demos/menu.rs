//! # Menu Example
//!
//! Two focus zones side by side in a raw-mode terminal:
//! - A vertical menu built from [`Behavior::Menu`] (wraps, starts at the top
//!   every time it gains focus)
//! - A horizontal toolbar built from plain [`FocusZoneOptions`] (clamps at
//!   the ends, remembers its position)
//!
//! Tab switches zones. Arrow keys, `hjkl`, Home/End and `g`/`G` navigate.
//! `q` or Esc quits. Focus moves are traced to `roam-demo.log`; set
//! `RUST_LOG` to change the filter.
//!
//! Run with: `cargo run --example menu`

use roam::crossterm::cursor::{Hide, MoveTo, Show};
use roam::crossterm::event::{self, Event, KeyCode, KeyEventKind};
use roam::crossterm::style::{Attribute, Print, SetAttribute};
use roam::crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use roam::crossterm::{execute, queue};
use roam::log_to_file;
use roam::widgets::{Behavior, FocusZone, FocusZoneOptions, KeyOutcome, Orientation};
use std::cell::Cell;
use std::io::{self, Write};
use std::rc::Rc;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const MENU: [&str; 5] = ["New file", "Open…", "Save", "Save as…", "Quit"];
const TOOLBAR: [&str; 4] = ["Bold", "Italic", "Underline", "Code"];

#[derive(Clone, Copy, PartialEq, Eq)]
enum Active {
    Menu,
    Toolbar,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log = log_to_file("roam-demo.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("menu=info,roam_core=trace,roam_widgets=debug")),
        )
        .with_writer(Mutex::new(log))
        .with_ansi(false)
        .init();

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let result = run(&mut stdout);

    execute!(stdout, Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(out: &mut impl Write) -> Result<(), Box<dyn std::error::Error>> {
    // Stand-ins for real widget focus: the mover records which entry to
    // highlight.
    let menu_highlight = Rc::new(Cell::new(0usize));
    let toolbar_highlight = Rc::new(Cell::new(0usize));

    let target = Rc::clone(&menu_highlight);
    let mut menu = Behavior::Menu.focus_zone(|| MENU.len(), move |i: usize| target.set(i));

    let target = Rc::clone(&toolbar_highlight);
    let mut toolbar = FocusZone::new(
        || TOOLBAR.len(),
        move |i: usize| target.set(i),
        FocusZoneOptions {
            orientation: Orientation::Horizontal,
            ..Default::default()
        },
    );

    let mut active = Active::Menu;
    menu.receive_focus();

    loop {
        draw(out, active, menu_highlight.get(), toolbar_highlight.get())?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind == KeyEventKind::Release {
            continue;
        }

        let outcome = match active {
            Active::Menu => menu.handle_key(&key),
            Active::Toolbar => toolbar.handle_key(&key),
        };
        if outcome == KeyOutcome::Consumed {
            continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
            KeyCode::Tab => {
                active = match active {
                    Active::Menu => {
                        toolbar.receive_focus();
                        Active::Toolbar
                    }
                    Active::Toolbar => {
                        menu.receive_focus();
                        Active::Menu
                    }
                };
                tracing::info!(toolbar = active == Active::Toolbar, "switched zone");
            }
            _ => {}
        }
    }
}

fn draw(
    out: &mut impl Write,
    active: Active,
    menu_index: usize,
    toolbar_index: usize,
) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;

    for (i, (x, label)) in toolbar_positions().zip(TOOLBAR).enumerate() {
        let selected = active == Active::Toolbar && i == toolbar_index;
        item(out, x, 0, label, selected)?;
    }

    for (row, label) in MENU.iter().enumerate() {
        let selected = active == Active::Menu && row == menu_index;
        item(out, 2, row as u16 + 2, label, selected)?;
    }

    queue!(
        out,
        MoveTo(0, MENU.len() as u16 + 3),
        Print("Tab: switch zone  arrows/hjkl: move  Home/End: jump  q: quit")
    )?;
    out.flush()
}

fn item(out: &mut impl Write, x: u16, y: u16, label: &str, selected: bool) -> io::Result<()> {
    queue!(out, MoveTo(x, y))?;
    if selected {
        queue!(
            out,
            SetAttribute(Attribute::Reverse),
            Print(label),
            SetAttribute(Attribute::Reset)
        )
    } else {
        queue!(out, Print(label))
    }
}

fn toolbar_positions() -> impl Iterator<Item = u16> {
    TOOLBAR.iter().scan(0u16, |x, label| {
        let start = *x;
        *x += label.chars().count() as u16 + 2;
        Some(start)
    })
}
