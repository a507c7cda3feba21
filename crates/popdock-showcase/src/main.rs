#![forbid(unsafe_code)]

//! Showcase: a table of lattice-scheme attack-cost estimates where every
//! cost cell opens a floating, draggable dialog holding the snippet that
//! reproduces the number.
//!
//! Run interactively in a terminal, or with `--snapshot` to print a single
//! rendered frame and exit (useful without a tty). Set `POPDOCK_LOG` to a
//! tracing filter (e.g. `popdock_widgets=debug`) to log dialog lifecycle
//! events to stderr.

mod dataset;
mod snippet;
mod table;

use std::io::{self, Write};
use std::time::Duration;

use crossterm::style::{
    Attribute, Color as CtColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
    SetForegroundColor,
};
use crossterm::{cursor, event as cte, execute, queue, terminal};

use popdock_core::{Event, KeyCode, MouseButton, MouseEventKind, Rect};
use popdock_widgets::dialog::DialogOptions;
use popdock_widgets::manager::{DialogEvent, DialogManager};
use popdock_widgets::{Style, StyleFlags, Surface, Widget};

use dataset::{ESTIMATES, MODELS};
use table::{CellRef, EstimatesTable, cost_cell_at, cost_cell_origin, put_text};

/// Snippet dialog size, the original page's 620x350 px scaled to cells.
const DIALOG_W: u16 = 62;
const DIALOG_H: u16 = 16;

struct App {
    manager: DialogManager,
    selected: CellRef,
    width: u16,
    height: u16,
    quit: bool,
}

impl App {
    fn new(width: u16, height: u16) -> Self {
        Self {
            manager: DialogManager::new(Rect::from_size(width, height)),
            selected: CellRef { row: 0, model: 0 },
            width,
            height,
            quit: false,
        }
    }

    fn table_area(&self) -> Rect {
        Rect::new(
            1,
            1,
            self.width.saturating_sub(2),
            self.height.saturating_sub(3),
        )
    }

    fn update(&mut self, event: Event) {
        // Dialogs get first claim on input; only what they ignore is ours.
        if self.manager.handle_event(&event) == DialogEvent::Ignored {
            self.handle_own(&event);
        }
    }

    fn handle_own(&mut self, event: &Event) {
        match event {
            Event::Key(key) => match key.code {
                KeyCode::Char('q') => self.quit = true,
                KeyCode::Escape => match self.manager.focused() {
                    Some(id) => {
                        self.manager.close(id);
                    }
                    None => self.quit = true,
                },
                KeyCode::Up => self.selected.row = self.selected.row.saturating_sub(1),
                KeyCode::Down => {
                    self.selected.row = (self.selected.row + 1).min(ESTIMATES.len() - 1);
                }
                KeyCode::Left => self.selected.model = self.selected.model.saturating_sub(1),
                KeyCode::Right => {
                    self.selected.model = (self.selected.model + 1).min(MODELS.len() - 1);
                }
                KeyCode::Enter => {
                    let (x, y) = cost_cell_origin(self.table_area(), self.selected);
                    self.open_snippet(self.selected, x, y);
                }
                _ => {}
            },
            Event::Mouse(mouse) => {
                if let MouseEventKind::Down(MouseButton::Left) = mouse.kind
                    && let Some(cell) =
                        cost_cell_at(self.table_area(), mouse.x, mouse.y, ESTIMATES.len())
                {
                    self.selected = cell;
                    self.open_snippet(cell, mouse.x, mouse.y);
                }
            }
            Event::Resize { width, height } => {
                self.width = *width;
                self.height = *height;
            }
        }
    }

    /// Open the reproduction snippet for a cost cell, placed near `(x, y)`
    /// and nudged up-left the way the original page did.
    fn open_snippet(&mut self, cell: CellRef, x: u16, y: u16) {
        let estimate = &ESTIMATES[cell.row];
        let Some(cost) = estimate.cost_for(MODELS[cell.model].name) else {
            return;
        };

        let left = x
            .saturating_sub(10)
            .min(self.width.saturating_sub(DIALOG_W));
        let top = y.saturating_sub(1).min(self.height.saturating_sub(DIALOG_H));

        let text = snippet::reproduction_snippet(estimate, cost);
        let title = snippet::snippet_title(estimate, cost);
        let outcome = self.manager.open_with(
            text.clone(),
            "0",
            DialogOptions::default()
                .width(DIALOG_W)
                .height(DIALOG_H)
                .top(top)
                .left(left)
                .title(title)
                .multi(true),
            |region| region.set_text(text),
        );
        if let Some(id) = outcome.id() {
            tracing::info!(id = id.0, scheme = estimate.scheme.name, "snippet dialog opened");
        }
    }

    fn render(&self, surface: &mut Surface) {
        surface.clear();
        EstimatesTable::new(ESTIMATES)
            .selected(Some(self.selected))
            .render(self.table_area(), surface);

        let hint = "arrows: select   enter: open snippet   drag the title bar   ✕: close   q: quit";
        put_text(
            surface,
            1,
            self.height.saturating_sub(1),
            hint,
            Style::new().dim(),
            self.width,
        );

        self.manager.render(surface);
    }
}

fn main() -> io::Result<()> {
    init_tracing();

    if std::env::args().any(|arg| arg == "--snapshot") {
        return snapshot();
    }
    run()
}

fn init_tracing() {
    if std::env::var_os("POPDOCK_LOG").is_some() {
        use tracing_subscriber::EnvFilter;
        let filter =
            EnvFilter::try_from_env("POPDOCK_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
}

/// Render one frame with a dialog open and print it; no terminal needed.
fn snapshot() -> io::Result<()> {
    let (width, height) = (120, 30);
    let mut app = App::new(width, height);
    let (x, y) = cost_cell_origin(app.table_area(), app.selected);
    app.open_snippet(app.selected, x, y);

    let mut surface = Surface::new(width, height);
    app.render(&mut surface);

    let mut stdout = io::stdout();
    stdout.write_all(surface.snapshot().as_bytes())?;
    stdout.write_all(b"\n")?;
    Ok(())
}

fn run() -> io::Result<()> {
    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        cte::EnableMouseCapture,
        cursor::Hide
    )?;

    let result = event_loop(&mut stdout);

    execute!(
        stdout,
        cursor::Show,
        cte::DisableMouseCapture,
        terminal::LeaveAlternateScreen
    )?;
    terminal::disable_raw_mode()?;
    result
}

fn event_loop(stdout: &mut io::Stdout) -> io::Result<()> {
    let (width, height) = terminal::size()?;
    let mut app = App::new(width, height);
    let mut surface = Surface::new(width, height);

    app.render(&mut surface);
    present(stdout, &surface)?;

    while !app.quit {
        if !cte::poll(Duration::from_millis(250))? {
            continue;
        }
        let Some(event) = Event::from_crossterm(cte::read()?) else {
            continue;
        };
        if let Event::Resize { width, height } = event {
            surface.resize(width, height);
        }
        app.update(event);
        app.render(&mut surface);
        present(stdout, &surface)?;
    }
    Ok(())
}

fn present(out: &mut impl Write, surface: &Surface) -> io::Result<()> {
    queue!(out, cursor::MoveTo(0, 0))?;
    for y in 0..surface.height() {
        queue!(out, cursor::MoveTo(0, y))?;
        for x in 0..surface.width() {
            let Some(cell) = surface.get(x, y) else {
                continue;
            };
            if cell.style.is_empty() {
                queue!(out, Print(cell.ch))?;
                continue;
            }
            if let Some(fg) = cell.style.fg {
                queue!(
                    out,
                    SetForegroundColor(CtColor::Rgb {
                        r: fg.r,
                        g: fg.g,
                        b: fg.b
                    })
                )?;
            }
            if let Some(bg) = cell.style.bg {
                queue!(
                    out,
                    SetBackgroundColor(CtColor::Rgb {
                        r: bg.r,
                        g: bg.g,
                        b: bg.b
                    })
                )?;
            }
            if cell.style.attrs.contains(StyleFlags::BOLD) {
                queue!(out, SetAttribute(Attribute::Bold))?;
            }
            if cell.style.attrs.contains(StyleFlags::DIM) {
                queue!(out, SetAttribute(Attribute::Dim))?;
            }
            if cell.style.attrs.contains(StyleFlags::REVERSE) {
                queue!(out, SetAttribute(Attribute::Reverse))?;
            }
            if cell.style.attrs.contains(StyleFlags::UNDERLINE) {
                queue!(out, SetAttribute(Attribute::Underlined))?;
            }
            queue!(out, Print(cell.ch), SetAttribute(Attribute::Reset), ResetColor)?;
        }
    }
    out.flush()
}
