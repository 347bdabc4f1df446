use std::io::stdout;
use std::time::{Duration, Instant};

use chrono::Local;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::Paragraph,
};
use vitrine_art::{BANNER_HEIGHT, build_banner};
use vitrine_background::ParticleLayer;
use vitrine_config::{Config, FestiveMode};
use vitrine_core::{AccentTheme, CardLink, Region};
use vitrine_tilt::TiltSurface;

mod cards;
mod holiday;

/// Banner greeting shown during the festive window.
const BANNER_TEXT: &str = "HAPPY HOLIDAYS!";

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load()?;
    let terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture)?;
    let result = App::new(&config).run(terminal);
    let _ = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the landing page.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Current accent theme.
    theme: AccentTheme,
    /// Link cards presented on the page.
    cards: Vec<CardLink>,
    /// One tilt surface per card; each owns its transform exclusively.
    surfaces: Vec<TiltSurface>,
    /// Card bounds from the last layout pass, for pointer hit-testing.
    card_areas: Vec<Rect>,
    /// Whether the festive embellishments are active.
    festive: bool,
    /// Ambient particle layer, populated once while festive.
    particles: Option<ParticleLayer>,
    /// Wall-clock reference for the declarative drift animation.
    started: Instant,
    /// One-line status message (open results, errors).
    status: Option<String>,
}

impl App {
    /// Construct the application from loaded configuration.
    pub fn new(config: &Config) -> Self {
        let festive = match config.festive {
            FestiveMode::On => true,
            FestiveMode::Off => false,
            FestiveMode::Auto => holiday::is_holiday_season(Local::now().date_naive()),
        };

        let cards = config.card_links();
        let surfaces = vec![TiltSurface::new(); cards.len()];

        Self {
            running: false,
            theme: config.accent_theme(),
            cards,
            surfaces,
            card_areas: Vec::new(),
            festive,
            particles: festive.then(|| ParticleLayer::new(config.particle_count)),
            started: Instant::now(),
            status: None,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let elapsed_ms = self.started.elapsed().as_millis() as u64;
        let area = frame.area();

        if let Some(particles) = &self.particles {
            particles.render(frame, area, elapsed_ms, self.theme);
        }

        let banner_height = if self.festive {
            BANNER_HEIGHT as u16 + 1
        } else {
            0
        };

        let chunks = Layout::vertical([
            Constraint::Fill(1),                  // Top padding
            Constraint::Length(banner_height),    // Holiday banner
            Constraint::Length(1),                // Heading
            Constraint::Length(1),                // Spacing
            Constraint::Length(cards::CARD_HEIGHT),
            Constraint::Fill(1),                  // Bottom padding
            Constraint::Length(1),                // Status / transform readout
            Constraint::Length(1),                // Help text
        ])
        .split(area);

        if self.festive {
            let banner: Vec<Line> = build_banner(BANNER_TEXT)
                .into_iter()
                .map(|s| Line::from(s).style(Style::new().fg(self.theme.accent())))
                .collect();
            frame.render_widget(
                Paragraph::new(banner).alignment(Alignment::Center),
                chunks[1],
            );
        }

        let heading = Paragraph::new("Pick a tool")
            .style(Style::new().fg(Color::White).bold())
            .alignment(Alignment::Center);
        frame.render_widget(heading, chunks[2]);

        self.render_cards(frame, chunks[4]);
        self.render_status(frame, chunks[6]);

        let accent = self.theme.accent();
        let help = Line::from(vec![
            "q".bold().fg(accent),
            " quit  ".dark_gray(),
            "t".bold().fg(accent),
            " cycle theme  ".dark_gray(),
            "1-9".bold().fg(accent),
            " open  ".dark_gray(),
            "hover a card to tilt it".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, chunks[7]);
    }

    /// Lay out and render the card row, recording card bounds for
    /// pointer hit-testing.
    fn render_cards(&mut self, frame: &mut Frame, row: Rect) {
        let mut constraints = vec![Constraint::Fill(1)];
        for i in 0..self.cards.len() {
            if i > 0 {
                constraints.push(Constraint::Length(4));
            }
            constraints.push(Constraint::Length(cards::CARD_WIDTH));
        }
        constraints.push(Constraint::Fill(1));
        let slots = Layout::horizontal(constraints).split(row);

        self.card_areas.clear();
        for (i, (link, surface)) in self.cards.iter().zip(&self.surfaces).enumerate() {
            // Slot 0 and the gaps between cards are padding.
            let slot = slots[1 + i * 2];
            self.card_areas.push(slot);
            cards::render_card(
                frame,
                slot,
                link,
                surface.transform(),
                self.theme,
                surface.is_tilted(),
                i,
            );
        }
    }

    /// Render the status line: explicit messages win, otherwise the
    /// transform published by the hovered card.
    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let text = if let Some(status) = &self.status {
            status.clone()
        } else if let Some(surface) = self.surfaces.iter().find(|s| s.is_tilted()) {
            format!("transform: {}", surface.transform())
        } else {
            String::new()
        };
        let status = Paragraph::new(text)
            .style(Style::new().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(status, area);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with timeout so the particle drift stays smooth.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(Duration::from_millis(33))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('t')) => self.theme = self.theme.next(),
            (_, KeyCode::Char(c @ '1'..='9')) => {
                let index = c as usize - '1' as usize;
                if index < self.cards.len() {
                    self.open_card(index);
                }
            }
            _ => {}
        }
    }

    /// Routes pointer events to the tilt surfaces. Each surface receives
    /// its region measured fresh from the last layout pass.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        let (x, y) = (mouse.column as f32, mouse.row as f32);
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                for (surface, area) in self.surfaces.iter_mut().zip(&self.card_areas) {
                    let region = Region::from(*area);
                    if region.contains(x, y) {
                        surface.on_pointer_move(x, y, Some(region));
                    } else {
                        surface.on_pointer_leave();
                    }
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let hit = self
                    .card_areas
                    .iter()
                    .position(|area| Region::from(*area).contains(x, y));
                if let Some(index) = hit {
                    self.open_card(index);
                }
            }
            _ => {}
        }
    }

    /// Open a card's URL in the default browser.
    fn open_card(&mut self, index: usize) {
        let link = &self.cards[index];
        self.status = Some(match open::that(&link.url) {
            Ok(()) => format!("opened {}", link.url),
            Err(err) => format!("could not open {}: {err}", link.url),
        });
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
