//! Side-by-side sorting race
//!
//! Three panels, one per algorithm, driven by the [`Orchestrator`]. The
//! event loop ticks the orchestrator every frame, samples each lane's scene
//! and draws it. Input validation failures open a blocking notice.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders},
    Frame,
};

use super::app::modals::{render_help_modal, render_notice_modal, render_prompt_modal};
use super::app::status_footer::{render_footer, render_status_line};
use super::app::App;
use super::theme::current_theme;
use super::ui::{build_main_layout, panel_areas};
use super::widgets::SceneChart;
use crate::error::InputError;
use crate::model::{MAX_ARRAY_SIZE, MIN_ARRAY_SIZE};
use crate::orchestrator::{Lane, Orchestrator, TickOutcome};

/// Redraw interval while anything moves.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Idle wait between redraws.
const IDLE_TICK: Duration = Duration::from_millis(250);

/// UI mode for the race application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Help,
    /// Prompt for a new array size
    EditSize,
    /// Prompt for a comma separated array
    EditArray,
    /// Blocking message
    Notice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

/// Everything the race shows, independent of the terminal.
pub struct RaceState {
    orchestrator: Orchestrator,
    mode: Mode,
    input: String,
    notice: Option<String>,
}

impl RaceState {
    pub fn new(orchestrator: Orchestrator) -> Self {
        Self {
            orchestrator,
            mode: Mode::Normal,
            input: String::new(),
            notice: None,
        }
    }

    pub fn orchestrator(&self) -> &Orchestrator {
        &self.orchestrator
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        self.orchestrator.tick(now)
    }

    /// How long the event loop may block before the next frame is due.
    pub fn frame_timeout(&self, now: Instant, idle: Duration) -> Duration {
        if self.orchestrator.is_animating(now) {
            return FRAME_INTERVAL;
        }
        match self.orchestrator.next_wake() {
            Some(wake) => wake.saturating_duration_since(now).min(idle),
            None => idle,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> KeyOutcome {
        if key.kind != KeyEventKind::Press {
            return KeyOutcome::Continue;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return KeyOutcome::Quit;
        }

        match self.mode {
            Mode::Normal => return self.handle_normal_key(key, now),
            Mode::Help => self.mode = Mode::Normal,
            Mode::EditSize | Mode::EditArray => self.handle_edit_key(key, now),
            Mode::Notice => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                    self.notice = None;
                    self.mode = Mode::Normal;
                }
            }
        }
        KeyOutcome::Continue
    }

    fn handle_normal_key(&mut self, key: KeyEvent, now: Instant) -> KeyOutcome {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return KeyOutcome::Quit,
            KeyCode::Char('g') => {
                if let Err(err) = self.orchestrator.generate(now) {
                    self.show_notice(err);
                }
            }
            KeyCode::Enter | KeyCode::Char('r') => {
                self.orchestrator.run(now);
            }
            KeyCode::Char('s') => {
                self.orchestrator.stop();
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.orchestrator.slower();
            }
            KeyCode::Char('-') => {
                self.orchestrator.faster();
            }
            KeyCode::Char('n') => {
                let size = self.orchestrator.config().array.size.to_string();
                self.open_prompt(Mode::EditSize, size);
            }
            KeyCode::Char('a') => {
                let values = self
                    .orchestrator
                    .values()
                    .iter()
                    .map(u32::to_string)
                    .collect::<Vec<_>>()
                    .join(",");
                self.open_prompt(Mode::EditArray, values);
            }
            KeyCode::Char('?') => self.mode = Mode::Help,
            _ => {}
        }
        KeyOutcome::Continue
    }

    fn handle_edit_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Esc => {
                self.input.clear();
                self.mode = Mode::Normal;
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => self.input.push(c),
            KeyCode::Enter => {
                let input = std::mem::take(&mut self.input);
                let result = match self.mode {
                    Mode::EditSize => self.orchestrator.set_array_size(&input, now).map(|_| ()),
                    _ => self.orchestrator.set_manual_array(&input, now),
                };
                self.mode = Mode::Normal;
                if let Err(err) = result {
                    self.show_notice(err);
                }
            }
            _ => {}
        }
    }

    fn open_prompt(&mut self, mode: Mode, initial: String) {
        if self.orchestrator.is_running() {
            self.show_notice(InputError::SortInProgress);
            return;
        }
        self.input = initial;
        self.mode = mode;
    }

    fn show_notice(&mut self, err: InputError) {
        self.notice = Some(err.to_string());
        self.mode = Mode::Notice;
    }

    pub fn render(&self, frame: &mut Frame, now: Instant) {
        let area = frame.area();
        let [panels, status, footer] = build_main_layout(area);

        let lanes = self.orchestrator.lanes();
        for (lane, panel) in lanes.iter().zip(panel_areas(panels, lanes.len())) {
            render_lane(frame, panel, lane, now);
        }

        render_status_line(frame, status, &self.status_text());
        render_footer(frame, footer, footer_keys(self.mode));

        match self.mode {
            Mode::Help => render_help_modal(frame, area),
            Mode::EditSize => render_prompt_modal(
                frame,
                area,
                "Array size",
                &format!("Number of items, {} to {}", MIN_ARRAY_SIZE, MAX_ARRAY_SIZE),
                &self.input,
            ),
            Mode::EditArray => {
                let bounds = self.orchestrator.config().bounds();
                render_prompt_modal(
                    frame,
                    area,
                    "Array",
                    &format!("Comma separated values, {} to {}", bounds.min, bounds.max),
                    &self.input,
                );
            }
            Mode::Notice => {
                if let Some(message) = &self.notice {
                    render_notice_modal(frame, area, message);
                }
            }
            Mode::Normal => {}
        }
    }

    fn status_text(&self) -> String {
        let timings = self.orchestrator.timings();
        let controls = self.orchestrator.controls();
        let run_state = if !self.orchestrator.is_running() {
            "ready"
        } else if controls.stop_enabled {
            "sorting"
        } else {
            "stopping"
        };
        format!(
            "delay {} ms (pulse {} ms) | size {} | {}",
            timings.settle.as_millis(),
            timings.pulse.as_millis(),
            self.orchestrator.values().len(),
            run_state
        )
    }
}

fn render_lane(frame: &mut Frame, area: Rect, lane: &Lane, now: Instant) {
    let theme = current_theme();
    let state = lane.controller.state();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.lane_border_style(state))
        .title(format!(" {} ({}) ", lane.algorithm().title(), state));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let frames = lane.renderer.scene().sample(now);
    let chart = SceneChart::new(&frames, lane.renderer.layout()).label_style(theme.text_style());
    frame.render_widget(chart, inner);
}

fn footer_keys(mode: Mode) -> &'static [(&'static str, &'static str)] {
    match mode {
        Mode::Normal => &[
            ("g", "generate"),
            ("Enter", "run"),
            ("s", "stop"),
            ("+/-", "delay"),
            ("n", "size"),
            ("a", "array"),
            ("?", "help"),
            ("q", "quit"),
        ],
        Mode::Help => &[("any key", "close")],
        Mode::EditSize | Mode::EditArray => &[("Enter", "apply"), ("Esc", "cancel")],
        Mode::Notice => &[("Enter/Esc", "dismiss")],
    }
}

/// The race bound to a real terminal.
pub struct RaceApp {
    app: App,
    state: RaceState,
}

impl RaceApp {
    pub fn new(orchestrator: Orchestrator) -> Result<Self> {
        Ok(Self {
            app: App::new(IDLE_TICK)?,
            state: RaceState::new(orchestrator),
        })
    }

    /// Start all lanes right away, as if Enter had been pressed.
    pub fn autostart(&mut self) {
        self.state.orchestrator.run(Instant::now());
    }

    /// Run the event loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let now = Instant::now();
            self.state.tick(now);

            let state = &self.state;
            self.app.draw(|frame| state.render(frame, now))?;

            let timeout = self.state.frame_timeout(now, self.app.tick_rate());
            // Resize and other events fall through to the next redraw
            if let Some(Event::Key(key)) = self.app.poll_event(timeout)? {
                if self.state.handle_key(key, Instant::now()) == KeyOutcome::Quit {
                    return Ok(());
                }
            }
        }
    }
}
