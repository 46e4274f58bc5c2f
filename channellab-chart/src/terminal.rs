//! Full-screen terminal renderer.
//!
//! Draws the chart on the alternate screen and blocks until the user presses
//! `q`, `Esc` or `Enter`. The terminal is restored on every exit path,
//! including panics.

use std::io::{self, stdout};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::debug;

use crate::curve::CumulativeCurve;
use crate::theme::Theme;
use crate::widget::CumulativeReturnChart;
use crate::{ChartError, ChartSink};

/// Renders the curve to the controlling terminal.
#[derive(Debug, Clone, Default)]
pub struct TerminalChart {
    theme: Theme,
}

impl TerminalChart {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    fn run(&self, curve: &CumulativeCurve) -> Result<(), ChartError> {
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        loop {
            terminal.draw(|frame| {
                frame.render_widget(CumulativeReturnChart::new(curve, &self.theme), frame.area());
            })?;

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press
                        && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter)
                    {
                        return Ok(());
                    }
                }
            }
        }
    }
}

impl ChartSink for TerminalChart {
    fn show(&mut self, curve: &CumulativeCurve) -> Result<(), ChartError> {
        debug!(points = curve.len(), window = curve.window(), "opening terminal chart");

        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = restore();
            default_hook(info);
        }));

        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen)?;
        let result = self.run(curve);
        restore()?;
        result
    }
}

fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)
}
