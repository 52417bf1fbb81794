use std::{io, sync::Arc, time::Duration};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    widgets::TableState,
};
use tokio::{sync::watch, task};

use crate::{
    app::{PriceRefresher, RefreshScheduler, ui},
    models::{PriceBoard, TRACKED_ASSETS},
};

const REDRAW_EVERY: Duration = Duration::from_millis(250);

pub struct App {
    refresher: Arc<PriceRefresher>,
    board: watch::Receiver<PriceBoard>,
    table_state: TableState,
}

impl App {
    pub fn new(refresher: Arc<PriceRefresher>) -> Self {
        let board = refresher.subscribe();
        Self {
            refresher,
            board,
            table_state: TableState::default(),
        }
    }

    /// Runs the board until `q`. Needs the multi-thread tokio runtime: the
    /// terminal loop blocks its thread while refreshes run on the others.
    pub async fn run(&mut self, refresh_period: Duration) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let scheduler = RefreshScheduler::start(self.refresher.clone(), refresh_period);
        let result = task::block_in_place(|| self.run_app(&mut terminal));
        scheduler.stop();

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            let board = self.board.borrow_and_update().clone();
            terminal.draw(|frame| ui::render(frame, &board, &mut self.table_state))?;

            if !event::poll(REDRAW_EVERY)? {
                continue;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::F(5) | KeyCode::Char('r') => self.spawn_refresh(),
                    KeyCode::Esc => self.table_state.select(None),
                    KeyCode::Down => {
                        let i = match self.table_state.selected() {
                            Some(i) if i >= TRACKED_ASSETS.len() - 1 => 0,
                            Some(i) => i + 1,
                            None => 0,
                        };
                        self.table_state.select(Some(i));
                    }
                    KeyCode::Up => {
                        let i = match self.table_state.selected() {
                            Some(0) | None => TRACKED_ASSETS.len() - 1,
                            Some(i) => i - 1,
                        };
                        self.table_state.select(Some(i));
                    }
                    _ => {}
                }
            }
        }
    }

    pub(crate) fn spawn_refresh(&self) {
        log::info!("Manual refresh requested");
        let refresher = self.refresher.clone();
        tokio::spawn(async move { refresher.refresh().await });
    }
}
