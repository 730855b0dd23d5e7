//! Application loop.
//!
//! Wires the engine, the window shell, the tray and the completion chime
//! together on a single task:
//!
//! ```text
//! stdin lines ─┐
//! tick ────────┤
//! engine events┼──▶ App ──▶ TerminalWindow / tray / chime
//! tray events ─┤
//! Ctrl-C ──────┘
//! ```

use std::io::Write;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::cli::{InputCommand, TerminalWindow, HELP_TEXT};
use crate::engine::{TimerEngine, TimerEvent};
use crate::menubar::{TrayEvent, TrayIconManager, TrayUpdate};
use crate::shell::{CloseDecision, ShellOutcome, WindowShell};
use crate::sound::{resolve_sound, ring_completion, try_create_player, SoundPlayer, SoundSource};
use crate::types::{AppConfig, TimerState};

/// How often native tray events are drained.
const TRAY_POLL_PERIOD: Duration = Duration::from_millis(100);

/// The running application.
pub struct App<W: Write> {
    engine: TimerEngine,
    events: mpsc::UnboundedReceiver<TimerEvent>,
    shell: WindowShell<TerminalWindow<W>>,
    tray: Option<TrayIconManager>,
    player: Option<Box<dyn SoundPlayer>>,
    sound: Option<SoundSource>,
}

impl App<std::io::Stdout> {
    /// Builds the application on stdout from a validated configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        config.validate().context("設定が不正です")?;

        let sound = resolve_sound(&config.sound);
        let player = if sound.is_some() {
            try_create_player().map(|p| Box::new(p) as Box<dyn SoundPlayer>)
        } else {
            None
        };

        let tray = if config.tray_enabled {
            let mut tray = TrayIconManager::new(TimerState::default());
            match tray.initialize() {
                Ok(()) => Some(tray),
                Err(e) => {
                    warn!(error = %e, "トレイなしで起動します");
                    None
                }
            }
        } else {
            None
        };

        Ok(Self::new(TerminalWindow::stdout(), player, sound, tray))
    }
}

impl<W: Write> App<W> {
    /// Creates the application from its parts.
    pub fn new(
        window: TerminalWindow<W>,
        player: Option<Box<dyn SoundPlayer>>,
        sound: Option<SoundSource>,
        tray: Option<TrayIconManager>,
    ) -> Self {
        let (event_tx, events) = mpsc::unbounded_channel();
        Self {
            engine: TimerEngine::new(event_tx),
            events,
            shell: WindowShell::new(window),
            tray,
            player,
            sound,
        }
    }

    /// Runs until quit is requested. Returns the final timer state.
    ///
    /// The schedule and the tray are torn down whether the loop ends
    /// normally or with an error.
    pub async fn run<R>(&mut self, input: R) -> Result<TimerState>
    where
        R: AsyncBufRead + Unpin,
    {
        let result = self.run_loop(input).await;
        self.teardown();
        result.map(|()| self.engine.state())
    }

    async fn run_loop<R>(&mut self, input: R) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        let mut input_open = true;

        let mut tray_poll = interval(TRAY_POLL_PERIOD);
        tray_poll.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let has_tray = self.tray.is_some();

        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        self.render()?;
        info!("タイマーを起動しました");

        loop {
            tokio::select! {
                line = lines.next_line(), if input_open => {
                    match line {
                        Ok(Some(line)) => {
                            if self.handle_line(&line)?.is_exit() {
                                break;
                            }
                        }
                        Ok(None) => {
                            debug!("input closed; waiting for tray quit or Ctrl-C");
                            input_open = false;
                        }
                        Err(e) => {
                            warn!(error = %e, "入力を読み取れないため入力を無効にします");
                            input_open = false;
                        }
                    }
                }
                _ = self.engine.next_tick() => {
                    self.engine.on_tick()?;
                }
                Some(event) = self.events.recv() => {
                    self.handle_timer_event(event)?;
                }
                _ = tray_poll.tick(), if has_tray => {
                    if self.poll_tray()?.is_exit() {
                        break;
                    }
                }
                result = &mut ctrl_c => {
                    result.context("Failed to listen for Ctrl-C")?;
                    info!("Ctrl-Cを受信しました");
                    self.shell.request_quit();
                    break;
                }
            }
        }

        Ok(())
    }

    /// Handles one line of input.
    pub fn handle_line(&mut self, line: &str) -> Result<ShellOutcome> {
        match InputCommand::parse(line) {
            Some(command) => self.handle_input(command),
            None => {
                self.shell
                    .window_mut()
                    .print_line(&format!("不明なコマンドです: {} (help で一覧)", line.trim()))
                    .context("Failed to write to terminal")?;
                Ok(ShellOutcome::Continue)
            }
        }
    }

    /// Applies a parsed input command.
    pub fn handle_input(&mut self, command: InputCommand) -> Result<ShellOutcome> {
        match command {
            InputCommand::Engine(command) => {
                // Rendering follows from the emitted event
                self.engine.apply(command)?;
            }
            InputCommand::Minimize => {
                self.shell.minimize_window();
                self.render()?;
            }
            InputCommand::Close => {
                if self.shell.on_close_requested() == CloseDecision::Exit {
                    return Ok(ShellOutcome::Exit);
                }
            }
            InputCommand::Show => {
                self.shell.show_window();
                self.render()?;
            }
            InputCommand::Status => {
                let json = serde_json::to_string(&self.engine.state())
                    .context("Failed to serialize timer state")?;
                self.print_line(&json)?;
            }
            InputCommand::Help => {
                self.print_line(HELP_TEXT)?;
            }
            InputCommand::Quit => {
                self.shell.request_quit();
                return Ok(ShellOutcome::Exit);
            }
        }
        Ok(ShellOutcome::Continue)
    }

    /// Reacts to an engine event.
    pub fn handle_timer_event(&mut self, event: TimerEvent) -> Result<()> {
        debug!(?event, "timer event");

        if let TimerEvent::Completed { mode } = event {
            info!(mode = %mode, "カウントダウンが完了しました");
            self.ring();
        }

        let state = self.engine.state();
        if let Some(tray) = self.tray.as_mut() {
            tray.update(TrayUpdate::State(state));
        }
        self.render()
    }

    /// Applies a tray event to the shell.
    pub fn handle_tray_event(&mut self, event: TrayEvent) -> Result<ShellOutcome> {
        let outcome = self.shell.on_tray_event(event);
        if !outcome.is_exit() {
            self.render()?;
        }
        Ok(outcome)
    }

    /// Returns the current timer state.
    pub fn state(&self) -> TimerState {
        self.engine.state()
    }

    /// Returns the engine.
    pub fn engine(&self) -> &TimerEngine {
        &self.engine
    }

    /// Returns the window shell.
    pub fn shell(&self) -> &WindowShell<TerminalWindow<W>> {
        &self.shell
    }

    /// Returns the tray, if one was created.
    pub fn tray(&self) -> Option<&TrayIconManager> {
        self.tray.as_ref()
    }

    fn poll_tray(&mut self) -> Result<ShellOutcome> {
        let events = match self.tray.as_ref() {
            Some(tray) => tray.poll_events(),
            None => return Ok(ShellOutcome::Continue),
        };

        for event in events {
            if self.handle_tray_event(event)?.is_exit() {
                return Ok(ShellOutcome::Exit);
            }
        }
        Ok(ShellOutcome::Continue)
    }

    fn ring(&self) {
        if let (Some(player), Some(sound)) = (self.player.as_deref(), self.sound.as_ref()) {
            ring_completion(player, sound);
        }
    }

    fn render(&mut self) -> Result<()> {
        let state = self.engine.state();
        self.shell
            .window_mut()
            .render(&state)
            .context("Failed to render timer")
    }

    fn print_line(&mut self, message: &str) -> Result<()> {
        self.shell
            .window_mut()
            .print_line(message)
            .context("Failed to write to terminal")
    }

    fn teardown(&mut self) {
        self.engine.shutdown();
        if let Some(tray) = self.tray.as_mut() {
            tray.update(TrayUpdate::Shutdown);
        }
        info!("タイマーを終了しました");
    }
}

// ============================================================================
// Tests
// ============================================================================
