//! Application core — event loop, screen management, action dispatch.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Tabs},
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use starmart_core::{Command, DepotHandle, StorefrontStore};

use crate::action::{Action, ConfirmAction, Notification};
use crate::component::Component;
use crate::event::{Event, EventReader};
use crate::screen::ScreenId;
use crate::screens::create_screens;
use crate::theme;
use crate::tui::Tui;

/// Top-level application state and event loop.
pub struct App {
    /// Current active screen.
    active_screen: ScreenId,
    /// Previous screen for GoBack.
    previous_screen: Option<ScreenId>,
    /// All screen components, keyed by ScreenId.
    screens: HashMap<ScreenId, Box<dyn Component>>,
    /// Whether the app should keep running.
    running: bool,
    /// Help overlay visibility.
    help_visible: bool,
    /// Search overlay visibility.
    search_active: bool,
    /// Current search query.
    search_query: String,
    /// Action sender — components can dispatch actions through this.
    action_tx: mpsc::UnboundedSender<Action>,
    /// Action receiver — main loop drains this.
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// Shared storefront store (the depot writes, we read).
    store: Arc<StorefrontStore>,
    /// Command submission handle into the depot.
    depot: DepotHandle,
    /// Cancellation token for the data bridge task.
    data_cancel: CancellationToken,
    /// Pending confirmation dialog (blocks other input while active).
    pending_confirm: Option<ConfirmAction>,
    /// Active notification toast with display timestamp.
    notification: Option<(Notification, Instant)>,
}

impl App {
    pub fn new(store: Arc<StorefrontStore>, depot: DepotHandle) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        let screens: HashMap<ScreenId, Box<dyn Component>> =
            create_screens().into_iter().collect();

        Self {
            active_screen: ScreenId::Vending,
            previous_screen: None,
            screens,
            running: true,
            help_visible: false,
            search_active: false,
            search_query: String::new(),
            action_tx,
            action_rx,
            store,
            depot,
            data_cancel: CancellationToken::new(),
            pending_confirm: None,
            notification: None,
        }
    }

    /// Initialize all screen components with the action sender.
    fn init_screens(&mut self) -> Result<()> {
        for screen in self.screens.values_mut() {
            screen.init(self.action_tx.clone())?;
        }
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            screen.set_focused(true);
        }
        Ok(())
    }

    /// Run the main event loop. This is the heart of the TUI.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;
        self.init_screens()?;

        // Spawn the data bridge forwarding store snapshots into actions
        {
            let store = Arc::clone(&self.store);
            let tx = self.action_tx.clone();
            let cancel = self.data_cancel.clone();
            tokio::spawn(async move {
                crate::data_bridge::spawn_data_bridge(store, tx, cancel).await;
            });
        }

        let mut events = EventReader::new(
            Duration::from_millis(250), // 4 Hz tick
            Duration::from_millis(33),  // ~30 FPS render
        );

        info!("TUI event loop started");

        while self.running {
            // 1. Wait for the next event
            let Some(event) = events.next().await else {
                break;
            };

            // 2. Map event → action(s)
            match event {
                Event::Key(key) => {
                    if let Some(action) = self.handle_key_event(key)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Resize(w, h) => {
                    self.action_tx.send(Action::Resize(w, h))?;
                }
                Event::Tick => {
                    self.action_tx.send(Action::Tick)?;
                }
                Event::Render => {
                    self.action_tx.send(Action::Render)?;
                }
            }

            // 3. Drain and process all queued actions
            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(&action)?;

                if let Action::Render = action {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        self.data_cancel.cancel();
        info!("TUI event loop ended");
        Ok(())
    }

    /// Map a key event to an action. Global keys are handled here;
    /// screen-specific keys are delegated to the active screen component.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Confirmation dialog captures all input
        if self.pending_confirm.is_some() {
            return match key.code {
                KeyCode::Char('y' | 'Y') | KeyCode::Enter => Ok(Some(Action::ConfirmYes)),
                KeyCode::Char('n' | 'N') | KeyCode::Esc => Ok(Some(Action::ConfirmNo)),
                _ => Ok(None),
            };
        }

        // Search overlay captures text input
        if self.search_active {
            return match key.code {
                KeyCode::Esc => {
                    self.search_query.clear();
                    Ok(Some(Action::CloseSearch))
                }
                KeyCode::Enter => Ok(Some(Action::SearchSubmit)),
                KeyCode::Backspace => {
                    self.search_query.pop();
                    Ok(Some(Action::SearchInput(self.search_query.clone())))
                }
                KeyCode::Char(c) => {
                    self.search_query.push(c);
                    Ok(Some(Action::SearchInput(self.search_query.clone())))
                }
                _ => Ok(None),
            };
        }

        if self.help_visible {
            // In help mode, Esc or ? closes help
            return match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Ok(Some(Action::ToggleHelp)),
                _ => Ok(None),
            };
        }

        // Global keybindings
        match (key.modifiers, key.code) {
            // Quit
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(Some(Action::Quit)),
            (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(Some(Action::Quit)),

            // Help
            (KeyModifiers::NONE, KeyCode::Char('?')) => return Ok(Some(Action::ToggleHelp)),

            // Search
            (KeyModifiers::NONE, KeyCode::Char('/')) => return Ok(Some(Action::OpenSearch)),

            // Screen navigation via number keys
            (KeyModifiers::NONE, KeyCode::Char(c @ '1'..='2')) => {
                let n = c as u8 - b'0';
                if let Some(screen) = ScreenId::from_number(n) {
                    return Ok(Some(Action::SwitchScreen(screen)));
                }
            }

            // Tab / Shift+Tab for screen cycling
            (KeyModifiers::NONE, KeyCode::Tab) => {
                return Ok(Some(Action::SwitchScreen(self.active_screen.next())));
            }
            (KeyModifiers::SHIFT, KeyCode::BackTab) => {
                return Ok(Some(Action::SwitchScreen(self.active_screen.prev())));
            }

            // Esc — context-dependent back
            (KeyModifiers::NONE, KeyCode::Esc) => return Ok(Some(Action::GoBack)),

            _ => {}
        }

        // Delegate to active screen component
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            return screen.handle_key_event(key);
        }

        Ok(None)
    }

    /// Process a single action — update app state and propagate to components.
    fn process_action(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Quit => {
                self.running = false;
            }

            Action::Resize(w, h) => {
                debug!(width = *w, height = *h, "terminal resized");
            }

            Action::SwitchScreen(target) => {
                if *target != self.active_screen {
                    debug!("switching screen: {} → {}", self.active_screen, target);
                    // Hiding a screen keeps its caches warm -- only Quit
                    // tears anything down.
                    if let Some(screen) = self.screens.get_mut(&self.active_screen) {
                        screen.set_focused(false);
                    }
                    self.previous_screen = Some(self.active_screen);
                    self.active_screen = *target;
                    if let Some(screen) = self.screens.get_mut(&self.active_screen) {
                        screen.set_focused(true);
                    }
                }
            }

            Action::GoBack => {
                if let Some(prev) = self.previous_screen.take() {
                    self.action_tx.send(Action::SwitchScreen(prev))?;
                }
            }

            Action::ToggleHelp => {
                self.help_visible = !self.help_visible;
            }

            Action::OpenSearch => {
                self.search_active = true;
                self.search_query.clear();
            }

            Action::CloseSearch => {
                self.search_active = false;
                self.search_query.clear();
                // Screens also observe CloseSearch to clear their filter
                self.forward_to_screens(action)?;
            }

            Action::SearchSubmit => {
                self.search_active = false;
            }

            Action::Render => {}

            Action::Tick => {
                // Auto-dismiss notifications after 3 seconds
                if let Some((_, created)) = &self.notification {
                    if created.elapsed() > Duration::from_secs(3) {
                        self.notification = None;
                    }
                }
            }

            // Data updates and search input go to ALL screens so they stay in sync
            Action::CatalogUpdated(_)
            | Action::VendingUpdated(_)
            | Action::ShipyardUpdated(_)
            | Action::SearchInput(_)
            | Action::SelectCategory(_) => {
                self.forward_to_screens(action)?;
            }

            // ── Command pipeline ──────────────────────────────────────

            // Every purchase goes through the confirmation dialog
            Action::RequestDispense(slot, kind) => {
                let name = self
                    .store
                    .catalog()
                    .get(kind)
                    .map_or_else(|| kind.to_string(), |item| item.name.clone());
                self.action_tx
                    .send(Action::ShowConfirm(ConfirmAction::Dispense {
                        slot: *slot,
                        kind: kind.clone(),
                        name,
                    }))?;
            }

            Action::RequestPurchaseVessel(kind) => {
                let shipyard = self.store.shipyard();
                if let Some(listing) = shipyard.listings.iter().find(|l| &l.id == kind) {
                    let price_text = if shipyard.free_listings {
                        "free".to_owned()
                    } else {
                        crate::widgets::price_fmt::fmt_price(listing.price)
                    };
                    self.action_tx
                        .send(Action::ShowConfirm(ConfirmAction::PurchaseVessel {
                            kind: kind.clone(),
                            name: listing.name.clone(),
                            price_text,
                        }))?;
                }
            }

            Action::RequestSellShip => {
                if let Some(title) = self.store.shipyard().ship_deed_title.clone() {
                    self.action_tx
                        .send(Action::ShowConfirm(ConfirmAction::SellShip { title }))?;
                } else {
                    self.action_tx
                        .send(Action::Notify(Notification::info("No ship deed on file")))?;
                }
            }

            // Confirmation dialog management
            Action::ShowConfirm(confirm) => {
                self.pending_confirm = Some(confirm.clone());
            }

            Action::ConfirmYes => {
                if let Some(confirm) = self.pending_confirm.take() {
                    self.execute_confirm(confirm);
                }
            }

            Action::ConfirmNo => {
                self.pending_confirm = None;
            }

            // Notifications
            Action::Notify(notif) => {
                self.notification = Some((notif.clone(), Instant::now()));
            }

            Action::DismissNotification => {
                self.notification = None;
            }
        }
        Ok(())
    }

    /// Forward an action to every screen, dispatching any follow-ups.
    fn forward_to_screens(&mut self, action: &Action) -> Result<()> {
        for screen in self.screens.values_mut() {
            if let Some(follow_up) = screen.update(action)? {
                self.action_tx.send(follow_up)?;
            }
        }
        Ok(())
    }

    /// Submit a command to the depot; the result comes back as a toast.
    fn execute_command(&self, cmd: Command, success_msg: String) {
        let depot = self.depot.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            match depot.execute(cmd).await {
                Ok(_) => {
                    let _ = tx.send(Action::Notify(Notification::success(success_msg)));
                }
                Err(e) => {
                    warn!(error = %e, "command settlement failed");
                    let _ = tx.send(Action::Notify(Notification::error(format!("{e}"))));
                }
            }
        });
    }

    /// Map a confirmed action to its Command and execute it.
    fn execute_confirm(&self, action: ConfirmAction) {
        match action {
            ConfirmAction::Dispense { slot, kind, name } => {
                self.execute_command(
                    Command::Dispense { slot, kind },
                    format!("Dispensed {name}"),
                );
            }
            ConfirmAction::PurchaseVessel { kind, name, .. } => {
                self.execute_command(
                    Command::PurchaseVessel { kind },
                    format!("Purchased {name}"),
                );
            }
            ConfirmAction::SellShip { title } => {
                self.execute_command(Command::SellShip, format!("Sold {title}"));
            }
        }
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        // Layout: [screen content] [tab bar] [status bar]
        let layout = Layout::vertical([
            Constraint::Min(1),    // Screen content
            Constraint::Length(1), // Tab bar
            Constraint::Length(1), // Status bar
        ])
        .split(area);

        if let Some(screen) = self.screens.get(&self.active_screen) {
            screen.render(frame, layout[0]);
        }

        self.render_tab_bar(frame, layout[1]);
        self.render_status_bar(frame, layout[2]);

        // Render overlays on top (order matters: last = topmost)
        if let Some((ref notif, _)) = self.notification {
            self.render_notification(frame, area, notif);
        }

        if let Some(ref confirm) = self.pending_confirm {
            self.render_confirm_dialog(frame, area, confirm);
        }

        if self.help_visible {
            self.render_help_overlay(frame, area);
        }
    }

    /// Render the bottom tab bar showing both storefront screens.
    fn render_tab_bar(&self, frame: &mut Frame, area: Rect) {
        let titles: Vec<Line> = ScreenId::ALL
            .iter()
            .map(|&id| {
                let style = if id == self.active_screen {
                    theme::tab_active()
                } else {
                    theme::tab_inactive()
                };
                Line::from(Span::styled(
                    format!(" {} {} ", id.number(), id.label()),
                    style,
                ))
            })
            .collect();

        let tabs = Tabs::new(titles)
            .divider(Span::styled(" ", theme::key_hint()))
            .select(
                ScreenId::ALL
                    .iter()
                    .position(|&s| s == self.active_screen)
                    .unwrap_or(0),
            );

        frame.render_widget(tabs, area);
    }

    /// Render the bottom status bar with the search box or key hints.
    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        if self.search_active {
            let line = Line::from(vec![
                Span::styled(" / ", Style::default().fg(theme::VIRIDIAN)),
                Span::styled(&self.search_query, Style::default().fg(theme::BRASS)),
                Span::styled("█", Style::default().fg(theme::BRASS)),
                Span::styled("  Esc cancel  Enter submit", theme::key_hint()),
            ]);
            frame.render_widget(Paragraph::new(line), area);
            return;
        }

        let hints = Span::styled(" ? help  / search  Tab switch  q quit", theme::key_hint());
        frame.render_widget(Paragraph::new(Line::from(hints)), area);
    }

    #[allow(clippy::unused_self)]
    fn render_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let width = 44u16.min(area.width.saturating_sub(4));
        let height = 13u16.min(area.height.saturating_sub(2));

        let x = (area.width.saturating_sub(width)) / 2;
        let y = (area.height.saturating_sub(height)) / 2;
        let help_area = Rect::new(area.x + x, area.y + y, width, height);

        frame.render_widget(
            Block::default().style(Style::default().bg(theme::BG_DARK)),
            help_area,
        );

        let block = Block::default()
            .title(" Help ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused());

        let inner = block.inner(help_area);
        frame.render_widget(block, help_area);

        let key = theme::key_hint_key();
        let text = theme::key_hint();
        let lines = vec![
            Line::from(vec![
                Span::styled("  j/k ↑/↓  ", key),
                Span::styled("move selection", text),
            ]),
            Line::from(vec![
                Span::styled("  Enter    ", key),
                Span::styled("buy the selected item", text),
            ]),
            Line::from(vec![
                Span::styled("  /        ", key),
                Span::styled("search (typing refilters live)", text),
            ]),
            Line::from(vec![
                Span::styled("  c / C    ", key),
                Span::styled("next / previous category", text),
            ]),
            Line::from(vec![
                Span::styled("  s        ", key),
                Span::styled("sell the deeded ship", text),
            ]),
            Line::from(vec![
                Span::styled("  1 2 Tab  ", key),
                Span::styled("switch storefront", text),
            ]),
            Line::from(vec![
                Span::styled("  q        ", key),
                Span::styled("quit", text),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }

    #[allow(clippy::unused_self)]
    fn render_confirm_dialog(&self, frame: &mut Frame, area: Rect, confirm: &ConfirmAction) {
        let width = 50u16.min(area.width.saturating_sub(4));
        let height = 5u16;

        let x = (area.width.saturating_sub(width)) / 2;
        let y = (area.height.saturating_sub(height)) / 2;
        let dialog_area = Rect::new(area.x + x, area.y + y, width, height);

        frame.render_widget(
            Block::default().style(Style::default().bg(theme::BG_DARK)),
            dialog_area,
        );

        let block = Block::default()
            .title(" Confirm ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::SIGNAL_ORANGE));

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let text = vec![
            Line::from(Span::styled(
                format!("  {confirm}"),
                Style::default().fg(theme::DIM_WHITE),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("  y ", theme::key_hint_key()),
                Span::styled("confirm    ", theme::key_hint()),
                Span::styled("n ", theme::key_hint_key()),
                Span::styled("cancel", theme::key_hint()),
            ]),
        ];
        frame.render_widget(Paragraph::new(text), inner);
    }

    /// Render a notification toast in the bottom-right corner.
    #[allow(clippy::unused_self, clippy::cast_possible_truncation, clippy::as_conversions)]
    fn render_notification(&self, frame: &mut Frame, area: Rect, notif: &Notification) {
        use crate::action::NotificationLevel;

        let msg_len = notif.message.len() as u16;
        let width = (msg_len + 6).clamp(20, 60);
        let height = 3u16;

        let x = area.width.saturating_sub(width + 1);
        let y = area.height.saturating_sub(height + 2); // above status bar
        let toast_area = Rect::new(area.x + x, area.y + y, width, height);

        let (border_color, icon) = match notif.level {
            NotificationLevel::Success => (theme::SUCCESS_GREEN, "✓"),
            NotificationLevel::Error => (theme::ERROR_RED, "✗"),
            NotificationLevel::Info => (theme::ICE_BLUE, "·"),
        };

        frame.render_widget(
            Block::default().style(Style::default().bg(theme::BG_DARK)),
            toast_area,
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));

        let inner = block.inner(toast_area);
        frame.render_widget(block, toast_area);

        let line = Line::from(vec![
            Span::styled(format!(" {icon} "), Style::default().fg(border_color)),
            Span::styled(&notif.message, Style::default().fg(theme::DIM_WHITE)),
        ]);
        frame.render_widget(Paragraph::new(line), inner);
    }
}
