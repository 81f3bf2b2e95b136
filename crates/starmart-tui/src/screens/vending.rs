//! Vending screen — one machine face: searchable slot list with live
//! prices, stock counts, and a wallet readout.

use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use tokio::sync::mpsc::UnboundedSender;

use starmart_core::localize::BALANCE_AMOUNT;
use starmart_core::{Catalog, CatalogIdentity, Localizer, VendingPanel, VendingState};

use crate::action::Action;
use crate::component::Component;
use crate::loc::English;
use crate::theme;

pub struct VendingScreen {
    focused: bool,
    action_tx: Option<UnboundedSender<Action>>,
    panel: VendingPanel,
    vending: Arc<VendingState>,
    selected: usize,
}

impl VendingScreen {
    pub fn new() -> Self {
        let mut screen = Self {
            focused: false,
            action_tx: None,
            panel: VendingPanel::new(Arc::new(Catalog::default()), Arc::new(CatalogIdentity)),
            vending: Arc::new(VendingState::default()),
            selected: 0,
        };
        screen.repopulate();
        screen
    }

    fn repopulate(&mut self) {
        self.panel.populate(&self.vending, &English);
        let rows = self.panel.rows().len();
        if rows == 0 {
            self.selected = 0;
        } else {
            self.selected = self.selected.min(rows - 1);
        }
    }

    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss, clippy::as_conversions)]
    fn move_selection(&mut self, delta: isize) {
        let len = self.panel.rows().len();
        if len == 0 || self.panel.is_sold_out() {
            return;
        }
        let next = (self.selected as isize + delta).clamp(0, len as isize - 1);
        self.selected = next as usize;
    }

    /// Machine face dimensions in cells, tracking the engine's adaptive
    /// size (px-ish units scaled down to terminal geometry).
    #[allow(clippy::cast_possible_truncation, clippy::as_conversions)]
    fn face_size(&self) -> (u16, u16) {
        let size = self.panel.size();
        ((size.width / 5) as u16, (size.height / 10) as u16)
    }
}

impl Component for VendingScreen {
    fn init(&mut self, action_tx: UnboundedSender<Action>) -> Result<()> {
        self.action_tx = Some(action_tx);
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.move_selection(1);
                Ok(None)
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.move_selection(-1);
                Ok(None)
            }
            KeyCode::Char('g') | KeyCode::Home => {
                self.selected = 0;
                Ok(None)
            }
            KeyCode::Char('G') | KeyCode::End => {
                let len = self.panel.rows().len();
                if len > 0 {
                    self.selected = len - 1;
                }
                Ok(None)
            }
            KeyCode::Enter => {
                let Some(slot) = self.panel.slot_for_row(self.selected) else {
                    return Ok(None);
                };
                let kind = self.panel.rows()[self.selected].kind.clone();
                Ok(kind.map(|kind| Action::RequestDispense(slot, kind)))
            }
            _ => Ok(None),
        }
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::CatalogUpdated(catalog) => {
                self.panel.set_catalog(Arc::clone(catalog));
                self.repopulate();
            }
            Action::VendingUpdated(vending) => {
                self.vending = Arc::clone(vending);
                self.repopulate();
            }
            Action::SearchInput(query) => {
                self.panel.set_search(query);
                self.repopulate();
                self.selected = 0;
            }
            Action::CloseSearch => {
                self.panel.set_search("");
                self.repopulate();
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let rows = self.panel.rows();
        let shown = if self.panel.is_sold_out() { 0 } else { rows.len() };
        let total = self.vending.inventory.len();

        let search = self.panel.search();
        let title = if search.is_empty() {
            format!(" Vending Machine ({shown}/{total}) ")
        } else {
            format!(" Vending Machine ({shown}/{total}) [\"{search}\"] ")
        };

        // Center a machine face sized by the engine
        let (face_w, face_h) = self.face_size();
        let face_w = face_w.clamp(30, area.width.max(30));
        let face_h = face_h.max(10).min(area.height.max(10));
        let x = area.x + area.width.saturating_sub(face_w) / 2;
        let y = area.y + area.height.saturating_sub(face_h) / 2;
        let face = Rect::new(x, y, face_w.min(area.width), face_h.min(area.height));

        let block = Block::default()
            .title(title)
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                theme::border_focused()
            } else {
                theme::border_default()
            });

        let inner = block.inner(face);
        frame.render_widget(block, face);

        let layout = Layout::vertical([
            Constraint::Length(1), // balance
            Constraint::Min(1),    // slots
            Constraint::Length(1), // hints
        ])
        .split(inner);

        let balance = English.localize_amount(BALANCE_AMOUNT, self.vending.balance);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!(" {balance}"),
                theme::price_style(),
            ))),
            layout[0],
        );

        let lines: Vec<Line> = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let is_selected = i == self.selected && !self.panel.is_sold_out();
                let prefix = if is_selected { "▸ " } else { "  " };
                let icon = row.icon.as_deref().unwrap_or(" ");
                let style = if self.panel.is_sold_out() {
                    Style::default().fg(theme::ERROR_RED)
                } else if is_selected {
                    theme::list_selected()
                } else {
                    theme::list_row()
                };
                Line::from(Span::styled(
                    format!("{prefix}{icon} {}", row.text),
                    style,
                ))
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), layout[1]);

        let hints = Line::from(vec![
            Span::styled(" j/k ", theme::key_hint_key()),
            Span::styled("select  ", theme::key_hint()),
            Span::styled("Enter ", theme::key_hint_key()),
            Span::styled("buy  ", theme::key_hint()),
            Span::styled("/ ", theme::key_hint_key()),
            Span::styled("search", theme::key_hint()),
        ]);
        frame.render_widget(Paragraph::new(hints), layout[2]);
    }

    fn focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn id(&self) -> &'static str {
        "Vending"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use starmart_core::{CatalogItem, InventoryEntry, KindId, PricingFacets};

    fn catalog() -> Arc<Catalog> {
        Arc::new(Catalog::new(
            vec![CatalogItem {
                id: KindId::from("cola"),
                name: "Space Cola".into(),
                description: String::new(),
                category: None,
                icon: None,
                facets: PricingFacets {
                    base_price: 10,
                    ..PricingFacets::default()
                },
            }],
            std::collections::HashMap::new(),
        ))
    }

    fn vending() -> Arc<VendingState> {
        Arc::new(VendingState {
            inventory: vec![InventoryEntry {
                kind: KindId::from("cola"),
                amount: 3,
            }],
            price_modifier: 1.0,
            balance: 50,
        })
    }

    #[test]
    fn updates_rebuild_rows() {
        let mut screen = VendingScreen::new();
        screen
            .update(&Action::CatalogUpdated(catalog()))
            .unwrap();
        screen
            .update(&Action::VendingUpdated(vending()))
            .unwrap();

        assert_eq!(screen.panel.rows().len(), 1);
        assert_eq!(screen.panel.rows()[0].text, "[$10] Space Cola [3]");
    }

    #[test]
    fn enter_requests_dispense_for_original_slot() {
        let mut screen = VendingScreen::new();
        screen
            .update(&Action::CatalogUpdated(catalog()))
            .unwrap();
        screen
            .update(&Action::VendingUpdated(vending()))
            .unwrap();

        let action = screen
            .handle_key_event(KeyEvent::from(KeyCode::Enter))
            .unwrap();
        assert!(matches!(
            action,
            Some(Action::RequestDispense(0, kind)) if kind == KindId::from("cola")
        ));
    }

    #[test]
    fn search_narrows_then_close_restores() {
        let mut screen = VendingScreen::new();
        screen
            .update(&Action::CatalogUpdated(catalog()))
            .unwrap();
        screen
            .update(&Action::VendingUpdated(vending()))
            .unwrap();

        screen
            .update(&Action::SearchInput("zzz".into()))
            .unwrap();
        assert!(screen.panel.rows().is_empty());

        screen.update(&Action::CloseSearch).unwrap();
        assert_eq!(screen.panel.rows().len(), 1);
    }
}
