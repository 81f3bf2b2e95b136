//! Shipyard screen — categorized, name-sorted vessel listings with a
//! purchase flow, deed display, and sell-ship action.

use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table};
use tokio::sync::mpsc::UnboundedSender;

use starmart_core::localize::BALANCE_AMOUNT;
use starmart_core::{Localizer, ShipyardPanel, ShipyardState};

use crate::action::Action;
use crate::component::Component;
use crate::loc::English;
use crate::theme;
use crate::widgets::{price_fmt, sub_tabs};

pub struct ShipyardScreen {
    focused: bool,
    action_tx: Option<UnboundedSender<Action>>,
    panel: ShipyardPanel,
    shipyard: Arc<ShipyardState>,
    selected: usize,
}

impl ShipyardScreen {
    pub fn new() -> Self {
        Self {
            focused: false,
            action_tx: None,
            panel: ShipyardPanel::new(),
            shipyard: Arc::new(ShipyardState::default()),
            selected: 0,
        }
    }

    fn repopulate(&mut self) {
        self.panel.populate(&self.shipyard, &English);
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
        if len == 0 {
            return;
        }
        let next = (self.selected as isize + delta).clamp(0, len as isize - 1);
        self.selected = next as usize;
    }

    fn cycle_category(&self, delta: isize) -> Option<Action> {
        let count = self.panel.categories().len();
        if count == 0 {
            return None;
        }
        #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss, clippy::as_conversions)]
        let next = (self.panel.selected_category() as isize + delta)
            .rem_euclid(count as isize) as usize;
        Some(Action::SelectCategory(next))
    }
}

impl Component for ShipyardScreen {
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
            KeyCode::Char('c') => Ok(self.cycle_category(1)),
            KeyCode::Char('C') => Ok(self.cycle_category(-1)),
            KeyCode::Char('s') => Ok(Some(Action::RequestSellShip)),
            KeyCode::Enter => Ok(self
                .panel
                .rows()
                .get(self.selected)
                .map(|row| Action::RequestPurchaseVessel(row.id.clone()))),
            _ => Ok(None),
        }
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::ShipyardUpdated(shipyard) => {
                self.shipyard = Arc::clone(shipyard);
                self.panel.populate_categories(&self.shipyard, &English);
                self.repopulate();
            }
            Action::SelectCategory(index) => {
                self.panel.select_category(*index);
                self.repopulate();
                self.selected = 0;
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
        let total = self.shipyard.listings.len();
        let shown = rows.len();

        let search = self.panel.search();
        let title = if search.is_empty() {
            format!(" Shipyard ({shown}/{total}) ")
        } else {
            format!(" Shipyard ({shown}/{total}) [\"{search}\"] ")
        };

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

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::vertical([
            Constraint::Length(1), // category tabs
            Constraint::Length(1), // balance / deed line
            Constraint::Min(1),    // listings
            Constraint::Length(1), // hints
        ])
        .split(inner);

        // Category tab bar
        let labels: Vec<&str> = self
            .panel
            .categories()
            .iter()
            .map(|c| c.label.as_str())
            .collect();
        let tabs = sub_tabs::render_sub_tabs(&labels, self.panel.selected_category());
        frame.render_widget(Paragraph::new(tabs), layout[0]);

        // Balance, appraisal, deed
        let balance = English.localize_amount(BALANCE_AMOUNT, self.shipyard.balance);
        let appraisal = if self.shipyard.free_listings {
            price_fmt::fmt_price(0)
        } else {
            price_fmt::fmt_price(self.shipyard.ship_sell_value)
        };
        let deed = self
            .shipyard
            .ship_deed_title
            .as_deref()
            .unwrap_or("None");
        let status = Line::from(vec![
            Span::styled(format!(" {balance}"), theme::price_style()),
            Span::styled("   Appraisal ", theme::key_hint()),
            Span::styled(appraisal, theme::amount_style()),
            Span::styled("   Deed ", theme::key_hint()),
            Span::styled(deed, Style::default().fg(theme::VIRIDIAN)),
        ]);
        frame.render_widget(Paragraph::new(status), layout[1]);

        // Listings table
        let table_rows: Vec<Row> = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let is_selected = i == self.selected;
                let prefix = if is_selected { "▸" } else { " " };
                let name_style = if is_selected {
                    theme::list_selected()
                } else {
                    theme::list_row()
                };
                Row::new(vec![
                    Cell::from(format!("{prefix} {}", row.name)).style(name_style),
                    Cell::from(row.price_text.clone()).style(theme::price_style()),
                    Cell::from(row.tooltip.clone()).style(theme::key_hint()),
                ])
            })
            .collect();

        let table = Table::new(
            table_rows,
            [
                Constraint::Length(20),
                Constraint::Length(10),
                Constraint::Fill(1),
            ],
        );
        frame.render_widget(table, layout[2]);

        let hints = Line::from(vec![
            Span::styled(" j/k ", theme::key_hint_key()),
            Span::styled("select  ", theme::key_hint()),
            Span::styled("Enter ", theme::key_hint_key()),
            Span::styled("purchase  ", theme::key_hint()),
            Span::styled("c ", theme::key_hint_key()),
            Span::styled("category  ", theme::key_hint()),
            Span::styled("s ", theme::key_hint_key()),
            Span::styled("sell ship", theme::key_hint()),
        ]);
        frame.render_widget(Paragraph::new(hints), layout[3]);
    }

    fn focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn id(&self) -> &'static str {
        "Shipyard"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use starmart_core::{KindId, VesselListing};

    fn shipyard() -> Arc<ShipyardState> {
        Arc::new(ShipyardState {
            listings: vec![
                VesselListing {
                    id: KindId::from("pequod"),
                    name: "Pequod".into(),
                    description: String::new(),
                    category: Some("Civilian".into()),
                    price: 8000,
                },
                VesselListing {
                    id: KindId::from("bounty"),
                    name: "Bounty".into(),
                    description: String::new(),
                    category: Some("Salvage".into()),
                    price: 12000,
                },
            ],
            free_listings: false,
            balance: 20000,
            ship_sell_value: 0,
            ship_deed_title: None,
        })
    }

    #[test]
    fn update_sorts_rows_and_discovers_categories() {
        let mut screen = ShipyardScreen::new();
        screen
            .update(&Action::ShipyardUpdated(shipyard()))
            .unwrap();

        let names: Vec<&str> = screen.panel.rows().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Bounty", "Pequod"]);
        assert_eq!(screen.panel.categories().len(), 3); // All + 2
    }

    #[test]
    fn enter_requests_purchase_of_selected_vessel() {
        let mut screen = ShipyardScreen::new();
        screen
            .update(&Action::ShipyardUpdated(shipyard()))
            .unwrap();

        let action = screen
            .handle_key_event(KeyEvent::from(KeyCode::Enter))
            .unwrap();
        assert!(matches!(
            action,
            Some(Action::RequestPurchaseVessel(kind)) if kind == KindId::from("bounty")
        ));
    }

    #[test]
    fn category_cycling_wraps_and_filters() {
        let mut screen = ShipyardScreen::new();
        screen
            .update(&Action::ShipyardUpdated(shipyard()))
            .unwrap();

        // cycle to index 1 and apply
        let action = screen
            .handle_key_event(KeyEvent::from(KeyCode::Char('c')))
            .unwrap()
            .unwrap();
        screen.update(&action).unwrap();
        assert_eq!(screen.panel.rows().len(), 1);

        // cycling back from 0 wraps to the last category
        screen.update(&Action::SelectCategory(0)).unwrap();
        let action = screen
            .handle_key_event(KeyEvent::from(KeyCode::Char('C')))
            .unwrap()
            .unwrap();
        assert!(matches!(action, Action::SelectCategory(2)));
    }
}
