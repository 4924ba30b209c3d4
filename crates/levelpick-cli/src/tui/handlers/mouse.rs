//! Mouse event handling
//!
//! Every mouse event moves the tracked pointer. Left clicks go to the game
//! rows first, then to the chrome buttons in a fixed order. Right clicks on a
//! row ask to delete that game.

use anyhow::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::tui::app::LoadGameScreen;
use crate::tui::popups::{ConfirmChoice, DeleteConfirm};

impl LoadGameScreen {
    /// Handle mouse events for hover and clicks
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<()> {
        self.pointer = Some(Position::new(mouse.column, mouse.row));

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_left_click(),
            MouseEventKind::Down(MouseButton::Right) => {
                self.handle_right_click();
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn handle_left_click(&mut self) -> Result<()> {
        // The delete prompt is modal
        if self.is_delete_pending() {
            match DeleteConfirm::hit(self.frame_area, self.pointer) {
                Some(ConfirmChoice::Delete) => self.confirm_delete()?,
                Some(ConfirmChoice::Cancel) => self.reset_delete_request(),
                None => {}
            }
            return Ok(());
        }

        // A row hit selects through the outcome's SelectionSink
        if self
            .file_selector
            .check_clicked(self.pointer, &mut self.outcome)
        {
            return Ok(());
        }

        if self.back_button.check_clicked(self.pointer) {
            self.outcome.return_to_menu();
        } else if self.page_back_button.check_clicked(self.pointer) {
            self.page_back();
        } else if self.page_forward_button.check_clicked(self.pointer) {
            self.page_forward();
        }
        Ok(())
    }

    fn handle_right_click(&mut self) {
        if self.is_delete_pending() {
            return;
        }
        if let Some(entry) = self.file_selector.hovered_entry(self.pointer).cloned() {
            self.request_delete(entry);
        }
    }
}
