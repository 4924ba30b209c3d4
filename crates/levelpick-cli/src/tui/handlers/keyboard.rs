//! Keyboard event handlers

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::tui::app::LoadGameScreen;

/// Esc, Alt+F4, Ctrl+C and Ctrl+Q all close the screen
fn is_quit_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::F(4) => key.modifiers.contains(KeyModifiers::ALT),
        KeyCode::Char('c') | KeyCode::Char('q') => {
            key.modifiers.contains(KeyModifiers::CONTROL)
        }
        _ => false,
    }
}

impl LoadGameScreen {
    /// Main keyboard event dispatcher
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind == KeyEventKind::Release {
            return Ok(());
        }

        // Quit wins over everything, including an open delete prompt
        if is_quit_key(&key) {
            self.quit();
            return Ok(());
        }

        if self.is_delete_pending() {
            return self.handle_delete_prompt_key(key.code);
        }

        match key.code {
            KeyCode::Left | KeyCode::PageUp => self.page_back(),
            KeyCode::Right | KeyCode::PageDown => self.page_forward(),
            _ => {}
        }
        Ok(())
    }

    fn handle_delete_prompt_key(&mut self, code: KeyCode) -> Result<()> {
        match code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => self.confirm_delete(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Backspace => {
                self.reset_delete_request();
                Ok(())
            }
            _ => Ok(()),
        }
    }
}
