//! Module trait for the tab panels

use crossterm::event::KeyEvent;

use super::{Action, Context};

/// Trait for panels that handle their own input
pub trait Module {
    /// Handle keyboard input
    /// Returns an Action describing what should happen
    fn handle_key(&mut self, key: KeyEvent, ctx: &Context) -> Action;

    /// Text placed on the clipboard for the highlighted row
    fn copy_text(&self, ctx: &Context) -> Option<String>;
}
