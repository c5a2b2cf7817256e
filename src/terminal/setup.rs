//! Entering and leaving TUI mode.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Enter the alternate screen and enable mouse capture for toggle clicks.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, EnableMouseCapture)
}

/// Leave TUI mode and restore the terminal to normal state.
///
/// Safe to call more than once; errors are ignored.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, DisableMouseCapture, LeaveAlternateScreen);
    let _ = execute!(writer, Show);
    let _ = writer.flush();
}

/// Restore stdout from a panic or an error path.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_tui_mode_writes_sequences() {
        let mut buffer = Vec::new();
        enter_tui_mode(&mut buffer).unwrap();
        assert!(!buffer.is_empty());
    }

    #[test]
    fn test_leave_tui_mode_does_not_panic() {
        let mut buffer = Vec::new();
        leave_tui_mode(&mut buffer);
        leave_tui_mode(&mut buffer);
        assert!(!buffer.is_empty());
    }
}
