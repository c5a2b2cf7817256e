//! Panic hook that restores the terminal before the panic is reported.

use super::setup::emergency_restore;
use std::panic;

/// Install the hook. Call early in `main`, before `TerminalManager::new`.
///
/// Chains to the previously installed hook, so color-eyre's panic report
/// still prints once the screen is back to normal.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        original_hook(panic_info);
    }));
}
