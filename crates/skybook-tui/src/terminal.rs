//! Terminal setup and restoration

use ratatui::DefaultTerminal;

use skybook_core::prelude::*;

/// Enter raw mode and the alternate screen
pub fn init() -> Result<DefaultTerminal> {
    ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))
}

/// Leave raw mode and the alternate screen
pub fn restore() -> Result<()> {
    ratatui::try_restore().map_err(|e| Error::TerminalRestore(e.to_string()))
}

/// Install a panic hook that restores the terminal before reporting
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        if let Err(e) = restore() {
            error!("{}", e);
        }
        error!("Panic: {}", panic_info);
        original_hook(panic_info);
    }));
}
