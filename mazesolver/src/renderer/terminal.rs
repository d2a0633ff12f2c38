use std::{
    io::{self, stdout},
    panic,
    sync::{
        atomic::{AtomicBool, Ordering},
        Once,
    },
};

use crossterm::{cursor, execute, terminal};

static ACTIVE: AtomicBool = AtomicBool::new(false);
static PANIC_HOOK: Once = Once::new();

/// Alternate screen with a hidden cursor, restored on drop or panic.
pub struct Terminal {
    _private: (),
}

impl Terminal {
    pub fn enter() -> io::Result<Self> {
        PANIC_HOOK.call_once(register_panic_hook);

        execute!(stdout(), cursor::Hide, terminal::EnterAlternateScreen)?;
        ACTIVE.store(true, Ordering::SeqCst);

        Ok(Terminal { _private: () })
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        ACTIVE.store(false, Ordering::SeqCst);
        let _ = execute!(stdout(), cursor::Show, terminal::LeaveAlternateScreen);
    }
}

// Chains onto the existing hook, so the panic report still gets printed, just on the
// normal screen.
fn register_panic_hook() {
    let prev = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        if ACTIVE.swap(false, Ordering::SeqCst) {
            let _ = execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show);
        }
        prev(info)
    }));
}
