use std::io::{self, Write};

use crate::render::Page;

/// Notices shown to the user outside the regular page refresh
pub trait Alerts {
    /// Blocking notice, such as a failed transaction
    fn alert(&self, message: &str);

    /// Page to show while a transaction waits for confirmation
    fn pending(&self, page: &Page<'_>);
}

/// Prints notices on stdout between the rendered pages
pub struct TerminalAlerts;

impl Alerts for TerminalAlerts {
    fn alert(&self, message: &str) {
        let mut out = io::stdout().lock();
        // Nothing sensible to do if the terminal is gone.
        let _ = writeln!(out, "\n!! {}\n", message);
    }

    fn pending(&self, page: &Page<'_>) {
        let mut out = io::stdout().lock();
        let _ = write!(out, "{}", page);
        let _ = out.flush();
    }
}
