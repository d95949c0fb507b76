//! Person Gallery - UI Signal Port
//!
//! The store never renders anything; it asks the host through this port
//! and blocks on the answer. The original app presented these as modal
//! alert controllers.

use std::io::{self, BufRead, Write};

/// Host-side dialog surface.
pub trait UiPort: Send + Sync {
    /// Yes/no confirmation dialog.
    fn request_confirmation(&self, title: &str, message: &str) -> bool;

    /// Error dialog; informational only.
    fn notify_error(&self, title: &str, message: &str);

    /// Single-line text input; `None` means the user cancelled.
    fn request_text_input(&self, title: &str) -> Option<String>;

    /// Pick one of `options`; `None` means the user cancelled.
    fn request_choice(&self, title: &str, options: &[&str]) -> Option<usize>;
}

/// Terminal implementation of the dialog surface.
///
/// With `assume_yes` set, confirmations are granted without prompting
/// (the CLI's `-y` flag).
pub struct ConsoleUi {
    assume_yes: bool,
}

impl ConsoleUi {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }

    fn read_line(&self) -> Option<String> {
        read_line_from(&mut io::stdin().lock())
    }
}

/// Read one line; `None` only on EOF or read error (the terminal's
/// cancel). An empty submission is a valid empty answer, which rename
/// explicitly permits.
fn read_line_from(reader: &mut impl BufRead) -> Option<String> {
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
    }
}

impl UiPort for ConsoleUi {
    fn request_confirmation(&self, title: &str, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        print!("{}: {} [y/N] ", title, message);
        let _ = io::stdout().flush();

        matches!(self.read_line().as_deref(), Some("y") | Some("Y"))
    }

    fn notify_error(&self, title: &str, message: &str) {
        eprintln!("{}: {}", title, message);
    }

    fn request_text_input(&self, title: &str) -> Option<String> {
        print!("{}: ", title);
        let _ = io::stdout().flush();
        self.read_line()
    }

    fn request_choice(&self, title: &str, options: &[&str]) -> Option<usize> {
        println!("{}:", title);
        for (i, option) in options.iter().enumerate() {
            println!("  {}) {}", i + 1, option);
        }
        print!("> ");
        let _ = io::stdout().flush();

        let picked: usize = self.read_line()?.parse().ok()?;
        if picked >= 1 && picked <= options.len() {
            Some(picked - 1)
        } else {
            None
        }
    }
}
