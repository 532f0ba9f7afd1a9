/// User interface and status output utilities
///
/// This module handles:
/// - Serialized console output
/// - Colored terminal text
/// - Workflow command lines that the Actions runner parses from stdout

use lazy_static::lazy_static;
use std::io::Write;
use std::sync::Mutex;

lazy_static! {
    static ref LOCK: Mutex<()> = Mutex::new(());
}

/// Execute a function with exclusive access to console output
fn status_lock<F>(f: F)
where
    F: FnOnce(),
{
    let _guard = LOCK.lock();
    f();
}

/// Print colored text to terminal, with fallback to plain text
fn print_color(s: &str, fg: term::color::Color) {
    if !really_print_color(s, fg) {
        print!("{}", s);
    }

    fn really_print_color(s: &str, fg: term::color::Color) -> bool {
        let Some(mut t) = term::stdout() else {
            return false;
        };
        if t.fg(fg).is_err() {
            return false;
        }
        let _ = t.attr(term::Attr::Bold);
        if write!(t, "{}", s).is_err() {
            return false;
        }
        let _ = t.reset();
        true
    }
}

/// Print a status message with the tool prefix
pub fn status(s: &str) {
    status_lock(|| {
        print_color("junit-monorepo-go", term::color::BRIGHT_CYAN);
        println!(": {}", s);
    });
}

/// Print one `::error ...` annotation verbatim.
///
/// No color or prefix: the runner only recognizes the command at line start.
pub fn annotation(line: &str) {
    status_lock(|| {
        println!("{}", line);
    });
}

/// Print an error message with colored "error" prefix
pub fn print_error(msg: &str) {
    status_lock(|| {
        print_color("error", term::color::BRIGHT_RED);
        println!(": {}", msg);
    });
}
