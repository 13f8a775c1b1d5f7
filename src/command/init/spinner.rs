use std::io::{self, IsTerminal, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use mevn_std::{failure_message, success_message};
use termimad::crossterm::{
    cursor::{Hide, MoveToColumn, Show},
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};

const FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
const FRAME_DELAY: Duration = Duration::from_millis(80);

/// A command line spinner drawn on stderr.
///
/// When stderr is not a terminal the message is printed once and only the
/// final success or error line follows it.
pub struct Spinner {
    active: Arc<AtomicBool>,
    handle: Option<thread::JoinHandle<()>>,
}

impl Spinner {
    pub fn new(message: &str) -> Self {
        let active = Arc::new(AtomicBool::new(true));
        if !io::stderr().is_terminal() {
            eprintln!("{message}");
            return Self {
                active,
                handle: None,
            };
        }

        let message = message.to_string();
        let active_clone = Arc::clone(&active);
        let _ = execute!(io::stderr(), Hide);
        let handle = thread::spawn(move || {
            let mut stderr = io::stderr();
            for frame in FRAMES.iter().cycle() {
                if !active_clone.load(Ordering::Acquire) {
                    break;
                }
                let _ = execute!(
                    stderr,
                    MoveToColumn(0),
                    Clear(ClearType::CurrentLine),
                    SetForegroundColor(Color::Cyan),
                    Print(format!("{frame} {message}")),
                    ResetColor
                );
                let _ = stderr.flush();
                thread::sleep(FRAME_DELAY);
            }
        });

        Self {
            active,
            handle: Some(handle),
        }
    }

    /// Stops the spinner and leaves a success line behind
    pub fn success(&mut self, message: &str) {
        self.finish(Some(success_message(message)));
    }

    /// Stops the spinner and leaves a failure line behind
    pub fn error(&mut self, message: &str) {
        self.finish(Some(failure_message(message)));
    }

    pub fn stop(&mut self) {
        self.finish(None);
    }

    fn finish(&mut self, line: Option<String>) {
        if !self.active.swap(false, Ordering::AcqRel) {
            return;
        }
        let Some(handle) = self.handle.take() else {
            if let Some(line) = line {
                eprintln!("{line}");
            }
            return;
        };

        let _ = handle.join();
        let mut stderr = io::stderr();
        let _ = execute!(stderr, MoveToColumn(0), Clear(ClearType::CurrentLine));
        if let Some(line) = line {
            let _ = execute!(stderr, Print(line), Print("\n"));
        }
        let _ = execute!(stderr, Show);
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.stop();
    }
}
