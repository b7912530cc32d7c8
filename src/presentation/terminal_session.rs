// Session provider and confirmation gate for the terminal front end
use crate::application::session::{ConfirmationGate, SessionProvider};
use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Lines};
use tokio::sync::Mutex;

/// "Navigating to login" in a terminal means asking for credentials before the next
/// command; the redirect is recorded here and picked up by the input loop.
#[derive(Debug, Default)]
pub struct TerminalSession {
    login_requested: AtomicBool,
}

impl TerminalSession {
    pub fn take_login_request(&self) -> bool {
        self.login_requested.swap(false, Ordering::SeqCst)
    }
}

impl SessionProvider for TerminalSession {
    fn redirect_to_login(&self) {
        self.login_requested.store(true, Ordering::SeqCst);
    }
}

/// Line reader shared by the command loop and the confirmation prompt, so both consume the
/// same buffered input.
pub struct TerminalInput {
    lines: Mutex<Lines<BufReader<Box<dyn AsyncRead + Send + Unpin>>>>,
}

impl TerminalInput {
    pub fn stdin() -> Arc<Self> {
        Self::from_reader(tokio::io::stdin())
    }

    pub fn from_reader(reader: impl AsyncRead + Send + Unpin + 'static) -> Arc<Self> {
        let reader: Box<dyn AsyncRead + Send + Unpin> = Box::new(reader);
        Arc::new(Self {
            lines: Mutex::new(BufReader::new(reader).lines()),
        })
    }

    /// Next input line without its terminator; `None` at end of input.
    pub async fn next_line(&self) -> std::io::Result<Option<String>> {
        self.lines.lock().await.next_line().await
    }
}

/// Asks on stdout and reads the answer from the terminal input. Anything but y/yes declines,
/// end of input included.
///
/// The gate is synchronous, so the read parks the current worker thread; this needs the
/// multi-threaded runtime.
pub struct TerminalConfirmation {
    input: Arc<TerminalInput>,
}

impl TerminalConfirmation {
    pub fn new(input: Arc<TerminalInput>) -> Self {
        Self { input }
    }
}

impl ConfirmationGate for TerminalConfirmation {
    fn confirm(&self, prompt: &str) -> bool {
        print!("{} [y/N] ", prompt);
        if std::io::stdout().flush().is_err() {
            return false;
        }
        let answer = tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(self.input.next_line())
        });
        match answer {
            Ok(Some(answer)) => is_yes(&answer),
            Ok(None) => false,
            Err(e) => {
                tracing::warn!(error = %e, "could not read confirmation");
                false
            }
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_is_taken_once() {
        let session = TerminalSession::default();
        assert!(!session.take_login_request());
        session.redirect_to_login();
        assert!(session.take_login_request());
        assert!(!session.take_login_request());
    }

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes("\n"));
        assert!(!is_yes("nope"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_confirmation_and_commands_share_one_reader() {
        let input = TerminalInput::from_reader(&b"ls\nyes\nrefresh\n"[..]);
        let gate = TerminalConfirmation::new(input.clone());

        assert_eq!(input.next_line().await.unwrap().as_deref(), Some("ls"));
        assert!(gate.confirm("Are you sure?"));
        assert_eq!(input.next_line().await.unwrap().as_deref(), Some("refresh"));
        assert!(!gate.confirm("Are you sure?"));
        assert_eq!(input.next_line().await.unwrap(), None);
    }
}
