use std::time::Duration;
use tokio::time::Instant;

/// Delay between the last keystroke and the search term taking effect.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// A value that only settles once it has stopped changing for `window`.
#[derive(Debug, Clone)]
pub struct Debounced<T> {
    window: Duration,
    settled: T,
    pending: Option<(T, Instant)>,
}

impl<T: Clone + PartialEq> Debounced<T> {
    pub fn new(initial: T, window: Duration) -> Self {
        Self {
            window,
            settled: initial,
            pending: None,
        }
    }

    /// Latest input, settled or not.
    pub fn raw(&self) -> &T {
        self.pending
            .as_ref()
            .map(|(value, _)| value)
            .unwrap_or(&self.settled)
    }

    pub fn settled(&self) -> &T {
        &self.settled
    }

    /// Records a new input and restarts the window.
    pub fn set(&mut self, value: T) {
        self.pending = Some((value, Instant::now() + self.window));
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, at)| *at)
    }

    /// Settles the pending value if its window has elapsed. Returns `true`
    /// when the settled value changed.
    pub fn poll(&mut self) -> bool {
        match self.deadline() {
            Some(at) if Instant::now() >= at => self.commit(),
            _ => false,
        }
    }

    /// Waits out the window of the pending value, then settles it.
    pub async fn wait(&mut self) -> bool {
        match self.deadline() {
            Some(at) => {
                tokio::time::sleep_until(at).await;
                self.commit()
            }
            None => false,
        }
    }

    fn commit(&mut self) -> bool {
        match self.pending.take() {
            Some((value, _)) if value != self.settled => {
                self.settled = value;
                true
            }
            _ => false,
        }
    }
}
