use tokio::sync::mpsc;

type Completion = Box<dyn FnOnce() + Send>;

/// Creates a completion context for asynchronous calls.
///
/// Hand the [`Dispatcher`] to [`crate::db::Builder::dispatcher`] and drive the
/// [`CompletionQueue`] wherever callbacks should run, typically the
/// application's main loop. Dropping the queue tears the context down; any
/// callback posted afterwards is discarded.
pub fn completion_context() -> (Dispatcher, CompletionQueue) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Dispatcher { tx }, CompletionQueue { rx })
}

/// Posts completion callbacks to a [`CompletionQueue`].
#[derive(Clone)]
pub struct Dispatcher {
    tx: mpsc::UnboundedSender<Completion>,
}

/// Receives completion callbacks and runs them on the caller's thread.
pub struct CompletionQueue {
    rx: mpsc::UnboundedReceiver<Completion>,
}

impl Dispatcher {
    pub(crate) fn post(&self, callback: Completion) {
        if self.tx.send(callback).is_err() {
            tracing::debug!("completion context is gone; dropping callback");
        }
    }

    /// Returns `true` once the matching queue has been dropped.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl CompletionQueue {
    /// Runs every callback already posted, returning how many ran.
    pub fn run_pending(&mut self) -> usize {
        let mut ran = 0;
        while let Ok(callback) = self.rx.try_recv() {
            callback();
            ran += 1;
        }
        ran
    }

    /// Waits for the next callback and runs it.
    ///
    /// Returns `false` once every [`Dispatcher`] has been dropped and no
    /// callback remains.
    pub async fn next(&mut self) -> bool {
        match self.rx.recv().await {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }
}

impl core::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("closed", &self.tx.is_closed())
            .finish()
    }
}

impl core::fmt::Debug for CompletionQueue {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("CompletionQueue").finish_non_exhaustive()
    }
}
