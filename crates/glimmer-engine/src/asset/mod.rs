//! One-shot background asset loading.
//!
//! The update loop never blocks on assets: `spawn` runs a loader closure on
//! a background thread and returns a handle the loop polls once per frame.
//! A load that never completes simply means the dependent objects never
//! appear; the loop continues unaffected.
//!
//! There is no cancellation and no timeout. Dropping the handle detaches
//! the thread; its result is discarded.

use std::sync::mpsc;
use std::thread;

/// Result of polling an [`AssetLoad`].
#[derive(Debug)]
pub enum LoadState<T> {
    /// Still loading; poll again next frame.
    Pending,
    /// Finished. Returned at most once; the handle is spent afterwards.
    Ready(T),
    /// The loader failed or its thread died. Returned at most once.
    Failed(anyhow::Error),
}

/// Handle to an in-flight background load.
pub struct AssetLoad<T> {
    label: String,
    rx: mpsc::Receiver<anyhow::Result<T>>,
}

/// Starts loading on a background thread.
///
/// `label` names the load in diagnostics and the thread name.
pub fn spawn<T, F>(label: impl Into<String>, load: F) -> AssetLoad<T>
where
    T: Send + 'static,
    F: FnOnce() -> anyhow::Result<T> + Send + 'static,
{
    let label = label.into();
    let (tx, rx) = mpsc::channel();

    let spawned = thread::Builder::new()
        .name(format!("asset-load:{label}"))
        .spawn({
            let tx = tx.clone();
            move || {
                // The receiver may have been dropped; nothing to do then.
                let _ = tx.send(load());
            }
        });

    if let Err(e) = spawned {
        let _ = tx.send(Err(anyhow::anyhow!("failed to spawn load thread: {e}")));
    }

    AssetLoad { label, rx }
}

impl<T> AssetLoad<T> {
    /// Non-blocking progress check.
    ///
    /// A dead loader thread (e.g. a panic) reports as `Failed` rather than
    /// pending forever.
    pub fn poll(&mut self) -> LoadState<T> {
        match self.rx.try_recv() {
            Ok(Ok(value)) => LoadState::Ready(value),
            Ok(Err(e)) => LoadState::Failed(e),
            Err(mpsc::TryRecvError::Empty) => LoadState::Pending,
            Err(mpsc::TryRecvError::Disconnected) => LoadState::Failed(anyhow::anyhow!(
                "load task '{}' terminated without a result",
                self.label
            )),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn poll_to_completion<T>(load: &mut AssetLoad<T>) -> LoadState<T> {
        for _ in 0..500 {
            match load.poll() {
                LoadState::Pending => thread::sleep(Duration::from_millis(2)),
                done => return done,
            }
        }
        panic!("load did not complete in time");
    }

    #[test]
    fn successful_load_becomes_ready() {
        let mut load = spawn("answer", || Ok(42u32));
        match poll_to_completion(&mut load) {
            LoadState::Ready(v) => assert_eq!(v, 42),
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[test]
    fn loader_error_becomes_failed() {
        let mut load = spawn("broken", || -> anyhow::Result<u32> {
            Err(anyhow::anyhow!("no such font"))
        });
        match poll_to_completion(&mut load) {
            LoadState::Failed(e) => assert!(e.to_string().contains("no such font")),
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn slow_load_reports_pending_first() {
        let mut load = spawn("slow", || {
            thread::sleep(Duration::from_millis(50));
            Ok(1u8)
        });
        assert!(matches!(load.poll(), LoadState::Pending));
        assert!(matches!(poll_to_completion(&mut load), LoadState::Ready(1)));
    }
}
