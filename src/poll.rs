//! Fixed-interval re-fetching owned by a view.
//!
//! A [`Poller`] runs its fetch function immediately and then once per interval on
//! a spawned task, publishing each outcome as a [`Snapshot`]. The task lives
//! exactly as long as the `Poller`: dropping it aborts the task, so a view that
//! goes away stops generating upstream traffic. Requests already in flight when
//! the poller is dropped are abandoned and their results discarded.

use std::{fmt::Display, future::Future, time::Duration};

use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{self, MissedTickBehavior},
};

/// Latest view state: the last successful value and the most recent error.
///
/// A failed fetch keeps `data` from the previous success; a successful fetch
/// clears `error`.
#[derive(Debug, Clone)]
pub struct Snapshot<T> {
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
        }
    }
}

impl<T> Snapshot<T> {
    fn record<E: Display>(&mut self, outcome: Result<T, E>) {
        match outcome {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(err) => self.error = Some(err.to_string()),
        }
    }
}

pub struct Poller<T> {
    rx: watch::Receiver<Snapshot<T>>,
    task: JoinHandle<()>,
}

impl<T> Poller<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn spawn<F, Fut, E>(every: Duration, mut fetch: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, E>> + Send,
        E: Display + Send + 'static,
    {
        let (tx, rx) = watch::channel(Snapshot::default());

        let task = tokio::spawn(async move {
            let mut ticker = time::interval(every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                let outcome = fetch().await;
                if let Err(err) = &outcome {
                    tracing::debug!(error = %err, "poll fetch failed");
                }
                tx.send_modify(|snapshot| snapshot.record(outcome));
                if tx.is_closed() {
                    break;
                }
            }
        });

        Self { rx, task }
    }

    pub fn snapshot(&self) -> Snapshot<T> {
        self.rx.borrow().clone()
    }

    /// Waits for the next fetch to complete. `None` once the task has stopped.
    pub async fn changed(&mut self) -> Option<Snapshot<T>> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }
}

impl<T> Drop for Poller<T> {
    fn drop(&mut self) {
        self.task.abort();
    }
}
