//! Debounce, throttle and short unique ids.

use rand::Rng;
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::task::JoinHandle;
use tokio::time::Instant;

type Action<A> = Arc<dyn Fn(A) + Send + Sync>;

/// Runs the action once, `delay` after the most recent [`Debouncer::call`].
/// Each call cancels the previously scheduled run.
///
/// Calls must happen inside a Tokio runtime.
pub struct Debouncer<A: Send + 'static> {
    delay: Duration,
    action: Action<A>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<A: Send + 'static> Debouncer<A> {
    pub fn new<F>(delay: Duration, action: F) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            delay,
            action: Arc::new(action),
            pending: Mutex::new(None),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn call(&self, args: A) {
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(handle) = pending.take() {
            handle.abort();
        }

        let action = Arc::clone(&self.action);
        let delay = self.delay;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action(args);
        }));
    }

    /// Drops the scheduled run, if any.
    pub fn cancel(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(handle) = pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        let pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

/// Lets a call through only when `window` has passed since the last
/// accepted one. The first call is always accepted.
#[derive(Debug, Clone)]
pub struct Throttle {
    window: Duration,
    last: Option<Instant>,
}

impl Throttle {
    pub fn new(window: Duration) -> Self {
        Self { window, last: None }
    }

    pub fn try_acquire(&mut self) -> bool {
        let now = Instant::now();
        match self.last {
            Some(last) if now.duration_since(last) < self.window => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }

    /// Runs `f` when the window allows it; `None` means the call was dropped.
    pub fn call<R>(&mut self, f: impl FnOnce() -> R) -> Option<R> {
        if self.try_acquire() {
            Some(f())
        } else {
            None
        }
    }
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut buf = Vec::new();
    while n > 0 {
        buf.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    buf.reverse();
    String::from_utf8_lossy(&buf).into_owned()
}

/// Timestamp plus random suffix in base 36, e.g. `"m3x9k2q8"` + `"p1z..."`.
pub fn generate_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    let suffix: u64 = rand::thread_rng().gen();
    format!("{}{}", to_base36(millis), to_base36(suffix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test(start_paused = true)]
    async fn test_debounce_fires_once_with_last_args() {
        let hits = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));

        let debouncer = {
            let hits = Arc::clone(&hits);
            let seen = Arc::clone(&seen);
            Debouncer::new(Duration::from_millis(300), move |query: String| {
                hits.fetch_add(1, Ordering::SeqCst);
                seen.lock().unwrap().push(query);
            })
        };

        for query in ["r", "ru", "rus", "rust"] {
            debouncer.call(query.to_string());
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        assert_eq!(hits.load(Ordering::SeqCst), 0);
        assert!(debouncer.is_pending());

        tokio::time::sleep(Duration::from_millis(250)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(*seen.lock().unwrap(), vec!["rust".to_string()]);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounce_cancel() {
        let hits = Arc::new(AtomicUsize::new(0));
        let debouncer = {
            let hits = Arc::clone(&hits);
            Debouncer::new(Duration::from_millis(50), move |_: ()| {
                hits.fetch_add(1, Ordering::SeqCst);
            })
        };

        debouncer.call(());
        debouncer.cancel();
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_throttle_drops_calls_inside_window() {
        let mut throttle = Throttle::new(Duration::from_millis(300));
        assert_eq!(throttle.call(|| 1), Some(1));
        assert_eq!(throttle.call(|| 2), None);

        tokio::time::advance(Duration::from_millis(299)).await;
        assert!(!throttle.try_acquire());

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(throttle.try_acquire());
        assert!(!throttle.try_acquire());
    }

    #[test]
    fn test_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
    }

    #[test]
    fn test_generate_id_unique() {
        let ids: HashSet<String> = (0..200).map(|_| generate_id()).collect();
        assert_eq!(ids.len(), 200);
        assert!(ids
            .iter()
            .all(|id| id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())));
    }
}
