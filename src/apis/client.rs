/// Request pacing for API clients
///
/// GeckoTerminal clamps down hard on bursty callers, so outbound requests
/// are spaced on a fixed interval rather than retried or adaptively backed
/// off. The fetch loop is sequential; the pacer just enforces the cadence.
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Fixed-interval gate for outbound requests
pub struct RequestPacer {
    last_request: Mutex<Option<Instant>>,
    interval: Duration,
}

impl RequestPacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            last_request: Mutex::new(None),
            interval,
        }
    }

    /// Builds a pacer from a calls-per-minute budget
    pub fn per_minute(max_per_minute: usize) -> Self {
        let interval = if max_per_minute > 0 {
            Duration::from_secs_f64(60.0 / max_per_minute as f64)
        } else {
            Duration::ZERO
        };
        Self::new(interval)
    }

    /// Waits until the interval since the previous request has elapsed.
    /// The first call returns immediately.
    pub async fn wait(&self) {
        if self.interval.is_zero() {
            return;
        }

        let mut last = self.last_request.lock().await;
        if let Some(last_time) = *last {
            let elapsed = last_time.elapsed();
            if elapsed < self.interval {
                tokio::time::sleep(self.interval - elapsed).await;
            }
        }
        *last = Some(Instant::now());
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_first_wait_is_immediate() {
        let pacer = RequestPacer::new(Duration::from_millis(200));
        let start = Instant::now();
        pacer.wait().await;
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_second_wait_respects_interval() {
        let pacer = RequestPacer::new(Duration::from_millis(100));
        pacer.wait().await;
        let start = Instant::now();
        pacer.wait().await;
        assert!(start.elapsed() >= Duration::from_millis(100));
    }

    #[test]
    fn test_per_minute_interval() {
        let pacer = RequestPacer::per_minute(30);
        assert_eq!(pacer.interval(), Duration::from_secs(2));

        let unlimited = RequestPacer::per_minute(0);
        assert_eq!(unlimited.interval(), Duration::ZERO);
    }
}
