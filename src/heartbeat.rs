use core::fmt;
use core::future::Future;

use embassy_time::Duration;
use log::info;

use crate::{PERIOD, TAG};

/// One log line worth of heartbeat: `[<tag>] [<count>] Hello world!`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Greeting {
    pub tag: &'static str,
    pub count: i32,
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] [{}] Hello world!", self.tag, self.count)
    }
}

/// Counter owned by the entry task.
///
/// Wraps from `i32::MAX` to `i32::MIN` instead of overflowing, so the task
/// keeps running regardless of how long the board stays up.
#[derive(Debug, Default)]
pub struct Heartbeat {
    count: i32,
}

impl Heartbeat {
    pub const fn new() -> Self {
        Self { count: 0 }
    }

    #[cfg(test)]
    const fn starting_at(count: i32) -> Self {
        Self { count }
    }

    /// Value the next greeting will carry.
    pub const fn count(&self) -> i32 {
        self.count
    }

    /// Returns the greeting for the current value and advances the counter.
    pub fn beat(&mut self) -> Greeting {
        let greeting = Greeting {
            tag: TAG,
            count: self.count,
        };
        self.count = self.count.wrapping_add(1);
        greeting
    }

    /// Logs the next greeting at info level and returns the value it carried.
    pub fn emit(&mut self) -> i32 {
        let greeting = self.beat();
        info!(target: TAG, "{greeting}");
        greeting.count
    }

    /// One pass of the entry task: log, advance, then sleep for [`PERIOD`].
    ///
    /// `sleep` must suspend the caller for at least the given duration,
    /// e.g. `embassy_time::Timer::after`.
    pub async fn tick<S, F>(&mut self, sleep: S) -> i32
    where
        S: FnOnce(Duration) -> F,
        F: Future<Output = ()>,
    {
        let count = self.emit();
        sleep(PERIOD).await;
        count
    }

    /// Ticks forever.
    pub async fn run<S, F>(mut self, mut sleep: S) -> !
    where
        S: FnMut(Duration) -> F,
        F: Future<Output = ()>,
    {
        loop {
            self.tick(&mut sleep).await;
        }
    }
}
