//! Delayed first fetch of each dashboard section.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

/// Dashboard section backed by a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Profile card, fed by the user store.
    Profile,
    /// Reward points donut.
    Rewards,
    /// Benefits list.
    Benefits,
}

impl Section {
    /// Sections in mount order.
    pub const ALL: [Self; 3] = [Self::Profile, Self::Rewards, Self::Benefits];

    /// Delay before the first fetch, so the skeleton stays visible.
    #[must_use]
    pub const fn mount_delay(self) -> Duration {
        match self {
            Self::Profile | Self::Benefits => Duration::from_millis(1500),
            Self::Rewards => Duration::from_millis(1000),
        }
    }

    /// Position in [`Section::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Profile => 0,
            Self::Rewards => 1,
            Self::Benefits => 2,
        }
    }

    /// Name used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Rewards => "rewards",
            Self::Benefits => "benefits",
        }
    }
}

/// First fetch of a mounted section.
///
/// Owns the spawned task; dropping it aborts the task so an unmounted
/// section never writes to its store.
#[derive(Debug)]
pub struct MountedFetch {
    section: Section,
    handle: JoinHandle<()>,
}

impl MountedFetch {
    /// Waits `delay`, then runs the future returned by `fetch`.
    ///
    /// `fetch` is only called once the delay has elapsed.
    pub fn spawn<F, Fut>(section: Section, delay: Duration, fetch: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        debug!(section = section.name(), delay_ms = delay.as_millis(), "Mounting section");
        let handle = tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            fetch().await;
        });
        Self { section, handle }
    }

    /// Whether the fetch has run to completion or was aborted.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for MountedFetch {
    fn drop(&mut self) {
        if !self.handle.is_finished() {
            debug!(section = self.section.name(), "Unmounting section, aborting fetch");
            self.handle.abort();
        }
    }
}
