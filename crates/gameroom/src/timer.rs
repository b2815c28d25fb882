use super::*;
use hg_core::*;
use std::time::Duration;
use tokio::sync::mpsc::Sender;
use tokio::sync::mpsc::error::TrySendError;
use tokio::task::JoinHandle;

/// Per-table reveal timer.
///
/// Each arming spawns a single-shot task that sleeps for the deal interval
/// and then hands a [`Tick`] to the dispatcher. The task never touches the
/// session. Every arming and disarming bumps the epoch, so a tick already
/// queued from an earlier arming can be recognized as stale.
///
/// At most one task is live per timer: arming aborts the previous one.
#[derive(Debug, Default)]
pub struct Timer {
    epoch: Epoch,
    task: Option<JoinHandle<()>>,
}

impl Timer {
    /// Schedules the next tick. Must be called inside a tokio runtime.
    pub fn arm(&mut self, channel: &ChannelId, interval: Duration, ticks: Sender<Tick>) -> Epoch {
        self.disarm();
        let tick = Tick {
            channel: channel.clone(),
            epoch: self.epoch,
        };
        log::trace!("[timer {}] armed #{} for {:?}", channel, self.epoch, interval);
        self.task = Some(tokio::spawn(Self::fire(tick, interval, ticks)));
        self.epoch
    }
    /// Cancels any pending tick and invalidates ticks already in flight.
    pub fn disarm(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.epoch += 1;
    }
    /// Epoch a tick must carry to be honored.
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }
    /// Whether a tick task is still pending delivery.
    pub fn is_armed(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }
    /// Sleeps, then delivers. A full tick queue drops this attempt and
    /// waits one more interval, delaying the reveal without losing it.
    async fn fire(tick: Tick, interval: Duration, ticks: Sender<Tick>) {
        loop {
            tokio::time::sleep(interval).await;
            match ticks.try_send(tick.clone()) {
                Ok(()) => break,
                Err(TrySendError::Closed(_)) => break,
                Err(TrySendError::Full(_)) => {
                    log::warn!("[timer {}] tick queue full, retrying", tick.channel)
                }
            }
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::channel;

    #[test]
    fn timer_starts_disarmed() {
        let timer = Timer::default();
        assert_eq!(timer.epoch(), 0);
        assert!(!timer.is_armed());
    }
    #[test]
    fn disarm_bumps_epoch() {
        let mut timer = Timer::default();
        timer.disarm();
        timer.disarm();
        assert_eq!(timer.epoch(), 2);
    }
    #[tokio::test(start_paused = true)]
    async fn fires_once_after_interval() {
        let (tx, mut rx) = channel(4);
        let mut timer = Timer::default();
        let epoch = timer.arm(&"c".to_string(), Duration::from_secs(7), tx);
        assert!(timer.is_armed());
        tokio::time::sleep(Duration::from_secs(6)).await;
        assert!(rx.try_recv().is_err());
        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(rx.try_recv(), Ok(Tick { channel: "c".to_string(), epoch }));
        tokio::time::sleep(Duration::from_secs(30)).await;
        assert!(rx.try_recv().is_err());
    }
    #[tokio::test(start_paused = true)]
    async fn disarm_cancels_pending_tick() {
        let (tx, mut rx) = channel(4);
        let mut timer = Timer::default();
        let epoch = timer.arm(&"c".to_string(), Duration::from_secs(7), tx);
        timer.disarm();
        assert!(timer.epoch() > epoch);
        tokio::time::sleep(Duration::from_secs(30)).await;
        assert!(rx.try_recv().is_err());
    }
    #[tokio::test(start_paused = true)]
    async fn rearm_replaces_task() {
        let (tx, mut rx) = channel(4);
        let mut timer = Timer::default();
        let first = timer.arm(&"c".to_string(), Duration::from_secs(7), tx.clone());
        let second = timer.arm(&"c".to_string(), Duration::from_secs(7), tx);
        assert_ne!(first, second);
        tokio::time::sleep(Duration::from_secs(8)).await;
        assert_eq!(rx.try_recv().map(|t| t.epoch), Ok(second));
        assert!(rx.try_recv().is_err());
    }
    #[tokio::test(start_paused = true)]
    async fn full_queue_delays_tick() {
        let (tx, mut rx) = channel(1);
        tx.try_send(Tick { channel: "other".to_string(), epoch: 0 }).unwrap();
        let mut timer = Timer::default();
        let epoch = timer.arm(&"c".to_string(), Duration::from_secs(7), tx);
        tokio::time::sleep(Duration::from_secs(8)).await;
        assert_eq!(rx.try_recv().map(|t| t.channel), Ok("other".to_string()));
        assert!(rx.try_recv().is_err());
        tokio::time::sleep(Duration::from_secs(7)).await;
        assert_eq!(rx.try_recv().map(|t| t.epoch), Ok(epoch));
    }
}
