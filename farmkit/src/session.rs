// farmkit/src/session.rs
//
// Session driver: the dashboard shell plus its two timers.
//
// Timers never touch state directly. They post `ShellEvent`s onto a channel
// and the owner of the session applies them one at a time, so every state
// transition runs to completion on a single logical thread.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Utc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::{interval_at, sleep_until, Instant};
use tracing::{debug, info};

use crate::config::DashboardConfig;
use crate::errors::Result;
use crate::export;
use crate::mock::MockDataGenerator;
use crate::shell::Dashboard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    /// Periodic weather / IoT regeneration
    Refresh,
    /// A delayed assistant reply has come due
    AssistantReplyDue,
}

/// Owns the refresh loop and every pending chat reply.
/// Dropping the scheduler cancels all of them.
pub struct Scheduler {
    tx: UnboundedSender<ShellEvent>,
    refresh: Option<JoinHandle<()>>,
    replies: JoinSet<()>,
    reply_delay: Duration,
}

impl Scheduler {
    pub fn new(tx: UnboundedSender<ShellEvent>, reply_delay: Duration) -> Self {
        Self {
            tx,
            refresh: None,
            replies: JoinSet::new(),
            reply_delay,
        }
    }

    /// Start (or restart) the repeating refresh. The first tick fires one
    /// full period from now; late ticks are not compensated for.
    pub fn start_refresh(&mut self, period: Duration) {
        if let Some(handle) = self.refresh.take() {
            handle.abort();
        }

        let tx = self.tx.clone();
        let mut ticker = interval_at(Instant::now() + period, period);

        self.refresh = Some(tokio::spawn(async move {
            loop {
                ticker.tick().await;
                if tx.send(ShellEvent::Refresh).is_err() {
                    break;
                }
            }
        }));

        info!("Refresh timer started: every {:?}", period);
    }

    /// Fire-and-forget one-shot reply. Rapid sends are not debounced; each
    /// gets its own timer and replies land in deadline order.
    pub fn schedule_reply(&mut self) {
        // Reap replies that already fired
        while self.replies.try_join_next().is_some() {}

        let tx = self.tx.clone();
        let deadline = Instant::now() + self.reply_delay;

        self.replies.spawn(async move {
            sleep_until(deadline).await;
            let _ = tx.send(ShellEvent::AssistantReplyDue);
        });
    }

    pub fn pending_replies(&self) -> usize {
        self.replies.len()
    }

    pub fn is_refreshing(&self) -> bool {
        self.refresh.as_ref().is_some_and(|h| !h.is_finished())
    }

    pub fn shutdown(&mut self) {
        if let Some(handle) = self.refresh.take() {
            handle.abort();
            debug!("Refresh timer cancelled");
        }
        self.replies.abort_all();
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.shutdown();
    }
}

pub struct Session {
    pub dashboard: Dashboard,
    generator: MockDataGenerator,
    scheduler: Scheduler,
    events: UnboundedReceiver<ShellEvent>,
}

impl Session {
    /// Build the dashboard and start its refresh timer.
    /// Must be called from within a tokio runtime.
    pub fn start(config: &DashboardConfig) -> Self {
        Self::with_generator(config, MockDataGenerator::new())
    }

    pub fn with_generator(config: &DashboardConfig, mut generator: MockDataGenerator) -> Self {
        let (tx, events) = mpsc::unbounded_channel();
        let dashboard = Dashboard::new(&mut generator, config.farm.clone());

        let mut scheduler = Scheduler::new(tx, config.refresh.chat_reply_delay());
        scheduler.start_refresh(config.refresh.interval());

        Self {
            dashboard,
            generator,
            scheduler,
            events,
        }
    }

    /// Submit the chat input and queue the assistant's reply
    pub fn send_chat(&mut self) -> bool {
        if !self.dashboard.submit_chat() {
            return false;
        }
        self.scheduler.schedule_reply();
        debug!("Chat reply scheduled ({} pending)", self.scheduler.pending_replies());
        true
    }

    /// Wait for the next timer event
    pub async fn next_event(&mut self) -> Option<ShellEvent> {
        self.events.recv().await
    }

    pub fn apply(&mut self, event: ShellEvent) {
        match event {
            ShellEvent::Refresh => self.dashboard.refresh_live_data(&mut self.generator),
            ShellEvent::AssistantReplyDue => {
                let reply = self.generator.chat_reply();
                self.dashboard.push_assistant_reply(reply);
            }
        }
    }

    /// Apply every event already queued without waiting. Returns how many
    /// were applied.
    pub fn drain_events(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events.try_recv() {
            self.apply(event);
            applied += 1;
        }
        applied
    }

    pub fn export(&self, directory: &Path) -> Result<PathBuf> {
        export::write_export(&self.dashboard, directory, Utc::now())
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Cancel all timers. Events already queued are left in the channel.
    pub fn shutdown(&mut self) {
        self.scheduler.shutdown();
        info!("Session shut down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::CHAT_RESPONSES;
    use crate::types::Sender;

    fn session() -> Session {
        Session::with_generator(&DashboardConfig::default(), MockDataGenerator::seeded(31))
    }

    fn count(session: &Session, sender: Sender) -> usize {
        session.dashboard.chat.iter().filter(|m| m.sender == sender).count()
    }

    #[tokio::test(start_paused = true)]
    async fn test_chat_reply_arrives_after_delay() {
        let mut session = session();
        let assistants_before = count(&session, Sender::Assistant);

        session.dashboard.chat_input = "test".to_string();
        assert!(session.send_chat());

        // User message lands synchronously
        assert_eq!(count(&session, Sender::User), 1);
        assert_eq!(session.dashboard.chat.last().unwrap().text, "test");

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert_eq!(session.drain_events(), 0);
        assert_eq!(count(&session, Sender::Assistant), assistants_before);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(session.drain_events(), 1);
        assert_eq!(count(&session, Sender::Assistant), assistants_before + 1);

        let reply = session.dashboard.chat.last().unwrap();
        assert_eq!(reply.sender, Sender::Assistant);
        assert!(CHAT_RESPONSES.contains(&reply.text.as_str()));

        // Exactly one reply, no matter how long we wait
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(session.drain_events(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_sends_each_get_a_reply() {
        let mut session = session();

        for text in ["one", "two", "three"] {
            session.dashboard.chat_input = text.to_string();
            assert!(session.send_chat());
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        assert_eq!(session.scheduler().pending_replies(), 3);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(session.drain_events(), 3);
        assert_eq!(count(&session, Sender::User), 3);
        // Greeting plus three replies
        assert_eq!(count(&session, Sender::Assistant), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_chat_schedules_nothing() {
        let mut session = session();
        session.dashboard.chat_input = " ".to_string();

        assert!(!session.send_chat());
        assert_eq!(session.scheduler().pending_replies(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_fires_every_interval() {
        let mut session = session();
        let weather = session.dashboard.weather.clone();

        tokio::time::sleep(Duration::from_secs(29)).await;
        assert_eq!(session.drain_events(), 0);
        assert_eq!(session.dashboard.weather, weather);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(session.drain_events(), 1);
        assert_eq!(session.dashboard.refresh_count, 1);
        assert_ne!(session.dashboard.weather, weather);

        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(session.drain_events(), 1);
        assert_eq!(session.dashboard.refresh_count, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_cancels_timers() {
        let mut session = session();
        session.dashboard.chat_input = "hello".to_string();
        session.send_chat();
        assert!(session.scheduler().is_refreshing());

        session.shutdown();
        tokio::time::sleep(Duration::from_secs(120)).await;

        assert_eq!(session.drain_events(), 0);
        assert_eq!(session.dashboard.refresh_count, 0);
        assert!(!session.scheduler().is_refreshing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_next_event_waits_for_refresh() {
        let mut session = session();

        let event = session.next_event().await;
        assert_eq!(event, Some(ShellEvent::Refresh));
        session.apply(ShellEvent::Refresh);
        assert_eq!(session.dashboard.refresh_count, 1);
    }
}
