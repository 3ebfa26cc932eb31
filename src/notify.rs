//! User-facing notifications
//!
//! A small event bus with an explicit lifecycle: the host creates it, hands
//! it to whatever needs to publish, and disposes it on teardown. There are no
//! timers; the host calls [`NotificationBus::prune_expired`] from its tick.

use std::fmt;
use std::time::{Duration, Instant};

/// Default time a notification stays visible
pub const DEFAULT_DURATION: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub message: String,
    pub created: Instant,
    /// `None` stays until dismissed
    pub duration: Option<Duration>,
}

impl Notification {
    pub fn is_expired(&self, now: Instant) -> bool {
        match self.duration {
            Some(d) => now.saturating_duration_since(self.created) >= d,
            None => false,
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind.as_str(), self.message)
    }
}

/// Change delivered to subscribers
#[derive(Debug, Clone, PartialEq)]
pub enum BusEvent {
    Published(Notification),
    Dismissed(NotificationId),
    Expired(Vec<NotificationId>),
}

type Subscriber = Box<dyn FnMut(&BusEvent)>;

pub struct NotificationBus {
    notifications: Vec<Notification>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_notification: u64,
    next_subscription: u64,
    disposed: bool,
}

impl Default for NotificationBus {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for NotificationBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationBus")
            .field("notifications", &self.notifications)
            .field("subscribers", &self.subscribers.len())
            .field("disposed", &self.disposed)
            .finish()
    }
}

impl NotificationBus {
    pub fn new() -> Self {
        Self {
            notifications: Vec::new(),
            subscribers: Vec::new(),
            next_notification: 0,
            next_subscription: 0,
            disposed: false,
        }
    }

    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(&BusEvent) + 'static,
    {
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        if !self.disposed {
            self.subscribers.push((id, Box::new(subscriber)));
        }
        id
    }

    /// Remove a subscriber; returns false if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Publish with the default duration
    pub fn publish(
        &mut self,
        kind: NotificationKind,
        message: impl Into<String>,
    ) -> Option<NotificationId> {
        self.publish_for(kind, message, Some(DEFAULT_DURATION))
    }

    /// Publish a notification; ignored once the bus is disposed
    pub fn publish_for(
        &mut self,
        kind: NotificationKind,
        message: impl Into<String>,
        duration: Option<Duration>,
    ) -> Option<NotificationId> {
        if self.disposed {
            return None;
        }

        self.next_notification += 1;
        let notification = Notification {
            id: NotificationId(self.next_notification),
            kind,
            message: message.into(),
            created: Instant::now(),
            duration,
        };
        let id = notification.id;
        tracing::debug!(kind = kind.as_str(), message = %notification.message, "notification");

        self.notifications.push(notification.clone());
        self.emit(&BusEvent::Published(notification));
        Some(id)
    }

    pub fn success(&mut self, message: impl Into<String>) -> Option<NotificationId> {
        self.publish(NotificationKind::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> Option<NotificationId> {
        self.publish(NotificationKind::Error, message)
    }

    pub fn warning(&mut self, message: impl Into<String>) -> Option<NotificationId> {
        self.publish(NotificationKind::Warning, message)
    }

    pub fn info(&mut self, message: impl Into<String>) -> Option<NotificationId> {
        self.publish(NotificationKind::Info, message)
    }

    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        let removed = self.notifications.len() != before;
        if removed {
            self.emit(&BusEvent::Dismissed(id));
        }
        removed
    }

    /// Drop every notification whose duration has elapsed at `now`
    pub fn prune_expired(&mut self, now: Instant) -> usize {
        let expired: Vec<NotificationId> = self
            .notifications
            .iter()
            .filter(|n| n.is_expired(now))
            .map(|n| n.id)
            .collect();
        if expired.is_empty() {
            return 0;
        }

        self.notifications.retain(|n| !n.is_expired(now));
        let count = expired.len();
        self.emit(&BusEvent::Expired(expired));
        count
    }

    pub fn active(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Tear down: drop subscribers and notifications, ignore later publishes
    pub fn dispose(&mut self) {
        self.subscribers.clear();
        self.notifications.clear();
        self.disposed = true;
    }

    fn emit(&mut self, event: &BusEvent) {
        for (_, subscriber) in &mut self.subscribers {
            subscriber(event);
        }
    }
}
