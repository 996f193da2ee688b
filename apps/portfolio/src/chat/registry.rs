//! Per-visitor chat panels, kept in memory only.
//!
//! A panel is created when a visitor first opens the chat and lives until the
//! page is unloaded (explicit `remove`), it sits idle past the TTL, or the
//! process shuts down. Nothing is persisted.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

use crate::chat::controller::{Assistant, ChatController};
use crate::chat::ChatError;

pub type AssistantFactory = Arc<dyn Fn() -> Box<dyn Assistant> + Send + Sync>;

pub struct ChatRegistry {
    panels: RwLock<HashMap<Uuid, Arc<ChatController>>>,
    factory: AssistantFactory,
    greeting: String,
    idle_ttl: Duration,
    capacity: usize,
}

impl ChatRegistry {
    pub fn new(
        factory: AssistantFactory,
        greeting: impl Into<String>,
        idle_ttl: Duration,
        capacity: usize,
    ) -> Self {
        Self {
            panels: RwLock::new(HashMap::new()),
            factory,
            greeting: greeting.into(),
            idle_ttl,
            capacity,
        }
    }

    /// Creates a new, open panel with its own assistant.
    ///
    /// The capacity check and the insert share one write lock, so concurrent
    /// creates can never push the registry past `capacity`.
    pub async fn create(&self) -> Result<Arc<ChatController>, ChatError> {
        if self.len().await >= self.capacity {
            self.sweep_idle(Instant::now()).await;
        }

        let id = Uuid::new_v4();
        let panel = Arc::new(ChatController::new(id, self.greeting.clone(), (self.factory)()));
        panel.open().await;

        {
            let mut panels = self.panels.write().await;
            if panels.len() >= self.capacity {
                warn!(capacity = self.capacity, "Chat registry full");
                return Err(ChatError::AtCapacity(self.capacity));
            }
            panels.insert(id, panel.clone());
        }

        info!(chat_id = %id, "Chat panel created");
        Ok(panel)
    }

    pub async fn get(&self, id: Uuid) -> Option<Arc<ChatController>> {
        self.panels.read().await.get(&id).cloned()
    }

    /// Removes and tears down a panel. Returns false if it did not exist.
    pub async fn remove(&self, id: Uuid) -> bool {
        let removed = self.panels.write().await.remove(&id);
        match removed {
            Some(panel) => {
                panel.teardown().await;
                true
            }
            None => false,
        }
    }

    pub async fn len(&self) -> usize {
        self.panels.read().await.len()
    }

    /// Tears down panels idle for longer than the TTL. Panels waiting on a
    /// reply are never swept.
    pub async fn sweep_idle(&self, now: Instant) -> usize {
        let expired: Vec<Arc<ChatController>> = {
            let mut panels = self.panels.write().await;
            let mut expired = Vec::new();
            for panel in panels.values() {
                if panel.close_if_idle(now, self.idle_ttl).await {
                    expired.push(panel.clone());
                }
            }
            for panel in &expired {
                panels.remove(&panel.id());
            }
            expired
        };

        for panel in &expired {
            panel.teardown().await;
        }

        if !expired.is_empty() {
            info!(removed = expired.len(), "Swept idle chat panels");
        }
        expired.len()
    }

    pub async fn close_all(&self) {
        let panels: Vec<Arc<ChatController>> =
            self.panels.write().await.drain().map(|(_, p)| p).collect();
        for panel in &panels {
            panel.teardown().await;
        }
        info!(count = panels.len(), "All chat panels closed");
    }

    /// Runs `sweep_idle` on a fixed interval until the task is aborted.
    pub fn spawn_sweeper(self: Arc<Self>, every: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            ticker.tick().await;
            loop {
                ticker.tick().await;
                self.sweep_idle(Instant::now()).await;
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;
    use tokio::sync::Notify;

    struct Canned;

    #[async_trait]
    impl Assistant for Canned {
        async fn reply(&mut self, message: &str) -> Result<String, LlmError> {
            Ok(format!("you said: {message}"))
        }
    }

    /// Signals that a request started, then never answers.
    struct Stalled {
        started: Arc<Notify>,
    }

    #[async_trait]
    impl Assistant for Stalled {
        async fn reply(&mut self, _message: &str) -> Result<String, LlmError> {
            self.started.notify_one();
            std::future::pending().await
        }
    }

    fn registry(capacity: usize, ttl: Duration) -> ChatRegistry {
        let factory: AssistantFactory = Arc::new(|| Box::new(Canned) as Box<dyn Assistant>);
        ChatRegistry::new(factory, "Hello!", ttl, capacity)
    }

    #[tokio::test]
    async fn test_create_returns_open_panel_with_greeting() {
        let reg = registry(10, Duration::from_secs(60));
        let panel = reg.create().await.unwrap();
        let snap = panel.snapshot().await;
        assert!(snap.open);
        assert_eq!(snap.messages[0].text, "Hello!");
        assert!(reg.get(panel.id()).await.is_some());
    }

    #[tokio::test]
    async fn test_panels_are_independent() {
        let reg = registry(10, Duration::from_secs(60));
        let a = reg.create().await.unwrap();
        let b = reg.create().await.unwrap();
        a.submit("ping").await;

        assert_eq!(a.snapshot().await.messages.len(), 3);
        assert_eq!(b.snapshot().await.messages.len(), 1);
    }

    #[tokio::test]
    async fn test_remove_unknown_is_false() {
        let reg = registry(10, Duration::from_secs(60));
        assert!(!reg.remove(Uuid::new_v4()).await);
    }

    #[tokio::test]
    async fn test_sweep_removes_only_idle_panels() {
        let reg = registry(10, Duration::from_secs(60));
        let panel = reg.create().await.unwrap();

        assert_eq!(reg.sweep_idle(Instant::now()).await, 0);
        let later = Instant::now() + Duration::from_secs(61);
        assert_eq!(reg.sweep_idle(later).await, 1);
        assert!(reg.get(panel.id()).await.is_none());
    }

    #[tokio::test]
    async fn test_capacity_limit() {
        let reg = registry(1, Duration::from_secs(3600));
        reg.create().await.unwrap();
        let err = reg.create().await.err().unwrap();
        assert!(matches!(err, ChatError::AtCapacity(1)));
    }

    #[tokio::test]
    async fn test_full_registry_makes_room_by_sweeping() {
        let reg = registry(1, Duration::ZERO);
        let first = reg.create().await.unwrap();
        let second = reg.create().await.unwrap();
        assert_ne!(first.id(), second.id());
        assert_eq!(reg.len().await, 1);
    }

    #[tokio::test]
    async fn test_close_all_empties_registry() {
        let reg = registry(10, Duration::from_secs(60));
        let panel = reg.create().await.unwrap();
        reg.create().await.unwrap();
        reg.close_all().await;
        assert_eq!(reg.len().await, 0);
        assert!(!panel.snapshot().await.open);
    }

    #[tokio::test]
    async fn test_abandoned_submit_leaves_panel_sweepable() {
        let ttl = Duration::from_secs(60);
        let started = Arc::new(Notify::new());
        let factory: AssistantFactory = {
            let started = started.clone();
            Arc::new(move || {
                Box::new(Stalled {
                    started: started.clone(),
                }) as Box<dyn Assistant>
            })
        };
        let reg = ChatRegistry::new(factory, "Hello!", ttl, 1);
        let panel = reg.create().await.unwrap();

        let task = {
            let panel = panel.clone();
            tokio::spawn(async move { panel.submit("hello").await })
        };
        started.notified().await;
        task.abort();
        let _ = task.await;

        assert!(!panel.is_loading().await);
        let later = Instant::now() + ttl + Duration::from_secs(1);
        assert_eq!(reg.sweep_idle(later).await, 1);
        assert!(reg.get(panel.id()).await.is_none());
        assert!(reg.create().await.is_ok(), "capacity freed");
    }

    #[tokio::test]
    async fn test_sweep_keeps_panel_touched_after_deadline() {
        let ttl = Duration::from_secs(60);
        let reg = registry(10, ttl);
        let panel = reg.create().await.unwrap();

        // By this sweep time the creation alone would be stale; the later
        // submission is not.
        tokio::time::sleep(Duration::from_millis(5)).await;
        let deadline = Instant::now();
        panel.submit("still here").await;

        let now = deadline + ttl - Duration::from_millis(1);
        assert_eq!(reg.sweep_idle(now).await, 0);
        assert!(reg.get(panel.id()).await.is_some());
        assert!(panel.snapshot().await.open);
    }

    #[tokio::test]
    async fn test_concurrent_creates_respect_capacity() {
        let reg = Arc::new(registry(4, Duration::from_secs(3600)));
        let tasks: Vec<_> = (0..16)
            .map(|_| {
                let reg = reg.clone();
                tokio::spawn(async move { reg.create().await.is_ok() })
            })
            .collect();

        let mut created = 0;
        for task in tasks {
            if task.await.unwrap() {
                created += 1;
            }
        }
        assert_eq!(created, 4);
        assert_eq!(reg.len().await, 4);
    }
}
