//! The sync engine owning the two poll timers.
//!
//! Two independent tasks: a fast poll against the selected room, alive only
//! while a room is selected and keyed by its id, and a slow cross-room scan
//! flipping unread flags. Both are explicit cancellable tasks, aborted on
//! room switch, room-set change and engine drop, so no timer ever acts on a
//! stale room identifier. All timeline state lives in the per-room keyed
//! [`MessageStore`], which also makes overlapping poll responses harmless:
//! the id-keyed merge is idempotent.

use std::sync::Arc;

use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinHandle;

use renraku_shared::time::now_millis;

use crate::config::SyncConfig;
use crate::domain::{
    ChatMessage, ChatRepository, ChatRoom, MessageStore, RoomId, Timestamp, UserId,
};
use crate::usecase::{SendMessageError, SendMessageUseCase, SyncRoomUseCase, TrackUnreadUseCase};

use super::event::SyncEvent;

/// Polling synchronization engine for the messages pane.
pub struct ChatSync {
    repository: Arc<dyn ChatRepository>,
    store: Arc<Mutex<MessageStore>>,
    config: SyncConfig,
    events: mpsc::UnboundedSender<SyncEvent>,
    /// Shared with the unread scan task so it always skips the live selection
    selected: Arc<Mutex<Option<RoomId>>>,
    room_poll: Option<JoinHandle<()>>,
    unread_poll: Option<JoinHandle<()>>,
}

impl ChatSync {
    /// Create an engine and the event stream the UI consumes.
    pub fn new(
        repository: Arc<dyn ChatRepository>,
        config: SyncConfig,
    ) -> (Self, mpsc::UnboundedReceiver<SyncEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let engine = Self {
            repository,
            store: Arc::new(Mutex::new(MessageStore::new())),
            config,
            events,
            selected: Arc::new(Mutex::new(None)),
            room_poll: None,
            unread_poll: None,
        };
        (engine, rx)
    }

    /// The shared message store (per-room timelines + unread set).
    pub fn store(&self) -> Arc<Mutex<MessageStore>> {
        self.store.clone()
    }

    /// The currently selected room, if any.
    pub async fn selected(&self) -> Option<RoomId> {
        self.selected.lock().await.clone()
    }

    /// Select a room: cancel the previous room's fast poll, load the room,
    /// clear its unread flag, and start polling it.
    ///
    /// Returns the room's sorted message snapshot. A failed initial fetch
    /// degrades to the locally known state (the poll retries anyway).
    pub async fn select_room(&mut self, room: RoomId) -> Vec<ChatMessage> {
        // Cancel the old selection's timer before anything else so a switch
        // never leaves two fast polls alive.
        if let Some(handle) = self.room_poll.take() {
            handle.abort();
        }
        *self.selected.lock().await = Some(room.clone());

        let sync = SyncRoomUseCase::new(self.repository.clone(), self.store.clone());
        if let Err(e) = sync.execute(&room).await {
            tracing::warn!("initial load failed for room {room}: {e}");
        }

        let snapshot = {
            let mut store = self.store.lock().await;
            store.mark_read(&room, Timestamp::new(now_millis()));
            store.messages(&room)
        };

        self.room_poll = Some(self.spawn_room_poll(room));
        snapshot
    }

    /// Drop the selection and its fast poll timer.
    pub async fn deselect(&mut self) {
        if let Some(handle) = self.room_poll.take() {
            handle.abort();
        }
        *self.selected.lock().await = None;
    }

    /// (Re)start the slow unread scan over the given room set.
    ///
    /// Cancels any previous scan task; with an empty room set no task runs
    /// at all.
    pub fn watch_rooms(&mut self, rooms: Vec<RoomId>) {
        if let Some(handle) = self.unread_poll.take() {
            handle.abort();
        }
        if rooms.is_empty() {
            return;
        }

        let usecase = TrackUnreadUseCase::new(self.repository.clone(), self.store.clone());
        let store = self.store.clone();
        let selected = self.selected.clone();
        let events = self.events.clone();
        let period = self.config.unread_poll;

        self.unread_poll = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            // Consume the immediate first tick so the first scan happens one
            // full period after startup.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let current = selected.lock().await.clone();
                let newly = usecase.execute(&rooms, current.as_ref()).await;
                if newly.is_empty() {
                    continue;
                }
                let unread = store.lock().await.unread_rooms();
                if events.send(SyncEvent::UnreadChanged { unread }).is_err() {
                    break;
                }
            }
        }));
    }

    /// Submit a message to the selected room and refresh the timeline.
    ///
    /// Mirrors the composer: on success the confirmed record is merged and
    /// a `RoomUpdated` event fires (the scroll-to-bottom analog).
    pub async fn send(
        &self,
        room: &ChatRoom,
        identity: &UserId,
        raw_content: &str,
    ) -> Result<ChatMessage, SendMessageError> {
        let usecase = SendMessageUseCase::new(self.repository.clone(), self.store.clone());
        let confirmed = usecase.execute(room, identity, raw_content).await?;

        let messages = self.store.lock().await.messages(&room.id);
        let _ = self.events.send(SyncEvent::RoomUpdated {
            room: room.id.clone(),
            messages,
        });
        Ok(confirmed)
    }

    fn spawn_room_poll(&self, room: RoomId) -> JoinHandle<()> {
        let usecase = SyncRoomUseCase::new(self.repository.clone(), self.store.clone());
        let store = self.store.clone();
        let events = self.events.clone();
        let period = self.config.room_poll;

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.tick().await;
            loop {
                ticker.tick().await;
                match usecase.execute(&room).await {
                    Ok(true) => {
                        let messages = store.lock().await.messages(&room);
                        let event = SyncEvent::RoomUpdated {
                            room: room.clone(),
                            messages,
                        };
                        if events.send(event).is_err() {
                            break;
                        }
                    }
                    Ok(false) => {}
                    // Silent degradation: log and wait for the next tick
                    Err(e) => tracing::warn!("poll failed for room {room}: {e}"),
                }
            }
        })
    }
}

impl Drop for ChatSync {
    fn drop(&mut self) {
        if let Some(handle) = self.room_poll.take() {
            handle.abort();
        }
        if let Some(handle) = self.unread_poll.take() {
            handle.abort();
        }
    }
}
