//! Shared test helpers: mock collaborators that record their calls.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use minerva::error::{MinervaError, Result};
use minerva::realtime::{ConversationSession, RealtimeModel, RealtimeProvider};
use minerva::topic::{TopicRecord, TopicStore};
use minerva::transport::{Participant, RoomTransport};
use minerva::types::{ConversationItem, Role};

/// Canned outcome for the topic lookup.
#[derive(Debug, Clone)]
pub enum TopicLookup {
    Found(TopicRecord),
    Missing,
    Fails,
}

/// Topic store returning a canned outcome and counting calls.
pub struct MockTopicStore {
    outcome: TopicLookup,
    pub calls: AtomicUsize,
}

impl MockTopicStore {
    pub fn new(outcome: TopicLookup) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn with_topic(id: &str, topic: &str) -> Arc<Self> {
        Self::new(TopicLookup::Found(TopicRecord {
            id: id.to_string(),
            topic: Some(topic.to_string()),
        }))
    }
}

#[async_trait]
impl TopicStore for MockTopicStore {
    async fn fetch(&self, room_id: &str) -> Result<Option<TopicRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            TopicLookup::Found(record) => {
                assert_eq!(record.id, room_id, "lookup must be keyed by room id");
                Ok(Some(record.clone()))
            }
            TopicLookup::Missing => Ok(None),
            TopicLookup::Fails => Err(MinervaError::datastore(503, "datastore unreachable")),
        }
    }
}

/// Transport with scripted connect/participant behavior.
pub struct MockTransport {
    room: String,
    participant: Option<String>,
    fail_connect: bool,
    pub connected: bool,
}

impl MockTransport {
    pub fn new(room: &str, participant: &str) -> Self {
        Self {
            room: room.to_string(),
            participant: Some(participant.to_string()),
            fail_connect: false,
            connected: false,
        }
    }

    /// A transport whose participant never arrives.
    pub fn without_participant(room: &str) -> Self {
        Self {
            room: room.to_string(),
            participant: None,
            fail_connect: false,
            connected: false,
        }
    }

    /// A transport that refuses the connection.
    pub fn refusing(room: &str) -> Self {
        Self {
            room: room.to_string(),
            participant: Some("unused".to_string()),
            fail_connect: true,
            connected: false,
        }
    }
}

#[async_trait]
impl RoomTransport for MockTransport {
    fn room_name(&self) -> &str {
        &self.room
    }

    async fn connect(&mut self) -> Result<()> {
        if self.fail_connect {
            return Err(MinervaError::Transport("connection refused".into()));
        }
        self.connected = true;
        Ok(())
    }

    async fn wait_for_participant(&mut self) -> Result<Participant> {
        assert!(self.connected, "wait_for_participant before connect");
        match &self.participant {
            Some(identity) => Ok(Participant {
                identity: identity.clone(),
            }),
            None => futures::future::pending().await,
        }
    }
}

/// Everything the mock realtime provider observed.
#[derive(Debug, Default)]
pub struct SessionRecord {
    pub sessions_started: usize,
    pub instructions: Option<String>,
    pub events: Vec<SessionEvent>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Append { role: Role, text: String },
    ResponseRequested,
}

/// Realtime provider handing out recording sessions.
pub struct MockRealtime {
    fail_start: bool,
    record: Arc<Mutex<SessionRecord>>,
}

impl MockRealtime {
    pub fn new() -> (Arc<Self>, Arc<Mutex<SessionRecord>>) {
        let record = Arc::new(Mutex::new(SessionRecord::default()));
        let provider = Arc::new(Self {
            fail_start: false,
            record: Arc::clone(&record),
        });
        (provider, record)
    }

    pub fn failing() -> (Arc<Self>, Arc<Mutex<SessionRecord>>) {
        let record = Arc::new(Mutex::new(SessionRecord::default()));
        let provider = Arc::new(Self {
            fail_start: true,
            record: Arc::clone(&record),
        });
        (provider, record)
    }
}

#[async_trait]
impl RealtimeProvider for MockRealtime {
    async fn start_session(
        &self,
        model: &RealtimeModel,
        _room: &str,
        _participant: &Participant,
    ) -> Result<Box<dyn ConversationSession>> {
        if self.fail_start {
            return Err(MinervaError::Session("session start refused".into()));
        }
        let mut record = self.record.lock().unwrap();
        record.sessions_started += 1;
        record.instructions = Some(model.instructions.clone());
        Ok(Box::new(MockSession {
            record: Arc::clone(&self.record),
            items: Vec::new(),
        }))
    }
}

#[derive(Debug)]
struct MockSession {
    record: Arc<Mutex<SessionRecord>>,
    items: Vec<ConversationItem>,
}

#[async_trait]
impl ConversationSession for MockSession {
    async fn append_message(&mut self, role: Role, text: &str) -> Result<()> {
        self.record.lock().unwrap().events.push(SessionEvent::Append {
            role,
            text: text.to_string(),
        });
        self.items.push(ConversationItem::new(role, text));
        Ok(())
    }

    async fn request_response(&mut self) -> Result<()> {
        self.record
            .lock()
            .unwrap()
            .events
            .push(SessionEvent::ResponseRequested);
        Ok(())
    }

    fn items(&self) -> &[ConversationItem] {
        &self.items
    }
}
