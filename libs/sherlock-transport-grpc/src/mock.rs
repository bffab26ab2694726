//! In-memory [`RpcChannel`] for tests.
//!
//! Replies are registered per method path, either queued (consumed once, in
//! order) or sticky (returned whenever the queue for that path is empty).
//! Every call is recorded with its encoded request so tests can assert both
//! that nothing was sent and exactly what was sent.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use prost::Message;
use tonic::Status;

use crate::rpc::RpcChannel;

type Reply = Result<Vec<u8>, Status>;

/// One call observed by a [`MockChannel`].
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub path: &'static str,
    pub body: Vec<u8>,
}

impl RecordedCall {
    /// Decode the recorded request body.
    ///
    /// # Errors
    /// Returns the decode error if the body is not a valid `M`.
    pub fn decode<M: Message + Default>(&self) -> Result<M, prost::DecodeError> {
        M::decode(self.body.as_slice())
    }
}

#[derive(Debug, Default)]
struct MockState {
    queued: HashMap<&'static str, VecDeque<Reply>>,
    sticky: HashMap<&'static str, Reply>,
    calls: Vec<RecordedCall>,
}

/// Scriptable channel; clones share the same script and call log.
#[derive(Debug, Clone, Default)]
pub struct MockChannel {
    state: Arc<Mutex<MockState>>,
}

impl MockChannel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply for the next call to `path`.
    pub fn respond<M: Message>(&self, path: &'static str, reply: &M) -> &Self {
        self.state
            .lock()
            .queued
            .entry(path)
            .or_default()
            .push_back(Ok(reply.encode_to_vec()));
        self
    }

    /// Queue a failure for the next call to `path`.
    pub fn fail(&self, path: &'static str, status: Status) -> &Self {
        self.state
            .lock()
            .queued
            .entry(path)
            .or_default()
            .push_back(Err(status));
        self
    }

    /// Reply with `reply` to every call to `path` that has nothing queued.
    pub fn respond_always<M: Message>(&self, path: &'static str, reply: &M) -> &Self {
        self.state
            .lock()
            .sticky
            .insert(path, Ok(reply.encode_to_vec()));
        self
    }

    /// Fail every call to `path` that has nothing queued.
    pub fn fail_always(&self, path: &'static str, status: Status) -> &Self {
        self.state.lock().sticky.insert(path, Err(status));
        self
    }

    /// All calls, in the order they were made.
    #[must_use]
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.lock().calls.clone()
    }

    /// Calls made to `path`, in order.
    #[must_use]
    pub fn calls_to(&self, path: &str) -> Vec<RecordedCall> {
        self.state
            .lock()
            .calls
            .iter()
            .filter(|call| call.path == path)
            .cloned()
            .collect()
    }

    /// Paths of all calls, in order.
    #[must_use]
    pub fn paths(&self) -> Vec<&'static str> {
        self.state.lock().calls.iter().map(|call| call.path).collect()
    }

    /// Decode the most recent request sent to `path`.
    #[must_use]
    pub fn last_request<M: Message + Default>(&self, path: &str) -> Option<M> {
        self.calls_to(path).last().and_then(|call| call.decode().ok())
    }

    pub fn clear_calls(&self) {
        self.state.lock().calls.clear();
    }

    fn next_reply(&self, path: &'static str, body: Vec<u8>) -> Reply {
        let mut state = self.state.lock();
        state.calls.push(RecordedCall { path, body });

        if let Some(reply) = state.queued.get_mut(path).and_then(VecDeque::pop_front) {
            return reply;
        }
        state
            .sticky
            .get(path)
            .cloned()
            .unwrap_or_else(|| Err(Status::unimplemented(format!("no reply scripted for {path}"))))
    }
}

#[async_trait]
impl RpcChannel for MockChannel {
    async fn unary<Req, Resp>(&self, path: &'static str, request: Req) -> Result<Resp, Status>
    where
        Req: Message + Send + Sync + 'static,
        Resp: Message + Default + Send + Sync + 'static,
    {
        let bytes = self.next_reply(path, request.encode_to_vec())?;
        Resp::decode(bytes.as_slice())
            .map_err(|e| Status::internal(format!("mock reply for {path} does not decode: {e}")))
    }
}
