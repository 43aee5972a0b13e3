use crate::domain::gateway::{GatewayReply, GatewayRequest, TransportError};
use crate::domain::ports::GatewayClient;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Default)]
struct Script {
    replies: VecDeque<GatewayReply>,
    requests: Vec<GatewayRequest>,
}

/// Gateway client that answers from a queue of prepared replies.
///
/// Used to replay recorded gateway traffic and in tests. Every call records
/// the request it received. An empty queue answers with a transport error.
#[derive(Default, Clone)]
pub struct ScriptedGateway {
    script: Arc<Mutex<Script>>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, reply: GatewayReply) {
        self.lock().replies.push_back(reply);
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<GatewayRequest> {
        self.lock().requests.clone()
    }

    pub fn pending_replies(&self) -> usize {
        self.lock().replies.len()
    }

    /// Drops replies no call consumed and returns how many there were.
    pub fn discard_pending(&self) -> usize {
        let mut script = self.lock();
        let unused = script.replies.len();
        script.replies.clear();
        unused
    }

    fn lock(&self) -> MutexGuard<'_, Script> {
        // A panic while holding the lock cannot leave the queue half-updated.
        self.script.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl GatewayClient for ScriptedGateway {
    async fn call(&self, request: &GatewayRequest) -> GatewayReply {
        let mut script = self.lock();
        script.requests.push(request.clone());
        script.replies.pop_front().unwrap_or_else(|| {
            Err(TransportError::Network(format!(
                "no scripted reply for {} on order {}",
                request.operation, request.order_id
            )))
        })
    }
}
