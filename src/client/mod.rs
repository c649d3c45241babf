// src/client/mod.rs

pub mod render;
pub mod state;
pub mod transcript;
pub mod transport;

use tracing::error;

use self::render::RenderOptions;
use self::state::{ChatState, Event, Outbound};
use self::transport::CoachClient;

/// Runs exchanges against the endpoint, one at a time.
pub struct ChatSession {
    state: ChatState,
    client: CoachClient,
}

impl ChatSession {
    pub fn new(client: CoachClient, options: RenderOptions) -> Self {
        Self { state: ChatState::new(options), client }
    }

    pub fn state(&self) -> &ChatState {
        &self.state
    }

    pub fn dispatch(&mut self, event: Event) -> Option<Outbound> {
        let (next, outbound) = std::mem::take(&mut self.state).reduce(event);
        self.state = next;
        outbound
    }

    /// Submits `input` and waits for the reply. Returns `false` when the submit was dropped.
    pub async fn submit(&mut self, input: &str) -> bool {
        self.dispatch(Event::InputChanged(input.to_string()));
        let Some(Outbound { seq, utterance }) = self.dispatch(Event::Submit) else {
            return false;
        };

        let event = match self.client.send(&utterance).await {
            Ok(reply) => Event::ReplyReceived { seq, reply },
            Err(e) => {
                error!(error = %e, endpoint = self.client.endpoint(), "chat request failed");
                Event::RequestFailed { seq }
            }
        };
        self.dispatch(event);
        true
    }
}
