// src/client/state.rs
// Each submission moves Idle -> Sending -> Idle. Replies and failures whose sequence number
// is not the in-flight one are ignored.

use super::render::{RenderOptions, THINKING, reply_message};
use super::transcript::{Message, Transcript};
use crate::message::CoachReply;

pub const FALLBACK_REPLY: &str = "Oops! I ran into an error. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Sending { seq: u64 },
}

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    InputChanged(String),
    Submit,
    ReplyReceived { seq: u64, reply: CoachReply },
    RequestFailed { seq: u64 },
}

/// Request the driver must send after a successful submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outbound {
    pub seq: u64,
    pub utterance: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatState {
    transcript: Transcript,
    input: String,
    phase: Phase,
    next_seq: u64,
    options: RenderOptions,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl ChatState {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            transcript: Transcript::new(),
            input: String::new(),
            phase: Phase::Idle,
            next_seq: 1,
            options,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_waiting(&self) -> bool {
        matches!(self.phase, Phase::Sending { .. })
    }

    /// `(state, event) -> state'`, plus the request to issue if the event started one.
    pub fn reduce(mut self, event: Event) -> (Self, Option<Outbound>) {
        match event {
            Event::InputChanged(input) => {
                self.input = input;
                (self, None)
            }
            Event::Submit => {
                let utterance = self.input.trim().to_string();
                if utterance.is_empty() || self.is_waiting() {
                    return (self, None);
                }
                let seq = self.next_seq;
                self.next_seq += 1;
                self.transcript.push(Message::user(utterance.clone()));
                self.input.clear();
                self.phase = Phase::Sending { seq };
                (self, Some(Outbound { seq, utterance }))
            }
            Event::ReplyReceived { seq, reply } => {
                if self.phase == (Phase::Sending { seq }) {
                    self.transcript.push(reply_message(&reply, self.options));
                    self.phase = Phase::Idle;
                }
                (self, None)
            }
            Event::RequestFailed { seq } => {
                if self.phase == (Phase::Sending { seq }) {
                    self.transcript.push(Message::assistant(FALLBACK_REPLY));
                    self.phase = Phase::Idle;
                }
                (self, None)
            }
        }
    }
}

/// Lines to display for the current state, including the pending indicator.
pub fn render(state: &ChatState) -> Vec<String> {
    let mut lines: Vec<String> = state
        .transcript()
        .messages()
        .iter()
        .map(super::render::render_message)
        .collect();
    if state.is_waiting() {
        lines.push(THINKING.to_string());
    }
    lines
}
