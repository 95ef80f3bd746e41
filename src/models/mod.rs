//! Domain models for the relay pipeline.

mod push;

pub use push::{
    OutboundPush, PresenceSnapshot, PushDraft, PushRequest, SkipReason, UnreadSnapshot,
};
