//! Speech-recognition transport
//!
//! The session orchestrator treats speech recognition as an opaque
//! bidirectional stream: raw audio bytes go in, timestamped word events
//! come out. This module provides:
//! - The `SpeechTransport` / `SpeechStream` capability traits
//! - Typed events emitted by an open stream (`SpeechEvent`)
//! - A NATS-backed implementation that publishes audio frames and
//!   subscribes to recognizer results

pub mod messages;
pub mod nats;
mod transport;

pub use messages::{AudioFrameMessage, WordEventMessage};
pub use nats::NatsSpeechTransport;
pub use transport::{RecognitionConfig, SpeechEvent, SpeechStream, SpeechTransport, TimedWord};
