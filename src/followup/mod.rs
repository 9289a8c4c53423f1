//! Follow-up question generation
//!
//! Partitions the transcript into time windows, asks the text-generation
//! backend for anchored questions grounded in those windows, and degrades
//! to a fixed static set when the backend fails or returns garbage. The
//! caller never sees a generation failure.

mod generator;
mod windows;

pub use generator::{FollowupDetail, FollowupGenerator, FollowupSet, QuestionAnchor};
pub use windows::{chunk_windows, single_window, FollowupWindow, WINDOW_MAX_CHARS, WINDOW_SECS};
