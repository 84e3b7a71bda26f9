//! Election portal engine: ranking, the podium reveal timeline, the
//! celebration burst and the vote-counter tweens.
//!
//! The engine treats candidate and voter records as read-only
//! snapshots. It never mutates vote counts: it only ranks and animates
//! the counts it is given.

pub mod counter;
pub mod particles;
pub mod ranking;
pub mod reveal;
