// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod journal;
pub mod remote;
pub mod stores;
pub mod time;

pub use journal::Journal;
pub use remote::{RecordingPublishSink, StaticCreatorDirectory};
pub use stores::{InMemoryContentStore, InMemorySummaryStore};
pub use time::{DummyClock, fixed_now};
