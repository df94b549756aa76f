// src/infrastructure/remote/mod.rs
mod creator_directory;
mod error;
mod publish_sink;

pub use creator_directory::HttpCreatorDirectory;
pub use error::{RemoteError, map_reqwest};
pub use publish_sink::HttpPublishSink;
