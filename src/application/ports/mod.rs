// src/application/ports/mod.rs
pub mod creators;
pub mod publishing;
pub mod time;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type CreatorDirectoryPort = dyn creators::CreatorDirectory;
pub type PublishSinkPort = dyn publishing::PublishSink;
pub type ClockPort = dyn time::Clock;
