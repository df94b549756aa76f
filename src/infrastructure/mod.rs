pub mod content;
pub mod database;
pub mod remote;
pub mod repositories;
pub mod time;
