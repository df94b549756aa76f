// src/application/commands/articles/mod.rs
mod ask_edit;
mod create;
mod publish;
mod remove;
mod service;

pub use ask_edit::AskEditCommand;
pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use publish::PublishArticleCommand;
pub use remove::RemoveArticleCommand;
pub use service::ArticleCommandService;
