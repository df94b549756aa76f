pub mod entity;
pub mod repository;
pub mod status;
pub mod value_objects;

pub use entity::{ArticleSummary, ModerationState, NewArticleSummary, SummaryUpdate};
pub use repository::{ContentStore, SummaryStore};
pub use status::ModerationStatus;
pub use value_objects::{
    ArticleContent, ArticleId, ArticleTitle, ModeratorComment, PageNumber, PageRequest,
};
