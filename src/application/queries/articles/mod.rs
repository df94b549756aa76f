mod get_by_id;
mod list_all;
mod list_own;
mod ownership;
mod service;

pub use get_by_id::GetArticleByIdQuery;
pub use list_all::ListAllArticlesQuery;
pub use list_own::ListCreatorArticlesQuery;
pub use ownership::CheckOwnershipQuery;
pub use service::{ARTICLE_SUMMARIES_PAGE_SIZE, ArticleQueryService};
