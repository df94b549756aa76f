pub mod article;
pub mod creator;
pub mod errors;
