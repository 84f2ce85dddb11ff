pub mod admin;
pub mod blog_post;
pub mod category;
pub mod product;
pub mod submission;
