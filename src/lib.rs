pub mod config;
pub mod logger;
pub mod server;
pub mod post;
pub mod post_store;
pub mod collection;
pub mod search;
pub mod category_filter;
pub mod post_render;
pub mod post_processor;
pub mod content;
pub mod view;
pub mod text_utils;
mod post_list;
pub mod query_string;
mod test_data;
