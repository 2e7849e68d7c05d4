pub mod post_view;
