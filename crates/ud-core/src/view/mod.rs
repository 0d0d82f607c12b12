pub mod edit_view;
pub mod list_view;
pub mod success_notice;
