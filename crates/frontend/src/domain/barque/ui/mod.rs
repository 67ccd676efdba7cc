pub mod import_widget;
pub mod list;
