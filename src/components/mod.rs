//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod disclaimer;
mod error_banner;
mod list_editor;
mod menu_bar;
mod notice;
mod text_field;

pub use delete_confirm_button::DeleteConfirmButton;
pub use disclaimer::Disclaimer;
pub use error_banner::ErrorBanner;
pub use list_editor::ListEditor;
pub use menu_bar::MenuBar;
pub use notice::Notice;
pub use text_field::{focus_field, TextArea, TextField};
