//! UI Components
//!
//! Reusable Leptos components.

mod ambient_mixer;
mod category_board;
mod category_section;
mod context_menu;
mod edit_modal;
mod greeting;
mod header_bar;
mod hero;
mod link_card;
mod style_modal;
mod widgets;

pub use ambient_mixer::AmbientMixer;
pub use category_board::CategoryBoard;
pub use category_section::CategorySection;
pub use context_menu::ContextMenu;
pub use edit_modal::EditModal;
pub use greeting::Greeting;
pub use header_bar::HeaderBar;
pub use hero::Hero;
pub use link_card::LinkCard;
pub use style_modal::StyleModal;
pub use widgets::Widgets;
