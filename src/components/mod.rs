//! UI Components
//!
//! Reusable Leptos components.

mod spinner;
mod modal;
mod favorite_toggle;
mod create_counter_sheet;
mod add_anon_count_drawer;
mod add_count_dialog;
mod counter_card;
mod counter_list;
mod favorites_panel;

pub use spinner::Spinner;
pub use modal::Modal;
pub use favorite_toggle::FavoriteToggle;
pub use create_counter_sheet::CreateCounterSheet;
pub use add_anon_count_drawer::AddAnonCountDrawer;
pub use add_count_dialog::AddCountDialog;
pub use counter_card::CounterCard;
pub use counter_list::CounterList;
pub use favorites_panel::FavoritesPanel;
