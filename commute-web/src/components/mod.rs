pub(crate) mod add_stop_form;
pub(crate) mod confirm_dialog;
pub(crate) mod header_nav_item;
pub(crate) mod hub_card;
pub(crate) mod loading;
pub(crate) mod marketing;
pub(crate) mod stat_card;
pub(crate) mod user_confirmation_dialogs;
pub(crate) mod user_dropdown;
pub(crate) mod user_pagination;
pub(crate) mod user_search_bar;
pub(crate) mod user_table;

// Re-export components for convenience
pub use add_stop_form::AddStopForm;
pub use hub_card::HubCard;
pub use stat_card::StatCard;
pub use user_confirmation_dialogs::UserConfirmationDialogs;
pub use user_pagination::UserPagination;
pub use user_search_bar::UserSearchBar;
pub use user_table::UserTable;
