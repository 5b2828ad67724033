pub mod admin_table;
pub mod custom_alert;
pub mod donor_card;
pub mod donor_grid;
pub mod forms;
pub mod header;
pub mod scroll_top_button;
pub mod search_bar;
pub mod stats_cards;

pub use admin_table::AdminTable;
pub use custom_alert::CustomAlert;
pub use donor_grid::DonorGrid;
pub use header::Header;
pub use scroll_top_button::ScrollTopButton;
pub use search_bar::SearchBar;
pub use stats_cards::StatsCards;
