pub mod filter_panel;
pub mod load_state;
pub mod page_header;
pub mod pagination_controls;

pub use filter_panel::FilterPanel;
pub use load_state::{ErrorState, LoadingState};
pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
