pub mod model;
pub mod page;
mod tabs;
pub mod view_model;

pub use page::BidDetails;
