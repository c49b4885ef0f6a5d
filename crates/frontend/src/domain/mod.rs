pub mod a001_branch;
pub mod a002_category;
pub mod a003_customer;
pub mod a004_quality;
pub mod a005_product;
pub mod a006_factory_status;
pub mod a007_bid;
