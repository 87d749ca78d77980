pub mod pages;
pub mod reports;
pub mod stats;
