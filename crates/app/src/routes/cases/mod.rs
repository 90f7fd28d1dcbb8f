pub mod detail;
pub mod entries;
pub mod panels;
