pub mod detail;
pub mod panels;
pub mod results;
