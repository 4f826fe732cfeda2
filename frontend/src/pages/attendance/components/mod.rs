pub mod history;
pub mod summary;
