pub mod download;
pub mod load_state;
pub mod navigation;
pub mod storage;
pub mod time;
