pub mod resume;
pub mod storage;
