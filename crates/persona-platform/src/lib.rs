pub mod completion;
pub mod storage;
