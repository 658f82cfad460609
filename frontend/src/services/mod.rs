pub mod logging;
pub mod shop;
pub mod sink;
pub mod storage;
