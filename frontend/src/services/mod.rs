pub mod delay;
pub mod directory;
pub mod dom;
pub mod logging;
pub mod storage;
