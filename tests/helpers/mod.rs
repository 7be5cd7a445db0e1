#![allow(dead_code)]
pub mod owners;
pub mod storage;

pub use owners::*;
pub use storage::*;
