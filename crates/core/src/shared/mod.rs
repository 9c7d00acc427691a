pub mod constants;
pub mod frame;
pub mod imageops;
pub mod region;
