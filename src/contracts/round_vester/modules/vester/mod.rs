pub mod calculator;
pub mod errors;
pub mod events;
pub mod storage_fields;
pub mod structs;
pub mod traits;
pub mod transfer;
