pub mod mock;
pub mod network;
pub mod search;
pub mod sets;
pub mod statistics;
