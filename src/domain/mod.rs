pub mod branch;
pub mod event;
pub mod ticket;
