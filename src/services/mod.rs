pub mod code_host;
pub mod ticket_tracker;

pub use code_host::CodeHostService;
pub use ticket_tracker::TicketTrackerService;
