use std::sync::Arc;

use crate::services::{CodeHostService, TicketTrackerService};

/// Service seams the workflow runs against; swapped for fakes in tests.
#[derive(Clone)]
pub struct AppContext {
    pub ticket_tracker: Arc<dyn TicketTrackerService>,
    pub code_host: Arc<dyn CodeHostService>,
}

impl AppContext {
    pub fn new(
        ticket_tracker: Arc<dyn TicketTrackerService>,
        code_host: Arc<dyn CodeHostService>,
    ) -> Self {
        Self {
            ticket_tracker,
            code_host,
        }
    }
}
