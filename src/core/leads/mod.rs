//! Lead intake for the server
//!
//! The landing page posts each completed lead form here without waiting for
//! the outcome. This module provides:
//! - Required-field checks mirroring the wizard's step gates
//! - Stamping leads with an id and receive time
//! - Delivery to a log sink or an outbound webhook
//! - REST API endpoint `POST /api/leads`

pub mod api;
pub mod service;
pub mod sink;

pub use api::{LeadApiState, leads_router};
pub use service::{LeadError, LeadRecord, LeadService};
pub use sink::LeadSink;
