//! Rendering and delivery of notification emails.
//!
//! - [`render`] turns a validated notification into the branded HTML body.
//! - [`transport`] defines the single-attempt [`EmailTransport`] capability.
//! - [`resend`] implements it against the Resend HTTP API.

pub mod render;
pub mod resend;
pub mod transport;

pub use render::render_email;
pub use resend::ResendTransport;
pub use transport::{DeliveryOutcome, EmailTransport, OutboundEmail, TransportError};
