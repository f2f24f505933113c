// Composition root for the course entitlement panel.
//
// Responsibilities
// - Read config from environment.
// - Install the tracing subscriber.
// - Instantiate the HTTP enrollment client and wire it, with the page supplied view and
//   selector, into an EntitlementPanel.

pub mod bootstrap;
pub mod config;
pub mod telemetry;
