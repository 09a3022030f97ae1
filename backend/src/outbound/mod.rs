//! Outbound adapters implementing domain ports.
//!
//! The dashboard has no external systems to call; the only driven port is
//! [`SimulatedActions`](crate::domain::ports::SimulatedActions), recorded to
//! the application log by [`actions::TracingSimulatedActions`].

pub mod actions;
