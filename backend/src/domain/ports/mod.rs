//! Domain ports and supporting types for the hexagonal boundary.

mod simulated_actions;

#[cfg(test)]
pub use simulated_actions::MockSimulatedActions;
pub use simulated_actions::{
    ActionReceipt, FixtureSimulatedActions, SimulatedAction, SimulatedActionError,
    SimulatedActions,
};
