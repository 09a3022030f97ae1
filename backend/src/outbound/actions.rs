//! Log-backed adapter for placeholder page actions.

use async_trait::async_trait;
use tracing::info;

use crate::domain::UserId;
use crate::domain::ports::{
    ActionReceipt, SimulatedAction, SimulatedActionError, SimulatedActions,
};

/// Records every action as an `info` event and acknowledges it.
///
/// # Examples
/// ```
/// use finsage::domain::UserId;
/// use finsage::domain::ports::{SimulatedAction, SimulatedActions};
/// use finsage::outbound::actions::TracingSimulatedActions;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let action = SimulatedAction::DownloadReport { id: 1, name: "Q2 Cost Summary" };
/// let receipt = TracingSimulatedActions
///     .perform(&UserId::random(), &action)
///     .await
///     .unwrap();
/// assert_eq!(receipt.action, "download_report");
/// # });
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSimulatedActions;

#[async_trait]
impl SimulatedActions for TracingSimulatedActions {
    async fn perform(
        &self,
        actor: &UserId,
        action: &SimulatedAction,
    ) -> Result<ActionReceipt, SimulatedActionError> {
        let receipt = ActionReceipt::for_action(action);
        info!(
            user_id = %actor,
            action = receipt.action,
            detail = %receipt.message,
            "simulated action performed"
        );
        Ok(receipt)
    }
}
