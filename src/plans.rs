use crate::{Plan, Result, TsuruClient};

impl TsuruClient {
    /// Lists resource plans. Also used as the liveness probe on connect.
    pub async fn list_plans(&self) -> Result<Vec<Plan>> {
        self.get(&["plans"]).await
    }
}
