//! Queue endpoint

use async_trait::async_trait;
use cardqueue_core::domain::job::JobRecord;
use tracing::debug;

use crate::QueueClient;
use crate::error::Result;

/// Source of queue snapshots
///
/// Implemented by [`QueueClient`]; pollers depend on this trait so tests can
/// script responses without a server.
#[async_trait]
pub trait QueueSource: Send + Sync {
    /// Fetches the current queue
    async fn fetch_queue(&self) -> Result<Vec<JobRecord>>;
}

impl QueueClient {
    /// Fetch the current card queue
    ///
    /// # Returns
    /// The job records in server order
    pub async fn fetch_queue(&self) -> Result<Vec<JobRecord>> {
        let response = self.client.get(&self.endpoint).send().await?;

        let jobs: Vec<JobRecord> = self.handle_response(response).await?;
        debug!("Fetched {} job(s) from {}", jobs.len(), self.endpoint);

        Ok(jobs)
    }
}

#[async_trait]
impl QueueSource for QueueClient {
    async fn fetch_queue(&self) -> Result<Vec<JobRecord>> {
        QueueClient::fetch_queue(self).await
    }
}
