use std::ops::Range;
use std::sync::Arc;

use reqwest::{Client, StatusCode, Url, header::CONTENT_TYPE};
use tokio::time::Instant;
use tracing::debug;

use crate::dataset::Sampler;
use crate::metrics::{Outcome, OutcomeRecord, RequestFailure};
use crate::workload::{RequestBuilder, RequestTask};

#[must_use]
pub fn classify_status(status: StatusCode) -> Outcome {
    if status.is_success() {
        Outcome::Succeeded {
            status: status.as_u16(),
        }
    } else {
        Outcome::Failed(RequestFailure::Status(status.as_u16()))
    }
}

#[must_use]
pub fn classify_error(err: &reqwest::Error) -> Outcome {
    if err.is_timeout() {
        Outcome::Failed(RequestFailure::Timeout)
    } else {
        Outcome::Failed(RequestFailure::Transport)
    }
}

/// Sends one request and reads the full response body.
async fn execute(client: &Client, url: &Url, task: &RequestTask) -> Outcome {
    let response = match client
        .post(url.clone())
        .header(CONTENT_TYPE, "application/json")
        .json(task)
        .send()
        .await
    {
        Ok(response) => response,
        Err(err) => {
            debug!("Request failed: {}", err);
            return classify_error(&err);
        }
    };
    let outcome = classify_status(response.status());
    match response.bytes().await {
        Ok(_body) => outcome,
        Err(err) => {
            debug!("Failed to read response body: {}", err);
            classify_error(&err)
        }
    }
}

/// Sends every request of one contiguous index range, in order.
///
/// The worker owns its client and its records; nothing is shared with other
/// workers while requests are in flight. Failed requests are recorded and
/// the loop moves on.
pub struct Worker {
    id: usize,
    client: Client,
    url: Url,
    builder: RequestBuilder,
    sampler: Arc<Sampler>,
    indices: Range<u64>,
}

impl Worker {
    #[must_use]
    pub const fn new(
        id: usize,
        client: Client,
        url: Url,
        builder: RequestBuilder,
        sampler: Arc<Sampler>,
        indices: Range<u64>,
    ) -> Self {
        Self {
            id,
            client,
            url,
            builder,
            sampler,
            indices,
        }
    }

    pub async fn run(self) -> Vec<OutcomeRecord> {
        let capacity = self
            .indices
            .end
            .saturating_sub(self.indices.start)
            .try_into()
            .unwrap_or(0);
        let mut records = Vec::with_capacity(capacity);
        debug!("Worker {} handling indices {:?}", self.id, self.indices);

        for index in self.indices.clone() {
            let task = self.builder.build(index, &self.sampler);
            let start = Instant::now();
            let outcome = execute(&self.client, &self.url, &task).await;
            let end = Instant::now();
            if let Outcome::Failed(failure) = outcome {
                debug!("Worker {} request {} failed: {:?}", self.id, index, failure);
            }
            records.push(OutcomeRecord::new(index, start, end, outcome));
        }

        debug!("Worker {} finished {} requests", self.id, records.len());
        records
    }
}
