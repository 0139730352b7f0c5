use async_trait::async_trait;
use contact_intake::error::ApiResult;
use contact_intake::models::SubmissionResult;
use contact_intake::submission::SubmissionClient;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Mock submission client for testing.
///
/// Records every request it receives and answers with scripted outcomes,
/// falling back to an accepted result once the script runs out.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockSubmissionClient<R> {
    requests: Arc<Mutex<Vec<R>>>,
    outcomes: Arc<Mutex<VecDeque<ApiResult<SubmissionResult>>>>,
}

#[allow(dead_code)]
impl<R: Clone> MockSubmissionClient<R> {
    pub fn new() -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            outcomes: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Queue the outcome of the next unanswered call.
    pub fn push_outcome(&self, outcome: ApiResult<SubmissionResult>) {
        self.outcomes.lock().unwrap().push_back(outcome);
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<R> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<R> {
        self.requests.lock().unwrap().last().cloned()
    }
}

impl<R: Clone> Default for MockSubmissionClient<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R> SubmissionClient<R> for MockSubmissionClient<R>
where
    R: Clone + Send + Sync + 'static,
{
    async fn submit(&self, request: &R) -> ApiResult<SubmissionResult> {
        self.requests.lock().unwrap().push(request.clone());

        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(SubmissionResult::accepted("ok")))
    }
}
