pub mod mock_submission_client;

#[allow(unused_imports)]
pub use mock_submission_client::MockSubmissionClient;
