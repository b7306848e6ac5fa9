//! Domain models.

mod pull_request_handle;
mod report;
mod repository_path;

pub use pull_request_handle::PullRequestHandle;
pub use report::Report;
pub use repository_path::{RepositoryPath, RepositoryPathError};
