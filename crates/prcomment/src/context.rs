//! GitHub Actions context.

use std::path::Path;

use prcomment_config::ActionsConfig;
use prcomment_models::{PullRequestHandle, RepositoryPath, RepositoryPathError};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContextError {
    #[error("Missing repository: use --repository or set GITHUB_REPOSITORY")]
    MissingRepository,

    #[error("Invalid GITHUB_REPOSITORY value,\n  caused by: {}", source)]
    InvalidRepository { source: RepositoryPathError },

    #[error("Missing pull request number: use --number or set GITHUB_EVENT_PATH")]
    MissingNumber,

    #[error("Could not read event payload {},\n  caused by: {}", path, source)]
    EventPayloadReadError {
        path: String,
        source: std::io::Error,
    },

    #[error("Could not parse event payload {},\n  caused by: {}", path, source)]
    EventPayloadParseError {
        path: String,
        source: serde_json::Error,
    },

    #[error("Event payload {} carries no issue or pull request number", path)]
    EventPayloadWithoutNumber { path: String },
}

#[derive(Debug, Deserialize)]
struct NumberedEntity {
    number: u64,
}

#[derive(Debug, Deserialize)]
struct EventPayload {
    issue: Option<NumberedEntity>,
    pull_request: Option<NumberedEntity>,
    number: Option<u64>,
}

impl EventPayload {
    fn issue_number(&self) -> Option<u64> {
        self.issue
            .as_ref()
            .or(self.pull_request.as_ref())
            .map(|entity| entity.number)
            .or(self.number)
    }
}

/// Resolve the target pull request.
///
/// Explicit values win over the GitHub Actions environment.
pub(crate) fn resolve_pull_request_handle(
    actions: &ActionsConfig,
    repository: Option<RepositoryPath>,
    number: Option<u64>,
) -> Result<PullRequestHandle, ContextError> {
    let repository = match repository {
        Some(repository) => repository,
        None if actions.repository.is_empty() => return Err(ContextError::MissingRepository),
        None => RepositoryPath::new(&actions.repository)
            .map_err(|e| ContextError::InvalidRepository { source: e })?,
    };

    let number = match number {
        Some(number) => number,
        None if actions.event_path.is_empty() => return Err(ContextError::MissingNumber),
        None => read_event_issue_number(Path::new(&actions.event_path))?,
    };

    Ok(PullRequestHandle::new(repository, number))
}

fn read_event_issue_number(path: &Path) -> Result<u64, ContextError> {
    let display_path = path.display().to_string();
    let content =
        std::fs::read_to_string(path).map_err(|e| ContextError::EventPayloadReadError {
            path: display_path.clone(),
            source: e,
        })?;
    let payload: EventPayload =
        serde_json::from_str(&content).map_err(|e| ContextError::EventPayloadParseError {
            path: display_path.clone(),
            source: e,
        })?;

    payload
        .issue_number()
        .ok_or(ContextError::EventPayloadWithoutNumber { path: display_path })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn actions(repository: &str, event_path: &str) -> ActionsConfig {
        ActionsConfig {
            repository: repository.into(),
            event_path: event_path.into(),
        }
    }

    fn event_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn explicit_values_win() {
        let file = event_file(r#"{ "pull_request": { "number": 7 } }"#);
        let actions = actions("other/repo", file.path().to_str().unwrap());

        let handle = resolve_pull_request_handle(
            &actions,
            Some(RepositoryPath::new("me/test").unwrap()),
            Some(1),
        )
        .unwrap();

        assert_eq!(handle, ("me", "test", 1).into());
    }

    #[test]
    fn pull_request_event() {
        let file = event_file(r#"{ "action": "synchronize", "number": 7, "pull_request": { "number": 7, "title": "Fix" } }"#);
        let actions = actions("me/test", file.path().to_str().unwrap());

        let handle = resolve_pull_request_handle(&actions, None, None).unwrap();
        assert_eq!(handle, ("me", "test", 7).into());
    }

    #[test]
    fn issue_comment_event() {
        let file = event_file(r#"{ "action": "created", "issue": { "number": 12 }, "comment": { "id": 1 } }"#);
        let actions = actions("me/test", file.path().to_str().unwrap());

        let handle = resolve_pull_request_handle(&actions, None, None).unwrap();
        assert_eq!(handle, ("me", "test", 12).into());
    }

    #[test]
    fn issue_wins_over_pull_request() {
        let file = event_file(r#"{ "issue": { "number": 3 }, "pull_request": { "number": 4 } }"#);
        let actions = actions("me/test", file.path().to_str().unwrap());

        let handle = resolve_pull_request_handle(&actions, None, None).unwrap();
        assert_eq!(handle.number(), 3);
    }

    #[test]
    fn push_event_has_no_number() {
        let file = event_file(r#"{ "ref": "refs/heads/main" }"#);
        let actions = actions("me/test", file.path().to_str().unwrap());

        assert!(matches!(
            resolve_pull_request_handle(&actions, None, None),
            Err(ContextError::EventPayloadWithoutNumber { .. })
        ));
    }

    #[test]
    fn missing_values() {
        assert!(matches!(
            resolve_pull_request_handle(&actions("", ""), None, Some(1)),
            Err(ContextError::MissingRepository)
        ));
        assert!(matches!(
            resolve_pull_request_handle(&actions("me/test", ""), None, None),
            Err(ContextError::MissingNumber)
        ));
        assert!(matches!(
            resolve_pull_request_handle(&actions("me", ""), None, Some(1)),
            Err(ContextError::InvalidRepository { .. })
        ));
    }

    #[test]
    fn unreadable_event_payload() {
        assert!(matches!(
            resolve_pull_request_handle(
                &actions("me/test", "/this/path/does/not/exist.json"),
                None,
                None
            ),
            Err(ContextError::EventPayloadReadError { .. })
        ));

        let file = event_file("not json");
        assert!(matches!(
            resolve_pull_request_handle(
                &actions("me/test", file.path().to_str().unwrap()),
                None,
                None
            ),
            Err(ContextError::EventPayloadParseError { .. })
        ));
    }
}
