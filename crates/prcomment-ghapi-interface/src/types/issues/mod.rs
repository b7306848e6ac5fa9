mod issue_comment;

pub use issue_comment::GhIssueComment;
