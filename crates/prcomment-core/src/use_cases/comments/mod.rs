pub(crate) mod find_report_comment;
pub(crate) mod upsert_report_comment;

pub use find_report_comment::FindReportCommentInterface;
pub use upsert_report_comment::{UpsertReportCommentInterface, UpsertReportCommentOutcome};

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    find_report_comment::MockFindReportCommentInterface,
    upsert_report_comment::MockUpsertReportCommentInterface,
};
