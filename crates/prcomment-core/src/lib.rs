//! Logic module.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

mod context;
pub mod errors;
pub mod use_cases;

pub use context::CoreContext;
pub use errors::{DomainError, Result};
use shaku::module;
use use_cases::comments::{
    find_report_comment::FindReportComment, upsert_report_comment::UpsertReportComment,
};

module! {
    pub CoreModule {
        components = [
            FindReportComment, UpsertReportComment
        ],
        providers = []
    }
}
