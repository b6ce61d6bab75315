mod issue;
mod search;
mod user;
mod worklog;

pub use issue::{Issue, IssueFields, NamedField};
pub use search::SearchResults;
pub use user::User;
pub use worklog::{Worklog, WorklogCreate};
