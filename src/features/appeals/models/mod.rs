mod appeal;

pub use appeal::{Appeal, IssueReason, StoredAppeal, UnknownIssueReason};
