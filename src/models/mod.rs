pub mod check;
pub mod loaders;
pub mod messages;
pub mod report;

pub use check::{CheckId, CheckResult, TagPosition, Violation};
pub use loaders::{builtin_messages, load_messages, load_messages_file};
pub use messages::Messages;
pub use report::ValidationReport;
