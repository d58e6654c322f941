pub mod checks;
pub mod document_loader;
pub mod reporter;
pub mod scanner;

pub use checks::{run_check, CheckOutcome, ALLOWED_TAGS};
pub use document_loader::load_document;
pub use scanner::scan_candidates;
