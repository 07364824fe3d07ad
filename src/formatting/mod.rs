pub mod draft;
pub mod verdict;

pub use draft::{format_draft, format_draft_json};
pub use verdict::{format_verdict, format_email_valid};
