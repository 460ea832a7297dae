//! Collaborators around the summarization core: fetching, cleaning and URL checks

pub mod clean;
pub mod fetch;
pub mod validate;

pub use clean::clean_content;
pub use fetch::fetch_content;
pub use validate::is_valid_url;
