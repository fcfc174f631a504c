//! Integrate module - Glue between the bookmark store and the outside world
//!
//! - Favicon: derive icon URLs and titles from pasted addresses
//! - Form: validate and submit the add-bookmark form
//! - Exchange: JSON backup export and import
//! - Launcher: open a bookmark with an external program
//! - Output: non-interactive listing (--list) and exit codes

pub mod exchange;
pub mod favicon;
pub mod form;
pub mod launcher;
pub mod output;

pub use exchange::{
    apply_import, default_export_filename, default_export_path, export_json, export_to_file,
    import_from_file, parse_import, read_import,
};
pub use favicon::{derive_title, extract_domain, IconService};
pub use form::{submit, AddOutcome};
pub use launcher::Launcher;
pub use output::{exit_code, output_bookmarks, write_bookmarks, OutputFormat};
