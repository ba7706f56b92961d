//! Output formatting module
//!
//! Provides the output formats of the `ssllabs` binary:
//! - Rich terminal output with colors and tables
//! - JSON export

pub mod grade;
pub mod json;
pub mod report;
pub mod tables;

pub use grade::{format_grade, print_grade, print_grade_compact};
pub use json::{print_json, GradeOutput};
pub use report::{print_endpoint, print_header, print_info, print_report, print_status_codes};
pub use tables::{format_table, print_table};
