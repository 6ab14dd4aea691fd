// Engine module - pure derivation logic over the roster snapshot
// (sanitizing, collation, filtering, paging, report markup).
// This layer sits between the snapshot types and runtime/CLI presentation;
// nothing here performs I/O or holds state.

pub mod collate;
pub mod paginate;
pub mod report;
pub mod sanitize;
pub mod views;

pub use collate::{by_display_order, compare_names};
pub use paginate::{DEFAULT_PAGE_SIZE, Page, advance, paginate, total_pages};
pub use report::{CROWN_MENTION, ReportPalette, display_color, format_report_line};
pub use sanitize::sanitize;
pub use views::{ViewKey, by_category, by_crown_wanted, by_organisation, by_png, select};
