// Domain modules
pub mod columns;
pub mod config;
pub mod error;
pub mod pagination;
pub mod submission;
pub mod table;
pub mod theme;

pub use columns::{Column, ColumnKey, Header, COLUMN_COUNT, SUBMISSION_COLUMNS};
pub use config::{DisplayConfig, OutputFormat, ZkBenchConfig};
pub use error::{Result, ZkBenchError};
pub use pagination::{page_count, PageItem, Pagination, PAGE_SIZE};
pub use submission::{SubmissionId, SubmissionRecord};
pub use table::{PagerView, SubmissionsTable, TableRow, TableView};
pub use theme::TableTheme;
