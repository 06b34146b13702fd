//! Class names shared by the table components and `style.css`.

pub const TABLE_BOX: &str = "table-box";
pub const TABLE: &str = "submissions-table table-middle";
pub const TITLE_SPAN: &str = "title-span";
pub const TABLE_TITLE: &str = "table-title";
pub const TABLE_EMPTY: &str = "table-empty";
pub const PAGINATION: &str = "pagination";
pub const PAGINATION_TOTAL: &str = "pagination-total";
pub const PAGINATION_ITEM: &str = "pagination-item";
pub const PAGINATION_ITEM_ACTIVE: &str = "pagination-item active";
pub const PAGINATION_JUMP: &str = "pagination-jump";
pub const PAGINATION_PREV: &str = "pagination-prev";
pub const PAGINATION_NEXT: &str = "pagination-next";
