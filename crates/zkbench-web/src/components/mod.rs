pub mod header;
pub mod nav;
pub mod pagination;
pub mod submissions_table;
