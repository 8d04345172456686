pub mod container_contents;
pub mod sheet_context;
