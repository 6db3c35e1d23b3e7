pub mod extract;
pub mod fetch;
pub mod schema;
pub mod table;
