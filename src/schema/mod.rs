pub mod page;

pub use page::{PageSchema, FALCON_LAUNCHES};
