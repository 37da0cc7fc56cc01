mod error;
mod query;
mod task;

pub use error::*;
pub use query::*;
pub use task::*;
