pub mod batch;
pub mod dashboard;
pub mod predict;
pub mod query;

pub use batch::batch_predict;
pub use dashboard::dashboard;
pub use predict::predict;
pub use query::{health, models, status};
