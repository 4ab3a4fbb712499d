pub mod interaction;

pub use interaction::{DashboardAggregates, InteractionHandler};
