pub mod model;
pub mod state;


pub use model::DemandModel;
pub use state::{DemandState, DemandStatus};
