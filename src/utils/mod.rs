pub mod display;
pub mod ids;
pub mod validate;

pub use ids::{mock_token, new_id};
