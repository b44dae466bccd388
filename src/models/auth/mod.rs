pub mod entities;

pub use entities::{LoginRequest, Principal, Session};
