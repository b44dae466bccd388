pub mod responses;

pub use responses::DashboardSummary;
