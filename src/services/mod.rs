pub mod attendance;
pub mod auth;
pub mod content;
pub mod dashboard;
pub mod events;
pub mod guard;
pub mod resolver;
pub mod results;

pub use attendance::AttendanceService;
pub use auth::AuthService;
pub use content::ContentService;
pub use dashboard::DashboardService;
pub use events::EventService;
pub use guard::{AccessGuard, Operation, is_authorized};
pub use resolver::{AssignmentResolver, SelectionState};
pub use results::ResultService;
