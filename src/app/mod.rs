pub mod app;
pub mod format;
pub mod refresher;
pub mod report;
pub mod scheduler;
pub mod ui;

pub use app::App;
pub use refresher::{PriceRefresher, RefreshOutcome};
pub use scheduler::RefreshScheduler;
