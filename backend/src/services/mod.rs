//! Business logic services
//!
//! Services fill request defaults from configuration and coordinate calls
//! into the shared calculation core.

pub mod export;
pub mod goals;
pub mod statistics;

pub use export::ExportService;
pub use goals::GoalsService;
pub use statistics::StatisticsService;
