// Bikeshare Explorer - Core Library
// Exposes the prompt → load → filter → page pipeline for the CLI and tests

pub mod filters;
pub mod registry;
pub mod table;
pub mod loader;
pub mod console;
pub mod collector;
pub mod pager;
pub mod session;

// Re-export commonly used types
pub use filters::{
    City, Month, MonthFilter, DayFilter, FilterSpec, Field, ValidationError,
    validate_city, validate_month, validate_day, weekday_name,
};
pub use registry::DatasetRegistry;
pub use table::{TripRecord, TripTable, normalize_column};
pub use loader::{LoadError, load, parse_start_time};
pub use console::Console;
pub use collector::collect_filters;
pub use pager::{Pager, page, PAGE_SIZE};
pub use session::{SessionState, run};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
