pub mod date_bound;
pub mod descriptor;
pub mod export_record;
pub mod filter_plan;

pub use date_bound::{BoundRole, DateBound, DateBoundError};
pub use descriptor::{MonthDay, TimeZoneDescriptor};
pub use export_record::ExportRecord;
pub use filter_plan::{AbsoluteBound, FilterPlan};
