// Item resource handlers. One file per operation, Laravel-resource naming:
// index / store / show / update / destroy.

pub mod destroy;
pub mod index;
pub mod show;
pub mod store;
pub mod update;
pub mod utils;
pub mod validate;

pub use destroy::destroy;
pub use index::index;
pub use show::show;
pub use store::store;
pub use update::update;

/// Listing size is fixed: the five most recently created items
pub const RECENT_ITEMS_LIMIT: i64 = 5;
