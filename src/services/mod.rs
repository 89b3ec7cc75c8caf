pub mod areas;
pub mod directory;
pub mod formatted;
pub mod schedule;
