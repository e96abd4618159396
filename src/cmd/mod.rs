pub mod listing;
pub mod lookup;
pub mod table;
