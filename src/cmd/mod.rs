pub mod best_entry;
pub mod rank;
pub mod search;
