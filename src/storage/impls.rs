pub mod piece_store;
pub mod store_index;
