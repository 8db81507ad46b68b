mod balance_hash;

pub use balance_hash::{load_balance_hash, save_balance_hash};
