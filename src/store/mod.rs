pub mod blob;
pub mod db;
pub mod ledger;

pub use blob::BlobStore;
pub use db::Database;
pub use ledger::OrderLedger;
