pub mod customer;
pub mod daily_record;
pub mod ipt;
pub mod transaction;

pub use customer::CustomerId;
pub use daily_record::DailyRecord;
pub use ipt::IptRecord;
pub use transaction::{RawTransaction, Transaction};
