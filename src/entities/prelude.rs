pub use super::customer_ipt::Entity as CustomerIpt;
pub use super::transactions::Entity as Transactions;
