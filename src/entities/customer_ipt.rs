//! SeaORM Entity for computed inter-purchase times

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customer_ipt")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub customer_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub calendar_day: Date,
    pub first_time_by_date: DateTimeWithTimeZone,
    /// NULL on the customer's first purchase day
    #[sea_orm(column_type = "Double", nullable)]
    pub ipt_days: Option<f64>,
    pub computed_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
