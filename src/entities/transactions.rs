//! SeaORM Entity for raw order lines

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Nullable in storage; rejected by the pipeline when missing
    pub customer_id: Option<String>,
    pub ordered_at: Option<DateTimeWithTimeZone>,
    pub order_id: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((18, 4)))", nullable)]
    pub amount: Option<Decimal>,
    pub quantity: Option<i32>,
    pub created_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
