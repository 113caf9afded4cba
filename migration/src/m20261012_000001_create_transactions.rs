use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Raw order lines. customer_id and ordered_at stay nullable so that bad
        // warehouse rows reach the pipeline and get reported instead of dropped.
        manager
            .create_table(
                Table::create()
                    .table(Transactions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Transactions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Transactions::CustomerId)
                            .string_len(128)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Transactions::OrderedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Transactions::OrderId)
                            .string_len(128)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Transactions::Amount)
                            .decimal_len(18, 4)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Transactions::Quantity)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Transactions::CreatedAt)
                            .timestamp()
                            .default(SimpleExpr::Keyword(Keyword::CurrentTimestamp)),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_transactions_customer_ordered_at")
                    .table(Transactions::Table)
                    .col(Transactions::CustomerId)
                    .col(Transactions::OrderedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Transactions::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Transactions {
    Table,
    Id,
    CustomerId,
    OrderedAt,
    OrderId,
    Amount,
    Quantity,
    CreatedAt,
}
