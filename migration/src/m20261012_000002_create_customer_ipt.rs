use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CustomerIpt::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CustomerIpt::CustomerId)
                            .string_len(128)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CustomerIpt::CalendarDay)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CustomerIpt::FirstTimeByDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CustomerIpt::IptDays)
                            .double()
                            .null(), // NULL on a customer's first purchase day
                    )
                    .col(
                        ColumnDef::new(CustomerIpt::ComputedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(CustomerIpt::CustomerId)
                            .col(CustomerIpt::CalendarDay)
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CustomerIpt::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum CustomerIpt {
    Table,
    CustomerId,
    CalendarDay,
    FirstTimeByDate,
    IptDays,
    ComputedAt,
}
