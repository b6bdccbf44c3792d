use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Snippets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Snippets::ShareId)
                            .string_len(64)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Snippets::Title).string().not_null())
                    .col(ColumnDef::new(Snippets::Category).string().not_null())
                    .col(ColumnDef::new(Snippets::Code).text().not_null())
                    .col(
                        ColumnDef::new(Snippets::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Snippets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Snippets::Views)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Snippets::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Snippets {
    Table,
    ShareId,
    Title,
    Category,
    Code,
    Description,
    CreatedAt,
    Views,
}
