use entity::questions;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // `category` carries no foreign key, the original schema never
        // enforced the reference and the API layer does not validate it.
        manager
            .create_table(
                Table::create()
                    .table(questions::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(questions::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(questions::Column::Question)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(questions::Column::Answer).string().not_null())
                    .col(
                        ColumnDef::new(questions::Column::Category)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(questions::Column::Difficulty)
                            .integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(questions::Entity).to_owned())
            .await
    }
}
