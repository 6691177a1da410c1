use entity::categories;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// The six categories shipped with the original trivia dataset. There is no
/// endpoint for managing categories, so they are seeded here.
const CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert()
            .into_table(categories::Entity)
            .columns([categories::Column::Kind])
            .to_owned();

        for kind in CATEGORIES {
            insert.values_panic([kind.into()]);
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(Query::delete().from_table(categories::Entity).to_owned())
            .await
    }
}
