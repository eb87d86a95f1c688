use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const STARTER_CATEGORIES: &[&str] =
    &["Action", "Comedy", "Drama", "Horror", "Sci-Fi", "Documentary"];

// Categories must pre-exist before any movie references them; movie writes
// never create categories, so the schema ships with a starter set.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in STARTER_CATEGORIES {
            manager
                .exec_stmt(
                    Query::insert()
                        .into_table(Categories::Table)
                        .columns([Categories::Category])
                        .values_panic([(*name).into()])
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(Query::delete().from_table(Categories::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Categories {
    Table,
    Category,
}
