use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create movies table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Movies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Movies::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Movies::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Movies::Type).string_len(16).not_null())
                    .col(ColumnDef::new(Movies::Director).string_len(255).not_null())
                    .col(ColumnDef::new(Movies::Budget).double().not_null())
                    .col(ColumnDef::new(Movies::Location).string_len(255).not_null())
                    .col(ColumnDef::new(Movies::Duration).double().not_null())
                    .col(ColumnDef::new(Movies::YearTime).integer().not_null())
                    .col(ColumnDef::new(Movies::Details).text())
                    .col(
                        ColumnDef::new(Movies::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Movies::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Title uniqueness is owned by the store; the service pre-check only
        // short-circuits the common case.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_movies_title_unique
                ON movies (title);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE movies
                ADD CONSTRAINT chk_movies_type
                CHECK (type IN ('MOVIE', 'TV_SHOW'));
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_movies_title_unique;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Movies::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Movies {
    Table,
    Id,
    Title,
    Type,
    Director,
    Budget,
    Location,
    Duration,
    YearTime,
    Details,
    CreatedAt,
    UpdatedAt,
}
