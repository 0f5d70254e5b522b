use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DatabaseBackend;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // code 上的主键约束是并发创建时唯一性的最终保证
        manager
            .create_table(
                Table::create()
                    .table(Url::Table)
                    .if_not_exists()
                    .col(code_column(manager.get_database_backend()))
                    .col(ColumnDef::new(Url::Original).text().not_null())
                    .col(
                        ColumnDef::new(Url::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Url::Visits)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_urls_created_at")
                    .table(Url::Table)
                    .col(Url::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_urls_created_at").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Url::Table).to_owned())
            .await
    }
}

/// 短码列
///
/// 短码区分大小写。MySQL/MariaDB 默认排序规则不区分大小写，
/// 因此显式使用 ascii_bin；SQLite 与 PostgreSQL 默认即按字节比较。
fn code_column(backend: DatabaseBackend) -> ColumnDef {
    let mut col = ColumnDef::new(Url::Code);
    match backend {
        DatabaseBackend::MySql => {
            col.custom(Alias::new("CHAR(6) CHARACTER SET ascii COLLATE ascii_bin"))
        }
        _ => col.char_len(6),
    };
    col.not_null().primary_key();
    col
}

#[derive(DeriveIden)]
enum Url {
    #[sea_orm(iden = "urls")]
    Table,
    Code,
    Original,
    CreatedAt,
    Visits,
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm_migration::sea_orm::sea_query::{
        MysqlQueryBuilder, PostgresQueryBuilder, SchemaBuilder, SchemaStatementBuilder,
        SqliteQueryBuilder,
    };

    fn create_sql<T: SchemaBuilder>(backend: DatabaseBackend, builder: T) -> String {
        Table::create()
            .table(Url::Table)
            .col(code_column(backend))
            .to_owned()
            .to_string(builder)
    }

    #[test]
    fn test_mysql_code_column_is_case_sensitive() {
        let sql = create_sql(DatabaseBackend::MySql, MysqlQueryBuilder);
        assert!(sql.contains("COLLATE ascii_bin"), "{}", sql);
        assert!(sql.contains("PRIMARY KEY"), "{}", sql);
    }

    #[test]
    fn test_other_backends_keep_plain_char() {
        for sql in [
            create_sql(DatabaseBackend::Sqlite, SqliteQueryBuilder),
            create_sql(DatabaseBackend::Postgres, PostgresQueryBuilder),
        ] {
            assert!(!sql.contains("COLLATE"), "{}", sql);
            assert!(sql.to_lowercase().contains("char(6)"), "{}", sql);
        }
    }
}
