//! Round trips against real servers. Start MySQL and Postgres with a
//! `user`/`password` account on database `testdb`, then run
//! `cargo test -p engine-tests -- --ignored`.

#[cfg(test)]
mod tests {
    use crate::{csv_file, drop_table, fetch_rows, row_count, test_config};
    use connectors::sql::{
        base::{connector::DbConnector, repository::DataRepository},
        mysql::adapter::MySqlAdapter,
        postgres::adapter::PgAdapter,
    };
    use engine_runtime::{error::LoadError, execution::executor::run};
    use model::{core::kind::DatabaseKind, records::columns::ColumnSet};
    use tracing_test::traced_test;

    const PEOPLE_CSV: &str = "name,age\n\"Alice\",30\n\"Bob\",25\n";

    async fn round_trip(engine: DatabaseKind, table: &str) {
        drop_table(engine, table).await;
        let file = csv_file(PEOPLE_CSV);

        let summary = run(&test_config(engine, table, file.path()))
            .await
            .expect("load ran");
        assert_eq!(summary.rows_inserted, 2);

        let rows = fetch_rows(engine, table, &["name", "age"]).await;
        assert_eq!(
            rows,
            vec![
                vec!["Alice".to_string(), "30".to_string()],
                vec!["Bob".to_string(), "25".to_string()],
            ]
        );
    }

    #[traced_test]
    #[tokio::test]
    #[ignore = "requires a local Postgres"]
    async fn tc01_postgres_round_trip() {
        round_trip(DatabaseKind::Postgres, "tc01_people").await;
    }

    #[traced_test]
    #[tokio::test]
    #[ignore = "requires a local MySQL"]
    async fn tc02_mysql_round_trip() {
        round_trip(DatabaseKind::MySql, "tc02_people").await;
    }

    #[traced_test]
    #[tokio::test]
    #[ignore = "requires a local Postgres"]
    async fn tc03_create_table_is_idempotent() {
        let table = "tc03_people";
        drop_table(DatabaseKind::Postgres, table).await;
        let config = test_config(DatabaseKind::Postgres, table, std::path::Path::new(""));

        let mut connector =
            DbConnector::<PgAdapter>::new(config.engine, config.connection_params());
        connector.connect().await.expect("connect");
        let repo = DataRepository::new(&connector, config.table_name.clone());
        let columns = ColumnSet::from_headers(["name", "age"]).unwrap();

        assert!(repo.create_table(&columns).await.unwrap());
        assert!(repo.create_table(&columns).await.unwrap());
        connector.close().await;

        assert_eq!(row_count(DatabaseKind::Postgres, table).await, 0);
    }

    #[traced_test]
    #[tokio::test]
    #[ignore = "requires a local MySQL"]
    async fn tc04_header_only_creates_empty_table() {
        let table = "tc04_people";
        drop_table(DatabaseKind::MySql, table).await;
        let file = csv_file("name,age\n");

        let summary = run(&test_config(DatabaseKind::MySql, table, file.path()))
            .await
            .expect("load ran");
        assert!(summary.table_created);
        assert_eq!(row_count(DatabaseKind::MySql, table).await, 0);
    }

    #[traced_test]
    #[tokio::test]
    #[ignore = "requires a local MySQL"]
    async fn tc05_invalid_password_is_reported() {
        let file = csv_file(PEOPLE_CSV);
        let mut config = test_config(DatabaseKind::MySql, "tc05_people", file.path());
        config.password = Some("definitely-wrong".into());

        let mut connector =
            DbConnector::<MySqlAdapter>::new(config.engine, config.connection_params());
        assert!(connector.connect().await.is_err());
        assert!(connector.get_connection().is_none());
        assert!(logs_contain("Error connecting to MySQL"));

        let err = run(&config).await.unwrap_err();
        assert!(matches!(err, LoadError::ConnectionUnavailable { .. }));
    }

    #[traced_test]
    #[tokio::test]
    #[ignore = "requires a local Postgres"]
    async fn tc06_rerun_appends_rows() {
        let table = "tc06_people";
        drop_table(DatabaseKind::Postgres, table).await;
        let file = csv_file(PEOPLE_CSV);
        let config = test_config(DatabaseKind::Postgres, table, file.path());

        run(&config).await.expect("first load");
        run(&config).await.expect("second load");

        assert_eq!(row_count(DatabaseKind::Postgres, table).await, 4);
    }
}
