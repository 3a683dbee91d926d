//! Database test utilities backed by a shared PostgreSQL container.

use once_cell::sync::Lazy;
use sqlx::{Connection, PgConnection, PgPool};
use testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres as PostgresImage;
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::database;

const USER: &str = "coupons_test";
const PASSWORD: &str = "coupons_test_password";

/// Container shared by every test in the process.
static POSTGRES_CONTAINER: Lazy<OnceCell<ContainerAsync<PostgresImage>>> = Lazy::new(OnceCell::new);

async fn init_postgres_container() -> ContainerAsync<PostgresImage> {
    PostgresImage::default()
        .with_user(USER)
        .with_password(PASSWORD)
        .with_db_name("coupons_test")
        .with_env_var("POSTGRES_INITDB_ARGS", "--auth-host=trust")
        .start()
        .await
        .expect("Failed to start PostgreSQL container")
}

/// A freshly migrated database, unique to one test.
#[derive(Debug, Clone)]
pub(crate) struct TestDb {
    pool: PgPool,
}

impl TestDb {
    pub(crate) async fn new() -> Self {
        let container = POSTGRES_CONTAINER
            .get_or_init(init_postgres_container)
            .await;

        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get container port");

        let host = std::env::var("TESTCONTAINERS_HOST_OVERRIDE")
            .unwrap_or_else(|_| "localhost".to_string());

        let name = format!("coupons_test_{}", Uuid::now_v7().simple());

        let mut conn =
            PgConnection::connect(&format!("postgresql://{USER}:{PASSWORD}@{host}:{port}/postgres"))
                .await
                .expect("Failed to connect to postgres database");

        sqlx::query(&format!("CREATE DATABASE \"{name}\""))
            .execute(&mut conn)
            .await
            .expect("Failed to create test database");

        conn.close()
            .await
            .expect("Failed to close admin connection");

        let pool = database::connect(&format!(
            "postgresql://{USER}:{PASSWORD}@{host}:{port}/{name}"
        ))
        .await
        .expect("Failed to create pool for database");

        database::migrate(&pool)
            .await
            .expect("Failed to run migrations on database");

        Self { pool }
    }

    pub(crate) fn pool(&self) -> &PgPool {
        &self.pool
    }
}
