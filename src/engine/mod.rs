mod venue_api;

use sqlx::{Executor, Pool, Postgres};

use crate::{api::API, error::Error};

type Database = Postgres;

pub struct Engine {
    pool: Pool<Database>,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub async fn new(pool: Pool<Database>) -> Result<Self, Error> {
        pool.execute("CREATE EXTENSION IF NOT EXISTS postgis").await?;

        // venue documents, with the filterable fields pulled out into columns
        pool.execute(
            "CREATE TABLE IF NOT EXISTS venues (id VARCHAR PRIMARY KEY, tags VARCHAR NOT NULL, location geometry(Point, 4326) NOT NULL, data JSONB NOT NULL)",
        )
        .await?;

        Ok(Self { pool })
    }
}

impl API for Engine {}
