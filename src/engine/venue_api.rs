use super::Engine;

use async_trait::async_trait;
use futures::TryStreamExt;
use geo_types::Geometry;
use geozero::wkb;
use sqlx::{types::Json, Executor, Row};

use crate::{
    api::VenueAPI,
    entities::{Coordinates, Venue},
    error::Error,
};

// geodesic meters from the bound origin ($1) to the venue's location
const DISTANCE_EXPR: &str = "ST_Distance(location::geography, ST_SetSRID($1, 4326)::geography)";

#[derive(Debug)]
struct Search {
    origin: Coordinates,
    tag: Option<String>,
    max_distance: Option<f64>,
}

// the SQL text depends only on which filters are present; values are
// always bound, never written into the text
fn search_sql(search: &Search) -> String {
    let mut sql = format!("SELECT data, {} AS distance FROM venues", DISTANCE_EXPR);

    let mut clauses = Vec::new();
    let mut placeholder = 2;

    if search.tag.is_some() {
        clauses.push(format!("tags ILIKE '%' || ${} || '%'", placeholder));
        placeholder += 1;
    }

    if search.max_distance.is_some() {
        clauses.push(format!("{} < ${}", DISTANCE_EXPR, placeholder));
    }

    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }

    sql
}

impl Engine {
    #[tracing::instrument(skip(self))]
    async fn search(&self, search: Search) -> Result<Vec<Venue>, Error> {
        let sql = search_sql(&search);
        let origin: Geometry<f64> = search.origin.into();

        let mut query = sqlx::query(&sql).bind(wkb::Encode(origin));

        if let Some(tag) = &search.tag {
            query = query.bind(tag);
        }

        if let Some(max_distance) = search.max_distance {
            query = query.bind(max_distance);
        }

        tracing::info!("fetching venues...");

        let mut conn = self.pool.acquire().await?;
        let mut rows = conn.fetch(query);

        let mut venues = Vec::new();

        while let Some(row) = rows.try_next().await? {
            let Json(mut venue): Json<Venue> = row.try_get("data")?;
            venue.distance = row.try_get("distance")?;

            venues.push(venue);
        }

        Ok(venues)
    }
}

#[async_trait]
impl VenueAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn find_venues(&self) -> Result<Vec<Venue>, Error> {
        let mut conn = self.pool.acquire().await?;
        let mut rows = conn.fetch(sqlx::query("SELECT data FROM venues ORDER BY id"));

        let mut venues = Vec::new();

        while let Some(row) = rows.try_next().await? {
            let Json(venue): Json<Venue> = row.try_get("data")?;

            venues.push(venue);
        }

        Ok(venues)
    }

    #[tracing::instrument(skip(self))]
    async fn find_venues_within_distance(
        &self,
        origin: Coordinates,
        max_distance: Option<f64>,
    ) -> Result<Vec<Venue>, Error> {
        self.search(Search {
            origin,
            tag: None,
            max_distance,
        })
        .await
    }

    #[tracing::instrument(skip(self))]
    async fn find_venues_with_tag(
        &self,
        origin: Coordinates,
        tag: String,
        max_distance: Option<f64>,
    ) -> Result<Vec<Venue>, Error> {
        self.search(Search {
            origin,
            tag: Some(tag),
            max_distance,
        })
        .await
    }
}
