use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        Stored,
        event::{CreateEventRequest, Event, UpdateEventRequest},
    },
    repository::{Collection, Direction, Query, RangeOp, RepositoryState},
};

use super::Records;

/// Today's date as stored in `Event::date`.
pub fn today() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Events dated today or later. Shared with the dashboard and the public
/// home page so all three agree on what "upcoming" means.
pub fn upcoming_query() -> Query {
    Query::new().range("date", RangeOp::Gte, today())
}

pub struct EventService {
    events: Records<Event>,
}

impl EventService {
    pub fn new(repo: RepositoryState) -> Self {
        Self {
            events: Records::new(repo, Collection::Events, "Event"),
        }
    }

    pub async fn create(&self, req: CreateEventRequest) -> AppResult<Stored<Event>> {
        let event = self.events.create(&req.into()).await?;
        tracing::info!(id = %event.id, date = %event.data.date, "event created");
        Ok(event)
    }

    pub async fn list(&self) -> AppResult<Vec<Stored<Event>>> {
        self.events
            .list(&Query::new().sort_by("date", Direction::Asc))
            .await
    }

    pub async fn upcoming(&self) -> AppResult<Vec<Stored<Event>>> {
        self.events
            .list(&upcoming_query().sort_by("date", Direction::Asc))
            .await
    }

    pub async fn past(&self) -> AppResult<Vec<Stored<Event>>> {
        self.events
            .list(
                &Query::new()
                    .range("date", RangeOp::Lt, today())
                    .sort_by("date", Direction::Desc),
            )
            .await
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Stored<Event>> {
        self.events.fetch(id).await
    }

    pub async fn update(&self, id: Uuid, req: UpdateEventRequest) -> AppResult<Stored<Event>> {
        self.events.update(id, &req).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<Stored<Event>> {
        let event = self.events.remove(id).await?;
        tracing::info!(id = %id, "event deleted");
        Ok(event)
    }
}
