use chrono::{DateTime, Utc};
use serde::{Serialize, de::DeserializeOwned};

use crate::{
    error::AppResult,
    models::{
        Stored,
        course::Course,
        dashboard::{Activity, ActivityKind, DashboardStats, Overview},
        event::Event,
        faculty::Faculty,
        gallery::GalleryItem,
    },
    repository::{Collection, Direction, Query, RepositoryState},
};

use super::{Records, event::upcoming_query};

pub const DEFAULT_ACTIVITY_LIMIT: i64 = 10;
pub const MAX_ACTIVITY_LIMIT: i64 = 100;

pub struct DashboardService {
    faculty: Records<Faculty>,
    courses: Records<Course>,
    events: Records<Event>,
    gallery: Records<GalleryItem>,
}

async fn recent<T>(
    records: &Records<T>,
    limit: i64,
    kind: ActivityKind,
    title: impl Fn(&T) -> &str,
) -> AppResult<Vec<Activity>>
where
    T: Serialize + DeserializeOwned,
{
    let items: Vec<Stored<T>> = records
        .list(&Query::new().sort_by_created(Direction::Desc).limit(limit))
        .await?;
    Ok(items
        .iter()
        .map(|item| Activity {
            kind,
            title: title(&item.data).to_string(),
            timestamp: item.created_at,
        })
        .collect())
}

pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit
        .unwrap_or(DEFAULT_ACTIVITY_LIMIT)
        .clamp(1, MAX_ACTIVITY_LIMIT)
}

impl DashboardService {
    pub fn new(repo: RepositoryState) -> Self {
        Self {
            faculty: Records::new(repo.clone(), Collection::Faculty, "Faculty member"),
            courses: Records::new(repo.clone(), Collection::Courses, "Course"),
            events: Records::new(repo.clone(), Collection::Events, "Event"),
            gallery: Records::new(repo, Collection::Gallery, "Gallery item"),
        }
    }

    /// The four overview counters, queried concurrently.
    pub async fn stats(&self) -> AppResult<DashboardStats> {
        let everything = Query::new();
        let active = Query::new().eq("isActive", true);
        let upcoming = upcoming_query();
        let (faculty_count, active_courses, upcoming_events, gallery_count) = tokio::try_join!(
            self.faculty.count(&everything),
            self.courses.count(&active),
            self.events.count(&upcoming),
            self.gallery.count(&everything),
        )?;

        Ok(DashboardStats {
            overview: Overview {
                faculty_count,
                active_courses,
                upcoming_events,
                gallery_count,
            },
        })
    }

    /// activity
    ///
    /// Takes the newest `limit` entries of each collection, merges them and
    /// keeps the overall newest `limit`.
    pub async fn activity(&self, limit: Option<i64>) -> AppResult<Vec<Activity>> {
        let limit = clamp_limit(limit);

        let (courses, events, faculty, gallery) = tokio::try_join!(
            recent(&self.courses, limit, ActivityKind::Course, |c: &Course| c.title.as_str()),
            recent(&self.events, limit, ActivityKind::Event, |e: &Event| e.title.as_str()),
            recent(&self.faculty, limit, ActivityKind::Faculty, |f: &Faculty| f.name.as_str()),
            recent(&self.gallery, limit, ActivityKind::Gallery, |g: &GalleryItem| g.title.as_str()),
        )?;

        let mut feed: Vec<Activity> = [courses, events, faculty, gallery].concat();
        feed.sort_by(|a, b| newest_first(a.timestamp, b.timestamp));
        feed.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(feed)
    }
}

fn newest_first(a: DateTime<Utc>, b: DateTime<Utc>) -> std::cmp::Ordering {
    b.cmp(&a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_is_clamped() {
        assert_eq!(clamp_limit(None), 10);
        assert_eq!(clamp_limit(Some(0)), 1);
        assert_eq!(clamp_limit(Some(-5)), 1);
        assert_eq!(clamp_limit(Some(500)), 100);
        assert_eq!(clamp_limit(Some(25)), 25);
    }
}
