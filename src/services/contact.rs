use chrono::{DateTime, Duration, NaiveDate, Utc};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        Stored,
        contact::{
            ContactInfo, ContactSubmission, CreateSubmissionRequest, DateRange, InternalNote,
            Priority, PriorityCounts, StatusCounts, SubmissionFilter, SubmissionResponse,
            SubmissionStats, SubmissionStatus, UpdateContactInfoRequest, UpdateSubmissionRequest,
        },
    },
    repository::{Collection, Direction, Query, RangeOp, RepositoryState},
};

use super::Records;

const SUBMISSION_SEARCH_FIELDS: &[&str] = &["name", "email", "subject", "message"];

pub struct ContactService {
    info: Records<ContactInfo>,
    submissions: Records<ContactSubmission>,
}

/// Turns a `startDate` / `endDate` query value into a creation-time bound.
///
/// A bare `YYYY-MM-DD` end date covers the whole day.
fn date_bound(field: &str, raw: &str, is_end: bool) -> AppResult<(RangeOp, DateTime<Utc>)> {
    let raw = raw.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        let op = if is_end { RangeOp::Lte } else { RangeOp::Gte };
        return Ok((op, at.with_timezone(&Utc)));
    }

    let day = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("{field} must be YYYY-MM-DD or RFC 3339")))?;
    let midnight = day.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    let midnight =
        midnight.ok_or_else(|| AppError::BadRequest(format!("{field} is out of range")))?;

    if is_end {
        Ok((RangeOp::Lt, midnight + Duration::days(1)))
    } else {
        Ok((RangeOp::Gte, midnight))
    }
}

fn with_range(mut query: Query, start: Option<&str>, end: Option<&str>) -> AppResult<Query> {
    if let Some(start) = start.filter(|s| !s.trim().is_empty()) {
        let (op, at) = date_bound("startDate", start, false)?;
        query = query.created(op, at);
    }
    if let Some(end) = end.filter(|s| !s.trim().is_empty()) {
        let (op, at) = date_bound("endDate", end, true)?;
        query = query.created(op, at);
    }
    Ok(query)
}

impl ContactService {
    pub fn new(repo: RepositoryState) -> Self {
        Self {
            info: Records::new(repo.clone(), Collection::ContactInfo, "Contact info"),
            submissions: Records::new(repo, Collection::ContactSubmissions, "Submission"),
        }
    }

    // --- Contact Info ---

    pub async fn upsert_info(&self, info: ContactInfo) -> AppResult<Stored<ContactInfo>> {
        let stored = self.info.upsert_singleton(&info).await?;
        tracing::info!(id = %stored.id, "contact info saved");
        Ok(stored)
    }

    pub async fn info(&self) -> AppResult<Option<Stored<ContactInfo>>> {
        self.info.first(&Query::new()).await
    }

    pub async fn list_info(&self) -> AppResult<Vec<Stored<ContactInfo>>> {
        self.info.list(&Query::new()).await
    }

    /// Applies a partial update. Nested details keep the fields the patch
    /// leaves out.
    pub async fn update_info(
        &self,
        req: UpdateContactInfoRequest,
    ) -> AppResult<Stored<ContactInfo>> {
        let mut stored = self
            .info
            .first(&Query::new())
            .await?
            .ok_or_else(|| AppError::not_found("Contact info"))?;

        let info = &mut stored.data;
        if let Some(whatsapp) = req.whatsapp {
            info.whatsapp = whatsapp;
        }
        if let Some(patch) = req.address {
            info.address.merge(patch);
        }
        if let Some(patch) = req.phone {
            info.phone.merge(patch);
        }
        if let Some(patch) = req.email {
            info.email.merge(patch);
        }
        if let Some(patch) = req.office_hours {
            info.office_hours.merge(patch);
        }

        self.info.save(&stored).await
    }

    // --- Submissions ---

    pub async fn submit(
        &self,
        req: CreateSubmissionRequest,
    ) -> AppResult<Stored<ContactSubmission>> {
        let submission = self.submissions.create(&req.into()).await?;
        tracing::info!(id = %submission.id, "contact submission received");
        Ok(submission)
    }

    /// submissions
    ///
    /// Filtered listing, newest first. `search` is a case-insensitive literal
    /// match over name, email, subject and message.
    pub async fn submissions(
        &self,
        filter: SubmissionFilter,
    ) -> AppResult<Vec<Stored<ContactSubmission>>> {
        let query = Query::new()
            .eq_opt("status", filter.status.map(SubmissionStatus::as_str))
            .eq_opt("priority", filter.priority.map(Priority::as_str))
            .eq_opt("assignedTo", filter.assigned_to)
            .search(
                SUBMISSION_SEARCH_FIELDS,
                filter.search.as_deref().unwrap_or_default(),
            )
            .sort_by_created(Direction::Desc);
        let query = with_range(
            query,
            filter.start_date.as_deref(),
            filter.end_date.as_deref(),
        )?;
        self.submissions.list(&query).await
    }

    pub async fn submission(&self, id: Uuid) -> AppResult<Stored<ContactSubmission>> {
        self.submissions.fetch(id).await
    }

    /// update_submission
    ///
    /// `admin_id` is recorded as the author of a response or internal note.
    pub async fn update_submission(
        &self,
        id: Uuid,
        req: UpdateSubmissionRequest,
        admin_id: Uuid,
    ) -> AppResult<Stored<ContactSubmission>> {
        let mut stored = self.submissions.fetch(id).await?;
        let submission = &mut stored.data;

        if let Some(status) = req.status {
            submission.status = status;
        }
        if let Some(tags) = req.tags {
            submission.tags = tags;
        }
        if let Some(priority) = req.priority {
            submission.priority = priority;
        }
        if let Some(assigned_to) = req.assigned_to {
            submission.assigned_to = Some(assigned_to);
        }
        if let Some(message) = req.response_message {
            submission.response = Some(SubmissionResponse {
                message,
                responded_at: Utc::now(),
                responded_by: admin_id,
            });
            submission.status = SubmissionStatus::Replied;
        }
        if let Some(note) = req.internal_note {
            submission.internal_notes.push(InternalNote {
                note,
                added_by: admin_id,
                added_at: Utc::now(),
            });
        }

        let saved = self.submissions.save(&stored).await?;
        tracing::info!(id = %id, status = saved.data.status.as_str(), "submission updated");
        Ok(saved)
    }

    pub async fn delete_submission(&self, id: Uuid) -> AppResult<()> {
        self.submissions.remove(id).await?;
        tracing::info!(id = %id, "submission deleted");
        Ok(())
    }

    /// stats
    ///
    /// Totals per status and priority. The nine counts run concurrently.
    pub async fn stats(&self, range: DateRange) -> AppResult<SubmissionStats> {
        let base = with_range(
            Query::new(),
            range.start_date.as_deref(),
            range.end_date.as_deref(),
        )?;
        let by_status = |status: SubmissionStatus| base.clone().eq("status", status.as_str());
        let by_priority = |priority: Priority| base.clone().eq("priority", priority.as_str());
        let (pending_q, read_q, replied_q, archived_q) = (
            by_status(SubmissionStatus::Pending),
            by_status(SubmissionStatus::Read),
            by_status(SubmissionStatus::Replied),
            by_status(SubmissionStatus::Archived),
        );
        let (urgent_q, high_q, medium_q, low_q) = (
            by_priority(Priority::Urgent),
            by_priority(Priority::High),
            by_priority(Priority::Medium),
            by_priority(Priority::Low),
        );

        let (
            total,
            pending,
            read,
            replied,
            archived,
            urgent,
            high,
            medium,
            low,
        ) = tokio::try_join!(
            self.submissions.count(&base),
            self.submissions.count(&pending_q),
            self.submissions.count(&read_q),
            self.submissions.count(&replied_q),
            self.submissions.count(&archived_q),
            self.submissions.count(&urgent_q),
            self.submissions.count(&high_q),
            self.submissions.count(&medium_q),
            self.submissions.count(&low_q),
        )?;

        Ok(SubmissionStats {
            total,
            by_status: StatusCounts {
                pending,
                read,
                replied,
                archived,
            },
            by_priority: PriorityCounts {
                urgent,
                high,
                medium,
                low,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_only_end_covers_whole_day() {
        let (op, at) = date_bound("endDate", "2025-03-01", true).unwrap();
        assert_eq!(op, RangeOp::Lt);
        assert_eq!(at.to_rfc3339(), "2025-03-02T00:00:00+00:00");
    }

    #[test]
    fn rfc3339_bounds_are_inclusive() {
        let (op, _) = date_bound("startDate", "2025-03-01T10:00:00Z", false).unwrap();
        assert_eq!(op, RangeOp::Gte);
        let (op, _) = date_bound("endDate", "2025-03-01T10:00:00Z", true).unwrap();
        assert_eq!(op, RangeOp::Lte);
    }

    #[test]
    fn garbage_dates_are_rejected() {
        assert!(matches!(
            date_bound("startDate", "yesterday", false),
            Err(AppError::BadRequest(_))
        ));
    }
}
