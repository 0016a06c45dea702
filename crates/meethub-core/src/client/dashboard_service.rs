use chrono::NaiveDate;
use tracing::debug;

use crate::error::Result;
use crate::models::{ActionItemStatus, DashboardSummary, MeetingStatus, OpenActionItems};

use super::MeetHub;

const UPCOMING_LIMIT: usize = 5;

impl MeetHub {
    /// Aggregates meeting, action-item and knowledge-base counts as seen on
    /// `today`.
    pub fn dashboard(&self, today: NaiveDate) -> Result<DashboardSummary> {
        let meetings = self.state.list_meetings()?;

        let total_meetings = meetings.len();
        let completed_meetings = meetings
            .iter()
            .filter(|m| m.meeting.status == MeetingStatus::Completed)
            .count();
        let scheduled_meetings = meetings
            .iter()
            .filter(|m| m.meeting.status == MeetingStatus::Scheduled)
            .count();

        let mut open_action_items = Vec::new();
        for overview in &meetings {
            let items = self
                .state
                .list_action_items(overview.meeting.id, None)?
                .into_iter()
                .filter(|item| item.status != ActionItemStatus::Completed)
                .collect::<Vec<_>>();
            if items.is_empty() {
                continue;
            }
            open_action_items.push(OpenActionItems {
                meeting_id: overview.meeting.id,
                topic: overview.meeting.topic.clone(),
                meeting_date: overview.meeting.meeting_date,
                items,
            });
        }

        // Listing is newest first; upcoming reads soonest first.
        let mut upcoming_meetings = meetings
            .iter()
            .rev()
            .map(|overview| &overview.meeting)
            .filter(|m| m.status == MeetingStatus::Scheduled && m.meeting_date >= today)
            .cloned()
            .collect::<Vec<_>>();
        upcoming_meetings.sort_by(|a, b| {
            a.meeting_date
                .cmp(&b.meeting_date)
                .then_with(|| a.meeting_time.cmp(&b.meeting_time))
        });
        upcoming_meetings.truncate(UPCOMING_LIMIT);

        let kb_article_count = self.state.count_articles()?;
        let kb_coverage = self.state.article_category_counts()?;

        debug!(
            total_meetings,
            open_groups = open_action_items.len(),
            kb_article_count,
            "built dashboard"
        );
        Ok(DashboardSummary {
            as_of: today,
            total_meetings,
            completed_meetings,
            scheduled_meetings,
            kb_article_count,
            open_action_items,
            upcoming_meetings,
            kb_coverage,
        })
    }
}
