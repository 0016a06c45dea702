use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::meeting::{ActionItem, Meeting};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenActionItems {
    pub meeting_id: i64,
    pub topic: String,
    pub meeting_date: NaiveDate,
    pub items: Vec<ActionItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub articles: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub as_of: NaiveDate,
    pub total_meetings: usize,
    pub completed_meetings: usize,
    pub scheduled_meetings: usize,
    pub kb_article_count: usize,
    pub open_action_items: Vec<OpenActionItems>,
    pub upcoming_meetings: Vec<Meeting>,
    pub kb_coverage: Vec<CategoryCount>,
}
