mod article;
mod assistant;
mod dashboard;
mod meeting;

pub use article::{Article, ArticlePatch, KNOWN_CATEGORIES, NewArticle, SourceType};
pub use assistant::{AssistantResponse, Intent, ResponseKind, ScoredArticle};
pub use dashboard::{CategoryCount, DashboardSummary, OpenActionItems};
pub use meeting::{
    ActionItem, ActionItemKind, ActionItemStatus, Attachment, AttachmentData, Meeting,
    MeetingNotes, MeetingOverview, MeetingPatch, MeetingStatus, MeetingUrl, NewActionItem,
    NewMeeting,
};
