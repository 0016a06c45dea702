use crate::error::{MeetHubError, Result};
use crate::models::{
    ActionItem, ActionItemKind, ActionItemStatus, Attachment, AttachmentData, Meeting,
    MeetingNotes, MeetingOverview, MeetingPatch, MeetingStatus, MeetingUrl, NewActionItem,
    NewMeeting,
};

use super::MeetHub;

impl MeetHub {
    pub fn create_meeting(&self, meeting: &NewMeeting) -> Result<Meeting> {
        let id = self.state.create_meeting(meeting)?;
        self.require_meeting(id)
    }

    pub fn get_meeting(&self, id: i64) -> Result<Option<Meeting>> {
        self.state.get_meeting(id)
    }

    pub fn list_meetings(&self) -> Result<Vec<MeetingOverview>> {
        self.state.list_meetings()
    }

    /// Applies only the supplied fields and returns the stored meeting.
    pub fn update_meeting(&self, id: i64, patch: &MeetingPatch) -> Result<Meeting> {
        self.state.update_meeting(id, patch)?;
        self.require_meeting(id)
    }

    pub fn set_meeting_status(&self, id: i64, status: MeetingStatus) -> Result<Meeting> {
        self.update_meeting(
            id,
            &MeetingPatch {
                status: Some(status),
                ..MeetingPatch::default()
            },
        )
    }

    /// Removes the meeting together with its notes, items, attachments and links.
    pub fn delete_meeting(&self, id: i64) -> Result<()> {
        self.state.delete_meeting(id)
    }

    pub fn upsert_meeting_notes(
        &self,
        meeting_id: i64,
        notes: &str,
        attendee_count: u32,
    ) -> Result<MeetingNotes> {
        self.state
            .upsert_meeting_notes(meeting_id, notes, attendee_count)?;
        self.state
            .get_meeting_notes(meeting_id)?
            .ok_or_else(|| MeetHubError::missing("notes for meeting", meeting_id))
    }

    pub fn get_meeting_notes(&self, meeting_id: i64) -> Result<Option<MeetingNotes>> {
        self.state.get_meeting_notes(meeting_id)
    }

    pub fn add_action_item(&self, item: &NewActionItem) -> Result<i64> {
        self.state.add_action_item(item)
    }

    pub fn list_action_items(
        &self,
        meeting_id: i64,
        kind: Option<ActionItemKind>,
    ) -> Result<Vec<ActionItem>> {
        self.state.list_action_items(meeting_id, kind)
    }

    pub fn update_action_item_status(&self, id: i64, status: ActionItemStatus) -> Result<()> {
        self.state.update_action_item_status(id, status)
    }

    pub fn delete_action_item(&self, id: i64) -> Result<()> {
        self.state.delete_action_item(id)
    }

    pub fn save_attachment(
        &self,
        meeting_id: i64,
        file_name: &str,
        data: &[u8],
        file_type: Option<&str>,
    ) -> Result<i64> {
        self.state
            .save_attachment(meeting_id, file_name, data, file_type)
    }

    pub fn list_attachments(&self, meeting_id: i64) -> Result<Vec<Attachment>> {
        self.state.list_attachments(meeting_id)
    }

    pub fn attachment_data(&self, id: i64) -> Result<Option<AttachmentData>> {
        self.state.attachment_data(id)
    }

    pub fn delete_attachment(&self, id: i64) -> Result<()> {
        self.state.delete_attachment(id)
    }

    pub fn add_meeting_url(&self, meeting_id: i64, url_name: &str, url: &str) -> Result<i64> {
        self.state.add_meeting_url(meeting_id, url_name, url)
    }

    pub fn list_meeting_urls(&self, meeting_id: i64) -> Result<Vec<MeetingUrl>> {
        self.state.list_meeting_urls(meeting_id)
    }

    pub fn delete_meeting_url(&self, id: i64) -> Result<()> {
        self.state.delete_meeting_url(id)
    }

    fn require_meeting(&self, id: i64) -> Result<Meeting> {
        self.state
            .get_meeting(id)?
            .ok_or_else(|| MeetHubError::missing("meeting", id))
    }
}
