use std::fs;

use anyhow::{Context, Result};
use meethub_core::MeetHub;
use meethub_core::models::{ArticlePatch, MeetingPatch, NewActionItem, NewArticle, NewMeeting};

use crate::cli::{AttachCommand, ItemCommand, KbCommand, MeetingCommand, NotesCommand, UrlCommand};

use super::support::{attachment_name, print_json, print_ok, read_notes_content};

pub(super) fn handle_meeting(app: &MeetHub, command: MeetingCommand) -> Result<()> {
    match command {
        MeetingCommand::Create {
            date,
            time,
            topic,
            presenter,
            description,
            url_name,
            url,
        } => {
            let mut meeting = NewMeeting::new(date, time, topic, presenter);
            meeting.description = description;
            meeting.url_name = url_name;
            meeting.url = url;
            let created = app.create_meeting(&meeting)?;
            print_json(&created)?;
        }
        MeetingCommand::List => {
            print_json(&app.list_meetings()?)?;
        }
        MeetingCommand::Show { id } => {
            let meeting = app
                .get_meeting(id)?
                .with_context(|| format!("meeting {id} not found"))?;
            print_json(&serde_json::json!({
                "meeting": meeting,
                "notes": app.get_meeting_notes(id)?,
                "action_items": app.list_action_items(id, None)?,
                "attachments": app.list_attachments(id)?,
                "urls": app.list_meeting_urls(id)?,
            }))?;
        }
        MeetingCommand::Update {
            id,
            date,
            time,
            topic,
            presenter,
            description,
            url_name,
            url,
            status,
        } => {
            let patch = MeetingPatch {
                meeting_date: date,
                meeting_time: time,
                topic,
                presenter,
                description,
                url_name,
                url,
                status,
            };
            print_json(&app.update_meeting(id, &patch)?)?;
        }
        MeetingCommand::Delete { id } => {
            app.delete_meeting(id)?;
            print_ok("deleted_meeting", id)?;
        }
        MeetingCommand::Status { id, status } => {
            print_json(&app.set_meeting_status(id, status)?)?;
        }
    }
    Ok(())
}

pub(super) fn handle_notes(app: &MeetHub, command: NotesCommand) -> Result<()> {
    match command {
        NotesCommand::Set {
            meeting_id,
            text,
            from,
            attendees,
        } => {
            let notes = read_notes_content(text, from)?;
            print_json(&app.upsert_meeting_notes(meeting_id, &notes, attendees)?)?;
        }
        NotesCommand::Show { meeting_id } => {
            let notes = app
                .get_meeting_notes(meeting_id)?
                .with_context(|| format!("meeting {meeting_id} has no notes"))?;
            print_json(&notes)?;
        }
    }
    Ok(())
}

pub(super) fn handle_item(app: &MeetHub, command: ItemCommand) -> Result<()> {
    match command {
        ItemCommand::Add {
            meeting_id,
            description,
            kind,
            assignee,
            due,
        } => {
            let id = app.add_action_item(&NewActionItem {
                meeting_id,
                kind,
                description,
                assignee,
                due_date: due,
            })?;
            print_ok("action_item_id", id)?;
        }
        ItemCommand::List { meeting_id, kind } => {
            print_json(&app.list_action_items(meeting_id, kind)?)?;
        }
        ItemCommand::Status { id, status } => {
            app.update_action_item_status(id, status)?;
            print_json(&serde_json::json!({
                "status": "ok",
                "action_item_id": id,
                "item_status": status,
            }))?;
        }
        ItemCommand::Delete { id } => {
            app.delete_action_item(id)?;
            print_ok("deleted_action_item", id)?;
        }
    }
    Ok(())
}

pub(super) fn handle_attach(app: &MeetHub, command: AttachCommand) -> Result<()> {
    match command {
        AttachCommand::Add {
            meeting_id,
            path,
            name,
            file_type,
        } => {
            let data =
                fs::read(&path).with_context(|| format!("failed to read {}", path.display()))?;
            let file_name = attachment_name(&path, name)?;
            let id = app.save_attachment(meeting_id, &file_name, &data, file_type.as_deref())?;
            print_json(&serde_json::json!({
                "status": "ok",
                "attachment_id": id,
                "file_name": file_name,
                "file_size": data.len(),
            }))?;
        }
        AttachCommand::List { meeting_id } => {
            print_json(&app.list_attachments(meeting_id)?)?;
        }
        AttachCommand::Get { id, out } => {
            let attachment = app
                .attachment_data(id)?
                .with_context(|| format!("attachment {id} not found"))?;
            fs::write(&out, &attachment.data)
                .with_context(|| format!("failed to write {}", out.display()))?;
            print_json(&serde_json::json!({
                "status": "ok",
                "attachment_id": id,
                "file_name": attachment.file_name,
                "file_type": attachment.file_type,
                "written_to": out.display().to_string(),
                "bytes": attachment.data.len(),
            }))?;
        }
        AttachCommand::Delete { id } => {
            app.delete_attachment(id)?;
            print_ok("deleted_attachment", id)?;
        }
    }
    Ok(())
}

pub(super) fn handle_url(app: &MeetHub, command: UrlCommand) -> Result<()> {
    match command {
        UrlCommand::Add {
            meeting_id,
            url,
            name,
        } => {
            let id = app.add_meeting_url(meeting_id, &name, &url)?;
            print_ok("url_id", id)?;
        }
        UrlCommand::List { meeting_id } => {
            print_json(&app.list_meeting_urls(meeting_id)?)?;
        }
        UrlCommand::Delete { id } => {
            app.delete_meeting_url(id)?;
            print_ok("deleted_url", id)?;
        }
    }
    Ok(())
}

pub(super) fn handle_kb(app: &MeetHub, command: KbCommand) -> Result<()> {
    match command {
        KbCommand::Add {
            title,
            category,
            url,
            description,
            tags,
            source,
        } => {
            let article = NewArticle::new(title, category, url)
                .with_description(description)
                .with_tags(tags)
                .with_source_type(source);
            print_json(&app.add_article(&article)?)?;
        }
        KbCommand::List => {
            print_json(&app.list_articles()?)?;
        }
        KbCommand::Search { query } => {
            print_json(&app.search_articles(&query)?)?;
        }
        KbCommand::Update {
            id,
            title,
            category,
            url,
            description,
            tags,
            source,
        } => {
            let patch = ArticlePatch {
                title,
                category,
                description,
                url,
                source_type: source,
                tags,
            };
            print_json(&app.update_article(id, &patch)?)?;
        }
        KbCommand::Delete { id } => {
            app.delete_article(id)?;
            print_ok("deleted_article", id)?;
        }
        KbCommand::Categories => {
            print_json(&app.article_categories()?)?;
        }
    }
    Ok(())
}
