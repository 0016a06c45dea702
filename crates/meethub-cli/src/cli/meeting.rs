use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};
use clap::{Args, Subcommand};
use meethub_core::models::{ActionItemKind, ActionItemStatus, MeetingStatus};

use super::parsers::{
    parse_date, parse_item_kind, parse_item_status, parse_meeting_status, parse_time,
};

#[derive(Debug, Args)]
pub struct MeetingArgs {
    #[command(subcommand)]
    pub command: MeetingCommand,
}

#[derive(Debug, Subcommand)]
pub enum MeetingCommand {
    Create {
        #[arg(long, value_parser = parse_date)]
        date: NaiveDate,
        #[arg(long, value_parser = parse_time)]
        time: NaiveTime,
        #[arg(long)]
        topic: String,
        #[arg(long)]
        presenter: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Display name of the meeting link.
        #[arg(long, default_value = "")]
        url_name: String,
        #[arg(long, default_value = "")]
        url: String,
    },
    /// List meetings, newest first, with their notes.
    List,
    Show {
        id: i64,
    },
    /// Change only the supplied fields.
    Update {
        id: i64,
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
        #[arg(long, value_parser = parse_time)]
        time: Option<NaiveTime>,
        #[arg(long)]
        topic: Option<String>,
        #[arg(long)]
        presenter: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        url_name: Option<String>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long, value_parser = parse_meeting_status)]
        status: Option<MeetingStatus>,
    },
    Delete {
        id: i64,
    },
    Status {
        id: i64,
        #[arg(value_parser = parse_meeting_status)]
        status: MeetingStatus,
    },
}

#[derive(Debug, Args)]
pub struct NotesArgs {
    #[command(subcommand)]
    pub command: NotesCommand,
}

#[derive(Debug, Subcommand)]
pub enum NotesCommand {
    /// Create or replace the notes of a meeting.
    Set {
        meeting_id: i64,
        #[arg(long, conflicts_with = "from")]
        text: Option<String>,
        /// Read the notes from a file.
        #[arg(long)]
        from: Option<PathBuf>,
        #[arg(long, default_value_t = 0)]
        attendees: u32,
    },
    Show {
        meeting_id: i64,
    },
}

#[derive(Debug, Args)]
pub struct ItemArgs {
    #[command(subcommand)]
    pub command: ItemCommand,
}

#[derive(Debug, Subcommand)]
pub enum ItemCommand {
    Add {
        meeting_id: i64,
        #[arg(long)]
        description: String,
        #[arg(long, default_value = "todo", value_parser = parse_item_kind)]
        kind: ActionItemKind,
        #[arg(long, default_value = "")]
        assignee: String,
        #[arg(long, value_parser = parse_date)]
        due: Option<NaiveDate>,
    },
    List {
        meeting_id: i64,
        #[arg(long, value_parser = parse_item_kind)]
        kind: Option<ActionItemKind>,
    },
    Status {
        id: i64,
        #[arg(value_parser = parse_item_status)]
        status: ActionItemStatus,
    },
    Delete {
        id: i64,
    },
}

#[derive(Debug, Args)]
pub struct AttachArgs {
    #[command(subcommand)]
    pub command: AttachCommand,
}

#[derive(Debug, Subcommand)]
pub enum AttachCommand {
    /// Store a local file as a meeting attachment.
    Add {
        meeting_id: i64,
        path: PathBuf,
        /// Stored file name; defaults to the file name of `path`.
        #[arg(long)]
        name: Option<String>,
        /// MIME type; inferred from the extension when omitted.
        #[arg(long = "type")]
        file_type: Option<String>,
    },
    List {
        meeting_id: i64,
    },
    /// Write the stored bytes of an attachment to a file.
    Get {
        id: i64,
        #[arg(long)]
        out: PathBuf,
    },
    Delete {
        id: i64,
    },
}

#[derive(Debug, Args)]
pub struct UrlArgs {
    #[command(subcommand)]
    pub command: UrlCommand,
}

#[derive(Debug, Subcommand)]
pub enum UrlCommand {
    Add {
        meeting_id: i64,
        url: String,
        #[arg(long, default_value = "")]
        name: String,
    },
    List {
        meeting_id: i64,
    },
    Delete {
        id: i64,
    },
}
