use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod args;
mod kb;
mod meeting;
mod parsers;


pub use args::{AskArgs, DashboardArgs};
pub use kb::{KbArgs, KbCommand};
pub use meeting::{
    AttachArgs, AttachCommand, ItemArgs, ItemCommand, MeetingArgs, MeetingCommand, NotesArgs,
    NotesCommand, UrlArgs, UrlCommand,
};

#[derive(Debug, Parser)]
#[command(name = "meethub")]
#[command(about = "SRE meeting hub and knowledge-base assistant", version)]
pub struct Cli {
    #[arg(long, default_value = ".meethub")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the database and seed the knowledge base.
    Init,
    Meeting(MeetingArgs),
    Notes(NotesArgs),
    Item(ItemArgs),
    Attach(AttachArgs),
    Url(UrlArgs),
    Kb(KbArgs),
    /// Ask the knowledge-base assistant a question.
    Ask(AskArgs),
    Dashboard(DashboardArgs),
}

impl Commands {
    /// Stable label used when reporting a failed command.
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Meeting(_) => "meeting",
            Self::Notes(_) => "notes",
            Self::Item(_) => "item",
            Self::Attach(_) => "attach",
            Self::Url(_) => "url",
            Self::Kb(_) => "kb",
            Self::Ask(_) => "ask",
            Self::Dashboard(_) => "dashboard",
        }
    }
}
