use chrono::NaiveDate;
use clap::Args;

use super::parsers::parse_date;

#[derive(Debug, Args)]
pub struct AskArgs {
    /// Free-text question; several words may be passed unquoted.
    #[arg(allow_hyphen_values = true, num_args = 0..)]
    pub query: Vec<String>,
}

impl AskArgs {
    pub fn query_text(&self) -> String {
        self.query.join(" ")
    }
}

#[derive(Debug, Args)]
pub struct DashboardArgs {
    /// Reference day for upcoming meetings (defaults to the local date).
    #[arg(long, value_parser = parse_date)]
    pub today: Option<NaiveDate>,
}
