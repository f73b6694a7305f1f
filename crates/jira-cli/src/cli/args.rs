use super::*;

pub(super) const DEFAULT_ISSUE_FIELDS: &str = "resolution,resolutiondate,updated,parent";
pub(super) const DEFAULT_ISSUE_FETCH_SIZE: u32 = 10;

#[derive(Parser)]
#[command(author, version, about = "Fetch data from a Jira instance")]
pub(super) struct Cli {
    #[arg(
        long,
        global = true,
        help = "Private environment file (defaults to the user config dir)"
    )]
    pub(super) env_file: Option<PathBuf>,
    #[arg(long, global = true, default_value = DEFAULT_PROFILE)]
    pub(super) profile: String,
    #[arg(long, global = true, help = "Print only the number of fetched items")]
    pub(super) count: bool,
    #[arg(short, long, global = true, help = "Log every request")]
    pub(super) verbose: bool,
    #[command(subcommand)]
    pub(super) command: Commands,
}

#[derive(clap::Subcommand)]
pub(super) enum Commands {
    #[command(about = "Search issues, paging by total")]
    Issues(IssuesArgs),
    #[command(about = "Fetch an endpoint once")]
    Array(ArrayArgs),
    #[command(about = "Fetch an isLast-paginated listing")]
    Paginated(PaginatedArgs),
}

#[derive(Parser)]
pub(super) struct IssuesArgs {
    #[arg(long, default_value = "rest/api/2/search")]
    pub(super) endpoint: String,
    #[arg(long, help = "JQL filter; defaults to recent issues of the profile's project")]
    pub(super) jql: Option<String>,
    #[arg(
        long,
        default_value = DEFAULT_ISSUE_FIELDS,
        help = "Comma separated issue fields; pass an empty value for all fields"
    )]
    pub(super) fields: String,
    #[arg(long, default_value_t = DEFAULT_ISSUE_FETCH_SIZE)]
    pub(super) fetch_size: u32,
}

#[derive(Parser)]
pub(super) struct ArrayArgs {
    #[arg(long, default_value = "rest/api/3/resolution")]
    pub(super) endpoint: String,
}

#[derive(Parser)]
pub(super) struct PaginatedArgs {
    #[arg(long, default_value = "rest/api/3/statuses/search")]
    pub(super) endpoint: String,
    #[arg(long, help = "Extra query parameters as a JSON object")]
    pub(super) params: Option<String>,
    #[arg(long, default_value_t = DEFAULT_FETCH_SIZE)]
    pub(super) fetch_size: u32,
}
