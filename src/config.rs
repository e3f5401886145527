use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "jobfeed", about = "Job vacancy aggregator across job-board APIs")]
pub struct Config {
    /// Output file receiving one JSON object per saved vacancy
    #[arg(long, env = "JOBFEED_OUTPUT", default_value = "vacancies.jsonl")]
    pub output: String,

    /// SuperJob application id; the SuperJob provider is skipped without it
    #[arg(long, env = "SUPERJOB_APP_ID")]
    pub superjob_app_id: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug, Clone)]
pub enum Command {
    /// Search the boards and append the results to the output file
    Search {
        /// Skill keywords, whitespace-separated; trailing commas are stripped
        query: String,

        /// Platform name for HeadHunter's NAME:(...) clause
        #[arg(long, default_value = "Python")]
        platform: String,

        /// Keep only the first N results per provider
        #[arg(long, short = 'n')]
        count: Option<u32>,

        /// Years of experience used for each board's experience filter
        #[arg(long)]
        experience: Option<u32>,
    },
    /// Print the vacancies saved in the output file
    Saved,
    /// Ask HeadHunter how many vacancies exist for a keyword
    Probe {
        keyword: String,
    },
}
