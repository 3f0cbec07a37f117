use clap::{Args, Parser, Subcommand};
use survey_core::{CategoryFilter, Threshold};

#[derive(Debug, Parser)]
#[command(
    name = "survey-similarity",
    version,
    about = "Browse pre-scored similar questions for generic survey questions",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,

    /// Options for the desktop viewer when no subcommand is given.
    #[command(flatten)]
    pub view: ViewArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Launch the desktop viewer (default).
    Ui(ViewArgs),

    /// Print generic questions grouped by category.
    List {
        #[arg(long, env = "SURVEY_CATEGORY", default_value_t = CategoryFilter::All)]
        category: CategoryFilter,
    },

    /// Print the similar questions for one generic question.
    Similar {
        /// Exact text of the generic question.
        #[arg(long, env = "SURVEY_QUESTION")]
        question: String,

        #[arg(long, env = "SURVEY_THRESHOLD", default_value_t = Threshold::DEFAULT)]
        threshold: Threshold,

        /// Emit the outcome as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Args)]
pub struct ViewArgs {
    /// Initial category filter (`all` or a category name).
    #[arg(long, env = "SURVEY_CATEGORY", default_value_t = CategoryFilter::All)]
    pub category: CategoryFilter,

    /// Initial similarity threshold in [0, 1].
    #[arg(long, env = "SURVEY_THRESHOLD", default_value_t = Threshold::DEFAULT)]
    pub threshold: Threshold,

    /// Generic question selected on launch.
    #[arg(long, env = "SURVEY_QUESTION")]
    pub question: Option<String>,
}

impl Cli {
    /// The subcommand to run; a bare invocation launches the viewer.
    #[must_use]
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Ui(self.view))
    }
}
