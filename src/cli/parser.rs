use clap::{Parser, Subcommand};

/// Command-line interface definition for trackr
/// CLI application to track time spent on projects and tasks with SQLite
#[derive(Parser)]
#[command(
    name = "trackr",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track time spent on projects and tasks",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start tracking time for a task
    Start {
        project: String,
        task: String,

        /// Offset the start time into the past (eg. --ago 5m)
        #[arg(long = "ago")]
        ago: Option<String>,

        /// Offset the start time into the future (eg. --in 5m)
        #[arg(long = "in")]
        r#in: Option<String>,
    },

    /// Stop the running task
    Stop {
        /// Offset the end time into the past (eg. --ago 5m)
        #[arg(long = "ago")]
        ago: Option<String>,

        /// Offset the end time into the future (eg. --in 5m)
        #[arg(long = "in")]
        r#in: Option<String>,
    },

    /// Cancel the running task, discarding its frame
    Cancel,

    /// Display status of the running task
    Status {
        /// Refresh the status once per second until interrupted
        #[arg(long, short = 'w')]
        watch: bool,
    },

    /// Shift the start time of the running task (eg. shift -- -5m)
    Shift {
        #[arg(allow_hyphen_values = true)]
        duration: String,
    },

    /// Adjust the running duration of the current task
    #[command(alias = "cur")]
    Current {
        #[command(subcommand)]
        command: CurrentCommands,
    },

    /// Add a closed frame to a task
    Add {
        project: String,
        task: String,

        /// Length of the frame (eg. 30m)
        duration: String,

        /// Offset the frame (eg. -o -1h adds a frame that finished an hour ago)
        #[arg(long, short = 'o', allow_hyphen_values = true)]
        offset: Option<String>,
    },

    /// Display time spent on projects and tasks
    Log {
        project: Option<String>,
        task: Option<String>,

        /// Start date from which to include frames
        #[arg(long, short = 'f', allow_hyphen_values = true)]
        from: Option<String>,

        /// End date up to which to include frames
        #[arg(long, short = 't', allow_hyphen_values = true)]
        to: Option<String>,

        /// Show individual frames for each task
        #[arg(long, short = 'x')]
        frames: bool,
    },

    /// Display a daily report for time spent on projects and tasks
    Daily {
        project: Option<String>,
        task: Option<String>,

        /// Start date
        #[arg(long, short = 'f', required = true, allow_hyphen_values = true)]
        from: String,

        /// End date
        #[arg(long, short = 't', allow_hyphen_values = true)]
        to: Option<String>,
    },

    /// Display a monthly report for time spent on projects and tasks
    Report {
        /// Month shorthand (eg. 8, 2608, 2026-08)
        month: String,

        /// Output CSV format
        #[arg(long)]
        csv: bool,

        /// Treat every task as monthly tracked
        #[arg(long, short = 'm')]
        monthly: bool,
    },

    /// Display a timeline of tasks active per day over a date range
    Timeline {
        project: Option<String>,
        task: Option<String>,

        /// Start date for the timeline
        #[arg(long, short = 'f', required = true, allow_hyphen_values = true)]
        from: String,

        /// End date for the timeline
        #[arg(long, short = 't', allow_hyphen_values = true)]
        to: Option<String>,
    },

    /// Manage recorded frames for a task
    Frame {
        #[command(subcommand)]
        command: FrameCommands,
    },

    /// Manage tasks on a project
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },

    /// Manage projects
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },

    /// List projects
    Projects,
}

#[derive(Subcommand)]
pub enum CurrentCommands {
    /// Add to the running duration
    Add { duration: String },

    /// Subtract from the running duration
    Sub { duration: String },
}

#[derive(Subcommand)]
pub enum FrameCommands {
    /// Add a closed frame to a task
    Add {
        project: String,
        task: String,
        duration: String,

        #[arg(long, short = 'o', allow_hyphen_values = true)]
        offset: Option<String>,
    },

    /// Shift a frame's start and end times
    Edit {
        project: String,
        task: String,

        /// 0-based frame index
        frame: usize,

        /// Duration to shift the start time by (eg. --start -5m)
        #[arg(long, short = 's', allow_hyphen_values = true)]
        start: Option<String>,

        /// Duration to shift the end time by (eg. --end 5m)
        #[arg(long, short = 'e', allow_hyphen_values = true)]
        end: Option<String>,
    },

    /// Delete a frame
    #[command(alias = "rm")]
    Remove {
        project: String,
        task: String,
        frame: usize,
    },

    /// Move a frame to another project/task
    #[command(alias = "mv")]
    Move {
        project: String,
        task: String,
        frame: usize,
        new_project: String,
        new_task: String,
    },
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Rename a task
    Rename {
        project: String,
        old_name: String,
        new_name: String,
    },

    /// Delete a task and its frames
    #[command(alias = "rm")]
    Remove { project: String, task: String },

    /// Merge all frames of one task into another, deleting the source
    Merge {
        from_project: String,
        from_task: String,
        to_project: String,
        to_task: String,
    },

    /// Set an option for a task
    Set {
        project: String,
        task: String,

        /// Enable monthly reporting
        #[arg(long, short = 'm')]
        monthly: bool,

        /// Disable monthly reporting
        #[arg(long = "no-monthly", short = 'M')]
        no_monthly: bool,
    },
}

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// Add a new project
    Add { name: String },

    /// Rename a project
    Rename { old_name: String, new_name: String },

    /// Delete a project and all associated tasks
    #[command(alias = "rm")]
    Remove { name: String },
}
