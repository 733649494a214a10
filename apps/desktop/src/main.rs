use std::process::ExitCode;

use anyhow::Result;
use clap::{Args as ClapArgs, Parser, Subcommand};
use client_core::{load_settings, ClientState, StudentClient};
use shared::domain::{RollNo, StudentDraft};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "students", about = "Manage records on a student-records service")]
struct Args {
    /// Overrides the configured service address.
    #[arg(long, global = true)]
    backend_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every record.
    List,
    /// Look up one record.
    Get { roll_no: String },
    /// Create a record.
    Add(RecordArgs),
    /// Replace the record with the given roll number.
    Update(RecordArgs),
    /// Remove a record, no confirmation asked.
    Delete { roll_no: i64 },
}

/// Fields are taken as typed; they are not validated beyond being present.
#[derive(ClapArgs, Debug)]
struct RecordArgs {
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    roll_no: String,
    #[arg(long, default_value = "")]
    marks: String,
    #[arg(long, default_value = "")]
    grade: String,
}

impl From<RecordArgs> for StudentDraft {
    fn from(args: RecordArgs) -> Self {
        Self {
            name: args.name,
            roll_no: args.roll_no,
            marks: args.marks,
            grade: args.grade,
        }
    }
}

fn render_list(state: &ClientState) -> String {
    if state.students.is_empty() {
        return "No students.".to_string();
    }
    state
        .students
        .iter()
        .map(|student| student.summary_line())
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_search(state: &ClientState) -> Option<String> {
    let found = state.search.result.as_ref()?;
    Some(format!(
        "Name: {}\nRoll No: {}\nMarks: {}\nGrade: {}",
        found.name, found.roll_no, found.marks, found.grade
    ))
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(backend_url) = args.backend_url {
        settings.backend_url = backend_url;
    }
    let mut client = StudentClient::from_settings(&settings)?;

    let outcome = match args.command {
        Command::List => client.list().await,
        Command::Get { roll_no } => {
            client.set_search_query(roll_no);
            client.search().await
        }
        Command::Add(record) => {
            client.set_form(record.into());
            client.create().await
        }
        Command::Update(record) => {
            client.set_form(record.into());
            client.update().await
        }
        Command::Delete { roll_no } => client.delete(RollNo(roll_no)).await,
    };

    if let Err(err) = outcome {
        eprintln!("{err}");
        return Ok(ExitCode::FAILURE);
    }

    match render_search(client.state()) {
        Some(found) => println!("{found}"),
        None => println!("{}", render_list(client.state())),
    }
    Ok(ExitCode::SUCCESS)
}
