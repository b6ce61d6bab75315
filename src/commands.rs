//! Handlers behind the `log`, `vimlog` and `issues` subcommands.

use std::io::{self, BufRead, Write};

use chrono::{DateTime, Local, NaiveTime};
use jira_api::{JiraClient, WorklogCreate};
use log::{debug, info};

use crate::cli::{Commands, IssuesArgs, LogArgs};
use crate::error::AppError;
use crate::worklog::{format_time_spent, WorklogLine};

const JIRA_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

/// Runs one subcommand against an authenticated client, reading stdin and writing stdout as needed.
pub async fn dispatch(command: Commands, client: &JiraClient) -> Result<(), AppError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match command {
        Commands::Log(args) => log_time(client, &args).await,
        Commands::Vimlog => {
            let line = read_line(&mut io::stdin().lock())?;
            vimlog(client, &line, &mut out).await
        }
        Commands::Issues(args) => list_issues(client, &args, &mut out).await,
    }
}

/// Submits a worklog with the amount taken verbatim from the command line.
pub async fn log_time(client: &JiraClient, args: &LogArgs) -> Result<(), AppError> {
    let mut entry = WorklogCreate::new(args.amount.clone()).with_raw_comment(args.comment.clone());
    if let Some(started) = &args.started {
        entry = entry.with_started(jira_timestamp(started)?);
    }
    let issue = client.get_issue(&args.issue).await?;
    let worklog = client.add_worklog(&issue.key, &entry).await?;
    info!("Logged {} on {} (worklog {})", args.amount, issue.key, worklog.id);
    Ok(())
}

/// Processes one worklog line and writes the annotated line back.
///
/// Unmatched lines get `?` appended, already ticked lines get `!`, lines
/// without tracking marks are echoed as is. Otherwise the tracked minutes are
/// submitted and the line is echoed with its checkbox ticked.
pub async fn vimlog<W: Write>(client: &JiraClient, line: &str, out: &mut W) -> Result<(), AppError> {
    let Some(entry) = WorklogLine::parse(line) else {
        debug!("Line does not match worklog format: {:?}", line);
        writeln!(out, "{}?", line)?;
        return Ok(());
    };
    if entry.is_complete() {
        writeln!(out, "{}!", line)?;
        return Ok(());
    }

    let minutes = entry.minutes();
    if minutes == 0 {
        writeln!(out, "{}", line)?;
        return Ok(());
    }

    let time_spent = format_time_spent(minutes);
    let request = WorklogCreate::new(time_spent.clone()).with_comment(entry.comment);
    client.add_worklog(entry.issue, &request).await?;
    info!("Logged {} on {}", time_spent, entry.issue);
    writeln!(out, "{}", entry.completed_line())?;
    Ok(())
}

/// Prints `<key>: <summary>` for every issue matched by the query.
pub async fn list_issues<W: Write>(
    client: &JiraClient,
    args: &IssuesArgs,
    out: &mut W,
) -> Result<(), AppError> {
    let issues = client.search_all_issues(&args.jql, args.limit).await?;
    debug!("Query {:?} returned {} issues", args.jql, issues.len());
    for issue in &issues {
        writeln!(out, "{}: {}", issue.key, issue.summary())?;
    }
    Ok(())
}

/// Reads a single line without its line terminator. Fails when input ends before any line.
fn read_line<R: BufRead>(input: &mut R) -> Result<String, AppError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "no worklog line on standard input",
        )));
    }
    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(line)
}

/// Converts an RFC 3339 timestamp or a local `HH:MM` of today into Jira's timestamp format.
fn jira_timestamp(value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.format(JIRA_TIMESTAMP_FORMAT).to_string());
    }
    let invalid = || AppError::InvalidStarted {
        value: value.to_string(),
    };
    let time = NaiveTime::parse_from_str(trimmed, "%H:%M").map_err(|_| invalid())?;
    let local = Local::now()
        .date_naive()
        .and_time(time)
        .and_local_timezone(Local)
        .earliest()
        .ok_or_else(invalid)?;
    Ok(local.format(JIRA_TIMESTAMP_FORMAT).to_string())
}
