use std::process::ExitCode;

fn main() -> ExitCode {
    jira_time_logger::run()
}
