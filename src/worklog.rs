//! Worklog line format used to track time in plain-text outliner notes.
//!
//! A line looks like `- [ ] ** fix login @930 - PROJ-1 [2.;,]`: a checkbox
//! state, optional markup, a comment, an optional `@time` annotation, the
//! issue key and a bracketed group of tracking marks. Each mark adds a fixed
//! number of minutes (`.` 30, `;` 15, `,` 5).

use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

static WORKLOG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^-\s+\[(?P<state>[. x])\]\s*",
        r"(?P<prefix>\W*)\s+",
        r"(?P<comment>[\w\s.,;\-/]+)\s+",
        r"(?:@(?P<time>\d+))?\s*",
        r"- (?P<issue>[A-Z]+-\d+)\s+",
        r"\[\d*(?P<tracking>[.;,\s]*)\]",
    ))
    .expect("invalid worklog regex")
});

/// Checkbox state of a worklog line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    /// `[ ]`
    NotStarted,
    /// `[.]`
    Partial,
    /// `[x]`: the time has already been submitted.
    Complete,
}

impl EntryState {
    fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            " " => Some(EntryState::NotStarted),
            "." => Some(EntryState::Partial),
            "x" => Some(EntryState::Complete),
            _ => None,
        }
    }

    pub fn marker(self) -> char {
        match self {
            EntryState::NotStarted => ' ',
            EntryState::Partial => '.',
            EntryState::Complete => 'x',
        }
    }
}

/// Fields extracted from one worklog line. Borrows from the source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorklogLine<'a> {
    pub state: EntryState,
    pub prefix: &'a str,
    pub comment: &'a str,
    /// Digits of the `@time` annotation. Parsed but not acted upon.
    pub time: Option<&'a str>,
    pub issue: &'a str,
    pub tracking: &'a str,
    source: &'a str,
    state_span: Range<usize>,
}

impl<'a> WorklogLine<'a> {
    /// Matches `line` against the worklog format. Returns `None` unless the whole shape matches.
    pub fn parse(line: &'a str) -> Option<Self> {
        let captures = WORKLOG_REGEX.captures(line)?;
        let state_match = captures.name("state")?;
        let state = EntryState::from_marker(state_match.as_str())?;
        Some(Self {
            state,
            prefix: captures.name("prefix").map_or("", |m| m.as_str()),
            comment: captures.name("comment")?.as_str().trim(),
            time: captures.name("time").map(|m| m.as_str()),
            issue: captures.name("issue")?.as_str(),
            tracking: captures.name("tracking").map_or("", |m| m.as_str()),
            source: line,
            state_span: state_match.range(),
        })
    }

    pub fn is_complete(&self) -> bool {
        self.state == EntryState::Complete
    }

    /// Total minutes encoded by the tracking marks.
    pub fn minutes(&self) -> u32 {
        accumulate(self.tracking)
    }

    /// Returns the source line with its checkbox ticked, everything else untouched.
    pub fn completed_line(&self) -> String {
        let mut line = String::with_capacity(self.source.len());
        line.push_str(&self.source[..self.state_span.start]);
        line.push(EntryState::Complete.marker());
        line.push_str(&self.source[self.state_span.end..]);
        line
    }
}

/// Sums the minute weights of every tracking mark; unknown characters count as zero.
pub fn accumulate(tracking: &str) -> u32 {
    tracking.chars().map(mark_minutes).sum()
}

fn mark_minutes(mark: char) -> u32 {
    match mark {
        '.' => 30,
        ';' => 15,
        ',' => 5,
        _ => 0,
    }
}

/// Formats minutes the way Jira accepts them in `timeSpent`.
pub fn format_time_spent(minutes: u32) -> String {
    format!("{}m", minutes)
}
