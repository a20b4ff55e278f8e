use crate::types::{GlobalInfra, Group, LogEntry};

/// Parse a `SOURCE:LINE` argument into a log entry stamped with the current time.
///
/// Only the first ':' separates; the line itself may contain more and may be empty.
pub fn parse_log_arg(arg: &str) -> anyhow::Result<LogEntry> {
    let Some((source, line)) = arg.split_once(':') else {
        anyhow::bail!("expected SOURCE:LINE, got '{}'", arg);
    };
    let source = source.trim();
    if source.is_empty() {
        anyhow::bail!("empty source in log entry '{}'", arg);
    }
    Ok(LogEntry {
        source: source.to_string(),
        line: line.to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Render a log line with its group and source as prefix.
pub fn format_log_line(gid: &str, entry: &LogEntry) -> String {
    format!("[{}/{}] {}", gid, entry.source, entry.line)
}

/// Build one group per gid. Each group gets its own copy of the log entries.
pub fn build_groups<'a>(
    gids: &[String],
    logs: &[LogEntry],
    url: Option<&str>,
    infra: Option<&'a GlobalInfra>,
) -> Vec<Group<'a, LogEntry>> {
    gids.iter()
        .map(|gid| Group::with_parts(gid.as_str(), logs.to_vec(), url.map(str::to_string), infra))
        .collect()
}
