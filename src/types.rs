use std::fmt;

/// A single log line attributed to a source.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub source: String,
    pub line: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Infrastructure descriptor that groups may point at. Owned by whoever builds it.
#[derive(Debug, Clone)]
pub struct GlobalInfra {
    pub name: String,
    pub clusters: Vec<String>,
}

impl fmt::Display for GlobalInfra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<GlobalInfra name={}>", self.name)
    }
}

/// A named collection of logs, optionally tied to a URL and an infrastructure descriptor.
///
/// Log entries and the descriptor are passed through unexamined. The descriptor is
/// borrowed, so a group never outlives the infra it refers to.
#[derive(Debug, Clone)]
pub struct Group<'a, L, I = GlobalInfra> {
    pub gid: String,
    pub logs: Vec<L>,
    pub url: Option<String>,
    pub global_infra: Option<&'a I>,
}

impl<'a, L, I> Group<'a, L, I> {
    pub fn new(gid: impl Into<String>) -> Self {
        Self {
            gid: gid.into(),
            logs: Vec::new(),
            url: None,
            global_infra: None,
        }
    }

    pub fn with_parts(
        gid: impl Into<String>,
        logs: Vec<L>,
        url: Option<String>,
        global_infra: Option<&'a I>,
    ) -> Self {
        Self {
            gid: gid.into(),
            logs,
            url,
            global_infra,
        }
    }

    pub fn with_logs(mut self, logs: Vec<L>) -> Self {
        self.logs = logs;
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_global_infra(mut self, global_infra: &'a I) -> Self {
        self.global_infra = Some(global_infra);
        self
    }
}

/// Logging-friendly form; only the gid is shown.
impl<L, I> fmt::Display for Group<'_, L, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Group gid={}>", self.gid)
    }
}
