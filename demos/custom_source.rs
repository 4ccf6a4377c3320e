//! Example demonstrating custom sources and the typed Reader

use envbind::{Bind, Env, Reader};
use std::collections::BTreeMap;
use std::time::Duration;

/// Reads `key=value` lines, e.g. the contents of a `.env` file
struct DotEnv(BTreeMap<String, String>);

impl DotEnv {
    fn parse(text: &str) -> Self {
        let pairs = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split_once('='))
            .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
            .collect();
        Self(pairs)
    }
}

impl Env for DotEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}

#[derive(Debug, Default, Bind)]
#[env(prefix = "WORKER_")]
struct Worker {
    pub threads: usize,
    pub queue: String,

    #[env(with = "serde_json::from_str")]
    pub labels: Vec<String>,
}

const DOTENV: &str = r#"
# worker settings
WORKER_THREADS=4
WORKER_QUEUE=jobs
WORKER_LABELS=["fast","ssd"]

RETRY_LIMIT=five
POLL_INTERVAL=2s
"#;

fn main() -> anyhow::Result<()> {
    let source = DotEnv::parse(DOTENV);

    let worker = Worker::from_source(&source)?;
    println!("Worker: {worker:?}");

    // Typed accessors fall back instead of failing
    let reader = Reader::new(source);
    println!("  Retry Limit: {}", reader.get_int_or("RETRY_LIMIT", 3)); // 3
    println!("  Poll Interval: {:?}", reader.get_duration("POLL_INTERVAL"));
    println!(
        "  Timeout: {:?}",
        reader.get_duration_or("TIMEOUT", Duration::from_secs(30))
    );

    Ok(())
}
