use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifiers used across the casegen pipeline.
///
/// The rule is simple:
/// - IDs are unique for the lifetime of the process, never reused.
/// - IDs are printable and safe to paste into docs and exported files.
///
/// Case ids are not reproducible across runs. The UI keys expand/collapse
/// and edit state off them, so uniqueness is the only contract.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseId(pub String);

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(pub String);

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

static SEQUENCE: AtomicU64 = AtomicU64::new(0);
static PROCESS_EPOCH: OnceLock<u128> = OnceLock::new();

fn unix_nanos() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos()
}

fn next_sequence() -> u64 {
    SEQUENCE.fetch_add(1, Ordering::Relaxed)
}

impl CaseId {
    /// Fresh identifier for a newly parsed test case.
    ///
    /// Unique within the process by construction (monotonic counter). The
    /// process epoch prefix keeps ids from two processes apart with
    /// negligible collision probability.
    pub fn next() -> Self {
        let epoch = *PROCESS_EPOCH.get_or_init(unix_nanos);
        CaseId(format!("case_{epoch:x}_{}", next_sequence()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CaseId {
    fn from(s: &str) -> Self {
        CaseId(s.to_string())
    }
}

impl RunId {
    /// Timestamped run id. The sequence suffix separates runs created within
    /// the same clock tick.
    pub fn now(prefix: &str) -> Self {
        RunId(format!("{prefix}_{}_{}", unix_nanos(), next_sequence()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn case_ids_are_distinct() {
        let a = CaseId::next();
        let b = CaseId::next();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("case_"));
    }

    #[test]
    fn case_ids_share_process_epoch() {
        let a = CaseId::next().to_string();
        let b = CaseId::next().to_string();
        let prefix = |s: &str| s.rsplit_once('_').map(|(p, _)| p.to_string());
        assert_eq!(prefix(&a), prefix(&b));
    }

    #[test]
    fn case_ids_unique_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| (0..500).map(|_| CaseId::next()).collect::<Vec<_>>()))
            .collect();
        let mut seen = HashSet::new();
        for h in handles {
            for id in h.join().unwrap() {
                assert!(seen.insert(id), "duplicate case id");
            }
        }
        assert_eq!(seen.len(), 2000);
    }

    #[test]
    fn run_id_carries_prefix() {
        let id = RunId::now("run");
        assert!(id.to_string().starts_with("run_"));
    }

    #[test]
    fn ids_serialize_transparently() {
        let id = CaseId::from("case_1_2");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"case_1_2\"");
        let back: CaseId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
