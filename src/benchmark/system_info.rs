// src/benchmark/system_info.rs

use serde::{Deserialize, Serialize};

/// Machine and checkout the result was measured on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    pub hostname: String,
    pub os: String,
    pub cpu_model: String,
    pub cpu_cores: usize,
    pub cpu_threads: usize,
    pub total_memory_mb: u64,
    pub git_commit: String,
    pub git_dirty: bool,
}

impl SystemInfo {
    pub fn collect() -> Self {
        use sysinfo::System;

        let mut sys = System::new_all();
        sys.refresh_all();

        let cpu_model = sys.cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .unwrap_or_else(|| "Unknown".to_string());

        let os = format!(
            "{} {}",
            System::name().unwrap_or_else(|| "Unknown".to_string()),
            System::os_version().unwrap_or_default(),
        );

        let (git_commit, git_dirty) = Self::git_state();

        SystemInfo {
            hostname: System::host_name().unwrap_or_else(|| "Unknown".to_string()),
            os: os.trim().to_string(),
            cpu_model,
            cpu_cores: sys.physical_core_count().unwrap_or(0),
            cpu_threads: sys.cpus().len(),
            total_memory_mb: sys.total_memory() / 1024 / 1024,
            git_commit,
            git_dirty,
        }
    }

    /// HEAD commit of the enclosing repository, if there is one.
    fn git_state() -> (String, bool) {
        let repo = match git2::Repository::discover(".") {
            Ok(repo) => repo,
            Err(_) => return ("unknown".to_string(), false),
        };

        let commit = repo.head().ok()
            .and_then(|h| h.peel_to_commit().ok())
            .map(|c| c.id().to_string())
            .unwrap_or_else(|| "unknown".to_string());

        let dirty = repo.statuses(None)
            .map(|statuses| !statuses.is_empty())
            .unwrap_or(false);

        (commit, dirty)
    }

    pub fn short_commit(&self) -> String {
        let mut short: String = self.git_commit.chars().take(8).collect();
        if self.git_dirty {
            short.push_str("+dirty");
        }
        short
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_fills_basics() {
        let info = SystemInfo::collect();
        assert!(!info.hostname.is_empty());
        assert!(!info.git_commit.is_empty());
    }

    #[test]
    fn test_short_commit() {
        let info = SystemInfo {
            hostname: "h".into(),
            os: "os".into(),
            cpu_model: "cpu".into(),
            cpu_cores: 1,
            cpu_threads: 2,
            total_memory_mb: 1,
            git_commit: "0123456789abcdef".into(),
            git_dirty: true,
        };
        assert_eq!(info.short_commit(), "01234567+dirty");
    }
}
