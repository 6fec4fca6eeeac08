//! Tabbed view state
//!
//! Models the stdout/stderr/status panels and the active-tab selection as an
//! explicit value, independent of any output device. Rendering is a pure
//! projection of the latest poll observation onto the panels; observations
//! left over from a previously watched job are discarded by id.

use kiln_client::PollUpdate;
use kiln_core::domain::job::{JobId, JobStatus};
use kiln_core::domain::log::LogSnapshot;

/// Sentinel shown when a snapshot carries no stdout.
pub const NO_RESULT: &str = "No result";
/// Sentinel shown when a snapshot carries no stderr.
pub const NO_ERROR: &str = "No error";

/// The three panels of the job view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Stdout,
    Stderr,
    Status,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Stdout, Tab::Stderr, Tab::Status];

    /// Parses a tab name; anything unrecognized is `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "stdout" => Some(Self::Stdout),
            "stderr" => Some(Self::Stderr),
            "status" => Some(Self::Status),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
            Self::Status => "status",
        }
    }
}

/// View state for a single watched job.
#[derive(Debug, Clone)]
pub struct JobView {
    active: Option<Tab>,
    job: Option<JobId>,
    stdout: String,
    stderr: String,
    status: String,
}

impl JobView {
    /// Creates an empty view with the stdout tab active.
    pub fn new() -> Self {
        Self {
            active: Some(Tab::Stdout),
            job: None,
            stdout: String::new(),
            stderr: String::new(),
            status: String::new(),
        }
    }

    /// Focuses the view on a job, clearing anything a previous job rendered.
    pub fn focus(&mut self, job: JobId) {
        self.job = Some(job);
        self.stdout.clear();
        self.stderr.clear();
        self.status.clear();
    }

    /// Applies a poll observation.
    ///
    /// Observations tagged with a job other than the focused one are stale
    /// output from an earlier watch and are dropped. Returns whether the
    /// view was updated.
    pub fn apply(&mut self, update: &PollUpdate) -> bool {
        if self.job.as_ref() != Some(&update.job_id) {
            return false;
        }
        self.render(&update.logs, &update.status);
        true
    }

    /// Projects one status/log observation onto the three panels.
    ///
    /// The snapshot wholly replaces whatever was shown before; panels are
    /// never merged across ticks.
    pub fn render(&mut self, logs: &LogSnapshot, status: &JobStatus) {
        self.stdout = logs.stdout_text().unwrap_or(NO_RESULT).to_string();
        self.stderr = logs.stderr_text().unwrap_or(NO_ERROR).to_string();
        self.status = status_line(status);
    }

    /// Activates the named tab; an unknown name deactivates every tab.
    pub fn switch_tab(&mut self, name: &str) {
        self.active = Tab::parse(name);
    }

    pub fn active_tab(&self) -> Option<Tab> {
        self.active
    }

    /// The current text of a panel.
    pub fn panel(&self, tab: Tab) -> &str {
        match tab {
            Tab::Stdout => &self.stdout,
            Tab::Stderr => &self.stderr,
            Tab::Status => &self.status,
        }
    }
}

impl Default for JobView {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats the status panel line.
pub fn status_line(status: &JobStatus) -> String {
    if status.is_terminal() {
        format!("Status: {status}")
    } else {
        format!("Status: {status} - Waiting")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(job: &str, status: JobStatus, logs: LogSnapshot) -> PollUpdate {
        PollUpdate {
            job_id: JobId::from(job),
            status,
            logs,
        }
    }

    #[test]
    fn test_status_line_waiting_and_terminal() {
        let pending = JobStatus::Waiting("PENDING".to_string());
        assert_eq!(status_line(&pending), "Status: PENDING - Waiting");
        assert_eq!(status_line(&JobStatus::Finished), "Status: FINISHED");
        assert_eq!(status_line(&JobStatus::Failed), "Status: FAILED");
    }

    #[test]
    fn test_missing_streams_render_sentinels() {
        let mut view = JobView::new();
        view.focus(JobId::from("abc"));
        view.render(&LogSnapshot::default(), &JobStatus::Waiting("QUEUED".into()));

        assert_eq!(view.panel(Tab::Stdout), NO_RESULT);
        assert_eq!(view.panel(Tab::Stderr), NO_ERROR);
    }

    #[test]
    fn test_empty_streams_render_sentinels() {
        let mut view = JobView::new();
        view.focus(JobId::from("abc"));
        let logs = LogSnapshot {
            stdout: Some(String::new()),
            stderr: Some(String::new()),
        };
        view.render(&logs, &JobStatus::Finished);

        assert_eq!(view.panel(Tab::Stdout), NO_RESULT);
        assert_eq!(view.panel(Tab::Stderr), NO_ERROR);
    }

    #[test]
    fn test_latest_snapshot_replaces_previous() {
        let mut view = JobView::new();
        view.focus(JobId::from("abc"));

        let first = LogSnapshot {
            stdout: Some("partial".to_string()),
            stderr: None,
        };
        view.render(&first, &JobStatus::Waiting("RUNNING".into()));
        assert_eq!(view.panel(Tab::Stdout), "partial");

        view.render(&LogSnapshot::default(), &JobStatus::Waiting("RUNNING".into()));
        assert_eq!(view.panel(Tab::Stdout), NO_RESULT);
    }

    #[test]
    fn test_switch_tab_is_idempotent() {
        let mut view = JobView::new();

        view.switch_tab("stderr");
        let once = view.active_tab();
        view.switch_tab("stderr");
        assert_eq!(view.active_tab(), once);
        assert_eq!(view.active_tab(), Some(Tab::Stderr));
    }

    #[test]
    fn test_unknown_tab_deactivates_everything() {
        let mut view = JobView::new();
        assert_eq!(view.active_tab(), Some(Tab::Stdout));

        view.switch_tab("bogus");
        assert_eq!(view.active_tab(), None);

        // Switching tabs never touches panel content.
        view.switch_tab("status");
        assert_eq!(view.active_tab(), Some(Tab::Status));
    }

    #[test]
    fn test_stale_updates_are_discarded() {
        let mut view = JobView::new();
        view.focus(JobId::from("new-job"));

        let stale = update(
            "old-job",
            JobStatus::Finished,
            LogSnapshot {
                stdout: Some("old output".to_string()),
                stderr: None,
            },
        );
        assert!(!view.apply(&stale));
        assert_eq!(view.panel(Tab::Stdout), "");

        let live = update("new-job", JobStatus::Waiting("PENDING".into()), LogSnapshot::default());
        assert!(view.apply(&live));
        assert_eq!(view.panel(Tab::Status), "Status: PENDING - Waiting");
    }

    #[test]
    fn test_refocus_clears_previous_job_output() {
        let mut view = JobView::new();
        view.focus(JobId::from("a"));
        view.render(
            &LogSnapshot {
                stdout: Some("from a".to_string()),
                stderr: None,
            },
            &JobStatus::Finished,
        );

        view.focus(JobId::from("b"));
        assert_eq!(view.panel(Tab::Stdout), "");
        assert_eq!(view.panel(Tab::Status), "");
    }

    #[test]
    fn test_submission_scenario_panels() {
        // print(1) via main.py: one waiting tick with an empty snapshot,
        // then the finished tick with captured stdout.
        let mut view = JobView::new();
        view.focus(JobId::from("abc"));

        let first = update("abc", JobStatus::Waiting("PENDING".into()), LogSnapshot::default());
        assert!(view.apply(&first));
        assert_eq!(view.panel(Tab::Status), "Status: PENDING - Waiting");
        assert_eq!(view.panel(Tab::Stdout), NO_RESULT);

        let second = update(
            "abc",
            JobStatus::Finished,
            LogSnapshot {
                stdout: Some("1\n".to_string()),
                stderr: None,
            },
        );
        assert!(view.apply(&second));
        assert_eq!(view.panel(Tab::Stdout), "1\n");
        assert_eq!(view.panel(Tab::Status), "Status: FINISHED");
    }
}
