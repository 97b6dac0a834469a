//! Commit activity of one repository and the snapshot derived from it.
//!
//! Only the latest page of commits (up to 100, newest first) is considered.
//! Dates are the committer dates truncated to the calendar day.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use sp_core::entities::SnapshotDraft;
use sp_core::validation::require_github_repo;

use crate::{GithubClient, error::GithubError, http::check_response};

/// Commits dated within this many days of today count as recent.
const RECENT_WINDOW_DAYS: u64 = 7;

/// Consecutive commits further apart than this many days count as a gap.
const GAP_DAYS: i64 = 2;

/// Summary of a repository's latest commits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitActivity {
    pub total_commits: u32,
    pub last_commit_date: Option<NaiveDate>,
    /// Commits dated today or in the previous seven days.
    pub commits_last_week: u32,
    /// Distinct calendar days with at least one commit.
    pub active_days: u32,
    pub commit_gaps: u32,
}

#[derive(Deserialize)]
struct CommitEntry {
    commit: CommitDetail,
}

#[derive(Deserialize)]
struct CommitDetail {
    committer: Signature,
}

#[derive(Deserialize)]
struct Signature {
    date: String,
}

fn commit_day(raw: &str) -> Result<NaiveDate, GithubError> {
    let day = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(day, sp_core::dates::DATE_FORMAT)
        .map_err(|e| GithubError::Parse(format!("commit date '{raw}': {e}")))
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

impl CommitActivity {
    /// Summarize commit days, newest first.
    #[must_use]
    pub fn from_dates(dates: &[NaiveDate], today: NaiveDate) -> Self {
        let Some(&last) = dates.first() else {
            return Self::default();
        };
        let week_ago = today
            .checked_sub_days(Days::new(RECENT_WINDOW_DAYS))
            .unwrap_or(NaiveDate::MIN);

        let mut distinct = dates.to_vec();
        distinct.sort_unstable();
        distinct.dedup();

        let gaps = dates
            .windows(2)
            .filter(|pair| (pair[0] - pair[1]).num_days() > GAP_DAYS)
            .count();

        Self {
            total_commits: count(dates.len()),
            last_commit_date: Some(last),
            commits_last_week: count(dates.iter().filter(|d| **d >= week_ago).count()),
            active_days: count(distinct.len()),
            commit_gaps: count(gaps),
        }
    }

    /// 1 when the last commit is from today or yesterday, otherwise 0.
    #[must_use]
    pub fn streak(&self, today: NaiveDate) -> u32 {
        match self.last_commit_date {
            Some(last) if last == today || today.pred_opt() == Some(last) => 1,
            _ => 0,
        }
    }
}

impl GithubClient {
    /// Summarize the latest commits of `owner/repo`.
    ///
    /// An empty repository (GitHub answers 409) has no activity.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::RepoNotFound`] for a 404, and other
    /// [`GithubError`] variants for transport, status, or parse failures.
    pub async fn commit_activity(
        &self,
        owner: &str,
        repo: &str,
        today: NaiveDate,
    ) -> Result<CommitActivity, GithubError> {
        let path = format!(
            "/repos/{}/{}/commits?per_page=100",
            urlencoding::encode(owner),
            urlencoding::encode(repo)
        );
        let resp = match check_response(self.get(&path).await?).await {
            Ok(resp) => resp,
            Err(GithubError::Api { status: 404, .. }) => {
                return Err(GithubError::RepoNotFound(format!("{owner}/{repo}")));
            }
            Err(GithubError::Api { status: 409, .. }) => {
                tracing::debug!(owner, repo, "repository is empty");
                return Ok(CommitActivity::default());
            }
            Err(e) => return Err(e),
        };

        let body = resp.text().await?;
        let entries: Vec<CommitEntry> = serde_json::from_str(&body)
            .map_err(|e| GithubError::Parse(format!("commit list: {e}")))?;
        let dates = entries
            .iter()
            .map(|c| commit_day(&c.commit.committer.date))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CommitActivity::from_dates(&dates, today))
    }

    /// Fetch activity for an `owner/name` label. Returns the snapshot for
    /// storage together with the full activity summary it was built from.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::InvalidRepo`] for a malformed label, otherwise
    /// whatever [`GithubClient::commit_activity`] returns.
    pub async fn fetch_snapshot(
        &self,
        user_id: i64,
        repo_name: &str,
        today: NaiveDate,
    ) -> Result<(SnapshotDraft, CommitActivity), GithubError> {
        require_github_repo(repo_name)?;
        let (owner, repo) = repo_name
            .split_once('/')
            .ok_or_else(|| GithubError::Parse(format!("repository label '{repo_name}'")))?;

        let activity = self.commit_activity(owner, repo, today).await?;
        tracing::debug!(
            repo = repo_name,
            commits = activity.total_commits,
            active_days = activity.active_days,
            gaps = activity.commit_gaps,
            "commit activity fetched"
        );

        let snapshot = SnapshotDraft {
            user_id,
            repo_name: repo_name.to_string(),
            commit_count: activity.total_commits,
            last_commit_date: activity.last_commit_date,
            streak_count: activity.streak(today),
        };
        Ok((snapshot, activity))
    }
}
