//! Home timelines: the "World" and "Me" tabs.
//!
//! Fetching and applying are split so a UI can run the fetch without holding
//! a borrow of the state across the await. The async helpers on
//! [`HomeTimelines`] glue the two together for callers that can.

use std::fmt;

use crate::contract::ContractClient;
use crate::session::Session;
use crate::types::{Page, Post};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TimelineTab {
    /// Everyone's posts
    #[default]
    Public,
    /// The signed-in account's posts
    Mine,
}

impl TimelineTab {
    pub const ALL: [TimelineTab; 2] = [TimelineTab::Public, TimelineTab::Mine];

    pub fn label(&self) -> &'static str {
        match self {
            TimelineTab::Public => "World",
            TimelineTab::Mine => "Me",
        }
    }
}

impl fmt::Display for TimelineTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of reading one tab
#[derive(Clone, Debug, PartialEq)]
pub enum TimelineFetch {
    Loaded(Vec<Post>),
    Failed(String),
    /// "Me" was requested with nobody signed in; no read was made
    SignedOut,
}

/// Read the posts for `tab`.
///
/// The personal timeline is only read when someone is signed in.
pub async fn fetch_timeline(
    contract: &dyn ContractClient,
    session: &dyn Session,
    tab: TimelineTab,
    page: Page,
) -> TimelineFetch {
    let result = match tab {
        TimelineTab::Public => contract.public_timeline(page).await,
        TimelineTab::Mine => {
            let Some(me) = session.account_id() else {
                return TimelineFetch::SignedOut;
            };
            contract.user_timeline(&me, page).await
        }
    };

    match result {
        Ok(posts) => {
            tracing::debug!(tab = %tab, count = posts.len(), "timeline loaded");
            TimelineFetch::Loaded(posts)
        }
        Err(e) => {
            tracing::warn!(tab = %tab, "Failed to load timeline: {}", e);
            TimelineFetch::Failed(e.to_string())
        }
    }
}

/// Cached contents of both tabs plus the active selection
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HomeTimelines {
    active: TimelineTab,
    public: Vec<Post>,
    mine: Vec<Post>,
    error: Option<(TimelineTab, String)>,
}

impl HomeTimelines {
    pub fn active(&self) -> TimelineTab {
        self.active
    }

    pub fn select(&mut self, tab: TimelineTab) {
        self.active = tab;
    }

    pub fn posts(&self, tab: TimelineTab) -> &[Post] {
        match tab {
            TimelineTab::Public => &self.public,
            TimelineTab::Mine => &self.mine,
        }
    }

    pub fn active_posts(&self) -> &[Post] {
        self.posts(self.active)
    }

    /// Error from the last failed read of the active tab
    pub fn error(&self) -> Option<&str> {
        match &self.error {
            Some((tab, message)) if *tab == self.active => Some(message),
            _ => None,
        }
    }

    /// Fold a fetch result into the cache.
    ///
    /// A failure keeps whatever was cached for that tab.
    pub fn apply(&mut self, tab: TimelineTab, fetch: TimelineFetch) {
        match fetch {
            TimelineFetch::Loaded(posts) => {
                *self.slot(tab) = posts;
                if matches!(&self.error, Some((t, _)) if *t == tab) {
                    self.error = None;
                }
            }
            TimelineFetch::SignedOut => self.slot(tab).clear(),
            TimelineFetch::Failed(message) => self.error = Some((tab, message)),
        }
    }

    fn slot(&mut self, tab: TimelineTab) -> &mut Vec<Post> {
        match tab {
            TimelineTab::Public => &mut self.public,
            TimelineTab::Mine => &mut self.mine,
        }
    }

    /// First load after mount: always the public timeline, once
    pub async fn load_initial(
        &mut self,
        contract: &dyn ContractClient,
        session: &dyn Session,
        page: Page,
    ) {
        let fetch = fetch_timeline(contract, session, TimelineTab::Public, page).await;
        self.apply(TimelineTab::Public, fetch);
    }

    /// Switch to `tab` and read it
    pub async fn activate(
        &mut self,
        tab: TimelineTab,
        contract: &dyn ContractClient,
        session: &dyn Session,
        page: Page,
    ) {
        self.select(tab);
        let fetch = fetch_timeline(contract, session, tab, page).await;
        self.apply(tab, fetch);
    }

    /// Re-read whichever tab is active
    pub async fn reload(&mut self, contract: &dyn ContractClient, session: &dyn Session, page: Page) {
        let tab = self.active;
        let fetch = fetch_timeline(contract, session, tab, page).await;
        self.apply(tab, fetch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u64) -> Post {
        Post {
            id,
            content: format!("post {}", id),
            user: "bob.near".parse().unwrap(),
            created_at: 0,
        }
    }

    #[test]
    fn test_default_is_public() {
        let timelines = HomeTimelines::default();
        assert_eq!(timelines.active(), TimelineTab::Public);
        assert!(timelines.active_posts().is_empty());
        assert_eq!(TimelineTab::Public.label(), "World");
        assert_eq!(TimelineTab::Mine.label(), "Me");
    }

    #[test]
    fn test_failure_keeps_stale_cache() {
        let mut timelines = HomeTimelines::default();
        timelines.apply(TimelineTab::Public, TimelineFetch::Loaded(vec![post(1), post(0)]));
        timelines.apply(TimelineTab::Public, TimelineFetch::Failed("node down".to_string()));

        assert_eq!(timelines.active_posts().len(), 2);
        assert_eq!(timelines.error(), Some("node down"));

        timelines.apply(TimelineTab::Public, TimelineFetch::Loaded(vec![post(2)]));
        assert_eq!(timelines.error(), None);
        assert_eq!(timelines.active_posts(), &[post(2)]);
    }

    #[test]
    fn test_error_only_shown_for_its_tab() {
        let mut timelines = HomeTimelines::default();
        timelines.apply(TimelineTab::Public, TimelineFetch::Failed("boom".to_string()));
        timelines.select(TimelineTab::Mine);
        assert_eq!(timelines.error(), None);

        // a successful read of the other tab does not clear it
        timelines.apply(TimelineTab::Mine, TimelineFetch::Loaded(vec![]));
        timelines.select(TimelineTab::Public);
        assert_eq!(timelines.error(), Some("boom"));
    }

    #[test]
    fn test_signed_out_clears_mine() {
        let mut timelines = HomeTimelines::default();
        timelines.apply(TimelineTab::Mine, TimelineFetch::Loaded(vec![post(3)]));
        timelines.apply(TimelineTab::Mine, TimelineFetch::SignedOut);
        assert!(timelines.posts(TimelineTab::Mine).is_empty());
    }
}
