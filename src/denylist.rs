//! Denylist of email addresses owned by bots, CI systems and placeholder accounts.
//!
//! Identities carrying one of these addresses are not people and should be
//! excluded from identity matching. Comparison is case-insensitive: entries
//! are stored lowercase and lookups lowercase their input.

use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;

/// Known bot, CI and placeholder email addresses.
pub const BOT_EMAILS: &[&str] = &[
    "noreply@github.com",
    "noreply-awscodestar@amazon.com",
    "nobody@amazon.com",
    "you@example.com",
    "obsidian-leadership@redhat.com",
    "commit-bot@chromium.org",
    "snyk-bot@snyk.io",
    "eloy.de.enige+cocoapods.github.bot@gmail.com",
    "support@dependabot.com",
    "deploy@travis-ci.org",
    "bot@renovateapp.com",
    "whitesource-bolt-for-github[bot]@users.noreply.github.com",
    "DevExpressExampleBot@users.noreply.github.com",
    "facebook-github-bot@users.noreply.github.com",
    "greenkeeper[bot]@users.noreply.github.com",
    "support@forestry.io",
    "keks@htmlacademy.ru",
    "ghost@gitbook.com",
    "admin@example.com",
    "jenkins-x@googlegroups.com",
    "circleci@cf-graph.regro.github.com",
    "android-build-merger@google.com",
    "k8s-ci-robot@users.noreply.github.com",
    "contact@jsdelivr.com",
    "travis@example.org",
    "gardener@tensorflow.org",
    "badger@codacy.com",
    "noreply-gerritcodereview@google.com",
    "hosted@weblate.org",
    "unconfigured@null.spigotmc.org",
    "ImgBotHelp@gmail.com",
    "bot@siteleaf.com",
    "team@crowdbotics.com",
    "gnome-sysadmin@gnome.org",
    "noreply@weblate.org",
    "pontoon@mozilla.com",
    "github-bot@pyup.io",
    "azure-pipelines[bot]@users.noreply.github.com",
    "cppanbot@gmail.com",
    "unknown@example.com",
    "bot@styleci.io",
    "jhipster-bot@jhipster.tech",
    "badges@fossa.io",
    "angular-cli@angular.io",
    "review@openstack.org",
    "ci-automated-tests@broadinstitute.org",
    "k8s-publishing-bot@users.noreply.github.com",
    "travis@travis-ci.org",
    "example@example.com",
    "hello@yotako.io",
    "chrome-bot@chromium.org",
    "testbot@balabit.com",
    "renovate[bot]@users.noreply.github.com",
    "semantic-release-bot@martynus.net",
    "no-reply@github.com",
    "noreply@gmail.com",
];

static GLOBAL: LazyLock<BotEmailDenylist> = LazyLock::new(BotEmailDenylist::new);

/// Immutable, case-insensitive set of bot email addresses.
#[derive(Debug, Clone)]
pub struct BotEmailDenylist {
    entries: HashSet<String>,
}

impl BotEmailDenylist {
    /// Build the denylist from [`BOT_EMAILS`].
    pub fn new() -> Self {
        Self::from_entries(BOT_EMAILS)
    }

    /// Build a denylist from arbitrary entries, lowercasing each one.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries: HashSet<String> = entries
            .into_iter()
            .map(|e| e.as_ref().to_lowercase())
            .collect();

        debug!(entries = entries.len(), "Bot email denylist built");

        Self { entries }
    }

    /// Process-wide denylist, built on first access.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Returns true if the address is a known bot address, ignoring case.
    ///
    /// No syntax validation happens here: anything that does not literally
    /// match an entry, including the empty string, is not a bot.
    pub fn is_bot(&self, address: &str) -> bool {
        self.entries.contains(&address.to_lowercase())
    }

    /// Like [`is_bot`](Self::is_bot), with a missing address counting as human.
    pub fn is_bot_opt(&self, address: Option<&str>) -> bool {
        address.is_some_and(|a| self.is_bot(a))
    }

    /// Lookup for input the caller has already lowercased.
    pub fn contains_normalized(&self, address: &str) -> bool {
        self.entries.contains(address)
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the denylist has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the stored lowercase entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

impl Default for BotEmailDenylist {
    fn default() -> Self {
        Self::new()
    }
}

/// Check an address against the process-wide denylist.
pub fn is_bot(address: &str) -> bool {
    BotEmailDenylist::global().is_bot(address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_entry_matches() {
        let list = BotEmailDenylist::new();
        for email in BOT_EMAILS {
            assert!(list.is_bot(email), "{email} should be a bot");
        }
    }

    #[test]
    fn test_case_insensitive() {
        let list = BotEmailDenylist::new();
        for email in BOT_EMAILS {
            assert!(list.is_bot(&email.to_uppercase()));
            assert!(list.is_bot(&email.to_lowercase()));
        }
        assert!(list.is_bot("NoReply@GitHub.com"));
        assert!(list.is_bot("devexpressexamplebot@users.noreply.github.com"));
        assert!(list.is_bot("imgbothelp@GMAIL.com"));
    }

    #[test]
    fn test_unknown_addresses() {
        let list = BotEmailDenylist::new();
        assert!(!list.is_bot("real.person@company.com"));
        assert!(!list.is_bot("alice@example.org"));
        assert!(!list.is_bot(""));
        assert!(!list.is_bot(" noreply@github.com"));
        assert!(!list.is_bot("noreply@github.com.evil"));
    }

    #[test]
    fn test_missing_address() {
        let list = BotEmailDenylist::new();
        assert!(!list.is_bot_opt(None));
        assert!(list.is_bot_opt(Some("Travis@Travis-CI.org")));
    }

    #[test]
    fn test_entries_are_lowercase() {
        let list = BotEmailDenylist::new();
        assert!(list.iter().all(|e| e == e.to_lowercase()));
        assert!(list.contains_normalized("imgbothelp@gmail.com"));
        assert!(!list.contains_normalized("ImgBotHelp@gmail.com"));
    }

    #[test]
    fn test_size_matches_distinct_entries() {
        let distinct: HashSet<String> = BOT_EMAILS.iter().map(|e| e.to_lowercase()).collect();
        let list = BotEmailDenylist::new();
        assert_eq!(list.len(), distinct.len());
        assert_eq!(list.len(), 56);
        assert!(!list.is_empty());
    }

    #[test]
    fn test_duplicates_collapse() {
        let list = BotEmailDenylist::from_entries(["A@b.com", "a@B.com", "a@b.com", "c@d.com"]);
        assert_eq!(list.len(), 2);
        assert!(list.is_bot("a@b.COM"));
    }

    #[test]
    fn test_global_helper() {
        assert!(is_bot("k8s-ci-robot@users.noreply.github.com"));
        assert!(!is_bot("alice@example.org"));
        assert!(std::ptr::eq(BotEmailDenylist::global(), BotEmailDenylist::global()));
    }
}
