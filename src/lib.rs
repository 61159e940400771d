//! Bot email denylist for identity matching
//!
//! A fixed, case-insensitive set of email addresses that belong to bots, CI
//! systems and placeholder accounts. Identities using one of them are not
//! people and get excluded before matching.
//!
//! # Example
//!
//! ```
//! use bot_email_denylist::is_bot;
//!
//! assert!(is_bot("NoReply@GitHub.com"));
//! assert!(!is_bot("alice@example.org"));
//! ```

pub mod config;
pub mod denylist;
pub mod filter;

pub use config::{FilterConfig, OutputMode};
pub use denylist::{is_bot, BotEmailDenylist, BOT_EMAILS};
pub use filter::{EmailFilter, FilterStats, Verdict};
