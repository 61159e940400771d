//! Line-oriented filtering of candidate emails against the denylist.
//!
//! Each input line is one candidate address. Known bot addresses are
//! excluded (or selected, or annotated) according to [`OutputMode`].
//! Lines that are not valid UTF-8 are decoded lossily and filtered like any
//! other line, so one bad record never stops a run.

use crate::config::{FilterConfig, OutputMode};
use crate::denylist::BotEmailDenylist;
use anyhow::Context;
use serde::Serialize;
use std::borrow::Cow;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Classification of a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Known bot or placeholder address
    Bot,
    /// Anything not on the denylist
    Human,
    /// Nothing to look up
    Blank,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Bot => "bot",
            Verdict::Human => "human",
            Verdict::Blank => "blank",
        }
    }
}

/// Counters collected over one filter run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterStats {
    pub total: u64,
    pub bots: u64,
    pub humans: u64,
    pub blank: u64,
    /// Lines that were not valid UTF-8 (also counted under their verdict)
    pub invalid: u64,
}

impl FilterStats {
    fn record(&mut self, verdict: Verdict) {
        self.total += 1;
        match verdict {
            Verdict::Bot => self.bots += 1,
            Verdict::Human => self.humans += 1,
            Verdict::Blank => self.blank += 1,
        }
    }
}

/// Applies a denylist to a stream of candidate emails.
pub struct EmailFilter<'a> {
    config: FilterConfig,
    denylist: &'a BotEmailDenylist,
}

impl EmailFilter<'static> {
    /// Create a filter backed by the process-wide denylist.
    pub fn new(config: FilterConfig) -> Self {
        Self::with_denylist(config, BotEmailDenylist::global())
    }
}

impl<'a> EmailFilter<'a> {
    pub fn with_denylist(config: FilterConfig, denylist: &'a BotEmailDenylist) -> Self {
        Self { config, denylist }
    }

    fn prepare<'l>(&self, line: &'l str) -> &'l str {
        if self.config.trim_whitespace {
            line.trim()
        } else {
            line
        }
    }

    /// Classify one line.
    pub fn classify(&self, line: &str) -> Verdict {
        if line.trim().is_empty() {
            Verdict::Blank
        } else if self.denylist.is_bot(self.prepare(line)) {
            Verdict::Bot
        } else {
            Verdict::Human
        }
    }

    /// Filter every line of `reader` into `writer`.
    pub fn run<R: BufRead, W: Write>(&self, mut reader: R, mut writer: W) -> anyhow::Result<FilterStats> {
        let mut stats = FilterStats::default();
        let mut buf = Vec::new();
        let mut lineno = 0usize;

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .with_context(|| format!("reading input line {}", lineno + 1))?;
            if read == 0 {
                break;
            }
            lineno += 1;

            let raw = strip_line_ending(&buf);
            let line = String::from_utf8_lossy(raw);
            if let Cow::Owned(_) = line {
                warn!(line = lineno, "Input line is not valid UTF-8, decoding lossily");
                stats.invalid += 1;
            }

            let verdict = self.classify(&line);
            stats.record(verdict);

            let email = self.prepare(&line);
            if verdict == Verdict::Bot {
                debug!(email = %email, line = lineno, "Excluding bot address");
            }

            let out = match (self.config.output, verdict) {
                (_, Verdict::Blank) if self.config.skip_blank => None,
                (OutputMode::Bots, Verdict::Blank) => None,
                (_, Verdict::Blank) => Some(email.to_string()),
                (OutputMode::Humans, Verdict::Human) | (OutputMode::Bots, Verdict::Bot) => {
                    Some(email.to_string())
                }
                (OutputMode::Annotated, v) => Some(format!("{}\t{}", v.as_str(), email)),
                _ => None,
            };

            if let Some(out) = out {
                writeln!(writer, "{}", out).context("writing output")?;
            }
        }

        writer.flush().context("flushing output")?;

        info!(
            total = stats.total,
            bots = stats.bots,
            humans = stats.humans,
            blank = stats.blank,
            invalid = stats.invalid,
            "Email filtering complete"
        );

        Ok(stats)
    }
}

fn strip_line_ending(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}
