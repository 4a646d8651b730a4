//! Descriptive statistics over a parsed [`Message`] sequence.
//!
//! Every operation is a pure function of `(scope, messages)`: the scope
//! filter is applied once up front ([`Scope::apply`]), then the statistic
//! runs over the filtered slice. All operations are total — an empty
//! sequence or an unknown scope user yields empty/zero results, never an
//! error.
//!
//! # Example
//!
//! ```rust
//! use chatlens::{Analyzer, ChatParser, Scope};
//!
//! let messages = ChatParser::new().parse_str(
//!     "12/08/23, 9:00 pm - Alice: Hello there\n\
//!      12/08/23, 9:01 pm - Bob: Hi Alice",
//! );
//!
//! let analyzer = Analyzer::new();
//! let stats = analyzer.fetch_stats(&Scope::Overall, &messages);
//! assert_eq!(stats.messages, 2);
//!
//! let alice = analyzer.fetch_stats(&Scope::user("Alice"), &messages);
//! assert_eq!(alice.messages, 1);
//! ```

pub mod tables;

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use linkify::{LinkFinder, LinkKind};
use tracing::debug;

use crate::Message;
use crate::config::AnalyzerConfig;
use crate::message::GROUP_NOTIFICATION;

pub use tables::{
    BusyUsers, ChatStats, DailyPoint, DayCount, EmojiCount, Heatmap, HeatmapRow, MonthCount,
    MonthlyPoint, TokenCount, UserCount, UserShare, WordFrequency,
};

/// Sentinel scope name meaning "no user filter".
pub const OVERALL: &str = "Overall";

/// Number of top tokens returned by [`Analyzer::word_frequency`].
const TOP_WORDS: usize = 20;

/// Number of users returned in the [`BusyUsers::top`] ranking.
const TOP_USERS: usize = 5;

/// Heatmap row order, fixed regardless of which days appear in the data.
const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// The user filter for an aggregation request.
///
/// [`Overall`](Scope::Overall) means no filtering; [`User`](Scope::User)
/// restricts every statistic to that sender. An absent user is not an
/// error — it simply matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// No filtering; every message counts.
    Overall,
    /// Only messages from this sender.
    User(String),
}

impl Scope {
    /// Creates a user scope.
    pub fn user(name: impl Into<String>) -> Self {
        Scope::User(name.into())
    }

    /// Interprets a selector string: the literal `"Overall"` is the
    /// unfiltered scope, anything else names a user.
    pub fn from_name(name: &str) -> Self {
        if name == OVERALL {
            Scope::Overall
        } else {
            Scope::User(name.to_string())
        }
    }

    /// Returns `true` when no user filter is active.
    pub fn is_overall(&self) -> bool {
        matches!(self, Scope::Overall)
    }

    /// Applies the filter once, yielding the slice view every statistic
    /// operates on. Preserves export order.
    pub fn apply<'a>(&self, messages: &'a [Message]) -> Vec<&'a Message> {
        match self {
            Scope::Overall => messages.iter().collect(),
            Scope::User(name) => messages.iter().filter(|m| &m.user == name).collect(),
        }
    }
}

impl From<&str> for Scope {
    fn from(name: &str) -> Self {
        Scope::from_name(name)
    }
}

/// Builds the selector list for a presentation layer: distinct users
/// excluding the notification sentinel, sorted, with `"Overall"` first.
pub fn user_list(messages: &[Message]) -> Vec<String> {
    let mut users: Vec<String> = Vec::new();
    for msg in messages {
        if msg.user != GROUP_NOTIFICATION && !users.contains(&msg.user) {
            users.push(msg.user.clone());
        }
    }
    users.sort();
    users.insert(0, OVERALL.to_string());
    users
}

/// Counter that remembers first-encounter order, so ranked tables can
/// break frequency ties by export order via a stable sort.
struct OrderedCounter<K> {
    index: HashMap<K, usize>,
    entries: Vec<(K, usize)>,
}

impl<K: Eq + Hash + Clone> OrderedCounter<K> {
    fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    fn add(&mut self, key: K) {
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    /// Entries sorted by count descending; equal counts keep insertion
    /// order (`sort_by` is stable).
    fn into_sorted(mut self) -> Vec<(K, usize)> {
        self.entries.sort_by(|a, b| b.1.cmp(&a.1));
        self.entries
    }
}

/// Rounds to two decimal places, matching the share-table contract.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Stateless statistics engine over parsed messages.
///
/// Construction takes an [`AnalyzerConfig`] carrying the stop-word and
/// emoji membership collaborators; nothing else is held between calls and
/// results are never cached.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Creates an analyzer with the bundled stop words and default emoji
    /// membership.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an analyzer with custom configuration.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Headline counters: messages, whitespace-delimited words, media
    /// placeholders, and URL-shaped substrings.
    pub fn fetch_stats(&self, scope: &Scope, messages: &[Message]) -> ChatStats {
        let scoped = scope.apply(messages);

        let mut finder = LinkFinder::new();
        finder.kinds(&[LinkKind::Url]);
        finder.url_must_have_scheme(false);

        let mut stats = ChatStats {
            messages: scoped.len(),
            ..ChatStats::default()
        };
        for msg in &scoped {
            stats.words += msg.message.split_whitespace().count();
            if msg.is_media() {
                stats.media += 1;
            }
            stats.links += finder.links(&msg.message).count();
        }

        debug!(?scope, messages = stats.messages, "computed headline stats");
        stats
    }

    /// Top five users by message count plus the full ranked share table.
    ///
    /// Only meaningful for the overall scope, so no scope argument: the
    /// ranking is over every message, notifications included.
    pub fn most_busy_users(&self, messages: &[Message]) -> BusyUsers {
        let total = messages.len();
        if total == 0 {
            return BusyUsers::default();
        }

        let mut counter = OrderedCounter::new();
        for msg in messages {
            counter.add(msg.user.clone());
        }
        let ranked = counter.into_sorted();

        let top = ranked
            .iter()
            .take(TOP_USERS)
            .map(|(user, count)| UserCount {
                user: user.clone(),
                messages: *count,
            })
            .collect();

        let shares = ranked
            .into_iter()
            .map(|(user, count)| UserShare {
                user,
                percent: round2(count as f64 / total as f64 * 100.0),
            })
            .collect();

        BusyUsers { top, shares }
    }

    /// Top tokens by frequency, lowercased, with media placeholders and
    /// configured stop words excluded; also returns the raw joined corpus
    /// for word-cloud rendering.
    pub fn word_frequency(&self, scope: &Scope, messages: &[Message]) -> WordFrequency {
        let scoped = scope.apply(messages);

        let corpus = scoped
            .iter()
            .map(|m| m.message.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        let mut counter = OrderedCounter::new();
        for msg in scoped.iter().filter(|m| !m.is_media()) {
            for token in msg.message.split_whitespace() {
                let token = token.to_lowercase();
                if !self.config.is_stop_word(&token) {
                    counter.add(token);
                }
            }
        }

        let top = counter
            .into_sorted()
            .into_iter()
            .take(TOP_WORDS)
            .map(|(token, count)| TokenCount { token, count })
            .collect();

        WordFrequency { top, corpus }
    }

    /// All distinct emoji in scope ranked by frequency.
    ///
    /// Scans character by character, since emoji are rarely
    /// whitespace-delimited. Empty result when no emoji occur.
    pub fn emoji_frequency(&self, scope: &Scope, messages: &[Message]) -> Vec<EmojiCount> {
        let scoped = scope.apply(messages);

        let mut counter = OrderedCounter::new();
        for msg in &scoped {
            for c in msg.message.chars() {
                if self.config.is_emoji(c) {
                    counter.add(c);
                }
            }
        }

        counter
            .into_sorted()
            .into_iter()
            .map(|(c, count)| EmojiCount {
                emoji: c.to_string(),
                count,
            })
            .collect()
    }

    /// Message counts per calendar month, chronological by
    /// `(year, month_num)` — never alphabetical by month name.
    pub fn monthly_timeline(&self, scope: &Scope, messages: &[Message]) -> Vec<MonthlyPoint> {
        let scoped = scope.apply(messages);

        let mut buckets: BTreeMap<(i32, u32), (String, usize)> = BTreeMap::new();
        for msg in &scoped {
            let entry = buckets
                .entry((msg.year, msg.month_num))
                .or_insert_with(|| (msg.month.clone(), 0));
            entry.1 += 1;
        }

        buckets
            .into_iter()
            .map(|((year, month_num), (month, count))| MonthlyPoint {
                year,
                month_num,
                label: format!("{month}-{year}"),
                month,
                messages: count,
            })
            .collect()
    }

    /// Message counts per calendar date, chronological.
    pub fn daily_timeline(&self, scope: &Scope, messages: &[Message]) -> Vec<DailyPoint> {
        let scoped = scope.apply(messages);

        let mut buckets: BTreeMap<chrono::NaiveDate, usize> = BTreeMap::new();
        for msg in &scoped {
            *buckets.entry(msg.only_date).or_insert(0) += 1;
        }

        buckets
            .into_iter()
            .map(|(date, count)| DailyPoint {
                date,
                messages: count,
            })
            .collect()
    }

    /// Message counts by weekday name, descending.
    pub fn week_activity(&self, scope: &Scope, messages: &[Message]) -> Vec<DayCount> {
        let scoped = scope.apply(messages);

        let mut counter = OrderedCounter::new();
        for msg in &scoped {
            counter.add(msg.day_name.clone());
        }

        counter
            .into_sorted()
            .into_iter()
            .map(|(day_name, count)| DayCount {
                day_name,
                messages: count,
            })
            .collect()
    }

    /// Message counts by month name, descending.
    pub fn month_activity(&self, scope: &Scope, messages: &[Message]) -> Vec<MonthCount> {
        let scoped = scope.apply(messages);

        let mut counter = OrderedCounter::new();
        for msg in &scoped {
            counter.add(msg.month.clone());
        }

        counter
            .into_sorted()
            .into_iter()
            .map(|(month, count)| MonthCount {
                month,
                messages: count,
            })
            .collect()
    }

    /// Day-of-week × period activity matrix.
    ///
    /// Always seven rows (Monday through Sunday); one column per distinct
    /// period observed in scope, ascending by starting hour; missing
    /// combinations are zero.
    pub fn activity_heatmap(&self, scope: &Scope, messages: &[Message]) -> Heatmap {
        let scoped = scope.apply(messages);

        // Period start hour doubles as the column sort key.
        let mut period_by_hour: BTreeMap<u32, String> = BTreeMap::new();
        for msg in &scoped {
            period_by_hour
                .entry(msg.hour)
                .or_insert_with(|| msg.period.clone());
        }
        let periods: Vec<String> = period_by_hour.into_values().collect();

        let col: HashMap<&str, usize> = periods
            .iter()
            .enumerate()
            .map(|(i, p)| (p.as_str(), i))
            .collect();

        let mut rows: Vec<HeatmapRow> = DAY_NAMES
            .iter()
            .map(|&day_name| HeatmapRow {
                day_name: day_name.to_string(),
                cells: vec![0; periods.len()],
            })
            .collect();

        for msg in &scoped {
            let Some(row) = DAY_NAMES.iter().position(|&d| d == msg.day_name) else {
                continue;
            };
            if let Some(&c) = col.get(msg.period.as_str()) {
                rows[row].cells[c] += 1;
            }
        }

        Heatmap { periods, rows }
    }
}
