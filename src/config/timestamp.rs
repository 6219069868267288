//! Date fragment rendering. Patterns use Unicode date-field letters (`yyyy-MM-dd HH:mm:ss.SSS`)
//! and are translated once into a chrono strftime string, so the hot path is a single
//! `DateTime::format` call.

use chrono::{DateTime, FixedOffset, Local, Utc};
use std::fmt::Write;
use std::str::FromStr;

pub const DEFAULT_PATTERN: &str = "yyyy-MM-dd HH:mm:ss.SSS";

/// Which clock the timestamp fragment is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zone {
    #[default]
    Local,
    Utc,
}

impl Zone {
    /// Name accepted by the `timezone` config key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Utc => "utc",
        }
    }
}

impl FromStr for Zone {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "utc" | "gmt" | "z" => Ok(Self::Utc),
            _ => Err(crate::Error::InvalidTimezone(s.to_string())),
        }
    }
}

/// Pattern plus zone. An unsupported pattern is kept as-is and simply never renders,
/// so the date fragment drops out of the line instead of breaking it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampFormat {
    pattern: String,
    strftime: Option<String>,
    zone: Zone,
}

impl Default for TimestampFormat {
    fn default() -> Self {
        Self::new(DEFAULT_PATTERN)
    }
}

impl TimestampFormat {
    /// Local-time format for `pattern`. Unsupported patterns are kept but never render.
    #[must_use]
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let strftime = translate(&pattern);
        Self {
            pattern,
            strftime,
            zone: Zone::Local,
        }
    }

    /// Like [`new`](Self::new) but rejects patterns that could never render.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidTimestampPattern`] when the pattern has unsupported field letters.
    pub fn validated(pattern: impl Into<String>) -> Result<Self, crate::Error> {
        let format = Self::new(pattern);
        if format.strftime.is_none() {
            return Err(crate::Error::InvalidTimestampPattern(format.pattern));
        }
        Ok(format)
    }

    /// Reads the clock in `zone` instead.
    #[must_use]
    pub const fn zone(mut self, zone: Zone) -> Self {
        self.zone = zone;
        self
    }

    /// The pattern as written.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Clock the date fragment is read from.
    #[must_use]
    pub const fn time_zone(&self) -> Zone {
        self.zone
    }

    /// Whether [`format`](Self::format) can ever produce output.
    #[must_use]
    pub const fn is_renderable(&self) -> bool {
        self.strftime.is_some()
    }

    /// Current time on the configured clock.
    #[must_use]
    pub fn now(&self) -> DateTime<FixedOffset> {
        match self.zone {
            Zone::Local => Local::now().fixed_offset(),
            Zone::Utc => Utc::now().fixed_offset(),
        }
    }

    /// Renders `at` in the configured zone. `None` when the pattern can't be rendered.
    #[must_use]
    pub fn format(&self, at: &DateTime<FixedOffset>) -> Option<String> {
        let strftime = self.strftime.as_deref()?;
        let mut out = String::new();
        // DelayedFormat reports bad items through fmt::Error; to_string() would panic.
        let result = match self.zone {
            Zone::Local => write!(out, "{}", at.with_timezone(&Local).format(strftime)),
            Zone::Utc => write!(out, "{}", at.with_timezone(&Utc).format(strftime)),
        };
        result.ok().map(|()| out)
    }
}

/// Translates a Unicode date pattern into strftime. `None` on any unsupported field.
fn translate(pattern: &str) -> Option<String> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '\'' {
            // '' is an escaped quote, otherwise a quoted literal runs to the next quote
            if chars.get(i + 1) == Some(&'\'') {
                out.push('\'');
                i += 2;
                continue;
            }
            i += 1;
            while i < chars.len() {
                if chars[i] == '\'' {
                    if chars.get(i + 1) == Some(&'\'') {
                        out.push('\'');
                        i += 2;
                        continue;
                    }
                    break;
                }
                push_literal(&mut out, chars[i]);
                i += 1;
            }
            // unterminated quote: treat the rest as literal
            i += 1;
            continue;
        }

        if !c.is_ascii_alphabetic() {
            push_literal(&mut out, c);
            i += 1;
            continue;
        }

        let run = chars[i..].iter().take_while(|&&x| x == c).count();
        out.push_str(field(c, run)?);
        i += run;
    }

    Some(out)
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}

fn field(letter: char, run: usize) -> Option<&'static str> {
    let spec = match (letter, run) {
        ('y', 2) => "%y",
        ('y', _) => "%Y",
        ('M', 1) => "%-m",
        ('M', 2) => "%m",
        ('M', 3) => "%b",
        ('M', _) => "%B",
        ('d', 1) => "%-d",
        ('d', 2) => "%d",
        ('H', 1) => "%-H",
        ('H', 2) => "%H",
        ('h', 1) => "%-I",
        ('h', 2) => "%I",
        ('m', 1) => "%-M",
        ('m', 2) => "%M",
        ('s', 1) => "%-S",
        ('s', 2) => "%S",
        ('S', 3) => "%3f",
        ('S', 6) => "%6f",
        ('S', 9) => "%9f",
        ('E', 1..=3) => "%a",
        ('E', _) => "%A",
        ('a', _) => "%p",
        ('Z', 1..=4) => "%z",
        ('Z', 5) => "%:z",
        ('z', _) => "%Z",
        _ => return None,
    };
    Some(spec)
}
