//! Semantic tags attached to every log statement. Categories drive the allow/deny
//! filtering and supply the decorative label at the front of each line.

use std::fmt;
use std::str::FromStr;

/// Outcome carried by [`Category::Api`]. Separate outcomes filter independently, so a
/// config can silence `api.info` while keeping `api.error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiOutcome {
    Info,
    Success,
    Error,
}

impl ApiOutcome {
    /// Lowercase outcome name, as used after `api.` in keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Every outcome, in key order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Info, Self::Success, Self::Error]
    }
}

/// Closed taxonomy of log categories.
///
/// Equality is structural: `Api(Success)` and `Api(Error)` are different categories,
/// and list membership in [`Config`](crate::Config) compares by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    Ui,
    Network,
    Auth,
    Cache,
    Database,
    Storage,
    AppLifecycle,
    /// Fallback for statements that don't name a category.
    #[default]
    Logic,
    Navigation,
    Analytics,
    Notification,
    Payment,
    Media,
    Location,
    /// printlog's own diagnostics.
    System,
    Api(ApiOutcome),
}

impl Category {
    /// Display label rendered as the first fragment of a line.
    ///
    /// Exhaustive on purpose: a new variant without a label fails to compile.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ui => "🎨 UI",
            Self::Network => "🌐 NETWORK",
            Self::Auth => "🔐 AUTH",
            Self::Cache => "💾 CACHE",
            Self::Database => "🗄 DATABASE",
            Self::Storage => "📦 STORAGE",
            Self::AppLifecycle => "📲 APP LIFECYCLE",
            Self::Logic => "🧠 LOGIC",
            Self::Navigation => "🧭 NAVIGATION",
            Self::Analytics => "📊 ANALYTICS",
            Self::Notification => "🔔 NOTIFICATION",
            Self::Payment => "💳 PAYMENT",
            Self::Media => "🎬 MEDIA",
            Self::Location => "📍 LOCATION",
            Self::System => "⚙ SYSTEM",
            Self::Api(ApiOutcome::Info) => "📡 API INFO",
            Self::Api(ApiOutcome::Success) => "✅ API SUCCESS",
            Self::Api(ApiOutcome::Error) => "❌ API ERROR",
        }
    }

    /// Stable key used in config files and on the command line (`app_lifecycle`, `api.error`).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Ui => "ui",
            Self::Network => "network",
            Self::Auth => "auth",
            Self::Cache => "cache",
            Self::Database => "database",
            Self::Storage => "storage",
            Self::AppLifecycle => "app_lifecycle",
            Self::Logic => "logic",
            Self::Navigation => "navigation",
            Self::Analytics => "analytics",
            Self::Notification => "notification",
            Self::Payment => "payment",
            Self::Media => "media",
            Self::Location => "location",
            Self::System => "system",
            Self::Api(ApiOutcome::Info) => "api.info",
            Self::Api(ApiOutcome::Success) => "api.success",
            Self::Api(ApiOutcome::Error) => "api.error",
        }
    }

    /// Every known category, in declaration order. The default allow list.
    #[must_use]
    pub fn all() -> Vec<Self> {
        let mut all = vec![
            Self::Ui,
            Self::Network,
            Self::Auth,
            Self::Cache,
            Self::Database,
            Self::Storage,
            Self::AppLifecycle,
            Self::Logic,
            Self::Navigation,
            Self::Analytics,
            Self::Notification,
            Self::Payment,
            Self::Media,
            Self::Location,
            Self::System,
        ];
        all.extend(ApiOutcome::all().map(Self::Api));
        all
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned by `FromStr` when a key doesn't name a known category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError(String);

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: '{}'", self.0)
    }
}

impl std::error::Error for ParseCategoryError {}

impl From<ParseCategoryError> for crate::Error {
    fn from(e: ParseCategoryError) -> Self {
        Self::InvalidCategory(e.0)
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    /// Case-insensitive; `-` and `_` are interchangeable, and `api:error` is accepted for `api.error`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_").replace(':', ".");
        Self::all()
            .into_iter()
            .find(|c| c.key() == normalized)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}
