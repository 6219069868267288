//! Platform identity lookups the composer depends on: which execution context a call
//! runs on, and which process is logging. Kept behind [`Platform`] so composition and
//! filtering can be tested with injected fakes.

use std::cell::RefCell;
use std::thread;

thread_local! {
    static LABELS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// Raw facts about the calling execution context. [`describe`](Self::describe) turns
/// them into the thread fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionContext {
    /// True on the process's main thread.
    pub is_main: bool,
    /// Human-assigned thread name.
    pub thread_name: Option<String>,
    /// Label of the executor/worker pool the call runs under.
    pub queue_label: Option<String>,
    /// Opaque low-level identity, used when nothing better exists.
    pub raw_id: String,
}

impl ExecutionContext {
    /// `main`, else the thread name, else the queue label, else the raw identity.
    /// Never empty.
    #[must_use]
    pub fn describe(&self) -> String {
        if self.is_main {
            return "main".to_string();
        }
        if let Some(name) = self.thread_name.as_deref().filter(|n| !n.is_empty()) {
            return name.to_string();
        }
        if let Some(label) = self.queue_label.as_deref().filter(|l| !l.is_empty()) {
            return label.to_string();
        }
        if self.raw_id.is_empty() {
            return format!("{:?}", thread::current().id());
        }
        self.raw_id.clone()
    }
}

/// Who is logging. Forwarded sinks use it as their target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessIdentity {
    /// Stable identifier (reverse-DNS style or executable name).
    pub id: String,
    /// Human-readable process name.
    pub name: String,
}

/// The narrow seam between printlog and the host platform.
pub trait Platform: Send + Sync {
    fn current_context(&self) -> ExecutionContext;

    fn process_identity(&self) -> ProcessIdentity;
}

/// `std::thread`-backed platform.
///
/// The main thread is recognised by the name the Rust runtime gives it. Queue labels
/// come from [`with_label`] scopes on the current thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdPlatform;

impl Platform for StdPlatform {
    fn current_context(&self) -> ExecutionContext {
        let current = thread::current();
        let thread_name = current.name().map(ToString::to_string);
        ExecutionContext {
            is_main: thread_name.as_deref() == Some("main"),
            thread_name,
            queue_label: current_label(),
            raw_id: format!("{:?}", current.id()),
        }
    }

    fn process_identity(&self) -> ProcessIdentity {
        let exe = std::env::current_exe().ok();
        let stem = exe
            .as_deref()
            .and_then(std::path::Path::file_stem)
            .map(|s| s.to_string_lossy().into_owned())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "printlog".to_string());
        ProcessIdentity {
            id: stem.clone(),
            name: stem,
        }
    }
}

/// Runs `f` with `label` as the current thread's queue label. Scopes nest; the innermost wins.
pub fn with_label<R>(label: impl Into<String>, f: impl FnOnce() -> R) -> R {
    let _guard = LabelGuard::push(label.into());
    f()
}

/// Innermost active label on this thread, if any.
#[must_use]
pub fn current_label() -> Option<String> {
    LABELS.with(|labels| labels.borrow().last().cloned())
}

/// Pops on drop so a panicking closure doesn't leak its label into later calls.
struct LabelGuard;

impl LabelGuard {
    fn push(label: String) -> Self {
        LABELS.with(|labels| labels.borrow_mut().push(label));
        Self
    }
}

impl Drop for LabelGuard {
    fn drop(&mut self) {
        LABELS.with(|labels| {
            labels.borrow_mut().pop();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> ExecutionContext {
        ExecutionContext {
            is_main: false,
            thread_name: Some("worker-1".to_string()),
            queue_label: Some("io-pool".to_string()),
            raw_id: "ThreadId(7)".to_string(),
        }
    }

    #[test]
    fn main_wins_over_everything() {
        let c = ExecutionContext {
            is_main: true,
            ..ctx()
        };
        assert_eq!(c.describe(), "main");
    }

    #[test]
    fn falls_back_through_name_label_and_raw_id() {
        assert_eq!(ctx().describe(), "worker-1");

        let c = ExecutionContext {
            thread_name: Some(String::new()),
            ..ctx()
        };
        assert_eq!(c.describe(), "io-pool");

        let c = ExecutionContext {
            thread_name: None,
            queue_label: None,
            ..ctx()
        };
        assert_eq!(c.describe(), "ThreadId(7)");
    }

    #[test]
    fn empty_context_still_describes_something() {
        assert!(!ExecutionContext::default().describe().is_empty());
    }

    #[test]
    fn labels_nest_and_unwind() {
        assert_eq!(current_label(), None);
        with_label("outer", || {
            assert_eq!(current_label().as_deref(), Some("outer"));
            with_label("inner", || {
                assert_eq!(current_label().as_deref(), Some("inner"));
            });
            assert_eq!(current_label().as_deref(), Some("outer"));
        });
        assert_eq!(current_label(), None);
    }

    #[test]
    fn unnamed_thread_uses_label() {
        let described = thread::spawn(|| with_label("sync-queue", || StdPlatform.current_context().describe()))
            .join()
            .unwrap();
        assert_eq!(described, "sync-queue");
    }
}
