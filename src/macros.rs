//! Call-site capturing entry points. Each macro records `file!()`, `line!()`, and the
//! enclosing function before handing off to [`Printer::log_at`](crate::Printer::log_at).
//!
//! Forms (shown for `debug!`, identical for `warning!` and `error!`):
//! - `debug!()`, `debug!(msg)`, `debug!(msg, category)` log through [`global`](crate::global);
//! - `debug!(printer: p, ...)` logs through `p` (a `Printer`, `&Printer`, or `Arc<Printer>`).
//!
//! The message defaults to `""` and the category to [`Category::Logic`](crate::Category::Logic).

#[doc(hidden)]
#[macro_export]
macro_rules! __printlog_emit {
    ($printer:expr, $level:expr, $msg:expr, $category:expr) => {
        ($printer).log_at(
            $level,
            ::core::convert::AsRef::<str>::as_ref(&$msg),
            $category,
            $crate::call_site!(),
        )
    };
}

#[macro_export]
macro_rules! debug {
    (printer: $printer:expr) => {
        $crate::__printlog_emit!($printer, $crate::Level::Debug, "", $crate::Category::Logic)
    };
    (printer: $printer:expr, $msg:expr) => {
        $crate::__printlog_emit!($printer, $crate::Level::Debug, $msg, $crate::Category::Logic)
    };
    (printer: $printer:expr, $msg:expr, $category:expr $(,)?) => {
        $crate::__printlog_emit!($printer, $crate::Level::Debug, $msg, $category)
    };
    () => {
        $crate::__printlog_emit!($crate::global(), $crate::Level::Debug, "", $crate::Category::Logic)
    };
    ($msg:expr) => {
        $crate::__printlog_emit!($crate::global(), $crate::Level::Debug, $msg, $crate::Category::Logic)
    };
    ($msg:expr, $category:expr $(,)?) => {
        $crate::__printlog_emit!($crate::global(), $crate::Level::Debug, $msg, $category)
    };
}

#[macro_export]
macro_rules! warning {
    (printer: $printer:expr) => {
        $crate::__printlog_emit!($printer, $crate::Level::Warning, "", $crate::Category::Logic)
    };
    (printer: $printer:expr, $msg:expr) => {
        $crate::__printlog_emit!($printer, $crate::Level::Warning, $msg, $crate::Category::Logic)
    };
    (printer: $printer:expr, $msg:expr, $category:expr $(,)?) => {
        $crate::__printlog_emit!($printer, $crate::Level::Warning, $msg, $category)
    };
    () => {
        $crate::__printlog_emit!($crate::global(), $crate::Level::Warning, "", $crate::Category::Logic)
    };
    ($msg:expr) => {
        $crate::__printlog_emit!($crate::global(), $crate::Level::Warning, $msg, $crate::Category::Logic)
    };
    ($msg:expr, $category:expr $(,)?) => {
        $crate::__printlog_emit!($crate::global(), $crate::Level::Warning, $msg, $category)
    };
}

#[macro_export]
macro_rules! error {
    (printer: $printer:expr) => {
        $crate::__printlog_emit!($printer, $crate::Level::Error, "", $crate::Category::Logic)
    };
    (printer: $printer:expr, $msg:expr) => {
        $crate::__printlog_emit!($printer, $crate::Level::Error, $msg, $crate::Category::Logic)
    };
    (printer: $printer:expr, $msg:expr, $category:expr $(,)?) => {
        $crate::__printlog_emit!($printer, $crate::Level::Error, $msg, $category)
    };
    () => {
        $crate::__printlog_emit!($crate::global(), $crate::Level::Error, "", $crate::Category::Logic)
    };
    ($msg:expr) => {
        $crate::__printlog_emit!($crate::global(), $crate::Level::Error, $msg, $crate::Category::Logic)
    };
    ($msg:expr, $category:expr $(,)?) => {
        $crate::__printlog_emit!($crate::global(), $crate::Level::Error, $msg, $category)
    };
}
