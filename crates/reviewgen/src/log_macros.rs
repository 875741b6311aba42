/// Domain-aware logging macros.
///
/// Each macro injects a `domain` field so call sites never spell the string
/// literal. Domains in use: `sys` (startup/shutdown), `synth` (record
/// synthesis), `io` (dataset files), `conf` (configuration).
///
/// # Usage
///
/// ```ignore
/// rg_info!(synth, count = 5000, "dataset generation started");
/// rg_debug!(io, path = %path.display(), "renamed temp file");
/// ```
///
/// The domain is a bare identifier, not a string; the macro stringifies it.

/// Internal helper.  Do not call directly; use `rg_error!` … `rg_trace!`.
#[doc(hidden)]
macro_rules! rg_log {
    ($level:ident, $domain:ident, $($field:tt)*) => {
        tracing::$level!(domain = stringify!($domain), $($field)*)
    };
}

/// Log at ERROR level with an automatic `domain` field.
#[allow(unused_macros)]
macro_rules! rg_error {
    ($domain:ident, $($rest:tt)*) => {
        rg_log!(error, $domain, $($rest)*)
    };
}

/// Log at WARN level with an automatic `domain` field.
macro_rules! rg_warn {
    ($domain:ident, $($rest:tt)*) => {
        rg_log!(warn, $domain, $($rest)*)
    };
}

/// Log at INFO level with an automatic `domain` field.
macro_rules! rg_info {
    ($domain:ident, $($rest:tt)*) => {
        rg_log!(info, $domain, $($rest)*)
    };
}

/// Log at DEBUG level with an automatic `domain` field.
macro_rules! rg_debug {
    ($domain:ident, $($rest:tt)*) => {
        rg_log!(debug, $domain, $($rest)*)
    };
}

/// Log at TRACE level with an automatic `domain` field.
#[allow(unused_macros)]
macro_rules! rg_trace {
    ($domain:ident, $($rest:tt)*) => {
        rg_log!(trace, $domain, $($rest)*)
    };
}
