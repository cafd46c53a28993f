// Forwards to `tracing` when the feature is on; expands to nothing otherwise.

#[cfg(feature = "tracing")]
macro_rules! vlog {
    (trace, $($tt:tt)*) => {
        tracing::trace!(target: "virtual_window", $($tt)*)
    };
    (debug, $($tt:tt)*) => {
        tracing::debug!(target: "virtual_window", $($tt)*)
    };
    (warn, $($tt:tt)*) => {
        tracing::warn!(target: "virtual_window", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! vlog {
    ($level:ident, $($tt:tt)*) => {};
}
