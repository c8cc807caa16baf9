/// Emits a `tracing` event at debug level if the `tracing` feature is
/// enabled.
macro_rules! log_debug {
    ( $( $arg:tt )* ) => {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!( $( $arg )* );
        }
    };
}

/// Emits a `tracing` event at warn level if the `tracing` feature is
/// enabled.
macro_rules! log_warn {
    ( $( $arg:tt )* ) => {
        #[cfg(feature = "tracing")]
        {
            tracing::warn!( $( $arg )* );
        }
    };
}
