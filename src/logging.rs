use tracing::Level;

/// Install the console log handler.
///
/// INFO level by default, DEBUG with source-location fields when `debug`
/// is set. Calling this more than once keeps the first subscriber, so it
/// never fails.
pub fn init_logging(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::INFO };

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_file(debug)
        .with_line_number(debug)
        .try_init();
}
