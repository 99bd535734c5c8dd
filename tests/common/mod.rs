#![allow(clippy::nursery)] // Test infra prioritizes clarity over pedantry
#![allow(clippy::pedantic)] // Test infra prioritizes clarity over pedantry
#![allow(dead_code)] // Not every test binary uses every helper

use std::sync::Once;

use cursorbuf::{Buffer, LogLevel, set_log_callback};
use tracing::{debug, error, info, warn};

/// Install a tracing subscriber and route buffer diagnostics into it.
pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_test_writer()
            .try_init();

        set_log_callback(|level, msg| match level {
            LogLevel::Debug => debug!(target: "cursorbuf", "{msg}"),
            LogLevel::Info => info!(target: "cursorbuf", "{msg}"),
            LogLevel::Warn => warn!(target: "cursorbuf", "{msg}"),
            LogLevel::Error => error!(target: "cursorbuf", "{msg}"),
        });
    });
}

/// Buffer holding `text` with the cursor at `cursor`.
pub fn buffer_at(text: &str, cursor: usize) -> Buffer {
    let mut buf = Buffer::with_text(text);
    buf.set_cursor(cursor);
    assert_eq!(buf.cursor(), cursor, "fixture cursor out of range");
    buf
}

/// One-line summary of buffer state for snapshots and failure messages.
///
/// The cursor is drawn as `|` inside the text.
pub fn render(buf: &Buffer) -> String {
    let text = buf.text();
    let split = text
        .char_indices()
        .nth(buf.cursor())
        .map_or(text.len(), |(idx, _)| idx);
    format!(
        "text={:?} cursor={} clipboard={:?}",
        format!("{}|{}", &text[..split], &text[split..]),
        buf.cursor(),
        buf.clipboard()
    )
}
