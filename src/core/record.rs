//! Record assembly: monotonic timestamps and bounded message rendering

use super::severity::Severity;
use std::fmt;
use std::sync::OnceLock;
use std::time::{Duration, Instant};

/// Upper bound on a rendered message body. Longer messages are truncated
/// silently; logging must never fail the caller's real work over a long line.
pub const MAX_MESSAGE_LEN: usize = 960;

static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Reading of the process-wide monotonic clock.
///
/// Non-decreasing within a process, not comparable across restarts.
pub(crate) fn monotonic_now() -> Duration {
    EPOCH.get_or_init(Instant::now).elapsed()
}

/// `fmt::Write` adapter that accepts at most `limit` bytes and drops the
/// rest, cutting at a char boundary.
struct BoundedWriter {
    buf: String,
    limit: usize,
}

impl fmt::Write for BoundedWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = self.limit - self.buf.len();
        if room == 0 {
            return Ok(());
        }
        if s.len() <= room {
            self.buf.push_str(s);
        } else {
            let mut cut = room;
            while !s.is_char_boundary(cut) {
                cut -= 1;
            }
            self.buf.push_str(&s[..cut]);
        }
        Ok(())
    }
}

/// Render a message body, truncating past [`MAX_MESSAGE_LEN`].
pub(crate) fn render_message(args: fmt::Arguments<'_>) -> String {
    // Argument-free format strings skip the formatting machinery.
    if let Some(s) = args.as_str() {
        if s.len() <= MAX_MESSAGE_LEN {
            return s.to_owned();
        }
        let mut cut = MAX_MESSAGE_LEN;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        return s[..cut].to_owned();
    }

    let mut writer = BoundedWriter {
        buf: String::with_capacity(128),
        limit: MAX_MESSAGE_LEN,
    };
    // BoundedWriter never reports an error; it drops overflow instead.
    let _ = fmt::write(&mut writer, args);
    writer.buf
}

/// Assemble the full record line, without its trailing newline:
/// `<seconds>.<6-digit-microseconds> [<name>-<code>] <message>`.
pub(crate) fn assemble(name: &str, level: Severity, message: &str) -> String {
    let now = monotonic_now();
    format!(
        "{}.{:06} [{}-{}] {}",
        now.as_secs(),
        now.subsec_micros(),
        name,
        level.code(),
        message
    )
}
