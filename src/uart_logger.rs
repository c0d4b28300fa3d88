//! UART drain for the log ring.
//!
//! Formats queued [`LogEntry`](crate::logging::LogEntry) lines as text and
//! writes them out over UART TX, outside the polling hot path. On the host
//! the formatting half is testable as-is.
//!
//! Line format: `[timestamp_ms] LEVEL: message`

use crate::logging::{LogEntry, LogRing, MAX_MSG_LEN};

#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::uart::UartTxDriver;

/// UART configuration for logging.
pub struct UartLoggerConfig {
    pub baud_rate: u32,
    pub tx_pin: u8,
}

impl Default for UartLoggerConfig {
    fn default() -> Self {
        Self {
            baud_rate: 115_200,
            tx_pin: 13, // Port A on the M5Dial grove connector
        }
    }
}

/// Worst-case formatted line length: prefix + message + newline.
pub const MAX_LINE_LEN: usize = 24 + MAX_MSG_LEN;

/// Format one log entry into `buf`. Returns the number of bytes written.
pub fn format_log_entry(entry: &LogEntry, buf: &mut [u8]) -> usize {
    use core::fmt::Write;

    struct BufWriter<'a> {
        buf: &'a mut [u8],
        pos: usize,
    }

    impl<'a> Write for BufWriter<'a> {
        fn write_str(&mut self, s: &str) -> core::fmt::Result {
            let bytes = s.as_bytes();
            let remaining = self.buf.len() - self.pos;
            let to_write = bytes.len().min(remaining);
            self.buf[self.pos..self.pos + to_write].copy_from_slice(&bytes[..to_write]);
            self.pos += to_write;
            Ok(())
        }
    }

    let mut writer = BufWriter { buf, pos: 0 };
    let _ = write!(writer, "[{}] {}: ", entry.timestamp_ms, entry.level.as_str());
    let _ = writer.write_str(core::str::from_utf8(entry.message()).unwrap_or("<invalid utf8>"));
    let _ = writer.write_str("\n");
    writer.pos
}

/// Drain every queued entry from `ring` to the UART.
///
/// Called between polls; the ring absorbs bursts so this can run at
/// whatever pace the UART allows.
#[cfg(target_os = "espidf")]
pub fn drain_to_uart<const N: usize>(ring: &LogRing<N>, uart: &mut UartTxDriver<'_>) {
    let mut line = [0u8; MAX_LINE_LEN];
    while let Some(entry) = ring.drain() {
        let len = format_log_entry(&entry, &mut line);
        // Transport errors are not recoverable here; drop the line
        let _ = uart.write(&line[..len]);
    }

    let dropped = ring.dropped();
    if dropped > 0 {
        ring.reset_dropped();
        let mut buf = [0u8; MAX_MSG_LEN];
        let len = crate::logging::format_to_buffer(
            &mut buf,
            format_args!("log ring dropped {} lines\n", dropped),
        );
        let _ = uart.write(&buf[..len]);
    }
}

/// Host build: formatting only, no UART. Entries are discarded.
#[cfg(not(target_os = "espidf"))]
pub fn drain_discard<const N: usize>(ring: &LogRing<N>) {
    while ring.drain().is_some() {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogLevel;

    #[test]
    fn test_format_log_entry() {
        let ring = LogRing::<4>::new();
        ring.push(1500, LogLevel::Info, b"touch ESC -> ESC");
        let entry = ring.drain().unwrap();

        let mut buf = [0u8; MAX_LINE_LEN];
        let len = format_log_entry(&entry, &mut buf);
        assert_eq!(&buf[..len], b"[1500] INFO: touch ESC -> ESC\n");
    }

    #[test]
    fn test_format_levels() {
        let ring = LogRing::<4>::new();
        ring.push(7, LogLevel::Warn, b"w");
        let entry = ring.drain().unwrap();

        let mut buf = [0u8; MAX_LINE_LEN];
        let len = format_log_entry(&entry, &mut buf);
        assert_eq!(&buf[..len], b"[7] WARN: w\n");
    }

    #[test]
    fn test_drain_discard_empties_ring() {
        let ring = LogRing::<4>::new();
        ring.push(0, LogLevel::Debug, b"a");
        ring.push(1, LogLevel::Debug, b"b");

        drain_discard(&ring);
        assert!(!ring.has_entries());
    }
}
