//! Single-byte serial command protocol.
//!
//! Commands arrive as single raw bytes with no framing and no checksum.
//! Unknown bytes are ignored without a response.

/// Wire byte requesting a burst dump of the latest reading.
pub const CMD_DUMP_READINGS: u8 = 1;
/// Wire byte requesting the greeting string.
pub const CMD_GREET: u8 = 2;
/// Wire byte announcing a one-byte duty setpoint to follow.
pub const CMD_SET_DUTY: u8 = 3;

/// Number of reading bytes sent for one dump request.
pub const DUMP_LEN: usize = 100;

/// Fixed reply to [`Command::Greet`].
pub const GREETING: &[u8] = b"Hello\n";

/// A decoded host command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Send the latest analog reading [`DUMP_LEN`] times, back to back.
    DumpReadings,
    /// Send [`GREETING`].
    Greet,
    /// Read one more byte and store it as the duty-cycle setpoint.
    SetDuty,
}

impl Command {
    /// Decodes a command byte; unknown bytes decode to `None`.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            CMD_DUMP_READINGS => Some(Self::DumpReadings),
            CMD_GREET => Some(Self::Greet),
            CMD_SET_DUTY => Some(Self::SetDuty),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_bytes_decode() {
        assert_eq!(Command::from_byte(1), Some(Command::DumpReadings));
        assert_eq!(Command::from_byte(2), Some(Command::Greet));
        assert_eq!(Command::from_byte(3), Some(Command::SetDuty));
    }

    #[test]
    fn unknown_bytes_are_ignored() {
        assert_eq!(Command::from_byte(0), None);
        for byte in 4..=u8::MAX {
            assert_eq!(Command::from_byte(byte), None);
        }
    }

    #[test]
    fn greeting_is_exactly_hello() {
        assert_eq!(GREETING, &b"Hello\n"[..]);
        assert_eq!(GREETING.len(), 6);
    }

    #[test]
    fn dump_length_matches_protocol() {
        assert_eq!(DUMP_LEN, 100);
    }
}
