//! Severity scale definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity codes for use in the const position of a
/// [`Channel`](crate::Channel) ceiling.
///
/// Matches the discriminants of [`Severity`] exactly.
pub mod code {
    pub const NONE: u8 = 0;
    pub const CRITICAL: u8 = 1;
    pub const ERROR: u8 = 2;
    pub const WARNING: u8 = 3;
    pub const PRINT: u8 = 4;
    pub const FUSS: u8 = 5;
    pub const INFO: u8 = 6;
    pub const DETAIL: u8 = 7;
    pub const DEBUG: u8 = 8;
    pub const DEBUG2: u8 = 9;
}

/// Verbosity classification for a single log call.
///
/// Strictly ordered from `None` (channel disabled) through increasing
/// verbosity: a smaller code always means "more severe, less verbose".
/// The derived `Ord` follows the numeric codes, so `Critical < Debug2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum Severity {
    /// Emits nothing; a threshold of `None` silences the channel.
    None = 0,
    /// An invariant is breached and program state is jeopardized; exit is required.
    Critical = 1,
    /// The current operation will fail, but the program can recover or resume.
    Error = 2,
    /// An invariant may be breached, but the operation will still succeed.
    Warning = 3,
    /// Nominal status, neither voluminous nor proportional to input complexity.
    #[default]
    Print = 4,
    /// Unexpected but valid condition that may indicate improper usage.
    Fuss = 5,
    /// Status messages not voluminous in proportion to input complexity.
    Info = 6,
    /// Status messages that can be voluminous in proportion to input complexity.
    Detail = 7,
    /// Specific information intended to detect preconditions to failure.
    Debug = 8,
    /// The firehose.
    Debug2 = 9,
}

impl Severity {
    /// The numeric code embedded in every emitted record.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Inverse of [`code`](Self::code); `None` for out-of-range codes.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Severity::None),
            1 => Some(Severity::Critical),
            2 => Some(Severity::Error),
            3 => Some(Severity::Warning),
            4 => Some(Severity::Print),
            5 => Some(Severity::Fuss),
            6 => Some(Severity::Info),
            7 => Some(Severity::Detail),
            8 => Some(Severity::Debug),
            9 => Some(Severity::Debug2),
            _ => None,
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::None => "NONE",
            Severity::Critical => "CRITICAL",
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Print => "PRINT",
            Severity::Fuss => "FUSS",
            Severity::Info => "INFO",
            Severity::Detail => "DETAIL",
            Severity::Debug => "DEBUG",
            Severity::Debug2 => "DEBUG2",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NONE" | "OFF" => Ok(Severity::None),
            "CRITICAL" | "CRIT" => Ok(Severity::Critical),
            "ERROR" => Ok(Severity::Error),
            "WARNING" | "WARN" => Ok(Severity::Warning),
            "PRINT" => Ok(Severity::Print),
            "FUSS" => Ok(Severity::Fuss),
            "INFO" => Ok(Severity::Info),
            "DETAIL" => Ok(Severity::Detail),
            "DEBUG" | "DBG" => Ok(Severity::Debug),
            "DEBUG2" | "DBG2" => Ok(Severity::Debug2),
            _ => Err(format!("Invalid severity: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Severity; 10] = [
        Severity::None,
        Severity::Critical,
        Severity::Error,
        Severity::Warning,
        Severity::Print,
        Severity::Fuss,
        Severity::Info,
        Severity::Detail,
        Severity::Debug,
        Severity::Debug2,
    ];

    #[test]
    fn test_total_order() {
        for window in ALL.windows(2) {
            assert!(window[0] < window[1]);
            assert!(window[0].code() < window[1].code());
        }
        assert!(Severity::None < Severity::Critical);
        assert!(Severity::Critical < Severity::Debug2);
    }

    #[test]
    fn test_code_roundtrip() {
        for level in ALL {
            assert_eq!(Severity::from_code(level.code()), Some(level));
        }
        assert_eq!(Severity::from_code(10), None);
        assert_eq!(Severity::from_code(255), None);
    }

    #[test]
    fn test_code_constants_match_discriminants() {
        assert_eq!(code::NONE, Severity::None.code());
        assert_eq!(code::CRITICAL, Severity::Critical.code());
        assert_eq!(code::ERROR, Severity::Error.code());
        assert_eq!(code::WARNING, Severity::Warning.code());
        assert_eq!(code::PRINT, Severity::Print.code());
        assert_eq!(code::FUSS, Severity::Fuss.code());
        assert_eq!(code::INFO, Severity::Info.code());
        assert_eq!(code::DETAIL, Severity::Detail.code());
        assert_eq!(code::DEBUG, Severity::Debug.code());
        assert_eq!(code::DEBUG2, Severity::Debug2.code());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("info".parse::<Severity>().unwrap(), Severity::Info);
        assert_eq!("WARN".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!("warning".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!("dbg2".parse::<Severity>().unwrap(), Severity::Debug2);
        assert_eq!("off".parse::<Severity>().unwrap(), Severity::None);
        assert!("verbose".parse::<Severity>().is_err());
    }

    #[test]
    fn test_display_matches_to_str() {
        for level in ALL {
            assert_eq!(format!("{}", level), level.to_str());
        }
    }
}
