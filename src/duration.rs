//! # Duration
//!
//! Duration values used by the registry request limits (`maxwaitinqueue`).
//!
//! Encoded as a duration string: one or more `<number><unit>` components
//! with units `ns`, `us` (or `µs`), `ms`, `s`, `m` and `h`, e.g. `"30s"`,
//! `"1m30s"`, `"1.5h"`. Integer values are accepted on decode and read as
//! nanoseconds, which is how the upstream platform encodes durations in JSON.

use crate::error::{Error, Result};
use regex::Regex;
use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SEC: u64 = 1_000_000_000;
const NANOS_PER_MIN: u64 = 60 * NANOS_PER_SEC;
const NANOS_PER_HOUR: u64 = 60 * NANOS_PER_MIN;

/// Fraction digits beyond this are ignored when parsing
const MAX_FRACTION_DIGITS: usize = 18;

/// One `<number><unit>` component, ASCII digits only
/// Longer units first so "ms" wins over "m"
static COMPONENT: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"([0-9]*)(?:\.([0-9]*))?(ns|us|µs|μs|ms|s|m|h)"));

/// Signed span of time with nanosecond precision
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration(i64);

impl Duration {
    pub const ZERO: Duration = Duration(0);

    #[must_use]
    pub const fn from_nanos(nanos: i64) -> Self {
        Self(nanos)
    }

    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis.saturating_mul(1_000_000))
    }

    #[must_use]
    pub const fn from_secs(secs: i64) -> Self {
        Self(secs.saturating_mul(1_000_000_000))
    }

    #[must_use]
    pub const fn as_nanos(self) -> i64 {
        self.0
    }

    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Convert to a `std::time::Duration`, `None` when negative
    #[must_use]
    pub fn to_std(self) -> Option<std::time::Duration> {
        u64::try_from(self.0).ok().map(std::time::Duration::from_nanos)
    }

    /// Parse a duration string such as `"30s"`, `"-1m30s"` or `"250ms"`
    ///
    /// A bare `"0"` is accepted. Every other component needs a unit.
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidDuration {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let (negative, body) = match input.as_bytes().first() {
            None => return Err(invalid("duration string cannot be empty")),
            Some(b'-') => (true, &input[1..]),
            Some(b'+') => (false, &input[1..]),
            Some(_) => (false, input),
        };

        if body == "0" {
            return Ok(Self::ZERO);
        }
        if body.is_empty() {
            return Err(invalid("missing value after sign"));
        }

        let component = COMPONENT
            .as_ref()
            .map_err(|e| invalid(&format!("failed to compile regex: {e}")))?;

        let mut total: u128 = 0;
        let mut consumed = 0;
        for captures in component.captures_iter(body) {
            let Some(whole) = captures.get(0) else {
                continue;
            };
            if whole.start() != consumed {
                return Err(invalid("expected <number><unit> components"));
            }
            consumed = whole.end();

            let int_digits = captures.get(1).map_or("", |m| m.as_str());
            let frac_digits = captures.get(2).map_or("", |m| m.as_str());
            if int_digits.is_empty() && frac_digits.is_empty() {
                return Err(invalid("missing number before unit"));
            }

            let unit = unit_nanos(captures.get(3).map_or("", |m| m.as_str()));
            total = component_nanos(int_digits, frac_digits, unit)
                .and_then(|nanos| total.checked_add(nanos))
                .ok_or_else(|| invalid("duration out of range"))?;
        }

        if consumed != body.len() {
            return Err(invalid("missing or unknown unit, expected ns, us, ms, s, m or h"));
        }

        let magnitude =
            i128::try_from(total).map_err(|e| invalid(&format!("duration out of range: {e}")))?;
        let signed = if negative { -magnitude } else { magnitude };
        let nanos =
            i64::try_from(signed).map_err(|e| invalid(&format!("duration out of range: {e}")))?;
        Ok(Self(nanos))
    }
}

fn unit_nanos(unit: &str) -> u128 {
    let nanos = match unit {
        "us" | "µs" | "μs" => NANOS_PER_MICRO,
        "ms" => NANOS_PER_MILLI,
        "s" => NANOS_PER_SEC,
        "m" => NANOS_PER_MIN,
        "h" => NANOS_PER_HOUR,
        _ => 1,
    };
    u128::from(nanos)
}

fn component_nanos(int_digits: &str, frac_digits: &str, unit: u128) -> Option<u128> {
    let whole: u128 = if int_digits.is_empty() {
        0
    } else {
        int_digits.parse().ok()?
    };
    let mut nanos = whole.checked_mul(unit)?;

    if !frac_digits.is_empty() {
        let digits = &frac_digits[..frac_digits.len().min(MAX_FRACTION_DIGITS)];
        let fraction: u128 = digits.parse().ok()?;
        let scale = 10u128.checked_pow(u32::try_from(digits.len()).ok()?)?;
        nanos = nanos.checked_add(fraction.checked_mul(unit)? / scale)?;
    }

    Some(nanos)
}

/// Write `value / scale` with the remainder as trimmed decimal places
fn write_scaled(f: &mut fmt::Formatter<'_>, value: u64, scale: u64) -> fmt::Result {
    write!(f, "{}", value / scale)?;
    let fraction = value % scale;
    if fraction == 0 {
        return Ok(());
    }
    let width = scale.ilog10() as usize;
    let digits = format!("{fraction:0width$}");
    write!(f, ".{}", digits.trim_end_matches('0'))
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return f.write_str("0s");
        }
        if self.0 < 0 {
            f.write_str("-")?;
        }
        let nanos = self.0.unsigned_abs();

        if nanos < NANOS_PER_SEC {
            let (scale, unit) = if nanos < NANOS_PER_MICRO {
                (1, "ns")
            } else if nanos < NANOS_PER_MILLI {
                (NANOS_PER_MICRO, "µs")
            } else {
                (NANOS_PER_MILLI, "ms")
            };
            write_scaled(f, nanos, scale)?;
            return f.write_str(unit);
        }

        let hours = nanos / NANOS_PER_HOUR;
        let minutes = (nanos % NANOS_PER_HOUR) / NANOS_PER_MIN;
        if hours > 0 {
            write!(f, "{hours}h{minutes}m")?;
        } else if minutes > 0 {
            write!(f, "{minutes}m")?;
        }
        write_scaled(f, nanos % NANOS_PER_MIN, NANOS_PER_SEC)?;
        f.write_str("s")
    }
}

impl FromStr for Duration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<std::time::Duration> for Duration {
    /// Saturates at the largest representable duration
    fn from(value: std::time::Duration) -> Self {
        Self(i64::try_from(value.as_nanos()).unwrap_or(i64::MAX))
    }
}

impl Serialize for Duration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DurationVisitor;

        impl Visitor<'_> for DurationVisitor {
            type Value = Duration;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a duration string like \"30s\" or an integer of nanoseconds")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Duration::parse(value).map_err(de::Error::custom)
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Duration(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                i64::try_from(value)
                    .map(Duration)
                    .map_err(|e| de::Error::custom(format!("duration {value}ns out of range: {e}")))
            }
        }

        deserializer.deserialize_any(DurationVisitor)
    }
}

impl JsonSchema for Duration {
    fn schema_name() -> Cow<'static, str> {
        Cow::Borrowed("Duration")
    }

    fn json_schema(_gen: &mut SchemaGenerator) -> Schema {
        // int-or-string keeps the schema structural while admitting both encodings
        schemars::json_schema!({
            "description": "Duration string (e.g. \"30s\", \"1m30s\") or integer nanoseconds",
            "x-kubernetes-int-or-string": true,
            "anyOf": [
                {"type": "integer"},
                {"type": "string"}
            ]
        })
    }
}
