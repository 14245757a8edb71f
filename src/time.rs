//! Datetime values, based on RFC 3339.
//!
//! This grammar only admits *complete* datetimes: a full calendar date, a
//! full time of day, and a UTC offset. Bare dates, times without seconds,
//! and offset-less datetimes are later-revision features and are rejected.

use std::fmt;

#[cfg(test)]
#[path = "./time_tests.rs"]
mod tests;

/// A full calendar date.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Date {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

/// A full time of day.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Time {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// Fractional seconds, scaled to nanoseconds. Digits past the ninth
    /// are accepted but discarded.
    pub nanosecond: u32,
}

/// Offset between the local time and UTC.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TimeOffset {
    /// The `Z` suffix, denoting an offset of 00:00; "Zulu" in the ICAO
    /// phonetic alphabet. RFC 3339 section 2.
    Z,
    /// A `±HH:MM` offset.
    Custom { minutes: i16 },
}

/// A complete datetime: date, time of day, and UTC offset.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Datetime {
    pub date: Date,
    pub time: Time,
    pub offset: TimeOffset,
    /// Number of fractional-second digits in the source, capped at 9.
    /// Preserved so `Display` can reproduce the written precision.
    subsec_digits: u8,
}

impl Datetime {
    /// Number of digits in the original fractional seconds; 0 if none.
    pub fn subsecond_precision(&self) -> u8 {
        self.subsec_digits
    }
}

fn is_leap_year(year: u16) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn days_in_month(year: u16, month: u8) -> u8 {
    const DAYS: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS[month as usize]
    }
}

fn digit(bytes: &[u8], at: usize) -> Result<u32, usize> {
    match bytes.get(at) {
        Some(b) if b.is_ascii_digit() => Ok((b - b'0') as u32),
        _ => Err(at),
    }
}

/// Exactly two digits at `at`; errors point at the first byte that is
/// missing or not a digit, so a too-short component is reported at the
/// character that cut it off.
fn two_digits(bytes: &[u8], at: usize) -> Result<u8, usize> {
    let hi = digit(bytes, at)?;
    let lo = digit(bytes, at + 1)?;
    Ok((hi * 10 + lo) as u8)
}

fn four_digits(bytes: &[u8], at: usize) -> Result<u16, usize> {
    let mut value = 0u32;
    for i in at..at + 4 {
        value = value * 10 + digit(bytes, i)?;
    }
    Ok(value as u16)
}

fn expect(bytes: &[u8], at: usize, b: u8) -> Result<(), usize> {
    if bytes.get(at) == Some(&b) {
        Ok(())
    } else {
        Err(at)
    }
}

/// Scans a complete datetime from the start of `bytes`.
///
/// On success returns the number of bytes consumed and the value. On
/// failure returns the offset of the first offending byte (which may be
/// one past the end of the slice when a component is cut off by EOF).
///
/// Every component is fixed-width; fewer digits than the width demands is
/// an error, not a shorter valid value.
pub(crate) fn scan(bytes: &[u8]) -> Result<(usize, Datetime), usize> {
    let year = four_digits(bytes, 0)?;
    expect(bytes, 4, b'-')?;
    let month = two_digits(bytes, 5)?;
    if month < 1 || month > 12 {
        return Err(5);
    }
    expect(bytes, 7, b'-')?;
    let day = two_digits(bytes, 8)?;
    if day < 1 || day > days_in_month(year, month) {
        return Err(8);
    }
    let date = Date { year, month, day };

    // A bare date is not a value in this grammar; the time part is
    // mandatory, introduced by 'T' (or lowercase) or a single space.
    match bytes.get(10) {
        Some(b'T' | b't' | b' ') => {}
        _ => return Err(10),
    }

    let hour = two_digits(bytes, 11)?;
    if hour > 23 {
        return Err(11);
    }
    expect(bytes, 13, b':')?;
    let minute = two_digits(bytes, 14)?;
    if minute > 59 {
        return Err(14);
    }
    expect(bytes, 16, b':')?;
    let second = two_digits(bytes, 17)?;
    // 60 is allowed for leap seconds.
    if second > 60 {
        return Err(17);
    }

    let mut i = 19;
    let mut nanosecond = 0u32;
    let mut subsec_digits = 0u8;
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        let mut count = 0usize;
        while let Some(b) = bytes.get(i).copied() {
            if !b.is_ascii_digit() {
                break;
            }
            if count < 9 {
                nanosecond = nanosecond * 10 + (b - b'0') as u32;
            }
            count += 1;
            i += 1;
        }
        if count == 0 {
            return Err(i);
        }
        subsec_digits = count.min(9) as u8;
        for _ in count.min(9)..9 {
            nanosecond *= 10;
        }
    }

    // The offset is mandatory as well.
    let offset = match bytes.get(i).copied() {
        Some(b'Z' | b'z') => {
            i += 1;
            TimeOffset::Z
        }
        Some(sign @ (b'+' | b'-')) => {
            let oh = two_digits(bytes, i + 1)?;
            if oh > 23 {
                return Err(i + 1);
            }
            expect(bytes, i + 3, b':')?;
            let om = two_digits(bytes, i + 4)?;
            if om > 59 {
                return Err(i + 4);
            }
            let minutes = oh as i16 * 60 + om as i16;
            i += 6;
            TimeOffset::Custom {
                minutes: if sign == b'-' { -minutes } else { minutes },
            }
        }
        _ => return Err(i),
    };

    Ok((
        i,
        Datetime {
            date,
            time: Time {
                hour,
                minute,
                second,
                nanosecond,
            },
            offset,
            subsec_digits,
        },
    ))
}

impl fmt::Display for Datetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.date.year,
            self.date.month,
            self.date.day,
            self.time.hour,
            self.time.minute,
            self.time.second,
        )?;
        if self.subsec_digits > 0 {
            let mut buf = [b'0'; 9];
            let mut nanos = self.time.nanosecond;
            for slot in buf.iter_mut().rev() {
                *slot = b'0' + (nanos % 10) as u8;
                nanos /= 10;
            }
            // buf is ASCII digits.
            let frac = std::str::from_utf8(&buf[..self.subsec_digits as usize]).unwrap();
            write!(f, ".{frac}")?;
        }
        match self.offset {
            TimeOffset::Z => f.write_str("Z"),
            TimeOffset::Custom { minutes } => {
                let (sign, abs) = if minutes < 0 {
                    ('-', -minutes)
                } else {
                    ('+', minutes)
                };
                write!(f, "{}{:02}:{:02}", sign, abs / 60, abs % 60)
            }
        }
    }
}

impl fmt::Debug for Datetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
