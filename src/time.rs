#[derive(Debug, thiserror::Error, PartialEq)]
pub enum TimeFormatError {
    #[error("invalid time format: {0}")]
    Format(String),

    #[error("invalid hour in: {0}")]
    Hour(String),

    #[error("invalid minute in: {0}")]
    Minute(String),

    #[error("time out of range: {0}")]
    OutOfRange(String),
}

/// Converts an "HH:MM" wall-clock time to minutes since midnight.
pub fn convert_hour_to_minutes(s: &str) -> Result<i64, TimeFormatError> {
    let (hour, minute) = s
        .trim()
        .split_once(':')
        .ok_or_else(|| TimeFormatError::Format(s.to_string()))?;

    if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
        return Err(TimeFormatError::Format(s.to_string()));
    }

    let hour: i64 = hour
        .parse()
        .map_err(|_| TimeFormatError::Hour(s.to_string()))?;
    let minute: i64 = minute
        .parse()
        .map_err(|_| TimeFormatError::Minute(s.to_string()))?;

    if !(0..=23).contains(&hour) || !(0..=59).contains(&minute) {
        return Err(TimeFormatError::OutOfRange(s.to_string()));
    }

    Ok(hour * 60 + minute)
}
