use std::time::Duration;

use super::defaults::{CONCURRENCY_LEVELS, MAX_CANDIDATES_PER_REQUEST};
use super::types::{PositiveU64, PositiveUsize};
use crate::error::{AppError, AppResult, ValidationError};

pub(super) fn parse_positive_u64(s: &str) -> AppResult<PositiveU64> {
    s.parse::<PositiveU64>().map_err(AppError::from)
}

pub(super) fn parse_concurrency(s: &str) -> AppResult<PositiveUsize> {
    let value = s.parse::<PositiveUsize>().map_err(AppError::from)?;
    ensure_concurrency(value.get()).map_err(AppError::from)
}

/// Accepts only the fixed pool sizes in [`CONCURRENCY_LEVELS`].
pub(crate) fn ensure_concurrency(value: usize) -> Result<PositiveUsize, ValidationError> {
    if !CONCURRENCY_LEVELS.contains(&value) {
        return Err(ValidationError::UnsupportedConcurrency { value });
    }
    PositiveUsize::try_from(value)
}

pub(super) fn parse_candidates(s: &str) -> AppResult<PositiveUsize> {
    let value = s.parse::<PositiveUsize>().map_err(AppError::from)?;
    ensure_candidates(value.get()).map_err(AppError::from)
}

/// Rejects zero and anything above [`MAX_CANDIDATES_PER_REQUEST`].
pub(crate) fn ensure_candidates(value: usize) -> Result<PositiveUsize, ValidationError> {
    if value > MAX_CANDIDATES_PER_REQUEST {
        return Err(ValidationError::ValueTooLarge {
            max: MAX_CANDIDATES_PER_REQUEST,
        });
    }
    PositiveUsize::try_from(value)
}

/// Parses `<digits>[ms|s|m|h]`; a bare number is seconds.
pub(crate) fn parse_duration_arg(s: &str) -> AppResult<Duration> {
    let value = s.trim();
    if value.is_empty() {
        return Err(AppError::validation(ValidationError::DurationEmpty));
    }

    let split = value
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(value.len());
    let (digits, unit) = value.split_at(split);
    if digits.is_empty() {
        return Err(AppError::validation(
            ValidationError::InvalidDurationFormat {
                value: value.to_owned(),
            },
        ));
    }
    let number: u64 = digits.parse().map_err(|err| {
        AppError::validation(ValidationError::InvalidDurationNumber {
            value: value.to_owned(),
            source: err,
        })
    })?;

    let millis_per_unit: u64 = match unit {
        "ms" => 1,
        "" | "s" => 1_000,
        "m" => 60_000,
        "h" => 3_600_000,
        other => {
            return Err(AppError::validation(ValidationError::InvalidDurationUnit {
                unit: other.to_owned(),
            }));
        }
    };
    let millis = number
        .checked_mul(millis_per_unit)
        .ok_or_else(|| AppError::validation(ValidationError::DurationOverflow))?;
    if millis == 0 {
        return Err(AppError::validation(ValidationError::DurationZero));
    }

    Ok(Duration::from_millis(millis))
}
