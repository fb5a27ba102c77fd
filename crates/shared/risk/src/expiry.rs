use chrono::{DateTime, Duration, Utc};
use log::{debug, error};
use otc_core::Timestamp;
use otc_ports::{ValidationError, ValidationResult};

/// Threshold compared against the seconds component of the elapsed time
pub const QUOTE_VALIDITY_SECONDS: i64 = 10;

const SECONDS_PER_DAY: i64 = 86_400;

/// Fallback layout for offsets written without a colon (`+0000`)
const VALID_UNTIL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

/// Parse a quote's `valid_until` as an absolute UTC instant
pub fn parse_valid_until(valid_until: &str) -> ValidationResult<Timestamp> {
    DateTime::parse_from_rfc3339(valid_until)
        .or_else(|_| DateTime::parse_from_str(valid_until, VALID_UNTIL_FORMAT))
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            let err = ValidationError::InvalidTimestamp {
                value: valid_until.to_string(),
                reason: e.to_string(),
            };
            error!("{}", err);
            err
        })
}

/// Seconds component of a duration normalised to whole days plus a
/// non-negative remainder (floor semantics), so `-5s` yields `86395`
fn seconds_of_day(elapsed: Duration) -> i64 {
    let whole = elapsed.num_seconds();
    let floored = if elapsed < Duration::seconds(whole) {
        whole - 1
    } else {
        whole
    };
    floored.rem_euclid(SECONDS_PER_DAY)
}

/// Quote expiry rule applied before a trade is submitted
///
/// Returns true when the seconds component of `now - valid_until` is
/// greater than [`QUOTE_VALIDITY_SECONDS`]. Only the sub-day component is
/// compared, not the total elapsed time.
pub fn is_quote_still_valid(valid_until: &str, now: Timestamp) -> ValidationResult<bool> {
    let until = parse_valid_until(valid_until)?;
    let elapsed = now - until;
    let seconds = seconds_of_day(elapsed);

    debug!(
        "Quote valid until {}, now {}, elapsed seconds component {}",
        until, now, seconds
    );
    Ok(seconds > QUOTE_VALIDITY_SECONDS)
}
