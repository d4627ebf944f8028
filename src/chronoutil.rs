use {
    crate::constants::{ISO8601_COMPACT_FORMAT, ISO8601_DATE_FORMAT},
    chrono::{DateTime, NaiveDate, Utc},
};

/// Format a UTC timestamp in the extended ISO 8601 basic format
/// (`YYYYMMDDTHHMMSSZ`) used in the string to sign and the `X-Amz-Date`
/// header.
pub fn format_compact_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format(ISO8601_COMPACT_FORMAT).to_string()
}

/// Format a date as the `YYYYMMDD` date stamp used in the credential scope
/// and the first step of the key derivation chain.
pub fn format_date_stamp(date: NaiveDate) -> String {
    date.format(ISO8601_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        chrono::{NaiveDate, TimeZone, Utc},
    };

    #[test]
    fn test_compact_timestamp() {
        let timestamp = Utc.with_ymd_and_hms(2015, 8, 30, 12, 36, 0).unwrap();
        assert_eq!(format_compact_timestamp(timestamp), "20150830T123600Z");
    }

    #[test]
    fn test_date_stamp() {
        let date = NaiveDate::from_ymd_opt(2015, 8, 30).unwrap();
        assert_eq!(format_date_stamp(date), "20150830");
    }

    #[test]
    fn test_single_digit_fields_zero_padded() {
        let timestamp = Utc.with_ymd_and_hms(2021, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_compact_timestamp(timestamp), "20210102T030405Z");
    }
}
