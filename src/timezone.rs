use time::OffsetDateTime;
use time_tz::{Offset, TimeZone, Tz};

/// Look up a timezone by its canonical name, e.g. "America/Sao_Paulo".
pub fn get_timezone(canonical_timezone: &str) -> Option<&'static Tz> {
    time_tz::timezones::get_by_name(canonical_timezone)
}

/// Convert `date_time` into the local time of `timezone`.
///
/// The offset is resolved for `date_time` itself so that dates on either side
/// of a daylight saving transition are shifted correctly.
pub fn to_local(date_time: OffsetDateTime, timezone: &Tz) -> OffsetDateTime {
    let offset = timezone.get_offset_utc(&date_time).to_utc();

    date_time.to_offset(offset)
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::{get_timezone, to_local};

    #[test]
    fn finds_canonical_timezone() {
        assert!(get_timezone("UTC").is_some());
        assert!(get_timezone("America/Sao_Paulo").is_some());
    }

    #[test]
    fn rejects_unknown_timezone() {
        assert!(get_timezone("Mars/Olympus_Mons").is_none());
    }

    #[test]
    fn converts_to_local_time() {
        let timezone = get_timezone("America/Sao_Paulo").unwrap();

        let local = to_local(datetime!(2021-03-05 01:00 UTC), timezone);

        assert_eq!(local, datetime!(2021-03-04 22:00 -3));
    }
}
