// crates/vouch-signals/src/whois/record.rs
//
// Parsing of free-form WHOIS answers into normalized `key: value` fields,
// plus creation-date extraction across registrar schemas.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Creation-date field names in priority order, as normalized keys.
///
/// `Creation Date` (gTLD registries, ICANN format), `created` (RIPE-style
/// ccTLDs, .fr/.de/.eu), `Created Date`/`createdDate`, `registered`,
/// `Registered on` (.uk), `Registration Time` (.cn),
/// `Domain Registration Date` (.us legacy).
pub const CREATION_DATE_FIELDS: &[&str] = &[
    "creationdate",
    "created",
    "createddate",
    "registered",
    "registeredon",
    "registrationtime",
    "domainregistrationdate",
];

const REGISTRAR_FIELDS: &[&str] = &["registrar", "registrarname", "sponsoringregistrar"];

const EXPIRY_FIELDS: &[&str] = &[
    "registryexpirydate",
    "registrarregistrationexpirationdate",
    "expirydate",
    "expirationdate",
    "expires",
    "expireson",
    "paidtill",
];

/// Referral keys in an IANA answer.
const REFERRAL_FIELDS: &[&str] = &["refer", "whois"];

const REGISTRAR_REFERRAL_FIELDS: &[&str] = &["registrarwhoisserver"];

const DATETIME_TZ_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S %z",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y.%m.%d %H:%M:%S",
    "%d.%m.%Y %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%d-%b-%Y",
    "%d-%B-%Y",
    "%Y.%m.%d",
    "%d.%m.%Y",
    "%Y/%m/%d",
];

/// A parsed WHOIS answer. Fields keep their original order; lookups return
/// the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhoisRecord {
    fields: Vec<(String, String)>,
}

impl WhoisRecord {
    /// Parse `key: value` lines. Comment lines (`%`, `#`, `>>>`) are
    /// skipped. A key with an empty value takes the next line without a
    /// colon as its value, as in the Nominet layout:
    ///
    /// ```text
    ///     Registered on:
    ///         14-Apr-1995
    /// ```
    pub fn parse(text: &str) -> Self {
        let mut fields = Vec::new();
        let mut pending: Option<String> = None;

        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty()
                || trimmed.starts_with('%')
                || trimmed.starts_with('#')
                || trimmed.starts_with(">>>")
            {
                continue;
            }

            match trimmed.split_once(':') {
                Some((key, value)) => {
                    let key = normalize_key(key);
                    let value = value.trim();
                    if key.is_empty() {
                        pending = None;
                    } else if value.is_empty() {
                        pending = Some(key);
                    } else {
                        pending = None;
                        fields.push((key, value.to_string()));
                    }
                }
                None => {
                    if let Some(key) = pending.take() {
                        fields.push((key, trimmed.to_string()));
                    }
                }
            }
        }

        Self { fields }
    }

    /// First value recorded under any of `keys`, trying keys in order.
    fn first_of(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|key| {
            self.fields
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        })
    }

    /// First value under any of `keys`, trying keys in order, that parses
    /// as a date. Unparseable values fall through to the next candidate.
    fn first_date_of(&self, keys: &[&str]) -> Option<DateTime<Utc>> {
        keys.iter().find_map(|key| {
            self.fields
                .iter()
                .filter(|(k, _)| k == key)
                .find_map(|(_, v)| parse_date(v))
        })
    }

    /// First value, in `CREATION_DATE_FIELDS` priority, that parses as a date.
    pub fn creation_date(&self) -> Option<DateTime<Utc>> {
        self.first_date_of(CREATION_DATE_FIELDS)
    }

    pub fn expiry_date(&self) -> Option<DateTime<Utc>> {
        self.first_date_of(EXPIRY_FIELDS)
    }

    pub fn registrar(&self) -> Option<&str> {
        self.first_of(REGISTRAR_FIELDS)
    }

    /// Registry WHOIS server named by an IANA answer.
    pub fn referral(&self) -> Option<String> {
        self.first_of(REFERRAL_FIELDS).map(str::to_string)
    }

    /// Registrar WHOIS server named by a thin registry answer.
    pub fn registrar_referral(&self) -> Option<String> {
        self.first_of(REGISTRAR_REFERRAL_FIELDS).map(str::to_string)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Lowercase alphanumerics only: `Creation Date`, `creationDate` and
/// `creation_date` all become `creationdate`.
pub fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Best-effort date parsing across registrar formats. Naive timestamps are
/// taken as UTC.
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let mut v = value.trim();
    // "2001-02-03 (YYYY-MM-DD)"
    if let Some(idx) = v.find(" (") {
        v = v[..idx].trim_end();
    }
    for suffix in [" UTC", " GMT", " utc", " gmt"] {
        if let Some(stripped) = v.strip_suffix(suffix) {
            v = stripped.trim_end();
        }
    }
    if v.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(v) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in DATETIME_TZ_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(v, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(v, fmt) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(v, fmt) {
            return date
                .and_hms_opt(0, 0, 0)
                .map(|naive| Utc.from_utc_datetime(&naive));
        }
    }
    None
}

/// Whole days elapsed from `created` to `now`, rounded down.
pub fn age_in_days(created: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - created).num_seconds().div_euclid(86_400)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> DateTime<Utc> {
        parse_date(s).unwrap()
    }

    // One test per creation-date field name, in priority order.

    #[test]
    fn field_creation_date() {
        let r = WhoisRecord::parse("Creation Date: 1997-09-15T04:00:00Z");
        assert_eq!(r.creation_date(), Some(date("1997-09-15T04:00:00Z")));
    }

    #[test]
    fn field_created() {
        let r = WhoisRecord::parse("created:      2004-02-11");
        assert_eq!(r.creation_date(), Some(date("2004-02-11")));
    }

    #[test]
    fn field_created_date() {
        let r = WhoisRecord::parse("Created Date: 2010-06-01 10:20:30");
        assert_eq!(r.creation_date(), Some(date("2010-06-01T10:20:30Z")));
    }

    #[test]
    fn field_created_date_camel_case() {
        let r = WhoisRecord::parse("createdDate: 2012-03-04");
        assert_eq!(r.creation_date(), Some(date("2012-03-04")));
    }

    #[test]
    fn field_registered() {
        let r = WhoisRecord::parse("registered: 01.02.2003");
        assert_eq!(r.creation_date(), Some(date("2003-02-01")));
    }

    #[test]
    fn field_registered_on_next_line() {
        let r = WhoisRecord::parse("    Registered on:\n        14-Apr-1995\n    Expiry date:\n        13-Apr-2030\n");
        assert_eq!(r.creation_date(), Some(date("1995-04-14")));
        assert_eq!(r.expiry_date(), Some(date("2030-04-13")));
    }

    #[test]
    fn field_registration_time() {
        let r = WhoisRecord::parse("Registration Time: 2003-03-17 12:20:05");
        assert_eq!(r.creation_date(), Some(date("2003-03-17T12:20:05Z")));
    }

    #[test]
    fn field_domain_registration_date() {
        let r = WhoisRecord::parse("Domain Registration Date: 2002-04-18");
        assert_eq!(r.creation_date(), Some(date("2002-04-18")));
    }

    #[test]
    fn priority_order_beats_answer_order() {
        let r = WhoisRecord::parse("registered: 2015-01-01\nCreation Date: 2001-01-01T00:00:00Z");
        assert_eq!(r.creation_date(), Some(date("2001-01-01")));
    }

    #[test]
    fn unparseable_field_falls_through_to_next() {
        let r = WhoisRecord::parse("Creation Date: REDACTED FOR PRIVACY\ncreated: 2008-08-08");
        assert_eq!(r.creation_date(), Some(date("2008-08-08")));
    }

    #[test]
    fn no_date_fields() {
        let r = WhoisRecord::parse("Domain Name: EXAMPLE.TEST\nRegistrar: Example Registrar, Inc.");
        assert_eq!(r.creation_date(), None);
        assert_eq!(r.registrar(), Some("Example Registrar, Inc."));
    }

    #[test]
    fn comments_are_skipped() {
        let r = WhoisRecord::parse("% created: 1999-01-01\n# created: 1999-01-01\n>>> Last update of whois database: 2024-01-01T00:00:00Z <<<");
        assert!(r.is_empty());
    }

    #[test]
    fn referrals() {
        let iana = WhoisRecord::parse("refer:        whois.verisign-grs.com\n\ndomain:       COM");
        assert_eq!(iana.referral().as_deref(), Some("whois.verisign-grs.com"));

        let registry = WhoisRecord::parse("Registrar WHOIS Server: whois.markmonitor.com");
        assert_eq!(registry.registrar_referral().as_deref(), Some("whois.markmonitor.com"));
        assert_eq!(registry.referral(), None);
    }

    #[test]
    fn key_normalization() {
        assert_eq!(normalize_key("Creation Date"), "creationdate");
        assert_eq!(normalize_key("creationDate"), "creationdate");
        assert_eq!(normalize_key("creation_date"), "creationdate");
    }

    #[test]
    fn date_formats() {
        let expected = date("2020-05-06T00:00:00Z");
        for input in [
            "2020-05-06",
            "2020-05-06T00:00:00",
            "2020-05-06T00:00:00.000Z",
            "2020-05-06 00:00:00 UTC",
            "2020-05-06T00:00:00+0000",
            "06-May-2020",
            "06-may-2020",
            "2020.05.06",
            "06.05.2020",
            "2020/05/06",
            "2020-05-06 (YYYY-MM-DD)",
        ] {
            assert_eq!(parse_date(input), Some(expected), "format {:?}", input);
        }
    }

    #[test]
    fn offsets_are_normalized_to_utc() {
        assert_eq!(
            parse_date("2020-05-06T02:00:00+02:00"),
            Some(date("2020-05-06T00:00:00Z"))
        );
    }

    #[test]
    fn garbage_is_not_a_date() {
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn age_rounds_down() {
        let created = date("2020-01-01T00:00:00Z");
        assert_eq!(age_in_days(created, date("2020-01-01T23:59:59Z")), 0);
        assert_eq!(age_in_days(created, date("2020-01-02T00:00:00Z")), 1);
        assert_eq!(age_in_days(created, date("2021-01-01T00:00:00Z")), 366);
    }

    #[test]
    fn future_creation_is_negative() {
        let created = date("2020-01-02T12:00:00Z");
        assert_eq!(age_in_days(created, date("2020-01-02T00:00:00Z")), -1);
    }
}
