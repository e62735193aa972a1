use chrono::{Local, NaiveDate};

pub const DATE_FMT: &str = "%Y-%m-%d";

// today in the local time zone of the branch
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

// counts the days from `start` up to `today` where the first day counts fully
pub fn days_including(start: NaiveDate, today: NaiveDate) -> i64 {
    (today - start).num_days() + 1
}

pub fn parse_date(str_date: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(str_date, DATE_FMT)
}

pub mod serializer {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::{DATE_FMT, parse_date};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        date.format(DATE_FMT).to_string().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let str_date: String = Deserialize::deserialize(deserializer)?;
        parse_date(&str_date).map_err(D::Error::custom)
    }
}
