mod time_utils;

pub use time_utils::{
    STANDARD_DATE_FORMAT, epoch_ms_to_date_string, month_abbrev, month_year_string,
    parse_timestamp_ms, week_of_month,
};
