pub(crate) mod date;
pub(crate) mod jq;
pub(crate) mod timezone;

pub(crate) use date::{DateParser, parse_date};
pub(crate) use jq::filter_json;
pub(crate) use timezone::Timezone;
