//! Standard functions: math, time, regex, encoding, parsing

mod encoding;
mod math;
mod parse;
mod regexp;
mod time;
mod urls;

pub use encoding::{base64_decode, base64_encode, Base64Decode, Base64Encode};
pub use math::{abs, add, divide, max, min, modulo, multiply, subtract};
pub use math::{Abs, Add, Divide, Max, Min, Modulo, Multiply, Subtract};
pub use parse::{parse_bool, parse_float, parse_int, ParseBool, ParseFloat, ParseInt};
pub use regexp::{compile_ere, compile_regex, matches, quote_regex};
pub use regexp::{CompileERE, CompileRegex, Matches, QuoteRegex};
pub use time::{now, parse_time, Now, ParseTime};
pub use urls::{parse_url, url_components, ParseURL, UrlRef};
