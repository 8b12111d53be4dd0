//! Time functions: Now, ParseTime
//!
//! Formats use strftime specifiers (`%Y-%m-%d`, `%H:%M:%S`, `%z`, ...).

use chrono::format::ParseErrorKind;
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime};
use haven_plugin::prelude::*;

/// Current wall-clock time in the local offset.
pub fn now() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}

/// Parse `operand` according to `format`.
///
/// A format with a UTC offset keeps that offset. Without one, a date and
/// time is read as UTC and a bare date as midnight UTC.
pub fn parse_time(format: &str, operand: &str) -> Result<DateTime<FixedOffset>, HavenError> {
    let err = match DateTime::parse_from_str(operand, format) {
        Ok(t) => return Ok(t),
        Err(e) => e,
    };
    if err.kind() != ParseErrorKind::NotEnough {
        return Err(HavenError::malformed_timestamp(operand, format, err.to_string()));
    }

    let err = match NaiveDateTime::parse_from_str(operand, format) {
        Ok(t) => return Ok(t.and_utc().fixed_offset()),
        Err(e) => e,
    };
    if err.kind() != ParseErrorKind::NotEnough {
        return Err(HavenError::malformed_timestamp(operand, format, err.to_string()));
    }

    NaiveDate::parse_from_str(operand, format)
        .map(|d| d.and_time(NaiveTime::MIN).and_utc().fixed_offset())
        .map_err(|e| HavenError::malformed_timestamp(operand, format, e.to_string()))
}

// ============ Plugins ============

static NOW_ARGS: [ArgMeta; 0] = [];
static NOW_EXAMPLES: [&str; 1] = ["Now → 2024-03-01T12:30:00+01:00"];
static NOW_RELATED: [&str; 1] = ["ParseTime"];

static PARSE_TIME_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("format", "Text", "strftime-style format"),
    ArgMeta::required("operand", "Text", "Text to parse"),
];
static PARSE_TIME_EXAMPLES: [&str; 2] = [
    "\"2024-03-01\" | ParseTime \"%Y-%m-%d\" → 2024-03-01T00:00:00+00:00",
    "\"2024-03-01 12:30 +0200\" | ParseTime \"%Y-%m-%d %H:%M %z\" → 2024-03-01T12:30:00+02:00",
];
static PARSE_TIME_RELATED: [&str; 1] = ["Now"];

pub struct Now;

impl FunctionPlugin for Now {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "Now",
            description: "Current wall-clock time",
            usage: "Now",
            args: &NOW_ARGS,
            returns: "Time",
            fallible: false,
            examples: &NOW_EXAMPLES,
            category: "time",
            related: &NOW_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        invoke(|| {
            check_args("Now", args, 0, 0)?;
            Ok(now())
        })
    }
}

pub struct ParseTime;

impl FunctionPlugin for ParseTime {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "ParseTime",
            description: "Parse operand as a timestamp using format",
            usage: "ParseTime format operand",
            args: &PARSE_TIME_ARGS,
            returns: "Time",
            fallible: true,
            examples: &PARSE_TIME_EXAMPLES,
            category: "time",
            related: &PARSE_TIME_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        invoke(|| {
            check_args("ParseTime", args, 2, 2)?;
            let format = require_text(&args[0], "ParseTime", "format")?;
            let operand = require_text(&args[1], "ParseTime", "operand")?;
            parse_time(format, operand)
        })
    }
}
