//! URL parsing: ParseURL
//!
//! Templates receive the URL as an object of its components. Absent
//! components are `Null`, and the object renders as the serialized URL.
//! Relative references parse too; they have no scheme and keep their
//! input text as `raw`.

use haven_plugin::prelude::*;
use std::collections::HashMap;
use url::{ParseError, Url};

/// Placeholder base that relative references are resolved against.
const RELATIVE_BASE: &str = "http://relative.invalid/";

/// A parsed URL or relative reference
#[derive(Debug, Clone)]
pub enum UrlRef {
    Absolute(Url),
    Relative { raw: String, resolved: Url },
}

impl UrlRef {
    pub fn is_relative(&self) -> bool {
        matches!(self, UrlRef::Relative { .. })
    }
}

/// Parse `operand` as an absolute URL or a relative reference.
///
/// A relative reference whose first path segment holds a colon is rejected,
/// since it would read as a scheme.
pub fn parse_url(operand: &str) -> Result<UrlRef, HavenError> {
    match Url::parse(operand) {
        Ok(url) => Ok(UrlRef::Absolute(url)),
        Err(ParseError::RelativeUrlWithoutBase) => parse_relative(operand),
        Err(e) => Err(HavenError::malformed_url(operand, e.to_string())),
    }
}

fn parse_relative(operand: &str) -> Result<UrlRef, HavenError> {
    let path = relative_path(operand);
    if !operand.starts_with("//") && path.split('/').next().map_or(false, |seg| seg.contains(':')) {
        return Err(HavenError::malformed_url(
            operand,
            "first path segment in URL cannot contain colon",
        ));
    }
    let base = Url::parse(RELATIVE_BASE).map_err(|e| HavenError::malformed_url(operand, e.to_string()))?;
    let resolved = Url::options()
        .base_url(Some(&base))
        .parse(operand)
        .map_err(|e| HavenError::malformed_url(operand, e.to_string()))?;
    Ok(UrlRef::Relative {
        raw: operand.to_string(),
        resolved,
    })
}

/// Path portion of a reference: everything before the query or fragment.
fn relative_path(operand: &str) -> &str {
    operand.find(['?', '#']).map_or(operand, |end| &operand[..end])
}

/// Components of `url` as an object value
pub fn url_components(url: &UrlRef) -> Value {
    fn text(s: Option<&str>) -> Value {
        s.map_or(Value::Null, Value::from)
    }

    fn authority(obj: &mut HashMap<String, Value>, url: Option<&Url>) {
        let username = url.map(Url::username).filter(|u| !u.is_empty());
        obj.insert("username".to_string(), text(username));
        obj.insert("password".to_string(), text(url.and_then(Url::password)));
        obj.insert("host".to_string(), text(url.and_then(Url::host_str)));
        obj.insert(
            "port".to_string(),
            url.and_then(Url::port).map_or(Value::Null, |p| Value::Int(i64::from(p))),
        );
    }

    let mut obj = HashMap::new();
    match url {
        UrlRef::Absolute(url) => {
            obj.insert("scheme".to_string(), Value::from(url.scheme()));
            authority(&mut obj, Some(url));
            obj.insert("path".to_string(), Value::from(url.path()));
            obj.insert("query".to_string(), text(url.query()));
            obj.insert("fragment".to_string(), text(url.fragment()));
            obj.insert("raw".to_string(), Value::from(url.as_str()));
        }
        UrlRef::Relative { raw, resolved } => {
            let network_path = raw.starts_with("//");
            obj.insert("scheme".to_string(), Value::Null);
            authority(&mut obj, Some(resolved).filter(|_| network_path));
            let path = if network_path { resolved.path() } else { relative_path(raw) };
            obj.insert("path".to_string(), Value::from(path));
            obj.insert("query".to_string(), text(resolved.query()));
            obj.insert("fragment".to_string(), text(resolved.fragment()));
            obj.insert("raw".to_string(), Value::from(raw.as_str()));
        }
    }
    Value::Object(obj)
}

// ============ Plugins ============

static PARSE_URL_ARGS: [ArgMeta; 1] = [ArgMeta::required("operand", "Text", "URL or relative reference")];

pub struct ParseURL;

impl FunctionPlugin for ParseURL {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "ParseURL",
            description: "Parse operand as a URL or relative reference into its components",
            usage: "ParseURL operand",
            args: &PARSE_URL_ARGS,
            returns: "Object",
            fallible: true,
            examples: &[
                "\"https://example.com:8080/a?b=c#d\" | ParseURL → {scheme: https, host: example.com, port: 8080, ...}",
            ],
            category: "parse",
            related: &["ParseInt"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        invoke(|| {
            check_args("ParseURL", args, 1, 1)?;
            let url = parse_url(require_text(&args[0], "ParseURL", "operand")?)?;
            Ok(url_components(&url))
        })
    }
}
