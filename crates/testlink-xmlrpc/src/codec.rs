// SPDX-FileCopyrightText: 2026 testlink-rs Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! XML-RPC encoding of calls and decoding of responses.
//!
//! Requests follow TestLink's convention of a single struct parameter that
//! carries every named argument. Responses are parsed into a small element
//! tree first and then mapped onto [`RpcValue`].

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::NaiveDateTime;
use quick_xml::Reader;
use quick_xml::escape::escape;
use quick_xml::events::Event;
use testlink_core::{RpcStruct, RpcValue, TestLinkError};

const DATETIME_FORMAT: &str = "%Y%m%dT%H:%M:%S";

/// Encodes a `<methodCall>` document.
///
/// Argument-less calls carry no `<params>` at all.
pub fn encode_call(method: &str, args: &[(&str, RpcValue)]) -> String {
    let mut out = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    out.push_str("<methodCall><methodName>");
    out.push_str(&escape(method));
    out.push_str("</methodName>");

    if !args.is_empty() {
        out.push_str("<params><param><value><struct>");
        for (name, value) in args {
            write_member(&mut out, name, value);
        }
        out.push_str("</struct></value></param></params>");
    }

    out.push_str("</methodCall>");
    out
}

fn write_member(out: &mut String, name: &str, value: &RpcValue) {
    out.push_str("<member><name>");
    out.push_str(&escape(name));
    out.push_str("</name>");
    write_value(out, value);
    out.push_str("</member>");
}

fn write_value(out: &mut String, value: &RpcValue) {
    out.push_str("<value>");
    match value {
        RpcValue::Nil => out.push_str("<nil/>"),
        RpcValue::Bool(b) => {
            out.push_str(if *b { "<boolean>1</boolean>" } else { "<boolean>0</boolean>" });
        }
        RpcValue::Int(n) => {
            let tag = if i32::try_from(*n).is_ok() { "int" } else { "i8" };
            out.push_str(&format!("<{tag}>{n}</{tag}>"));
        }
        RpcValue::Double(d) => out.push_str(&format!("<double>{d}</double>")),
        RpcValue::String(s) => {
            out.push_str("<string>");
            out.push_str(&escape(s.as_str()));
            out.push_str("</string>");
        }
        RpcValue::DateTime(ts) => out.push_str(&format!(
            "<dateTime.iso8601>{}</dateTime.iso8601>",
            ts.format(DATETIME_FORMAT)
        )),
        RpcValue::Base64(bytes) => {
            out.push_str("<base64>");
            out.push_str(&STANDARD.encode(bytes));
            out.push_str("</base64>");
        }
        RpcValue::Array(items) => {
            out.push_str("<array><data>");
            for item in items {
                write_value(out, item);
            }
            out.push_str("</data></array>");
        }
        RpcValue::Struct(members) => {
            out.push_str("<struct>");
            for (name, member) in members.iter() {
                write_member(out, name, member);
            }
            out.push_str("</struct>");
        }
    }
    out.push_str("</value>");
}

/// Decodes a `<methodResponse>` document.
///
/// A `<fault>` becomes [`TestLinkError::Fault`]; anything that is not a
/// well-formed response becomes [`TestLinkError::Transport`]. A response
/// without a parameter decodes to [`RpcValue::Nil`].
pub fn decode_response(xml: &str) -> Result<RpcValue, TestLinkError> {
    let document = parse_document(xml)?;
    let response = document
        .child("methodResponse")
        .ok_or_else(|| TestLinkError::transport("response has no <methodResponse> element"))?;

    if let Some(fault) = response.child("fault") {
        let detail = match fault.child("value") {
            Some(value) => decode_value(value)?,
            None => RpcValue::Nil,
        };
        let detail = detail.as_struct();
        let code = detail
            .and_then(|s| s.get("faultCode"))
            .and_then(RpcValue::as_i64)
            .unwrap_or_default();
        let message = detail
            .and_then(|s| s.get("faultString"))
            .and_then(RpcValue::as_str)
            .unwrap_or_default()
            .to_string();
        return Err(TestLinkError::Fault { code, message });
    }

    match response
        .child("params")
        .and_then(|p| p.child("param"))
        .and_then(|p| p.child("value"))
    {
        Some(value) => decode_value(value),
        None => Ok(RpcValue::Nil),
    }
}

#[derive(Debug, Default)]
struct Element {
    name: String,
    text: String,
    children: Vec<Element>,
}

impl Element {
    fn named(name: &[u8]) -> Self {
        Self {
            name: String::from_utf8_lossy(name).into_owned(),
            ..Self::default()
        }
    }

    fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.name == name)
    }
}

fn malformed<E>(e: E) -> TestLinkError
where
    E: std::error::Error + Send + Sync + 'static,
{
    TestLinkError::Transport {
        message: format!("malformed XML-RPC response: {e}"),
        source: Some(Box::new(e)),
    }
}

/// Builds the element tree of a document. The returned root is synthetic.
fn parse_document(xml: &str) -> Result<Element, TestLinkError> {
    let mut reader = Reader::from_str(xml);
    let mut stack = vec![Element::default()];

    loop {
        match reader.read_event().map_err(malformed)? {
            Event::Start(start) => stack.push(Element::named(start.local_name().as_ref())),
            Event::Empty(start) => {
                let element = Element::named(start.local_name().as_ref());
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(element);
                }
            }
            Event::End(_) => {
                let element = stack.pop().filter(|_| !stack.is_empty()).ok_or_else(|| {
                    TestLinkError::transport("malformed XML-RPC response: unbalanced end tag")
                })?;
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(element);
                }
            }
            Event::Text(text) => {
                let text = text.unescape().map_err(malformed)?;
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&text);
                }
            }
            Event::CData(data) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    match (stack.pop(), stack.is_empty()) {
        (Some(root), true) => Ok(root),
        _ => Err(TestLinkError::transport(
            "malformed XML-RPC response: unclosed element",
        )),
    }
}

fn decode_value(value: &Element) -> Result<RpcValue, TestLinkError> {
    // Untyped values are strings.
    let Some(typed) = value.children.first() else {
        return Ok(RpcValue::String(value.text.clone()));
    };
    let text = typed.text.as_str();

    let decoded = match typed.name.as_str() {
        "i4" | "int" | "i8" => RpcValue::Int(text.trim().parse().map_err(|e| {
            TestLinkError::Transport {
                message: format!("invalid integer {text:?} in XML-RPC response"),
                source: Some(Box::new(e)),
            }
        })?),
        "boolean" => RpcValue::Bool(matches!(text.trim(), "1" | "true")),
        "double" => RpcValue::Double(text.trim().parse().map_err(|e| {
            TestLinkError::Transport {
                message: format!("invalid double {text:?} in XML-RPC response"),
                source: Some(Box::new(e)),
            }
        })?),
        "string" => RpcValue::String(text.to_string()),
        "dateTime.iso8601" => parse_datetime(text.trim())
            .map(RpcValue::DateTime)
            .unwrap_or_else(|| RpcValue::String(text.to_string())),
        "base64" => {
            let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
            STANDARD
                .decode(compact)
                .map(RpcValue::Base64)
                .unwrap_or_else(|_| RpcValue::String(text.to_string()))
        }
        "array" => {
            let items = match typed.child("data") {
                Some(data) => data
                    .children_named("value")
                    .map(decode_value)
                    .collect::<Result<Vec<_>, _>>()?,
                None => Vec::new(),
            };
            RpcValue::Array(items)
        }
        "struct" => {
            let mut members = RpcStruct::new();
            for member in typed.children_named("member") {
                let name = member.child("name").map(|n| n.text.clone()).unwrap_or_default();
                let value = match member.child("value") {
                    Some(v) => decode_value(v)?,
                    None => RpcValue::Nil,
                };
                members.insert(name, value);
            }
            RpcValue::Struct(members)
        }
        "nil" => RpcValue::Nil,
        other => {
            return Err(TestLinkError::transport(format!(
                "unsupported XML-RPC type <{other}>"
            )));
        }
    };
    Ok(decoded)
}

fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    [DATETIME_FORMAT, "%Y-%m-%dT%H:%M:%S", "%Y%m%dT%H%M%S"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
}
