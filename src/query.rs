// src/query.rs
//
// Carousel state and navigation intents as they travel in a URL:
// `category` + `index` carry the state, `action` + `target` the command.

use crate::domain::carousel::{CarouselCommand, CarouselState};
use crate::domain::listing::ListingCategory;
use crate::errors::ServerError;
use std::num::IntErrorKind;
use url::form_urlencoded;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShowcaseParams {
    pub category: ListingCategory,
    pub index: usize,
    pub command: Option<CarouselCommand>,
}

impl ShowcaseParams {
    /// Parse a raw query string (without the leading `?`).
    pub fn parse(query: Option<&str>) -> Result<Self, ServerError> {
        let mut params = ShowcaseParams::default();
        let mut action: Option<String> = None;
        let mut target: Option<String> = None;

        for (key, value) in form_urlencoded::parse(query.unwrap_or("").as_bytes()) {
            match key.as_ref() {
                "category" => params.category = parse_category(&value)?,
                "index" => params.index = parse_index("index", &value)?,
                "action" => action = Some(value.into_owned()),
                "target" => target = Some(value.into_owned()),
                _ => {}
            }
        }

        params.command = match action.as_deref().map(str::trim) {
            None | Some("") => None,
            Some("next") => Some(CarouselCommand::Next),
            Some("previous") | Some("prev") => Some(CarouselCommand::Previous),
            Some("jump") => {
                let target = required_target("jump", target.as_deref())?;
                Some(CarouselCommand::JumpTo(parse_index("target", target)?))
            }
            Some("select") => {
                let target = required_target("select", target.as_deref())?;
                Some(CarouselCommand::Select(parse_category(target)?))
            }
            Some(other) => {
                return Err(ServerError::BadRequest(format!(
                    "unknown carousel action '{other}'"
                )))
            }
        };

        Ok(params)
    }
}

/// Inverse of [`ShowcaseParams::parse`]: the query a control should send to
/// apply `command` on top of `state`.
pub fn showcase_query(state: CarouselState, command: Option<CarouselCommand>) -> String {
    let mut out = form_urlencoded::Serializer::new(String::new());
    out.append_pair("category", state.active_category.as_str());
    out.append_pair("index", &state.current_index.to_string());

    match command {
        None => {}
        Some(CarouselCommand::Next) => {
            out.append_pair("action", "next");
        }
        Some(CarouselCommand::Previous) => {
            out.append_pair("action", "previous");
        }
        Some(CarouselCommand::JumpTo(index)) => {
            out.append_pair("action", "jump");
            out.append_pair("target", &index.to_string());
        }
        Some(CarouselCommand::Select(category)) => {
            out.append_pair("action", "select");
            out.append_pair("target", category.as_str());
        }
    }

    out.finish()
}

fn parse_category(raw: &str) -> Result<ListingCategory, ServerError> {
    raw.parse().map_err(ServerError::BadRequest)
}

/// Any integer is accepted and saturated into `usize`; the controller clamps
/// it to the collection. Only non-numeric input is an error.
fn parse_index(field: &str, raw: &str) -> Result<usize, ServerError> {
    let raw = raw.trim();
    let not_integer = || ServerError::BadRequest(format!("{field} must be an integer"));

    if let Some(digits) = raw.strip_prefix('-') {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(not_integer());
        }
        return Ok(0);
    }

    match raw.parse::<usize>() {
        Ok(index) => Ok(index),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(usize::MAX),
        Err(_) => Err(not_integer()),
    }
}

fn required_target<'a>(action: &str, target: Option<&'a str>) -> Result<&'a str, ServerError> {
    target
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| ServerError::BadRequest(format!("action '{action}' needs a target")))
}
