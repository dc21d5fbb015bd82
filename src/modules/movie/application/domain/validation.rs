// src/modules/movie/application/domain/validation.rs
//
// Validation layer shared by create and update. Every field arrives as a raw
// JSON value so that all problems can be reported in one response.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::entities::{MediaType, MovieDraft};

pub const TEXT_MIN_LEN: usize = 3;
pub const TEXT_MAX_LEN: usize = 255;

//
// ──────────────────────────────────────────────────────────
// Raw input
// ──────────────────────────────────────────────────────────
//

/// Untrusted movie payload as received by create and update.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct RawMovie {
    #[schema(value_type = String, example = "Inception")]
    pub title: Option<Value>,

    #[serde(rename = "type")]
    #[schema(value_type = String, example = "MOVIE")]
    pub media_type: Option<Value>,

    #[schema(value_type = String, example = "Christopher Nolan")]
    pub director: Option<Value>,

    /// Number or numeric string
    #[schema(value_type = f64, example = 160)]
    pub budget: Option<Value>,

    #[schema(value_type = String, example = "Los Angeles")]
    pub location: Option<Value>,

    /// Number or numeric string, in minutes
    #[schema(value_type = f64, example = 148)]
    pub duration: Option<Value>,

    /// Integer or integer-prefixed string
    #[schema(value_type = i32, example = 2010)]
    pub year_time: Option<Value>,

    #[schema(value_type = Option<String>, example = "Dream heist")]
    pub details: Option<Value>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FieldError {
    #[schema(example = "budget")]
    pub field: String,
    #[schema(example = "Budget must be a positive number")]
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Validation failed on {} field(s)", .0.len())]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn fields(&self) -> &[FieldError] {
        &self.0
    }

    #[cfg(test)]
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }
}

//
// ──────────────────────────────────────────────────────────
// Parsing
// ──────────────────────────────────────────────────────────
//

impl MovieDraft {
    /// Validate and normalize a raw payload.
    pub fn parse(raw: &RawMovie) -> Result<Self, ValidationErrors> {
        let mut errors = Vec::new();

        let title = bounded_text(&mut errors, "title", "Title", raw.title.as_ref(), TEXT_MIN_LEN);
        let media_type = media_type(&mut errors, raw.media_type.as_ref());
        let director = bounded_text(
            &mut errors,
            "director",
            "Director",
            raw.director.as_ref(),
            TEXT_MIN_LEN,
        );
        let budget = positive_finite(&mut errors, "budget", "Budget", raw.budget.as_ref());
        let location = bounded_text(&mut errors, "location", "Location", raw.location.as_ref(), 0);
        let duration = positive_finite(&mut errors, "duration", "Duration", raw.duration.as_ref());
        let year_time = year(&mut errors, raw.year_time.as_ref());
        let details = optional_text(&mut errors, "details", "Details", raw.details.as_ref());

        match (
            title, media_type, director, budget, location, duration, year_time, details,
        ) {
            (
                Some(title),
                Some(media_type),
                Some(director),
                Some(budget),
                Some(location),
                Some(duration),
                Some(year_time),
                Some(details),
            ) if errors.is_empty() => Ok(MovieDraft {
                title,
                media_type,
                director,
                budget,
                location,
                duration,
                year_time,
                details,
            }),
            _ => Err(ValidationErrors(errors)),
        }
    }
}

fn bounded_text(
    errors: &mut Vec<FieldError>,
    field: &str,
    label: &str,
    value: Option<&Value>,
    min_len: usize,
) -> Option<String> {
    let text = match value {
        None => {
            errors.push(FieldError::new(field, format!("{label} is required")));
            return None;
        }
        Some(Value::String(s)) => s.trim(),
        Some(_) => {
            errors.push(FieldError::new(field, format!("{label} must be a string")));
            return None;
        }
    };

    let len = text.chars().count();
    if len < min_len {
        errors.push(FieldError::new(
            field,
            format!("{label} must be at least {min_len} characters long"),
        ));
        return None;
    }
    if len > TEXT_MAX_LEN {
        errors.push(FieldError::new(
            field,
            format!("{label} must be at most {TEXT_MAX_LEN} characters long"),
        ));
        return None;
    }

    Some(text.to_string())
}

fn optional_text(
    errors: &mut Vec<FieldError>,
    field: &str,
    label: &str,
    value: Option<&Value>,
) -> Option<Option<String>> {
    match value {
        None => Some(None),
        Some(Value::String(s)) => Some(Some(s.trim().to_string())),
        Some(_) => {
            errors.push(FieldError::new(field, format!("{label} must be a string")));
            None
        }
    }
}

fn media_type(errors: &mut Vec<FieldError>, value: Option<&Value>) -> Option<MediaType> {
    match value {
        None => {
            errors.push(FieldError::new("type", "Type is required"));
            None
        }
        Some(Value::String(s)) => match s.parse::<MediaType>() {
            Ok(t) => Some(t),
            Err(_) => {
                errors.push(FieldError::new("type", "Type must be one of MOVIE, TV_SHOW"));
                None
            }
        },
        Some(_) => {
            errors.push(FieldError::new("type", "Type must be one of MOVIE, TV_SHOW"));
            None
        }
    }
}

fn positive_finite(
    errors: &mut Vec<FieldError>,
    field: &str,
    label: &str,
    value: Option<&Value>,
) -> Option<f64> {
    let number = parse_float(value);

    if number.is_nan() {
        errors.push(FieldError::new(field, format!("{label} must be a number")));
        return None;
    }
    if number <= 0.0 {
        errors.push(FieldError::new(
            field,
            format!("{label} must be a positive number"),
        ));
        return None;
    }
    if !number.is_finite() {
        errors.push(FieldError::new(field, format!("{label} must be finite")));
        return None;
    }

    Some(number)
}

fn year(errors: &mut Vec<FieldError>, value: Option<&Value>) -> Option<i32> {
    let number = parse_int(value);

    if number.is_nan() {
        errors.push(FieldError::new("year_time", "Year must be a number"));
        return None;
    }
    if number < i32::MIN as f64 || number > i32::MAX as f64 {
        errors.push(FieldError::new("year_time", "Year is out of range"));
        return None;
    }

    Some(number as i32)
}

//
// ──────────────────────────────────────────────────────────
// Numeric coercion
// ──────────────────────────────────────────────────────────
//
// Mirrors the lenient `parseFloat` / `parseInt(_, 10)` behaviour browsers
// apply to form values: numbers pass through, strings are read from their
// longest numeric prefix, everything else is NaN.

pub fn parse_float(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => float_prefix(s),
        _ => f64::NAN,
    }
}

pub fn parse_int(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().map(f64::trunc).unwrap_or(f64::NAN),
        Some(Value::String(s)) => int_prefix(s),
        _ => f64::NAN,
    }
}

fn float_prefix(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    end = skip_digits(bytes, end);
    let mut mantissa_digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = skip_digits(bytes, end + 1);
        let frac_digits = frac_end - (end + 1);
        if mantissa_digits + frac_digits > 0 {
            end = frac_end;
        }
        mantissa_digits += frac_digits;
    }

    if mantissa_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+') | Some(b'-')) {
            exp += 1;
        }
        let exp_end = skip_digits(bytes, exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

fn int_prefix(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut start = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        start = 1;
    }
    let end = skip_digits(bytes, start);
    if end == start {
        return f64::NAN;
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

fn skip_digits(bytes: &[u8], mut idx: usize) -> usize {
    while bytes.get(idx).is_some_and(u8::is_ascii_digit) {
        idx += 1;
    }
    idx
}
