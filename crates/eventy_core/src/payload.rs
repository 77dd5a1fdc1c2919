//! Submission payload assembly.
//!
//! Builds the ordered multipart field list the create-event endpoint expects.
//! The transport layer turns this plan into an actual multipart body; keeping
//! the plan as plain data lets field order, keys, and value normalization be
//! tested without any network machinery.

use jiff::civil::{Date, Time};

use crate::draft::DraftEvent;
use crate::error::PayloadError;

/// One part of the multipart body, in submission order.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionPart {
    Text {
        name: &'static str,
        value: String,
    },
    File {
        name: &'static str,
        file_name: String,
        mime_type: String,
        bytes: Vec<u8>,
    },
}

impl SubmissionPart {
    pub fn name(&self) -> &'static str {
        match self {
            SubmissionPart::Text { name, .. } => name,
            SubmissionPart::File { name, .. } => name,
        }
    }
}

/// The complete ordered payload for one submission attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionPlan {
    pub parts: Vec<SubmissionPart>,
}

impl SubmissionPlan {
    pub fn field_names(&self) -> Vec<&'static str> {
        self.parts.iter().map(|p| p.name()).collect()
    }

    pub fn text_value(&self, field: &str) -> Option<&str> {
        self.parts.iter().find_map(|p| match p {
            SubmissionPart::Text { name, value } if *name == field => Some(value.as_str()),
            _ => None,
        })
    }
}

/// Assemble the wire payload from a draft.
///
/// Field order and key spelling match what the server parses, including the
/// bracketed location keys. Image parts are appended only when attached.
pub fn build_submission(draft: &DraftEvent) -> Result<SubmissionPlan, PayloadError> {
    let category = draft
        .category
        .as_ref()
        .ok_or(PayloadError::MissingField("category"))?;
    let location = draft
        .location
        .as_ref()
        .ok_or(PayloadError::MissingField("location"))?;

    let mut parts = vec![
        text("name", draft.name.clone()),
        text("description", draft.description.clone()),
        text("category", category.wire_value()),
        text("location[address]", location.address.clone()),
        text("location[latitude]", location.latitude.to_string()),
        text("location[longitude]", location.longitude.to_string()),
        text("price", draft.price.clone()),
        text("date", event_date_iso(&draft.date)?),
        text("hostCompany", draft.host_company.clone()),
        text("time", normalize_time(&draft.time)),
        text("type", draft.visibility.label().to_string()),
        text("isRecurring", draft.recurrence.label().to_string()),
    ];

    if let Some(picture) = &draft.picture {
        parts.push(SubmissionPart::File {
            name: "image",
            file_name: picture.file_name.clone(),
            mime_type: picture.mime_type.clone(),
            bytes: picture.bytes.clone(),
        });
    }
    if let Some(cover) = &draft.cover_image {
        parts.push(SubmissionPart::File {
            name: "coverImage",
            file_name: cover.file_name.clone(),
            mime_type: cover.mime_type.clone(),
            bytes: cover.bytes.clone(),
        });
    }

    Ok(SubmissionPlan { parts })
}

fn text(name: &'static str, value: String) -> SubmissionPart {
    SubmissionPart::Text { name, value }
}

/// The picked calendar date as an ISO-8601 instant at UTC midnight.
pub fn event_date_iso(raw: &str) -> Result<String, PayloadError> {
    let date = Date::strptime("%Y-%m-%d", raw.trim())?;
    let zoned = date.in_tz("UTC")?;
    Ok(zoned.timestamp().to_string())
}

/// Clock-time patterns accepted from the time field, most specific first.
const TIME_PATTERNS: [&str; 4] = ["%I:%M:%S %p", "%I:%M %p", "%H:%M:%S", "%H:%M"];

/// Normalize the time field for the wire.
///
/// Anything that parses as a clock time is re-emitted as `HH:MM:SS AM|PM`,
/// so 24-hour entry ("14:00") gets the correct marker. Unparseable text is
/// passed through, gaining an " AM" suffix when it carries neither marker;
/// the server tolerates free text here.
pub fn normalize_time(raw: &str) -> String {
    let trimmed = raw.trim();
    for pattern in TIME_PATTERNS {
        if let Ok(time) = Time::strptime(pattern, trimmed) {
            return time.strftime("%I:%M:%S %p").to_string();
        }
    }
    if trimmed.contains("AM") || trimmed.contains("PM") {
        trimmed.to_string()
    } else {
        format!("{trimmed} AM")
    }
}
