use crate::models::meeting::{MeetingCreate, MeetingUpdate, TEXT_MAX_LEN};

/// Validate an email: must contain '@' and '.', max 254 chars.
pub fn validate_email(email: &str) -> Option<String> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Some("Email is required".to_string());
    }
    if trimmed.len() > 254 {
        return Some("Email must be at most 254 characters".to_string());
    }
    if !trimmed.contains('@') || !trimmed.contains('.') {
        return Some("Email must be a valid address (contain '@' and '.')".to_string());
    }
    None
}

/// Validate a password: 8-40 chars.
pub fn validate_password(password: &str) -> Option<String> {
    if password.is_empty() {
        return Some("Password is required".to_string());
    }
    if password.len() < 8 {
        return Some("Password must be at least 8 characters".to_string());
    }
    if password.len() > 40 {
        return Some("Password must be at most 40 characters".to_string());
    }
    None
}

/// Validate a required text field with a max length.
/// Whitespace-only counts as missing; the length is that of the stored value.
pub fn validate_required(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    if value.trim().is_empty() {
        return Some(format!("{field_name} is required"));
    }
    if value.chars().count() > max_len {
        return Some(format!("{field_name} must be at most {max_len} characters"));
    }
    None
}

/// Validate an optional text field with a max length (empty is OK).
pub fn validate_optional(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    if value.chars().count() > max_len {
        return Some(format!("{field_name} must be at most {max_len} characters"));
    }
    None
}

/// Collect every problem with a create payload. Empty means valid.
pub fn validate_meeting_create(body: &MeetingCreate) -> Vec<String> {
    let mut errors = Vec::new();
    errors.extend(validate_required(&body.title, "Title", TEXT_MAX_LEN));
    errors.extend(validate_required(&body.agenda, "Agenda", TEXT_MAX_LEN));
    errors.extend(validate_optional(&body.summary, "Summary", TEXT_MAX_LEN));
    errors
}

/// Same rules as create, applied only to the fields present.
pub fn validate_meeting_update(body: &MeetingUpdate) -> Vec<String> {
    let mut errors = Vec::new();
    if let Some(title) = &body.title {
        errors.extend(validate_required(title, "Title", TEXT_MAX_LEN));
    }
    if let Some(agenda) = &body.agenda {
        errors.extend(validate_required(agenda, "Agenda", TEXT_MAX_LEN));
    }
    if let Some(summary) = &body.summary {
        errors.extend(validate_optional(summary, "Summary", TEXT_MAX_LEN));
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_rules() {
        assert!(validate_email("").is_some());
        assert!(validate_email("not-an-email").is_some());
        assert!(validate_email("someone@example.com").is_none());
    }

    #[test]
    fn password_rules() {
        assert!(validate_password("short").is_some());
        assert!(validate_password(&"x".repeat(41)).is_some());
        assert!(validate_password("long-enough").is_none());
    }

    #[test]
    fn create_requires_title_and_agenda() {
        let body = MeetingCreate {
            title: "  ".to_string(),
            agenda: String::new(),
            summary: String::new(),
        };
        let errors = validate_meeting_create(&body);
        assert_eq!(errors, vec!["Title is required", "Agenda is required"]);
    }

    #[test]
    fn create_summary_is_optional_but_bounded() {
        let mut body = MeetingCreate {
            title: "Standup".to_string(),
            agenda: "Blockers".to_string(),
            summary: String::new(),
        };
        assert!(validate_meeting_create(&body).is_empty());

        body.summary = "s".repeat(TEXT_MAX_LEN + 1);
        assert_eq!(validate_meeting_create(&body).len(), 1);
    }

    #[test]
    fn update_only_checks_present_fields() {
        assert!(validate_meeting_update(&MeetingUpdate::default()).is_empty());

        let body = MeetingUpdate {
            title: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(validate_meeting_update(&body), vec!["Title is required"]);
    }

    #[test]
    fn title_and_agenda_length_boundary() {
        let at_limit = "a".repeat(TEXT_MAX_LEN);
        let body = MeetingCreate {
            title: at_limit.clone(),
            agenda: at_limit.clone(),
            summary: at_limit.clone(),
        };
        assert!(validate_meeting_create(&body).is_empty());

        let over = "a".repeat(TEXT_MAX_LEN + 1);
        let body = MeetingCreate {
            title: over.clone(),
            agenda: over,
            summary: String::new(),
        };
        assert_eq!(
            validate_meeting_create(&body),
            vec![
                "Title must be at most 255 characters",
                "Agenda must be at most 255 characters",
            ]
        );
    }

    #[test]
    fn trailing_whitespace_counts_toward_length() {
        let padded = format!("{}   ", "a".repeat(TEXT_MAX_LEN));
        let body = MeetingCreate {
            title: padded.clone(),
            agenda: padded.clone(),
            summary: padded.clone(),
        };
        assert_eq!(validate_meeting_create(&body).len(), 3);

        let body = MeetingUpdate {
            title: Some(padded.clone()),
            agenda: Some(padded),
            ..Default::default()
        };
        assert_eq!(
            validate_meeting_update(&body),
            vec![
                "Title must be at most 255 characters",
                "Agenda must be at most 255 characters",
            ]
        );
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        assert!(validate_required(&"é".repeat(TEXT_MAX_LEN), "Title", TEXT_MAX_LEN).is_none());
    }
}
