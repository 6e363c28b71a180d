use crate::date::{compose_local, is_valid_date, is_valid_time};
use crate::reminder::ReminderMethod;
use std::collections::BTreeMap;

/// Mapping from wire-level field name to a human readable description of
/// what is wrong with it. All problems with a submission are reported
/// together rather than one at a time.
pub type FieldErrors = BTreeMap<String, String>;

/// A create submission as it arrives over the wire, before any validation.
/// Every field is optional here so that missing fields end up as entries in
/// the `FieldErrors` mapping instead of failing deserialization.
#[derive(Debug, Clone, Default)]
pub struct CreateReminderFields {
    pub date: Option<String>,
    pub time: Option<String>,
    pub message: Option<String>,
    pub reminder_method: Option<String>,
    pub contact_info: Option<String>,
}

/// A fully validated create submission with the scheduled instant composed
#[derive(Debug, Clone, PartialEq)]
pub struct NewReminder {
    pub remind_at: i64,
    pub message: String,
    pub method: ReminderMethod,
    pub contact_info: String,
}

/// Checks a create submission and either returns the validated payload or
/// the full set of field problems. `now` is the instant the scheduled time
/// must be strictly later than.
pub fn validate_create(
    fields: &CreateReminderFields,
    now: i64,
) -> Result<NewReminder, FieldErrors> {
    let mut errors = FieldErrors::new();

    let message = match &fields.message {
        Some(message) if !message.trim().is_empty() => Some(message.trim().to_string()),
        _ => {
            errors.insert("message".into(), "Message is required".into());
            None
        }
    };

    let method = match &fields.reminder_method {
        Some(method) => match method.parse::<ReminderMethod>() {
            Ok(method) => Some(method),
            Err(_) => {
                errors.insert(
                    "reminderMethod".into(),
                    "Invalid reminder method. Supported methods are SMS and Email.".into(),
                );
                None
            }
        },
        None => {
            errors.insert("reminderMethod".into(), "Reminder method is required".into());
            None
        }
    };

    let contact_info = match &fields.contact_info {
        Some(contact_info) if !contact_info.trim().is_empty() => {
            Some(contact_info.trim().to_string())
        }
        _ => {
            errors.insert(
                "contactInfo".into(),
                "Contact information is required".into(),
            );
            None
        }
    };

    // Format checks only run for a known method, unknown methods are already
    // rejected above.
    if let (Some(method), Some(contact_info)) = (method, &contact_info) {
        let contact_error = match method {
            ReminderMethod::Email if !is_valid_email(contact_info) => {
                Some("Please enter a valid email address")
            }
            ReminderMethod::Sms if !is_valid_phone(contact_info) => {
                Some("Please enter a valid phone number")
            }
            _ => None,
        };
        if let Some(contact_error) = contact_error {
            errors.insert("contactInfo".into(), contact_error.into());
        }
    }

    let date = match &fields.date {
        Some(date) => match is_valid_date(date) {
            Ok(date) => Some(date),
            Err(_) => {
                errors.insert("date".into(), "Date must be on the format YYYY-MM-DD".into());
                None
            }
        },
        None => {
            errors.insert("date".into(), "Date is required".into());
            None
        }
    };

    let time = match &fields.time {
        Some(time) => match is_valid_time(time) {
            Ok(time) => Some(time),
            Err(_) => {
                errors.insert("time".into(), "Time must be on the format HH:MM".into());
                None
            }
        },
        None => {
            errors.insert("time".into(), "Time is required".into());
            None
        }
    };

    let remind_at = match (date, time) {
        (Some(date), Some(time)) => {
            let remind_at = compose_local(date, time);
            if remind_at <= now {
                errors.insert("date".into(), "Reminder date must be in the future".into());
                None
            } else {
                Some(remind_at)
            }
        }
        _ => None,
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewReminder {
        remind_at: remind_at.unwrap(),
        message: message.unwrap(),
        method: method.unwrap(),
        contact_info: contact_info.unwrap(),
    })
}

/// Shape check only ("text@text.text"), not an RFC 5322 validation. Exotic
/// but valid addresses may be rejected.
pub fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let parts = email.split('@').collect::<Vec<_>>();
    if parts.len() != 2 {
        return false;
    }
    let (local, domain) = (parts[0], parts[1]);
    if local.is_empty() {
        return false;
    }
    match domain.rfind('.') {
        Some(pos) => pos > 0 && pos + 1 < domain.len(),
        None => false,
    }
}

/// International phone shape: an optional leading "+" followed by 2 to 15
/// digits where the first digit is 1-9
pub fn is_valid_phone(phone: &str) -> bool {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    if digits.len() < 2 || digits.len() > 15 {
        return false;
    }
    let mut chars = digits.chars();
    match chars.next() {
        Some(first) if ('1'..='9').contains(&first) => chars.all(|c| c.is_ascii_digit()),
        _ => false,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::Utc;

    fn valid_fields() -> CreateReminderFields {
        CreateReminderFields {
            date: Some("2099-01-01".into()),
            time: Some("09:30".into()),
            message: Some("Pay rent".into()),
            reminder_method: Some("SMS".into()),
            contact_info: Some("+15551234567".into()),
        }
    }

    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    #[test]
    fn it_accepts_a_valid_submission() {
        let new_reminder = validate_create(&valid_fields(), now()).unwrap();

        assert!(new_reminder.remind_at > now());
        assert_eq!(new_reminder.method, ReminderMethod::Sms);
        assert_eq!(new_reminder.message, "Pay rent");
        assert_eq!(new_reminder.contact_info, "+15551234567");
    }

    #[test]
    fn it_trims_message_and_contact_info() {
        let mut fields = valid_fields();
        fields.message = Some("  Pay rent \n".into());
        fields.contact_info = Some(" +15551234567 ".into());

        let new_reminder = validate_create(&fields, now()).unwrap();

        assert_eq!(new_reminder.message, "Pay rent");
        assert_eq!(new_reminder.contact_info, "+15551234567");
    }

    #[test]
    fn it_requires_every_field() {
        let errors = validate_create(&CreateReminderFields::default(), now()).unwrap_err();

        assert_eq!(errors.len(), 5);
        for field in &["date", "time", "message", "reminderMethod", "contactInfo"] {
            assert!(errors.contains_key(*field));
        }
    }

    #[test]
    fn it_collects_multiple_errors_together() {
        let mut fields = valid_fields();
        fields.message = Some("   ".into());
        fields.reminder_method = Some("Email".into());
        fields.contact_info = Some("not-an-email".into());

        let errors = validate_create(&fields, now()).unwrap_err();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("message").unwrap(), "Message is required");
        assert_eq!(
            errors.get("contactInfo").unwrap(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn it_rejects_unknown_methods_before_contact_format() {
        let mut fields = valid_fields();
        fields.reminder_method = Some("Pigeon".into());
        fields.contact_info = Some("anything at all".into());

        let errors = validate_create(&fields, now()).unwrap_err();

        assert!(errors.contains_key("reminderMethod"));
        assert!(!errors.contains_key("contactInfo"));
    }

    #[test]
    fn it_rejects_past_instants() {
        let mut fields = valid_fields();
        fields.date = Some("2000-01-01".into());

        let errors = validate_create(&fields, now()).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("date").unwrap(),
            "Reminder date must be in the future"
        );
    }

    #[test]
    fn it_rejects_malformed_dates_and_times() {
        let mut fields = valid_fields();
        fields.date = Some("01/02/2099".into());
        fields.time = Some("9.30".into());

        let errors = validate_create(&fields, now()).unwrap_err();

        assert_eq!(errors.len(), 2);
        assert!(errors.contains_key("date"));
        assert!(errors.contains_key("time"));
    }

    #[test]
    fn it_validates_email_shapes() {
        let valid_emails = vec!["a@b.com", "first.last@sub.domain.org", "x+tag@mail.co"];
        for email in &valid_emails {
            assert!(is_valid_email(email), "expected {} to be valid", email);
        }

        let invalid_emails = vec![
            "plainaddress",
            "a@b",
            "@b.com",
            "a@.com",
            "a@b.",
            "a b@c.com",
            "a@b@c.com",
        ];
        for email in &invalid_emails {
            assert!(!is_valid_email(email), "expected {} to be invalid", email);
        }
    }

    #[test]
    fn it_validates_phone_shapes() {
        let valid_phones = vec!["+15551234567", "4797596106", "98", "+442071838750"];
        for phone in &valid_phones {
            assert!(is_valid_phone(phone), "expected {} to be valid", phone);
        }

        let invalid_phones = vec![
            "+0123456789",
            "0123456789",
            "1",
            "+1",
            "555-123-4567",
            "phone",
            "+15551234567x",
            "1234567890123456",
        ];
        for phone in &invalid_phones {
            assert!(!is_valid_phone(phone), "expected {} to be invalid", phone);
        }
    }
}
