use serde::{Deserialize, Serialize};

/// Seller contact details attached to a listing
///
/// At least one of the three channels must be present and non-blank.
/// The store does not enforce this; writers must check `has_any()`
/// before submitting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ContactDetails {
    /// Build contact details from raw form input, treating blank
    /// (empty or whitespace-only) fields as absent
    pub fn from_fields(phone_no: &str, whatsapp_no: &str, email: &str) -> Self {
        let non_blank = |s: &str| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        };
        Self {
            phone_no: non_blank(phone_no),
            whatsapp_no: non_blank(whatsapp_no),
            email: non_blank(email),
        }
    }

    /// Returns true if at least one contact channel is present
    pub fn has_any(&self) -> bool {
        self.phone_no.is_some() || self.whatsapp_no.is_some() || self.email.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_count_as_absent() {
        let contact = ContactDetails::from_fields("  ", "", "\t");
        assert!(!contact.has_any());
        assert_eq!(contact.phone_no, None);
    }

    #[test]
    fn single_channel_satisfies_presence() {
        let contact = ContactDetails::from_fields("", "", "sam@campus.edu");
        assert!(contact.has_any());
        assert_eq!(contact.email.as_deref(), Some("sam@campus.edu"));
    }

    #[test]
    fn input_is_trimmed() {
        let contact = ContactDetails::from_fields(" 555-0101 ", "", "");
        assert_eq!(contact.phone_no.as_deref(), Some("555-0101"));
    }
}
