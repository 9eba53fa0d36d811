//! EnrollmentForm - Fields of the Enrollment Dialog

/// User-entered enrollment fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrollmentForm {
    pub student_name: String,
    pub student_email: String,
    /// Optional; sent as an empty string when blank
    pub phone: String,
}

impl EnrollmentForm {
    /// Reset every field to empty
    pub fn clear(&mut self) {
        self.student_name.clear();
        self.student_email.clear();
        self.phone.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.student_name.is_empty() && self.student_email.is_empty() && self.phone.is_empty()
    }

    /// Name and email are both non-blank after trimming
    pub fn has_required_fields(&self) -> bool {
        !self.student_name.trim().is_empty() && !self.student_email.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields_trimmed() {
        let mut form = EnrollmentForm {
            student_name: "   ".to_string(),
            student_email: "a@b.c".to_string(),
            phone: String::new(),
        };
        assert!(!form.has_required_fields());

        form.student_name = " Anna ".to_string();
        assert!(form.has_required_fields());

        form.student_email = "\t".to_string();
        assert!(!form.has_required_fields());
    }

    #[test]
    fn test_phone_optional() {
        let form = EnrollmentForm {
            student_name: "Anna".to_string(),
            student_email: "anna@example.com".to_string(),
            phone: String::new(),
        };
        assert!(form.has_required_fields());
    }
}
