//! Conversion between [`Student`] and its stored [`UserRow`] form.
//!
//! The store keeps emails as one delimiter-joined string. Emails must not
//! contain [`EMAIL_DELIMITER`]; this is not validated.

use scholar_core::{College, Student};

use crate::types::UserRow;

/// Separator between emails in the stored representation.
pub const EMAIL_DELIMITER: &str = ",";

/// Joins an email list into its stored form.
pub fn join_emails(emails: &[String]) -> String {
    emails.join(EMAIL_DELIMITER)
}

/// Splits a stored email string back into a list.
///
/// An empty string is an empty list, so records registered without emails
/// read back without emails.
pub fn split_emails(joined: &str) -> Vec<String> {
    if joined.is_empty() {
        return Vec::new();
    }
    joined.split(EMAIL_DELIMITER).map(str::to_string).collect()
}

impl From<&Student> for UserRow {
    fn from(student: &Student) -> Self {
        UserRow {
            id: student.id,
            name: student.name.clone(),
            college_name: student.college.name.clone(),
            college_address: student.college.address.clone(),
            emails: join_emails(&student.emails),
        }
    }
}

impl From<UserRow> for Student {
    fn from(row: UserRow) -> Self {
        Student {
            id: row.id,
            name: row.name,
            college: College {
                name: row.college_name,
                address: row.college_address,
            },
            emails: split_emails(&row.emails),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn joins_with_comma() {
        let emails = vec!["a@x.com".to_string(), "b@x.com".to_string()];
        assert_eq!(join_emails(&emails), "a@x.com,b@x.com");
        assert_eq!(join_emails(&[]), "");
    }

    #[test]
    fn empty_string_splits_to_no_emails() {
        assert!(split_emails("").is_empty());
        assert_eq!(split_emails("only@x.com"), vec!["only@x.com".to_string()]);
    }

    #[test]
    fn row_flattens_college() {
        let student = Student::new(3, "s3")
            .with_college("PKU", "Haidian")
            .with_email("s3@pku.com");
        let row = UserRow::from(&student);
        assert_eq!(row.college_name, "PKU");
        assert_eq!(row.college_address, "Haidian");
        assert_eq!(row.emails, "s3@pku.com");
        assert_eq!(Student::from(row), student);
    }

    proptest! {
        #[test]
        fn email_lists_without_delimiter_survive_storage(
            emails in proptest::collection::vec("[a-z0-9.@]{1,12}", 0..6)
        ) {
            prop_assert_eq!(split_emails(&join_emails(&emails)), emails);
        }
    }
}
