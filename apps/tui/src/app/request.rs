// Access-request composition: validation and the structured, localized
// subject/body a submission turns into.

use thiserror::Error;

use crate::locale::Strings;

/// Flat snapshot of the form fields at submission time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestForm {
    pub name: String,
    pub org: String,
    pub email: String,
    pub purpose: String,
    pub agree: bool,
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("no dataset selected")]
    EmptySelection,

    #[error("data use terms not acknowledged")]
    AgreementMissing,
}

impl RequestError {
    /// The corrective, localized message shown to the user.
    pub const fn notice(self, strings: &'static Strings) -> &'static str {
        match self {
            Self::EmptySelection => strings.msg_select_dataset,
            Self::AgreementMissing => strings.msg_confirm_terms,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailMessage {
    pub subject: String,
    pub body: String,
}

/// Validates in order (selection first, then agreement) and composes the
/// message. The attestation line is fixed; nothing the user types reaches it.
pub fn compose(
    form: &RequestForm,
    selected_slugs: &[String],
    strings: &Strings,
) -> Result<MailMessage, RequestError> {
    if selected_slugs.is_empty() {
        return Err(RequestError::EmptySelection);
    }
    if !form.agree {
        return Err(RequestError::AgreementMissing);
    }

    let slugs = selected_slugs.join(", ");
    let submitter = if form.name.trim().is_empty() {
        strings.unnamed
    } else {
        form.name.as_str()
    };
    let subject = format!("{} {} - {}", strings.subject_tag, submitter, slugs);

    let sep = strings.field_sep;
    let body = [
        format!("{}{sep}{}", strings.label_name, form.name),
        format!("{}{sep}{}", strings.label_org, form.org),
        format!("{}{sep}{}", strings.label_email, form.email),
        format!("{}{sep}{}", strings.label_datasets, slugs),
        String::new(),
        strings.label_purpose.to_string(),
        form.purpose.clone(),
        String::new(),
        strings.attestation.to_string(),
    ]
    .join("\n");

    Ok(MailMessage { subject, body })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Lang;
    use crate::locale::strings;
    use crate::mailer;

    fn form() -> RequestForm {
        RequestForm {
            name: "A. Lee".to_string(),
            org: "Dept X".to_string(),
            email: "a@x.edu".to_string(),
            purpose: "Study Y".to_string(),
            agree: true,
        }
    }

    fn slugs(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn empty_selection_aborts_before_anything_else() {
        let mut unsigned = form();
        unsigned.agree = false;
        // Selection is validated first even when agreement is also missing.
        assert_eq!(
            compose(&unsigned, &[], strings(Lang::En)),
            Err(RequestError::EmptySelection)
        );
    }

    #[test]
    fn missing_agreement_aborts_with_its_own_notice() {
        let mut unsigned = form();
        unsigned.agree = false;
        let error = compose(&unsigned, &slugs(&["ds1"]), strings(Lang::En)).unwrap_err();
        assert_eq!(error, RequestError::AgreementMissing);
        assert_eq!(
            error.notice(strings(Lang::En)),
            "Please confirm that you agree to the data use terms."
        );
    }

    #[test]
    fn subject_is_tag_name_and_joined_slugs() {
        let message = compose(&form(), &slugs(&["ds1", "ds2"]), strings(Lang::En)).unwrap();
        assert_eq!(message.subject, "[Data Request] A. Lee - ds1, ds2");
    }

    #[test]
    fn blank_name_falls_back_to_the_placeholder() {
        let mut anonymous = form();
        anonymous.name = "  ".to_string();
        let message = compose(&anonymous, &slugs(&["ds1"]), strings(Lang::En)).unwrap();
        assert_eq!(message.subject, "[Data Request] Unnamed - ds1");
    }

    #[test]
    fn body_has_the_fixed_field_order_and_attestation() {
        let message = compose(&form(), &slugs(&["ds1", "ds2"]), strings(Lang::En)).unwrap();
        let lines: Vec<&str> = message.body.lines().collect();
        assert_eq!(lines[0], "Name: A. Lee");
        assert_eq!(lines[1], "Affiliation / Department: Dept X");
        assert_eq!(lines[2], "Email: a@x.edu");
        assert_eq!(lines[3], "Requested datasets: ds1, ds2");
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "Purpose of use:");
        assert_eq!(lines[6], "Study Y");
        assert_eq!(lines[7], "");
        assert_eq!(
            lines[8],
            "I confirm the data will only be used for research, will not be \
             redistributed, and all outputs will acknowledge the source."
        );
    }

    #[test]
    fn composed_message_survives_uri_encoding() {
        let message = compose(&form(), &slugs(&["ds1", "ds2"]), strings(Lang::En)).unwrap();
        let uri = mailer::mailto_uri("a@x.edu", &message.subject, &message.body);

        assert!(uri.starts_with("mailto:a%40x.edu?subject="));
        assert!(uri.contains("subject=%5BData%20Request%5D%20A.%20Lee%20-%20ds1%2C%20ds2"));
        assert!(uri.contains("Name%3A%20A.%20Lee%0A"));
        assert!(uri.contains("Requested%20datasets%3A%20ds1%2C%20ds2"));
    }

    #[test]
    fn chinese_strings_compose_with_fullwidth_separators() {
        let message = compose(&form(), &slugs(&["ds1"]), strings(Lang::Zh)).unwrap();
        assert_eq!(message.subject, "[数据申请] A. Lee - ds1");
        assert!(message.body.starts_with("姓名：A. Lee\n"));
        assert!(message.body.ends_with("我承诺仅用于科研目的，不再分发数据，并在成果中致谢与引用来源。"));
    }
}
