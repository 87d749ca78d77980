use validator::ValidationErrors;

/// Pick the message of the first failing field, checking fields in `order`.
///
/// `ValidationErrors` keeps fields in a hash map, so callers that report a single
/// message need an explicit priority to stay deterministic.
pub fn first_error_message(errors: &ValidationErrors, order: &[&str]) -> String {
    let field_errors = errors.field_errors();

    order
        .iter()
        .filter_map(|field| field_errors.get(*field))
        .chain(field_errors.values())
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "first is required"))]
        first: String,
        #[validate(length(min = 1, message = "second is required"))]
        second: String,
    }

    #[test]
    fn test_first_error_message_respects_order() {
        let sample = Sample {
            first: String::new(),
            second: String::new(),
        };
        let errors = sample.validate().unwrap_err();

        assert_eq!(
            first_error_message(&errors, &["first", "second"]),
            "first is required"
        );
        assert_eq!(
            first_error_message(&errors, &["second", "first"]),
            "second is required"
        );
    }

    #[test]
    fn test_first_error_message_falls_back_to_any_field() {
        let sample = Sample {
            first: "ok".to_string(),
            second: String::new(),
        };
        let errors = sample.validate().unwrap_err();

        assert_eq!(first_error_message(&errors, &[]), "second is required");
    }
}
