use validator::{ValidationError, ValidationErrors};

use crate::domain::school::FIELD_ORDER;

/// Message of the first failed rule, visiting fields in [`FIELD_ORDER`] so a
/// struct reports the same field the request boundary would have.
pub(super) fn first_failure_message(errors: &ValidationErrors) -> Option<String> {
    let field_errors = errors.field_errors();
    let mut fields = field_errors
        .iter()
        .map(|(field, errors)| {
            let field: &str = field;
            (field, *errors)
        })
        .collect::<Vec<(&str, &Vec<ValidationError>)>>();
    fields.sort_by_key(|(field, _)| (field_rank(field), *field));

    fields.into_iter().find_map(|(field, errors)| {
        errors.first().map(|error| {
            error
                .message
                .as_ref()
                .map(|message| message.to_string())
                .unwrap_or_else(|| format!("{field} is invalid"))
        })
    })
}

fn field_rank(field: &str) -> usize {
    FIELD_ORDER
        .iter()
        .position(|known| *known == field)
        .unwrap_or(FIELD_ORDER.len())
}
