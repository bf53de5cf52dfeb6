//! Name and dimension validation
//!
//! ## Rules
//!
//! Names are trimmed of surrounding whitespace before checking.
//!
//! | Name | First character | Remaining characters |
//! |------|-----------------|----------------------|
//! | collection name | `_` or ASCII letter | ASCII alphanumeric, `_`, `$` |
//! | field name | `_` or ASCII letter | ASCII alphanumeric, `_` |
//! | partition tag (strict) | `_` or ASCII alphanumeric | ASCII alphanumeric, `_`, `$` |
//!
//! A non-strict partition tag check only enforces the emptiness and length
//! bounds, since lookups may pass a pattern rather than a literal tag.

use crate::error::{NameKind, Result, ValidationError};
use crate::field::FieldMeta;
use crate::limits::Limits;

/// Validate a collection name
pub fn validate_collection_name(name: &str, limits: &Limits) -> Result<()> {
    validate_name(
        NameKind::Collection,
        name,
        limits,
        |c| c == '_' || c.is_ascii_alphabetic(),
        |c| c == '_' || c == '$' || c.is_ascii_alphanumeric(),
    )
}

/// Validate a schema field name
pub fn validate_field_name(name: &str, limits: &Limits) -> Result<()> {
    validate_name(
        NameKind::Field,
        name,
        limits,
        |c| c == '_' || c.is_ascii_alphabetic(),
        |c| c == '_' || c.is_ascii_alphanumeric(),
    )
}

/// Validate a partition tag
pub fn validate_partition_tag(tag: &str, strict: bool, limits: &Limits) -> Result<()> {
    if strict {
        return validate_name(
            NameKind::PartitionTag,
            tag,
            limits,
            |c| c == '_' || c.is_ascii_alphanumeric(),
            |c| c == '_' || c == '$' || c.is_ascii_alphanumeric(),
        );
    }
    check_length(NameKind::PartitionTag, tag.trim(), limits).map(|_| ())
}

/// Validate the dimension of a vector field
///
/// Scalar fields are accepted unconditionally.
pub fn validate_dimension(field: &FieldMeta, limits: &Limits) -> Result<()> {
    if !field.data_type.is_vector() {
        return Ok(());
    }
    let dimension = field.dimension;
    if dimension <= 0 || dimension > limits.max_dimension {
        return Err(ValidationError::InvalidDimension {
            field: field.field_name.clone(),
            dimension,
            max: limits.max_dimension,
        });
    }
    if field.data_type.is_binary_vector() && dimension % 8 != 0 {
        return Err(ValidationError::UnalignedBinaryDimension {
            field: field.field_name.clone(),
            dimension,
        });
    }
    Ok(())
}

fn check_length<'a>(kind: NameKind, trimmed: &'a str, limits: &Limits) -> Result<&'a str> {
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName { kind });
    }
    if trimmed.len() > limits.max_name_length {
        return Err(ValidationError::NameTooLong {
            kind,
            name: trimmed.to_string(),
            length: trimmed.len(),
            max: limits.max_name_length,
        });
    }
    Ok(trimmed)
}

fn validate_name(
    kind: NameKind,
    name: &str,
    limits: &Limits,
    valid_start: impl Fn(char) -> bool,
    valid_rest: impl Fn(char) -> bool,
) -> Result<()> {
    let trimmed = check_length(kind, name.trim(), limits)?;

    let mut chars = trimmed.chars().enumerate();
    if let Some((_, first)) = chars.next() {
        if !valid_start(first) {
            return Err(ValidationError::InvalidStart {
                kind,
                name: trimmed.to_string(),
                char: first,
            });
        }
    }
    for (position, c) in chars {
        if !valid_rest(c) {
            return Err(ValidationError::InvalidChar {
                kind,
                name: trimmed.to_string(),
                char: c,
                position,
            });
        }
    }
    Ok(())
}
