//! Record validation.

use crate::error::{StoreError, StoreResult};
use recstore_codec::Attributes;

/// Checks that `identifier` can address a record in any destination.
///
/// Identifiers become file names, object keys, or URL path segments
/// depending on the destination, so the rules here are the strictest
/// of those: non-empty, no path separators or NUL, and not a relative
/// directory reference. The check runs before an identifier is ever
/// handed to a destination.
pub fn validate_identifier(identifier: &str) -> StoreResult<()> {
    if identifier.is_empty() {
        return Err(StoreError::invalid_record("identifier must not be empty"));
    }
    if identifier == "." || identifier == ".." {
        return Err(StoreError::invalid_record(format!(
            "identifier must not be a directory reference: {identifier:?}"
        )));
    }
    if identifier.contains(['/', '\\', '\0']) {
        return Err(StoreError::invalid_record(format!(
            "identifier must not contain path separators or NUL: {identifier:?}"
        )));
    }
    Ok(())
}

/// Checks that `attributes` is a storable attribute mapping.
///
/// The scalar kinds and key types are enforced statically; what
/// remains is that a record must carry at least one attribute.
pub fn validate_attributes(attributes: &Attributes) -> StoreResult<()> {
    if attributes.is_empty() {
        return Err(StoreError::invalid_record(
            "record must have at least one attribute",
        ));
    }
    Ok(())
}

/// Validates a full record: identifier first, then attributes.
pub fn validate_record(identifier: &str, attributes: &Attributes) -> StoreResult<()> {
    validate_identifier(identifier)?;
    validate_attributes(attributes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use recstore_codec::Scalar;

    #[test]
    fn accepts_ordinary_identifiers() {
        validate_identifier("a1").unwrap();
        validate_identifier("user-42_final.json").unwrap();
        validate_identifier("...").unwrap();
    }

    #[test]
    fn rejects_empty_identifier() {
        assert!(matches!(
            validate_identifier(""),
            Err(StoreError::InvalidRecord { .. })
        ));
    }

    #[test]
    fn rejects_directory_references() {
        assert!(validate_identifier(".").is_err());
        assert!(validate_identifier("..").is_err());
    }

    #[test]
    fn rejects_path_separators_and_nul() {
        assert!(validate_identifier("a/b").is_err());
        assert!(validate_identifier("a\\b").is_err());
        assert!(validate_identifier("../escape").is_err());
        assert!(validate_identifier("a\0b").is_err());
    }

    #[test]
    fn rejects_empty_attributes() {
        let empty = Attributes::new();
        assert!(matches!(
            validate_attributes(&empty),
            Err(StoreError::InvalidRecord { .. })
        ));
    }

    #[test]
    fn accepts_all_scalar_kinds() {
        let mut attrs = Attributes::new();
        attrs.insert("s".to_string(), Scalar::from("text"));
        attrs.insert("i".to_string(), Scalar::from(1i64));
        attrs.insert("f".to_string(), Scalar::from(1.5f64));
        attrs.insert("b".to_string(), Scalar::from(false));
        validate_record("a1", &attrs).unwrap();
    }
}
