//! Post-parse validation of the manifest.

use std::collections::HashSet;

use mirrorgen_ir::DeclarationKind;

use super::Manifest;
use crate::{Result, error::SourceContext};

/// Validate the manifest after deserialization.
///
/// All checks here are structural: identifier shape, duplicate targets, and
/// grouping rules. Whether the referenced files and declarations actually
/// exist is checked at run time, per group.
pub fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    if manifest.entries.is_empty() {
        return Err(ctx.validation_error("manifest defines no [[entry]] tables", None));
    }

    let mut seen_targets = HashSet::new();
    for entry in &manifest.entries {
        validate_identifier(ctx, &entry.source_name, "source_name")?;
        validate_identifier(ctx, &entry.target_name, "target_name")?;
        for name in entry.rename_fields.values() {
            validate_identifier(ctx, name, "rename target")?;
        }
        for name in entry.extend_fields.keys() {
            validate_identifier(ctx, name, "extend field name")?;
        }

        if !seen_targets.insert((entry.target_file.as_str(), entry.target_name.as_str())) {
            return Err(ctx.validation_error(
                format!(
                    "duplicate target '{}' in '{}'",
                    entry.target_name, entry.target_file
                ),
                Some(&entry.target_name),
            ));
        }

        for omitted in &entry.omit_fields {
            if entry.rename_fields.contains_key(omitted) {
                return Err(ctx.validation_error(
                    format!("field '{omitted}' is both omitted and renamed"),
                    Some(omitted),
                ));
            }
        }

        if entry.replace_enums_with_strings && manifest.enums.is_empty() {
            return Err(ctx.validation_error(
                "replace_enums_with_strings requires a non-empty [enums] table",
                Some("replace_enums_with_strings"),
            ));
        }
    }

    // Interface entries own their output file: each one is emitted as an
    // independent single-declaration group, so a shared target file would be
    // two groups racing on one write.
    for entry in &manifest.entries {
        if entry.kind == DeclarationKind::Interface
            && manifest.entries_for_target(&entry.target_file).len() > 1
        {
            return Err(ctx.validation_error(
                format!(
                    "interface entry '{}' shares target file '{}' with another entry",
                    entry.source_name, entry.target_file
                ),
                Some(&entry.target_file),
            ));
        }
    }

    for union in &manifest.manual_unions {
        if !manifest
            .entries
            .iter()
            .any(|e| e.target_file == union.target_file)
        {
            return Err(ctx.validation_error(
                format!(
                    "manual union targets '{}', which no entry generates",
                    union.target_file
                ),
                Some(&union.target_file),
            ));
        }
    }

    Ok(())
}

fn validate_identifier(ctx: &SourceContext, name: &str, context: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ctx.invalid_identifier_error(name, context, "name is empty"));
    }
    if name.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return Err(ctx.invalid_identifier_error(name, context, "name starts with a digit"));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(ctx.invalid_identifier_error(
            name,
            context,
            "name contains characters other than letters, numbers, and underscores",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    const MINIMAL: &str = r#"
        [paths]
        source_root = "server/src"
        output_dir = "client/src/gen"

        [[entry]]
        source_file = "customers/schemas.ts"
        source_name = "customer_create_params"
        target_file = "create-customer-params.ts"
        target_name = "createCustomerParams"
    "#;

    #[test]
    fn test_minimal_manifest_parses() {
        let manifest = Manifest::from_str(MINIMAL).unwrap();
        assert_eq!(manifest.entries.len(), 1);
        assert!(manifest.entries[0].convert_case);
        assert_eq!(manifest.entries[0].kind, DeclarationKind::Schema);
    }

    #[test]
    fn test_empty_manifest_rejected() {
        let toml = r#"
            [paths]
            source_root = "a"
            output_dir = "b"
        "#;
        let err = Manifest::from_str(toml).unwrap_err();
        assert!(err.to_string().contains("no [[entry]]"));
    }

    #[test]
    fn test_duplicate_target_rejected() {
        let toml = format!(
            "{MINIMAL}
            [[entry]]
            source_file = \"customers/schemas.ts\"
            source_name = \"customer_update_params\"
            target_file = \"create-customer-params.ts\"
            target_name = \"createCustomerParams\"
        "
        );
        let err = Manifest::from_str(&toml).unwrap_err();
        assert!(err.to_string().contains("duplicate target"));
    }

    #[test]
    fn test_omit_and_rename_conflict_rejected() {
        let toml = r#"
            [paths]
            source_root = "a"
            output_dir = "b"

            [[entry]]
            source_file = "s.ts"
            source_name = "params"
            target_file = "t.ts"
            target_name = "params"
            omit_fields = ["id"]

            [entry.rename_fields]
            id = "identifier"
        "#;
        let err = Manifest::from_str(toml).unwrap_err();
        assert!(err.to_string().contains("both omitted and renamed"));
    }

    #[test]
    fn test_enum_substitution_requires_table() {
        let toml = r#"
            [paths]
            source_root = "a"
            output_dir = "b"

            [[entry]]
            source_file = "s.ts"
            source_name = "params"
            target_file = "t.ts"
            target_name = "params"
            replace_enums_with_strings = true
        "#;
        let err = Manifest::from_str(toml).unwrap_err();
        assert!(err.to_string().contains("[enums]"));
    }

    #[test]
    fn test_interface_entry_must_own_target_file() {
        let toml = r#"
            [paths]
            source_root = "a"
            output_dir = "b"

            [[entry]]
            source_file = "s.ts"
            source_name = "CustomerCreateParams"
            target_file = "shared.ts"
            target_name = "CreateCustomerParams"
            kind = "interface"

            [[entry]]
            source_file = "s.ts"
            source_name = "other_params"
            target_file = "shared.ts"
            target_name = "otherParams"
        "#;
        let err = Manifest::from_str(toml).unwrap_err();
        assert!(err.to_string().contains("shares target file"));
    }

    #[test]
    fn test_invalid_identifier_rejected() {
        let toml = r#"
            [paths]
            source_root = "a"
            output_dir = "b"

            [[entry]]
            source_file = "s.ts"
            source_name = "1bad"
            target_file = "t.ts"
            target_name = "ok"
        "#;
        let err = Manifest::from_str(toml).unwrap_err();
        assert!(err.to_string().contains("invalid source_name"));
    }

    #[test]
    fn test_manual_union_must_target_generated_file() {
        let toml = format!(
            "{MINIMAL}
            [[manual_union]]
            target_file = \"nowhere.ts\"
            code = \"export type X = 1;\"
        "
        );
        let err = Manifest::from_str(&toml).unwrap_err();
        assert!(err.to_string().contains("no entry generates"));
    }

    #[test]
    fn test_transform_spec_resolves_enums() {
        let toml = r#"
            [paths]
            source_root = "a"
            output_dir = "b"

            [enums]
            Currency = ["usd", "eur"]

            [[entry]]
            source_file = "s.ts"
            source_name = "params"
            target_file = "t.ts"
            target_name = "params"
            replace_enums_with_strings = true
        "#;
        let manifest = Manifest::from_str(toml).unwrap();
        let spec = manifest.entries[0].transform_spec(&manifest.enums);
        assert_eq!(spec.enum_substitutions["Currency"], vec!["usd", "eur"]);
    }
}
