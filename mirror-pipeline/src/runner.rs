//! The pipeline runner.

use std::{
    path::Path,
    sync::Arc,
    time::Instant,
};

use indexmap::IndexMap;
use mirrorgen_core::write_file;
use mirrorgen_emit::{render_index, render_interface, render_module, render_schema};
use mirrorgen_ir::{DeclarationKind, SourceDeclaration, TransformSpec};
use mirrorgen_manifest::Manifest;
use mirrorgen_parse::{ParseCache, locate_interface, locate_schema, segment_fields};
use mirrorgen_transform::{apply_transform, emission_order};
use tokio::task::JoinSet;

use crate::{
    Error, GroupError, Result, RunReport, TargetFailure, TargetGroup, TargetSuccess, build_groups,
};

/// Run the full generation pipeline for a manifest.
///
/// All target groups are processed concurrently with settle-all semantics:
/// per-group errors become failure records in the returned report, and a
/// failed group never blocks or cancels its siblings. The parse cache lives
/// for exactly this call.
///
/// # Errors
///
/// Returns an error only for orchestration-level problems: a configured root
/// that does not exist, or a failure writing the index module.
pub async fn run(manifest: &Manifest) -> Result<RunReport> {
    let started = Instant::now();

    for root in [&manifest.paths.source_root, &manifest.paths.output_dir] {
        if !root.exists() {
            return Err(Error::MissingRoot { path: root.clone() });
        }
    }

    let cache = Arc::new(ParseCache::new());
    let mut tasks = JoinSet::new();

    for group in build_groups(manifest) {
        let cache = Arc::clone(&cache);
        let source_root = manifest.paths.source_root.clone();
        let output_dir = manifest.paths.output_dir.clone();
        let enums = manifest.enums.clone();
        let unions: Vec<String> = manifest
            .manual_unions
            .iter()
            .filter(|u| u.target_file == group.target_file)
            .map(|u| u.code.clone())
            .collect();

        tasks.spawn(async move {
            let target_file = group.target_file.clone();
            let outcome = process_group(&group, &source_root, &output_dir, &enums, &unions, &cache);
            (target_file, outcome)
        });
    }

    let mut report = RunReport::default();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((target_file, Ok(outcome))) => {
                report.warnings.extend(outcome.warnings);
                report.successes.push(TargetSuccess {
                    target_file,
                    declarations: outcome.declarations,
                });
            }
            Ok((target_file, Err(error))) => {
                report.failures.push(TargetFailure {
                    target_file,
                    message: render_error_chain(&error),
                });
            }
            Err(join_error) => {
                report.failures.push(TargetFailure {
                    target_file: "<unknown>".to_string(),
                    message: format!("generation task failed: {join_error}"),
                });
            }
        }
    }

    // Completion order is nondeterministic; the report is not.
    report.successes.sort_by(|a, b| a.target_file.cmp(&b.target_file));
    report.failures.sort_by(|a, b| a.target_file.cmp(&b.target_file));
    report.warnings.sort();

    let stems: Vec<String> = report
        .successes
        .iter()
        .map(|s| s.target_file.trim_end_matches(".ts").to_string())
        .collect();
    let index_path = manifest.paths.output_dir.join("index.ts");
    write_file(&index_path, &render_index(&stems)).map_err(|source| Error::Index {
        path: index_path.clone(),
        source,
    })?;

    report.elapsed = started.elapsed();
    Ok(report)
}

struct GroupOutcome {
    declarations: Vec<String>,
    warnings: Vec<String>,
}

/// Process one target group end to end: locate and segment every source
/// declaration, transform, order by dependency, render, and write the output
/// file. Any error leaves the target file untouched.
fn process_group(
    group: &TargetGroup,
    source_root: &Path,
    output_dir: &Path,
    enums: &IndexMap<String, Vec<String>>,
    manual_unions: &[String],
    cache: &ParseCache,
) -> std::result::Result<GroupOutcome, GroupError> {
    let mut warnings = Vec::new();
    let mut declarations: Vec<(SourceDeclaration, TransformSpec, String)> = Vec::new();

    for entry in &group.entries {
        let path = source_root.join(&entry.source_file);
        let content = cache.load(&path)?;
        let spec = entry.transform_spec(enums);

        match entry.kind {
            DeclarationKind::Schema => {
                let (decl, duplicates) =
                    locate_schema(&entry.source_file, &content, &entry.source_name)?;
                if duplicates > 0 {
                    warnings.push(duplicate_warning(&entry.source_name, &entry.source_file, duplicates));
                }
                declarations.push((decl, spec, entry.target_name.clone()));
            }
            DeclarationKind::Interface => {
                let (found, duplicates) =
                    locate_interface(&entry.source_file, &content, &entry.source_name)?;
                if duplicates > 0 {
                    warnings.push(duplicate_warning(&entry.source_name, &entry.source_file, duplicates));
                }
                for decl in found {
                    if decl.declared_name == entry.source_name {
                        declarations.push((decl, spec.clone(), entry.target_name.clone()));
                    } else {
                        // Synthetic nested declaration: `{parent}{child}` maps
                        // to `{target}{child}`. Per-field edits apply to the
                        // primary declaration only; nested shapes keep case
                        // conversion and enum substitution.
                        let suffix = decl.declared_name[entry.source_name.len()..].to_string();
                        let mut nested_spec = spec.clone();
                        nested_spec.omit.clear();
                        nested_spec.rename.clear();
                        nested_spec.extend.clear();
                        let target = format!("{}{}", entry.target_name, suffix);
                        declarations.push((decl, nested_spec, target));
                    }
                }
            }
        }
    }

    let siblings: Vec<(String, String)> = declarations
        .iter()
        .map(|(decl, _, target)| (decl.declared_name.clone(), target.clone()))
        .collect();

    let mut rendered: Vec<(String, String)> = Vec::with_capacity(declarations.len());
    for (decl, spec, target_name) in &declarations {
        let fields = segment_fields(&decl.declared_name, &decl.raw_body)?;
        let fields = apply_transform(&decl.declared_name, fields, spec, &siblings)?;
        let code = match decl.kind {
            DeclarationKind::Schema => {
                render_schema(target_name, decl.doc_comment.as_deref(), &fields)
            }
            DeclarationKind::Interface => {
                render_interface(target_name, decl.doc_comment.as_deref(), &fields)
            }
        };
        rendered.push((target_name.clone(), code));
    }

    let order = emission_order(&rendered);
    let ordered: Vec<String> = order.iter().map(|&i| rendered[i].1.clone()).collect();
    let emitted_names: Vec<String> = order.iter().map(|&i| rendered[i].0.clone()).collect();

    let module = render_module(&ordered, manual_unions);
    let target_path = output_dir.join(&group.target_file);
    write_file(&target_path, &module).map_err(|source| GroupError::Write {
        path: target_path,
        source,
    })?;

    Ok(GroupOutcome {
        declarations: emitted_names,
        warnings,
    })
}

fn duplicate_warning(name: &str, file: &str, duplicates: usize) -> String {
    format!(
        "'{name}' is declared {} times in '{file}'; the first declaration was used",
        duplicates + 1
    )
}

fn render_error_chain(error: &GroupError) -> String {
    use std::error::Error as _;
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
