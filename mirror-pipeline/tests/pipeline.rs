//! End-to-end tests of the generation pipeline: manifest in, generated
//! TypeScript modules out.

use std::{fs, path::PathBuf, str::FromStr};

use mirrorgen_manifest::Manifest;
use mirrorgen_pipeline::{Error, run};
use tempfile::TempDir;

struct Project {
    _dir: TempDir,
    source_root: PathBuf,
    output_dir: PathBuf,
}

impl Project {
    fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let source_root = dir.path().join("src");
        let output_dir = dir.path().join("generated");
        fs::create_dir_all(&source_root).expect("Failed to create source root");
        fs::create_dir_all(&output_dir).expect("Failed to create output dir");
        Self {
            _dir: dir,
            source_root,
            output_dir,
        }
    }

    fn write_source(&self, name: &str, content: &str) {
        fs::write(self.source_root.join(name), content).expect("Failed to write source file");
    }

    fn manifest(&self, tail: &str) -> Manifest {
        let toml = format!(
            "[paths]\nsource_root = \"{}\"\noutput_dir = \"{}\"\n\n{tail}",
            self.source_root.display(),
            self.output_dir.display(),
        );
        Manifest::from_str(&toml).expect("Failed to parse manifest")
    }

    fn read_output(&self, name: &str) -> String {
        fs::read_to_string(self.output_dir.join(name)).expect("Failed to read generated file")
    }
}

const CUSTOMER_SOURCE: &str = r#"
import { z } from "zod";

/** Parameters accepted when creating a customer. */
export const customer_create_params = z.object({
  id: z.string(),
  email: z.string().email(),
  name: z.string(),
});
"#;

#[tokio::test]
async fn test_end_to_end_schema_generation() {
    let project = Project::new();
    project.write_source("customers.ts", CUSTOMER_SOURCE);

    let manifest = project.manifest(
        r#"
        [[entry]]
        source_file = "customers.ts"
        source_name = "customer_create_params"
        target_file = "customers.ts"
        target_name = "createCustomerParams"
        omit_fields = ["id"]

        [entry.extend_fields.errorOnNotFound]
        expression = "z.boolean().optional()"
        description = "Skip creation when the customer cannot be found."
        "#,
    );

    let report = run(&manifest).await.unwrap();
    assert!(report.is_clean(), "failures: {:?}", report.failures);
    assert_eq!(report.successes.len(), 1);
    assert_eq!(report.successes[0].declarations, ["createCustomerParams"]);

    let output = project.read_output("customers.ts");
    assert!(output.starts_with("// Generated by mirror."));
    assert!(output.contains("import { z } from \"zod\";"));
    assert!(output.contains("export const createCustomerParams = z.object({"));
    assert!(output.contains("  email: z.string().email(),"));
    assert!(output.contains("  name: z.string(),"));
    assert!(output.contains("/** Skip creation when the customer cannot be found. */"));
    assert!(output.contains("  errorOnNotFound: z.boolean().optional(),"));
    assert!(!output.contains("\n  id:"));
    assert!(output.contains("/** Parameters accepted when creating a customer. */"));

    let index = project.read_output("index.ts");
    assert!(index.contains("export * from \"./customers\";"));
}

#[tokio::test]
async fn test_regeneration_is_byte_identical() {
    let project = Project::new();
    project.write_source("customers.ts", CUSTOMER_SOURCE);

    let manifest = project.manifest(
        r#"
        [[entry]]
        source_file = "customers.ts"
        source_name = "customer_create_params"
        target_file = "customers.ts"
        target_name = "createCustomerParams"
        "#,
    );

    run(&manifest).await.unwrap();
    let first_module = project.read_output("customers.ts");
    let first_index = project.read_output("index.ts");

    run(&manifest).await.unwrap();
    assert_eq!(project.read_output("customers.ts"), first_module);
    assert_eq!(project.read_output("index.ts"), first_index);
}

#[tokio::test]
async fn test_case_conversion_can_be_disabled() {
    let project = Project::new();
    project.write_source(
        "events.ts",
        "export const event_params = z.object({ entity_id: z.string() });",
    );

    let manifest = project.manifest(
        r#"
        [[entry]]
        source_file = "events.ts"
        source_name = "event_params"
        target_file = "converted.ts"
        target_name = "eventParams"

        [[entry]]
        source_file = "events.ts"
        source_name = "event_params"
        target_file = "preserved.ts"
        target_name = "rawEventParams"
        convert_case = false
        "#,
    );

    let report = run(&manifest).await.unwrap();
    assert!(report.is_clean());

    assert!(project.read_output("converted.ts").contains("  entityId: z.string(),"));
    assert!(project.read_output("preserved.ts").contains("  entity_id: z.string(),"));
}

#[tokio::test]
async fn test_dependency_ordering_within_group() {
    let project = Project::new();
    project.write_source(
        "billing.ts",
        r#"
        export const subscription_schema = z.object({
          plan: plan_schema,
          quantity: z.number(),
        });

        export const plan_schema = z.object({ amount: z.number() });
        "#,
    );

    // The dependent declaration comes first in the manifest; emission order
    // must still put its dependency above it.
    let manifest = project.manifest(
        r#"
        [[entry]]
        source_file = "billing.ts"
        source_name = "subscription_schema"
        target_file = "billing.ts"
        target_name = "subscriptionSchema"

        [[entry]]
        source_file = "billing.ts"
        source_name = "plan_schema"
        target_file = "billing.ts"
        target_name = "planSchema"
        "#,
    );

    let report = run(&manifest).await.unwrap();
    assert!(report.is_clean());
    assert_eq!(
        report.successes[0].declarations,
        ["planSchema", "subscriptionSchema"]
    );

    let output = project.read_output("billing.ts");
    let plan = output.find("export const planSchema").unwrap();
    let subscription = output.find("export const subscriptionSchema").unwrap();
    assert!(plan < subscription);
    assert!(output.contains("  plan: planSchema,"));
}

#[tokio::test]
async fn test_cyclic_references_emit_each_declaration_once() {
    let project = Project::new();
    project.write_source(
        "tree.ts",
        r#"
        export const node_schema = z.object({
          children: z.lazy(() => branch_schema).optional(),
        });

        export const branch_schema = z.object({
          nodes: z.array(z.lazy(() => node_schema)),
        });
        "#,
    );

    let manifest = project.manifest(
        r#"
        [[entry]]
        source_file = "tree.ts"
        source_name = "node_schema"
        target_file = "tree.ts"
        target_name = "nodeSchema"

        [[entry]]
        source_file = "tree.ts"
        source_name = "branch_schema"
        target_file = "tree.ts"
        target_name = "branchSchema"
        "#,
    );

    let report = run(&manifest).await.unwrap();
    assert!(report.is_clean());

    let output = project.read_output("tree.ts");
    assert_eq!(output.matches("export const nodeSchema").count(), 1);
    assert_eq!(output.matches("export const branchSchema").count(), 1);
}

#[tokio::test]
async fn test_rename_collision_fails_without_writing() {
    let project = Project::new();
    project.write_source(
        "orders.ts",
        "export const order_params = z.object({ total: z.number(), amount: z.number() });",
    );

    let manifest = project.manifest(
        r#"
        [[entry]]
        source_file = "orders.ts"
        source_name = "order_params"
        target_file = "orders.ts"
        target_name = "orderParams"

        [entry.rename_fields]
        total = "amount"
        "#,
    );

    let report = run(&manifest).await.unwrap();
    assert_eq!(report.successes.len(), 0);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].target_file, "orders.ts");
    assert!(report.failures[0].message.contains("amount"));
    assert!(!project.output_dir.join("orders.ts").exists());
}

#[tokio::test]
async fn test_failure_isolation_across_groups() {
    let project = Project::new();
    project.write_source(
        "customers.ts",
        "export const customer_params = z.object({ email: z.string() });",
    );
    project.write_source(
        "plans.ts",
        "export const plan_params = z.object({ amount: z.number() });",
    );

    let manifest = project.manifest(
        r#"
        [[entry]]
        source_file = "customers.ts"
        source_name = "customer_params"
        target_file = "customers.ts"
        target_name = "customerParams"

        [[entry]]
        source_file = "plans.ts"
        source_name = "no_such_schema"
        target_file = "broken.ts"
        target_name = "brokenParams"

        [[entry]]
        source_file = "plans.ts"
        source_name = "plan_params"
        target_file = "plans.ts"
        target_name = "planParams"
        "#,
    );

    let report = run(&manifest).await.unwrap();
    assert_eq!(report.successes.len(), 2);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].target_file, "broken.ts");
    assert!(report.failures[0].message.contains("no_such_schema"));

    assert!(project.output_dir.join("customers.ts").exists());
    assert!(project.output_dir.join("plans.ts").exists());
    assert!(!project.output_dir.join("broken.ts").exists());

    let index = project.read_output("index.ts");
    assert!(index.contains("export * from \"./customers\";"));
    assert!(index.contains("export * from \"./plans\";"));
    assert!(!index.contains("broken"));
}

#[tokio::test]
async fn test_interface_generation_with_nested_namespace() {
    let project = Project::new();
    project.write_source(
        "params.ts",
        r#"
        /** Create parameters. */
        export interface CustomerCreateParams {
          email: string;
          error_on_not_found?: boolean;
        }

        export namespace CustomerCreateParams {
          export interface Address {
            line1: string;
            city?: string;
          }
        }
        "#,
    );

    let manifest = project.manifest(
        r#"
        [[entry]]
        source_file = "params.ts"
        source_name = "CustomerCreateParams"
        target_file = "params.ts"
        target_name = "CreateCustomerParams"
        kind = "interface"
        "#,
    );

    let report = run(&manifest).await.unwrap();
    assert!(report.is_clean(), "failures: {:?}", report.failures);

    let output = project.read_output("params.ts");
    assert!(output.contains("/** Create parameters. */"));
    assert!(output.contains("export interface CreateCustomerParams {"));
    assert!(output.contains("  errorOnNotFound?: boolean;"));
    assert!(output.contains("export interface CreateCustomerParamsAddress {"));
    assert!(output.contains("  city?: string;"));
}

#[tokio::test]
async fn test_interface_omit_and_extend_end_to_end() {
    let project = Project::new();
    project.write_source(
        "customers.ts",
        r#"
        export interface CustomerCreateParams {
          id: string;
          email: string;
          name: string;
        }
        "#,
    );

    let manifest = project.manifest(
        r#"
        [[entry]]
        source_file = "customers.ts"
        source_name = "CustomerCreateParams"
        target_file = "customers.ts"
        target_name = "CreateCustomerParams"
        kind = "interface"
        omit_fields = ["id"]

        [entry.extend_fields.errorOnNotFound]
        expression = "boolean"
        description = "Return an error instead of null when no match is found."
        "#,
    );

    let report = run(&manifest).await.unwrap();
    assert!(report.is_clean(), "failures: {:?}", report.failures);

    let output = project.read_output("customers.ts");
    assert!(output.contains("export interface CreateCustomerParams {"));
    assert!(output.contains("  email: string;"));
    assert!(output.contains("  name: string;"));
    assert!(output.contains("  errorOnNotFound?: boolean;"));
    assert!(output.contains("/** Return an error instead of null when no match is found. */"));
    assert!(!output.contains("\n  id:"));
}

#[tokio::test]
async fn test_enum_substitution_end_to_end() {
    let project = Project::new();
    project.write_source(
        "prices.ts",
        "export const price_params = z.object({ currency: z.nativeEnum(Currency) });",
    );

    let manifest = project.manifest(
        r#"
        [enums]
        Currency = ["usd", "eur"]

        [[entry]]
        source_file = "prices.ts"
        source_name = "price_params"
        target_file = "prices.ts"
        target_name = "priceParams"
        replace_enums_with_strings = true
        "#,
    );

    let report = run(&manifest).await.unwrap();
    assert!(report.is_clean(), "failures: {:?}", report.failures);

    let output = project.read_output("prices.ts");
    assert!(output.contains("  currency: z.enum([\"usd\", \"eur\"]),"));
    assert!(!output.contains("nativeEnum"));
}

#[tokio::test]
async fn test_manual_union_appended_to_target_module() {
    let project = Project::new();
    project.write_source(
        "sorting.ts",
        "export const sort_params = z.object({ field: z.string() });",
    );

    let manifest = project.manifest(
        r#"
        [[entry]]
        source_file = "sorting.ts"
        source_name = "sort_params"
        target_file = "sorting.ts"
        target_name = "sortParams"

        [[manual_union]]
        target_file = "sorting.ts"
        code = "export type SortDirection = \"asc\" | \"desc\";"
        "#,
    );

    let report = run(&manifest).await.unwrap();
    assert!(report.is_clean());

    let output = project.read_output("sorting.ts");
    assert!(output.ends_with("export type SortDirection = \"asc\" | \"desc\";\n"));
    let union = output.find("export type SortDirection").unwrap();
    let schema = output.find("export const sortParams").unwrap();
    assert!(schema < union);
}

#[tokio::test]
async fn test_duplicate_declaration_produces_warning() {
    let project = Project::new();
    project.write_source(
        "dups.ts",
        "const dup_schema = z.object({ a: z.string() });\nconst dup_schema = z.object({ b: z.string() });",
    );

    let manifest = project.manifest(
        r#"
        [[entry]]
        source_file = "dups.ts"
        source_name = "dup_schema"
        target_file = "dups.ts"
        target_name = "dupSchema"
        "#,
    );

    let report = run(&manifest).await.unwrap();
    assert!(report.is_clean());
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("dup_schema"));
    assert!(project.read_output("dups.ts").contains("  a: z.string(),"));
}

#[tokio::test]
async fn test_missing_source_root_is_fatal() {
    let project = Project::new();
    fs::remove_dir_all(&project.source_root).unwrap();

    let manifest = project.manifest(
        r#"
        [[entry]]
        source_file = "customers.ts"
        source_name = "customer_params"
        target_file = "customers.ts"
        target_name = "customerParams"
        "#,
    );

    let error = run(&manifest).await.unwrap_err();
    assert!(matches!(error, Error::MissingRoot { .. }));
}
