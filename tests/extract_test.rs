use tfdocgen::extract::{
    data_sources_table, managed_resources_table, modules_table, outputs_table, vars_table,
    LinkBase,
};
use tfdocgen::module::Module;

const BASE_URL: &str = "https://gitlab.example.com/infra/-/blob/main";

fn fixture() -> Module {
    Module::from_file("tests/fixtures/module.json").unwrap()
}

fn base() -> LinkBase {
    LinkBase::new(BASE_URL, "modules/bucket")
}

fn link(file: &str, line: usize) -> String {
    format!("[{file}: {line}]({BASE_URL}/modules/bucket/{file}#L{line})")
}

fn data_rows(table: &str) -> Vec<&str> {
    table.lines().skip(2).collect()
}

fn first_cells(table: &str) -> Vec<&str> {
    data_rows(table)
        .into_iter()
        .filter_map(|line| line.strip_prefix("| ")?.split(" | ").next())
        .collect()
}

#[test]
fn test_vars_table_sorted_by_name() {
    let table = vars_table(&fixture(), &base());
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(
        lines[0],
        "| Variable | Type | Description | Code Position |"
    );
    assert_eq!(lines[1], "| ---- | ------ | -------- | ------ |");
    assert_eq!(
        lines[2..],
        [
            format!(
                "| alpha | map(string) | Tags applied<br>to every resource | {} |",
                link("variables.tf", 1)
            ),
            format!("| mu |  |  | {} |", link("variables.tf", 5)),
            format!(
                "| zeta | string | Last one | {} |",
                link("variables.tf", 9)
            ),
        ]
    );
}

#[test]
fn test_outputs_table() {
    let table = outputs_table(&fixture(), &base());
    assert_eq!(
        table,
        format!(
            "| Output name | Description | Code Position |\n\
             | ---- | -------- | ------ |\n\
             | bucket_arn | ARN of the bucket | {} |",
            link("outputs.tf", 1)
        )
    );
}

#[test]
fn test_managed_resources_keep_same_named_resources() {
    let table = managed_resources_table(&fixture(), &base());
    assert!(table.starts_with(
        "| Resource Name | Resource Type | Code Position |\n| ---- | -------- | ------ |\n"
    ));

    let types: Vec<&str> = data_rows(&table)
        .iter()
        .map(|line| line.split(" | ").nth(1).unwrap_or_default())
        .collect();
    assert_eq!(
        types,
        vec!["aws_kms_key", "aws_s3_bucket", "aws_s3_bucket_policy"]
    );
}

#[test]
fn test_managed_resources_sorted_by_name_then_type() {
    let module = Module::from_json(
        r#"{"managed_resources": {
            "aws_s3_bucket.logs-archive": {
                "mode": "managed", "type": "aws_s3_bucket", "name": "logs-archive",
                "pos": {"filename": "main.tf", "line": 1}
            },
            "aws_s3_bucket.logs": {
                "mode": "managed", "type": "aws_s3_bucket", "name": "logs",
                "pos": {"filename": "main.tf", "line": 5}
            },
            "aws_iam_role.logs": {
                "mode": "managed", "type": "aws_iam_role", "name": "logs",
                "pos": {"filename": "main.tf", "line": 9}
            }
        }}"#,
    )
    .unwrap();

    let table = managed_resources_table(&module, &LinkBase::default());
    assert_eq!(first_cells(&table), vec!["logs", "logs", "logs-archive"]);
    assert!(data_rows(&table)[0].starts_with("| logs | aws_iam_role |"));
    assert!(data_rows(&table)[1].starts_with("| logs | aws_s3_bucket |"));
}

#[test]
fn test_data_sources_table() {
    let table = data_sources_table(&fixture(), &base());
    assert_eq!(
        data_rows(&table),
        vec![format!(
            "| bucket | aws_iam_policy_document | {} |",
            link("policy.tf", 1)
        )]
    );
}

#[test]
fn test_modules_table() {
    let table = modules_table(&fixture(), &base());
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(
        lines[0],
        "| Module Name | Module Source | Module Location |"
    );
    assert_eq!(
        lines[2],
        format!(
            "| labels | cloudposse/label/null | {} |",
            link("main.tf", 30)
        )
    );
}

#[test]
fn test_empty_module_renders_headers_only() {
    let module = Module::default();
    assert_eq!(
        vars_table(&module, &base()),
        "| Variable | Type | Description | Code Position |\n| ---- | ------ | -------- | ------ |"
    );
    assert_eq!(modules_table(&module, &base()).lines().count(), 2);
}

#[test]
fn test_row_order_ignores_input_order() {
    let module = Module::from_json(
        r#"{"outputs": {
            "zeta": {"name": "zeta", "pos": {"filename": "o.tf", "line": 1}},
            "alpha": {"name": "alpha", "pos": {"filename": "o.tf", "line": 2}},
            "mu": {"name": "mu", "pos": {"filename": "o.tf", "line": 3}}
        }}"#,
    )
    .unwrap();

    let table = outputs_table(&module, &LinkBase::default());
    assert_eq!(first_cells(&table), vec!["alpha", "mu", "zeta"]);
}
