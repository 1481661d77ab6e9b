use company_cost_tree::commands::{
    execute_build, run_pipeline, validate_args, validate_tree_file, BuildArgs, StageTimer,
};
use company_cost_tree::output::read_tree;
use company_cost_tree::source::ByteSource;
use company_cost_tree::utils::error::{BuildError, FetchError};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Serves fixed bodies by name
struct MemorySource(HashMap<String, Vec<u8>>);

impl MemorySource {
    fn new(companies: &str, travels: &str) -> Self {
        let mut bodies = HashMap::new();
        bodies.insert("companies".to_string(), companies.as_bytes().to_vec());
        bodies.insert("travels".to_string(), travels.as_bytes().to_vec());
        Self(bodies)
    }
}

impl ByteSource for MemorySource {
    fn fetch(&self, name: &str) -> Result<Vec<u8>, FetchError> {
        self.0
            .get(name)
            .cloned()
            .ok_or_else(|| FetchError::InvalidSource(name.to_string()))
    }
}

fn memory_args() -> BuildArgs {
    BuildArgs {
        companies_source: "companies".to_string(),
        travels_source: "travels".to_string(),
        ..Default::default()
    }
}

#[test]
fn test_pipeline_rolls_up_costs() {
    let source = MemorySource::new(
        r#"[
            {"id": "1", "name": "A", "parentId": ""},
            {"id": "2", "name": "B", "parentId": "1"},
            {"id": "3", "name": "C", "parentId": "2"}
        ]"#,
        r#"[
            {"id": "t1", "price": "100.00", "companyId": "3"},
            {"id": "t2", "price": 20, "companyId": "2"},
            {"id": "t3", "price": 5, "companyId": "99"}
        ]"#,
    );

    let outcome = run_pipeline(&source, &memory_args(), &mut StageTimer::new(false)).unwrap();

    assert_eq!(outcome.tree.get("3").unwrap().cost, 100.0);
    assert_eq!(outcome.tree.get("2").unwrap().cost, 120.0);
    assert_eq!(outcome.tree.root_node().cost, 120.0);
    assert_eq!(outcome.cost_report.unresolved, vec!["t3".to_string()]);
    assert_eq!(outcome.build_report.dropped(), 0);
}

#[test]
fn test_pipeline_without_root_fails() {
    let source = MemorySource::new(r#"[{"id": "2", "name": "B", "parentId": "1"}]"#, "[]");

    let err = run_pipeline(&source, &memory_args(), &mut StageTimer::new(false)).unwrap_err();

    assert_eq!(err.downcast_ref::<BuildError>(), Some(&BuildError::NoRoot));
}

#[test]
fn test_pipeline_empty_companies_fails() {
    let source = MemorySource::new("[]", "[]");

    let err = run_pipeline(&source, &memory_args(), &mut StageTimer::new(false)).unwrap_err();

    assert_eq!(err.downcast_ref::<BuildError>(), Some(&BuildError::EmptyInput));
}

#[test]
fn test_pipeline_missing_source_fails() {
    let source = MemorySource::new(r#"[{"id": "1", "name": "A"}]"#, "[]");
    let args = BuildArgs {
        travels_source: "elsewhere".to_string(),
        ..memory_args()
    };

    let err = run_pipeline(&source, &args, &mut StageTimer::new(false)).unwrap_err();

    assert!(err.downcast_ref::<FetchError>().is_some());
}

#[test]
fn test_validate_args_defaults() {
    assert!(validate_args(&BuildArgs::default()).is_ok());
}

#[test]
fn test_validate_args_empty_source() {
    let args = BuildArgs {
        companies_source: "  ".to_string(),
        ..Default::default()
    };
    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_empty_output() {
    let args = BuildArgs {
        output_json: PathBuf::new(),
        ..Default::default()
    };
    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_zero_timeout() {
    let args = BuildArgs {
        timeout: Duration::ZERO,
        ..Default::default()
    };
    assert!(validate_args(&args).is_err());
}

/// Companies and travels written to files in `dir`
fn file_args(dir: &Path, companies: &str, travels: &str) -> BuildArgs {
    let companies_path = dir.join("companies.json");
    let travels_path = dir.join("travels.json");
    std::fs::write(&companies_path, companies).unwrap();
    std::fs::write(&travels_path, travels).unwrap();

    BuildArgs {
        companies_source: companies_path.to_string_lossy().into_owned(),
        travels_source: travels_path.to_string_lossy().into_owned(),
        output_json: dir.join("out/company_tree.json"),
        echo: true,
        timings: true,
        ..Default::default()
    }
}

#[test]
fn test_execute_build_writes_valid_tree() {
    let temp_dir = tempfile::tempdir().unwrap();
    let args = file_args(
        temp_dir.path(),
        r#"[
            {"id": "1", "name": "A", "parentId": ""},
            {"id": "2", "name": "B", "parentId": "1"},
            {"id": "4", "name": "D", "parentId": "3"},
            {"id": "3", "name": "C", "parentId": "1"}
        ]"#,
        r#"[
            {"id": "t1", "price": 100, "companyId": "2"},
            {"id": "t2", "price": "30.5", "companyId": "3"},
            {"id": "t3", "price": 9, "companyId": "4"}
        ]"#,
    );
    let output = args.output_json.clone();

    execute_build(args).unwrap();

    let tree = read_tree(&output).unwrap();
    assert_eq!(tree.cost, 130.5);
    assert_eq!(tree.node_count(), 3);
    assert_eq!(tree.find("2").unwrap().cost, 100.0);
    assert!(tree.find("4").is_none());

    validate_tree_file(output).unwrap();
}

#[test]
fn test_execute_build_empty_travels_body() {
    let temp_dir = tempfile::tempdir().unwrap();
    let args = file_args(
        temp_dir.path(),
        r#"[{"id": "1", "name": "A", "parentId": ""}]"#,
        "",
    );
    let output = args.output_json.clone();

    execute_build(args).unwrap();

    assert_eq!(read_tree(&output).unwrap().cost, 0.0);
}

#[test]
fn test_execute_build_without_root_writes_nothing() {
    let temp_dir = tempfile::tempdir().unwrap();
    let args = file_args(
        temp_dir.path(),
        r#"[{"id": "2", "name": "B", "parentId": "1"}]"#,
        "[]",
    );
    let output = args.output_json.clone();

    let err = execute_build(args).unwrap_err();

    assert_eq!(err.downcast_ref::<BuildError>(), Some(&BuildError::NoRoot));
    assert!(!output.exists());
}

#[test]
fn test_validate_rejects_parent_below_children() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("edited.json");
    std::fs::write(
        &path,
        r#"{
            "id": "1",
            "name": "A",
            "cost": 10.0,
            "children": [
                {"id": "2", "name": "B", "cost": 25.0, "children": []}
            ]
        }"#,
    )
    .unwrap();

    let err = validate_tree_file(path).unwrap_err();

    assert!(err.to_string().ends_with("for: 1"));
}

#[test]
fn test_validate_missing_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    assert!(validate_tree_file(temp_dir.path().join("missing.json")).is_err());
}

#[test]
fn test_negative_price_keeps_tree_valid() {
    let temp_dir = tempfile::tempdir().unwrap();
    let args = file_args(
        temp_dir.path(),
        r#"[
            {"id": "0", "name": "Root", "parentId": ""},
            {"id": "1", "name": "Child", "parentId": "0"}
        ]"#,
        r#"[
            {"id": "t1", "price": 50, "companyId": "1"},
            {"id": "t2", "price": -20, "companyId": "0"}
        ]"#,
    );
    let output = args.output_json.clone();

    execute_build(args).unwrap();

    assert_eq!(read_tree(&output).unwrap().cost, 50.0);
    validate_tree_file(output).unwrap();
}
