#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn cli() -> Command {
    Command::cargo_bin("roulement-cli").unwrap()
}

#[test]
fn span_import_and_solve() {
    let dir = tempdir().unwrap();
    let plan = dir.path().join("plan.json");
    let plan = plan.to_str().unwrap();
    let csv = dir.path().join("people.csv");
    std::fs::write(
        &csv,
        "handle,display_name,blackouts\nalice,Alice,\nbob,Bob,2026-03-03\n",
    )
    .unwrap();

    cli()
        .args(["--plan", plan, "span", "--start", "2026-03-02", "--end", "2026-03-04"])
        .assert()
        .success();
    cli()
        .args(["--plan", plan, "import-candidates", "--csv", csv.to_str().unwrap()])
        .assert()
        .success();
    cli()
        .args(["--plan", plan, "solve"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cost=3"))
        .stdout(predicate::str::contains("2026-03-02"));
    cli()
        .args(["--plan", plan, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2026-03-04"));
}

#[test]
fn infeasible_solve_exits_with_warning_code() {
    let dir = tempdir().unwrap();
    let plan = dir.path().join("plan.json");
    let plan = plan.to_str().unwrap();
    let csv = dir.path().join("people.csv");
    std::fs::write(
        &csv,
        "handle,display_name,blackouts\nalice,Alice,2026-03-03\nbob,Bob,2026-03-03\n",
    )
    .unwrap();

    cli()
        .args(["--plan", plan, "span", "--start", "2026-03-02", "--end", "2026-03-04"])
        .assert()
        .success();
    cli()
        .args(["--plan", plan, "import-candidates", "--csv", csv.to_str().unwrap()])
        .assert()
        .success();
    cli()
        .args(["--plan", plan, "solve"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("slot 1"));
}

#[test]
fn blackout_requires_known_candidate() {
    let dir = tempdir().unwrap();
    let plan = dir.path().join("plan.json");

    cli()
        .args([
            "--plan",
            plan.to_str().unwrap(),
            "blackout",
            "--handle",
            "ghost",
            "--date",
            "2026-03-02",
        ])
        .assert()
        .failure();
}
