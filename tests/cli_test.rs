use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn shoplist(data: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("shoplist").unwrap();
    cmd.env("SHOPLIST_DATA", data.path())
        .env_remove("SHOPLIST_LOG")
        .env_remove("SHOPLIST_DEBUG_LOG")
        .arg("--no-color");
    cmd
}

#[test]
fn test_add_then_list() {
    let data = tempfile::tempdir().unwrap();

    shoplist(&data)
        .args(["add", "Milk", "-q", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Milk added"))
        .stdout(predicate::str::contains("Pending: 1 | Purchased: 0 | Total: 1"));

    shoplist(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("1. [ ] Milk  x2"));
}

#[test]
fn test_invalid_quantity_becomes_one() {
    let data = tempfile::tempdir().unwrap();
    shoplist(&data)
        .args(["add", "Milk", "--qty", "abc"])
        .assert()
        .success();

    shoplist(&data)
        .args(["export", "--stdout"])
        .assert()
        .success()
        .stdout("Milk;1;false\n");
}

#[test]
fn test_blank_name_is_rejected_without_writing() {
    let data = tempfile::tempdir().unwrap();
    shoplist(&data)
        .args(["add", "   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter a name to add an item."))
        .stdout(predicate::str::contains("Total: 0"));

    assert!(!data.path().join("store").join("list").exists());
}

#[test]
fn test_check_and_delete_by_position() {
    let data = tempfile::tempdir().unwrap();
    for name in ["Bread", "Eggs", "Rice"] {
        shoplist(&data).args(["add", name]).assert().success();
    }

    shoplist(&data)
        .args(["check", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Eggs marked as purchased"))
        .stdout(predicate::str::contains("Pending: 2 | Purchased: 1 | Total: 3"));

    shoplist(&data)
        .args(["rm", "1", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted (1): Bread"))
        .stdout(predicate::str::contains("Deleted (3): Rice"));

    shoplist(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. [x] Eggs"))
        .stdout(predicate::str::contains("Bread").not());
}

#[test]
fn test_out_of_range_position_fails() {
    let data = tempfile::tempdir().unwrap();
    shoplist(&data).args(["add", "Bread"]).assert().success();

    shoplist(&data)
        .args(["toggle", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Item 7 not found"));
}

#[test]
fn test_huge_range_fails_cleanly() {
    let data = tempfile::tempdir().unwrap();
    shoplist(&data).args(["add", "Bread"]).assert().success();
    shoplist(&data).args(["add", "Eggs"]).assert().success();

    shoplist(&data)
        .args(["rm", "1-99999999999999"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Item 99999999999999 not found"));

    shoplist(&data)
        .args(["export", "--stdout"])
        .assert()
        .success()
        .stdout("Bread;1;false\nEggs;1;false\n");
}

#[test]
fn test_sort_works_on_legacy_list_with_duplicate_ids() {
    let data = tempfile::tempdir().unwrap();
    let store = data.path().join("store");
    fs::create_dir_all(&store).unwrap();
    fs::write(
        store.join("list"),
        r#"[{"id":"1700000000000","name":"b","quantity":1,"comprado":false},
            {"id":"1700000000000","name":"a","quantity":1,"comprado":false}]"#,
    )
    .unwrap();

    shoplist(&data)
        .args(["sort", "az"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sorted by"));

    shoplist(&data)
        .args(["export", "--stdout"])
        .assert()
        .success()
        .stdout("a;1;false\nb;1;false\n");
}

#[test]
fn test_sort_persists_order() {
    let data = tempfile::tempdir().unwrap();
    for name in ["banana", "Açúcar", "cenoura"] {
        shoplist(&data).args(["add", name]).assert().success();
    }

    shoplist(&data).args(["sort", "za"]).assert().success();

    shoplist(&data)
        .args(["export", "--stdout"])
        .assert()
        .success()
        .stdout("cenoura;1;false\nbanana;1;false\nAçúcar;1;false\n");
}

#[test]
fn test_export_writes_dated_file() {
    let data = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    shoplist(&data).args(["add", "Milk"]).assert().success();

    shoplist(&data)
        .arg("export")
        .arg("--dir")
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 item(s)"));

    let files: Vec<String> = fs::read_dir(out.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("lista-compras-"));
    assert!(files[0].ends_with(".txt"));
}

#[test]
fn test_import_replaces_list() {
    let data = tempfile::tempdir().unwrap();
    shoplist(&data).args(["add", "Old"]).assert().success();

    let file = data.path().join("import.txt");
    fs::write(&file, "Arroz;2;true\n;3;false\nFeijão;x;false\n").unwrap();

    shoplist(&data)
        .arg("import")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 item(s)"))
        .stdout(predicate::str::contains("Skipped line(s) 2"))
        .stdout(predicate::str::contains("Pending: 1 | Purchased: 1 | Total: 2"));

    shoplist(&data)
        .args(["export", "--stdout"])
        .assert()
        .success()
        .stdout("Arroz;2;true\nFeijão;1;false\n");
}

#[test]
fn test_import_from_stdin() {
    let data = tempfile::tempdir().unwrap();
    shoplist(&data)
        .args(["import", "-"])
        .write_stdin("Milk;1;false\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 item(s)"));
}

#[test]
fn test_import_missing_file_changes_nothing() {
    let data = tempfile::tempdir().unwrap();
    shoplist(&data).args(["add", "Keep"]).assert().success();

    shoplist(&data)
        .args(["import", "/definitely/not/here.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Could not read"))
        .stdout(predicate::str::contains("Total: 1"));
}

#[test]
fn test_theme_toggle_persists() {
    let data = tempfile::tempdir().unwrap();
    shoplist(&data)
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme set to dark"));

    assert_eq!(
        fs::read_to_string(data.path().join("store").join("theme")).unwrap(),
        "dark"
    );

    shoplist(&data)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: dark"));
}

#[test]
fn test_config_set_and_show() {
    let data = tempfile::tempdir().unwrap();
    shoplist(&data)
        .args(["config", "set", "color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("color set to never"));

    shoplist(&data)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("color = never"))
        .stdout(predicate::str::contains("export-dir = ."));
}

#[test]
fn test_doctor_quarantines_corrupt_list() {
    let data = tempfile::tempdir().unwrap();
    let store = data.path().join("store");
    fs::create_dir_all(&store).unwrap();
    fs::write(store.join("list"), "not json").unwrap();

    shoplist(&data)
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("Problems found and fixed:"));

    assert!(store.join("list.corrupt").exists());

    shoplist(&data)
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("No problems found."));
}

#[test]
fn test_clear_empties_list() {
    let data = tempfile::tempdir().unwrap();
    shoplist(&data).args(["add", "Milk"]).assert().success();

    shoplist(&data)
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 1 item(s)"))
        .stdout(predicate::str::contains("Total: 0"));

    shoplist(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your list is empty."));
}
