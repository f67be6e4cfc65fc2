//! Integration tests for the stash CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SNAPSHOT: &str = r#"{
    "meta": { "name": "Test Save", "captured_at": "2026-10-18T08:00:00Z" },
    "locations": [
        {
            "name": "Farm",
            "objects": {
                "1,1": { "name": "Weeds" },
                "2,2": {
                    "name": "Chest",
                    "kind": { "object": { "kind": { "chest": {
                        "player_chest": true,
                        "items": [{
                            "name": "Dresser",
                            "kind": { "furniture": { "dresser": { "held_items": [
                                { "name": "Shirt", "kind": { "wearable": { "slot": "shirt" } } },
                                { "name": "Pants", "kind": { "wearable": { "slot": "pants" } } }
                            ] } } }
                        }]
                    } } } }
                }
            }
        },
        {
            "name": "FarmHouse",
            "kind": { "house": {
                "furniture": [{ "name": "Lamp", "kind": { "furniture": "decor" } }],
                "fridge": {
                    "name": "Fridge",
                    "kind": { "object": { "kind": { "chest": {
                        "player_chest": true,
                        "items": [{ "name": "Milk", "stack": 3 }]
                    } } } }
                }
            } }
        }
    ],
    "player": {
        "name": "Farmer",
        "inventory": [{ "name": "Parsnip", "stack": 12 }, null],
        "equipment": {
            "hat": { "name": "Straw Hat", "kind": { "wearable": { "slot": "hat" } } }
        }
    },
    "farm": {
        "name": "Sunny Farm",
        "stockpile": { "resource": { "name": "Hay", "max_stack": 250 }, "count": 999 }
    }
}"#;

/// Create a temp directory holding `save.json`.
fn test_snapshot(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("save.json");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

fn stash() -> Command {
    Command::cargo_bin("stash").unwrap()
}

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

#[test]
fn list_shows_owned_items() {
    let (_dir, path) = test_snapshot(SNAPSHOT);
    stash()
        .args(["list", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Test Save")
                .and(predicate::str::contains("10 items)"))
                .and(predicate::str::contains("Dresser"))
                .and(predicate::str::contains("Pants"))
                .and(predicate::str::contains("Milk"))
                .and(predicate::str::contains("Straw Hat"))
                .and(predicate::str::contains("Hay"))
                .and(predicate::str::contains("Weeds").not())
                .and(predicate::str::contains("13 items found")),
        );
}

#[test]
fn list_filters_by_origin() {
    let (_dir, path) = test_snapshot(SNAPSHOT);
    stash()
        .args(["list", path.to_str().unwrap(), "--origin", "inventory"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Parsnip")
                .and(predicate::str::contains("Dresser").not())
                .and(predicate::str::contains("2 items found")),
        );
}

#[test]
fn list_rejects_unknown_origin() {
    let (_dir, path) = test_snapshot(SNAPSHOT);
    stash()
        .args(["list", path.to_str().unwrap(), "--origin", "attic"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported origin"));
}

#[test]
fn list_single_location_without_inventory_or_stockpile() {
    let (_dir, path) = test_snapshot(SNAPSHOT);
    stash()
        .args([
            "list",
            path.to_str().unwrap(),
            "--location",
            "farmhouse",
            "--no-inventory",
            "--no-stockpile",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Fridge")
                .and(predicate::str::contains("Chest").not())
                .and(predicate::str::contains("3 items found")),
        );
}

#[test]
fn unknown_location_fails() {
    let (_dir, path) = test_snapshot(SNAPSHOT);
    for command in ["list", "tally", "export"] {
        stash()
            .args([command, path.to_str().unwrap(), "--location", "Mines"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("no location named \"Mines\""));
    }
}

#[test]
fn list_nothing_enabled() {
    let (_dir, path) = test_snapshot(SNAPSHOT);
    stash()
        .args([
            "list",
            path.to_str().unwrap(),
            "--no-inventory",
            "--no-world",
            "--no-stockpile",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No items found"));
}

// ---------------------------------------------------------------------------
// tally
// ---------------------------------------------------------------------------

#[test]
fn tally_groups_stockpile_stacks() {
    let (_dir, path) = test_snapshot(SNAPSHOT);
    stash()
        .args(["tally", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Hay")
                .and(predicate::str::contains("999"))
                .and(predicate::str::contains("10 distinct items")),
        );
}

// ---------------------------------------------------------------------------
// export
// ---------------------------------------------------------------------------

#[test]
fn export_json_to_stdout() {
    let (_dir, path) = test_snapshot(SNAPSHOT);
    let output = stash()
        .args(["export", path.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 13);
    assert_eq!(items[0]["item"]["name"], "Chest");
    assert_eq!(items[0]["origin"], "world");

    let inventory = items.iter().filter(|i| i["origin"] == "inventory").count();
    assert_eq!(inventory, 2);
}

#[test]
fn export_json_to_file() {
    let (dir, path) = test_snapshot(SNAPSHOT);
    let out = dir.path().join("owned.json");
    stash()
        .args(["export", path.to_str().unwrap(), "-O", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 13 items"));

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("\"Parsnip\""));
}

// ---------------------------------------------------------------------------
// errors
// ---------------------------------------------------------------------------

#[test]
fn missing_snapshot_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.json");
    stash()
        .args(["list", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot access snapshot"));
}

#[test]
fn malformed_snapshot_fails() {
    let (_dir, path) = test_snapshot("{ not json");
    stash()
        .args(["tally", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid snapshot"));
}

#[test]
fn duplicate_item_ids_fail() {
    let (_dir, path) = test_snapshot(
        r#"{
            "meta": { "name": "Dupes" },
            "player": {
                "name": "Farmer",
                "inventory": [
                    { "id": "a3f2b1c8-1234-5678-9abc-def012345678", "name": "Parsnip" },
                    { "id": "a3f2b1c8-1234-5678-9abc-def012345678", "name": "Potato" }
                ]
            }
        }"#,
    );
    stash()
        .args(["list", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate item id: a3f2b1c8"));
}
