use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const TOKEN: &str = r#"pragma solidity 0.8.21;

contract Token {
    uint256 public totalSupply;

    function transfer(address to, uint256 amt) external returns (bool) {}
}
"#;

fn project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("contracts")).unwrap();
    fs::write(temp_dir.path().join("contracts/Token.sol"), TOKEN).unwrap();
    temp_dir
}

fn isolgen() -> Command {
    Command::cargo_bin("isolgen").unwrap()
}

#[test]
fn test_generate_reports_new_files() {
    let temp_dir = project();

    isolgen()
        .args(["generate", "--root"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("+new: contracts/Token.sol"));

    let interface = fs::read_to_string(temp_dir.path().join("interfaces/IToken.sol")).unwrap();
    assert!(interface.contains("interface IToken {"));
}

#[test]
fn test_generate_reports_edits() {
    let temp_dir = project();
    isolgen()
        .args(["generate", "--quiet", "--root"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    fs::write(
        temp_dir.path().join("contracts/Token.sol"),
        TOKEN.replace("returns (bool)", "returns (bool success)"),
    )
    .unwrap();

    isolgen()
        .args(["generate", "--root"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("edit: contracts/Token.sol"));
}

#[test]
fn test_show_prints_interface() {
    let temp_dir = project();

    isolgen()
        .current_dir(temp_dir.path())
        .args(["show", "contracts/Token.sol"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "  function transfer(address to, uint256 amt) external returns (bool);",
        ));

    assert!(!temp_dir.path().join("interfaces").exists());
}

#[test]
fn test_show_diamond_merges_facets() {
    let temp_dir = project();
    fs::create_dir_all(temp_dir.path().join("contracts/facets")).unwrap();
    fs::write(
        temp_dir.path().join("contracts/Types.sol"),
        "struct Asset { address token; }\n",
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("contracts/facets/AssetsFacet.sol"),
        "contract AssetsFacet { function addAsset(Asset calldata asset) external {} }\n",
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("contracts/Diamond.sol"),
        "contract Diamond { function owner() external view returns (address) {} }\n",
    )
    .unwrap();

    isolgen()
        .current_dir(temp_dir.path())
        .args(["show", "contracts/Diamond.sol"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "  function addAsset(Types.Asset calldata asset) external;",
        ))
        .stdout(predicate::str::contains("import \"contracts/Types.sol\";"));

    isolgen()
        .current_dir(temp_dir.path())
        .args(["show", "--types", "contracts/Diamond.sol"])
        .assert()
        .success()
        .stdout(predicate::str::contains("// struct Asset from contracts/Types.sol"));

    assert!(!temp_dir.path().join("interfaces").exists());
}

#[test]
fn test_show_parse_error_fails() {
    let temp_dir = project();
    fs::write(temp_dir.path().join("contracts/Broken.sol"), "contract Broken { function ( }").unwrap();

    isolgen()
        .current_dir(temp_dir.path())
        .args(["show", "contracts/Broken.sol"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Parse error"));
}

#[test]
fn test_init_writes_config_once() {
    let temp_dir = project();

    isolgen()
        .args(["init", "--root"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config"));

    let config = fs::read_to_string(temp_dir.path().join(".isolgen.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&config).unwrap();
    assert_eq!(value["out_dir"], "interfaces");
    assert_eq!(value["aggregation"]["root_name"], "Diamond");

    isolgen()
        .args(["init", "--root"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --force to overwrite"));
}
