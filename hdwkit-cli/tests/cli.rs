use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;

const BIP39_PHRASE: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
const CARDANO_PHRASE: &str =
    "eight country switch draw meat scout mystery blade tip drift useless good keep usage title";
const ALGORAND_PHRASE: &str = "crisp sheriff solution ten remove object chair enhance future rather biology era myth image swap crash coffee scatter buffalo depart day twist advance about unfair";

fn run_json(args: &[&str]) -> Value {
    let output = cargo_bin_cmd!("hdwkit").args(args).output().unwrap();
    assert!(
        output.status.success(),
        "hdwkit {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn bip84_first_address() {
    let json = run_json(&[
        "bip",
        "--scheme",
        "bip84",
        "--coin",
        "bitcoin",
        "--mnemonic",
        BIP39_PHRASE,
        "--addr-num",
        "2",
    ]);
    assert_eq!(json["wallet_name"], "my_wallet");
    assert_eq!(json["mnemonic"], BIP39_PHRASE);
    assert_eq!(
        json["addresses"]["address_1"]["address"],
        "bc1qcr8te4kr609gcawutmrza0j4xv80jy8z306fyu"
    );
    assert!(json["addresses"]["address_2"].is_object());
    assert!(json["addresses"].get("address_3").is_none());
}

#[test]
fn abbreviated_mnemonic_is_expanded() {
    let json = run_json(&[
        "bip",
        "--scheme",
        "bip84",
        "--mnemonic",
        "aban aban aban aban aban aban aban aban aban aban aban abou",
        "--addr-num",
        "1",
    ]);
    assert_eq!(json["mnemonic"], BIP39_PHRASE);
    assert_eq!(
        json["addresses"]["address_1"]["address"],
        "bc1qcr8te4kr609gcawutmrza0j4xv80jy8z306fyu"
    );

    cargo_bin_cmd!("hdwkit")
        .args(["cardano", "--mnemonic", "aba aba aba"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("too short"));
}

#[test]
fn random_bip_wallet_has_requested_words() {
    let json = run_json(&["bip", "--words", "24", "--addr-num", "1"]);
    let phrase = json["mnemonic"].as_str().unwrap();
    assert_eq!(phrase.split(' ').count(), 24);
}

#[test]
fn cardano_reward_address() {
    let json = run_json(&["cardano", "--mnemonic", CARDANO_PHRASE, "--addr-num", "1"]);
    assert_eq!(
        json["staking_key"]["address"],
        "stake1ux2436tfe25727kul3qtnyr7k72rvw6ep7h59ll53suwhzq05v5j9"
    );
    assert_eq!(json["coin_name"], "Cardano Icarus (ADA)");
}

#[test]
fn algorand_alias_and_compact_output() {
    let output = cargo_bin_cmd!("hdwkit")
        .args(["--indent", "0", "algo", "-m", ALGORAND_PHRASE, "-n", "algo"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim_end().lines().count(), 1);
    let json: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["wallet_name"], "algo");
    assert_eq!(
        json["key"]["address"],
        "25NJQAMCWEFLPVKL73J4SZAHHIHOC4XT3KTCGJNPAINGR5YHKENMEF5QTE"
    );
}

#[test]
fn output_file_matches_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wallet.json");
    let output = cargo_bin_cmd!("hdwkit")
        .args(["cardano", "--mnemonic", CARDANO_PHRASE, "--addr-num", "1", "--output"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Saved"));

    let saved: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let printed: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(saved, printed);
}

#[test]
fn invalid_seed_hex_fails() {
    cargo_bin_cmd!("hdwkit")
        .args(["bip", "--seed", "not-hex"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn conflicting_sources_are_rejected() {
    cargo_bin_cmd!("hdwkit")
        .args(["bip", "--mnemonic", BIP39_PHRASE, "--seed", "00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn extended_key_unsupported_for_monero() {
    cargo_bin_cmd!("hdwkit")
        .args(["monero", "--ex-key", "xprv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--ex-key"));
}

#[test]
fn monero_view_key_needs_public_key() {
    cargo_bin_cmd!("hdwkit")
        .args(["xmr", "--view-key", "00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--pub-key"));
}

#[test]
fn unknown_coin_is_a_usage_error() {
    cargo_bin_cmd!("hdwkit")
        .args(["bip", "--coin", "notacoin"])
        .assert()
        .failure()
        .code(2);
}
