use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn launcher() -> Command {
    let mut cmd = Command::cargo_bin("larkspur").expect("binary exists");
    // Keep the merge deterministic regardless of the ambient environment.
    cmd.env_remove("LUA_PATH").env_remove("LUA_PATH_5_4");
    cmd
}

#[test]
fn runs_entry_script() {
    let dir = tempdir().expect("create temp dir");
    fs::write(dir.path().join("main.lua"), "print(\"ok\")\n").expect("write script");

    launcher()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("ok"));
}

#[test]
fn missing_argument_is_a_usage_error() {
    launcher()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn missing_script_names_the_attempted_path() {
    let dir = tempdir().expect("create temp dir");

    launcher()
        .arg(dir.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("main.lua"));
}

#[test]
fn empty_script_is_a_no_op() {
    let dir = tempdir().expect("create temp dir");
    fs::write(dir.path().join("main.lua"), "").expect("write script");

    launcher()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn syntax_error_exits_with_compile_code() {
    let dir = tempdir().expect("create temp dir");
    fs::write(dir.path().join("main.lua"), "print(\"ok\"").expect("write script");

    launcher()
        .arg(dir.path())
        .assert()
        .code(7)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("compiling script"))
        .stderr(predicate::str::contains("main.lua"));
}

#[test]
fn runtime_error_exits_with_script_code() {
    let dir = tempdir().expect("create temp dir");
    fs::write(dir.path().join("main.lua"), "error(\"boom\")\n").expect("write script");

    launcher()
        .arg(dir.path())
        .assert()
        .code(8)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("script execution error"))
        .stderr(predicate::str::contains("boom"));
}

#[test]
fn resolves_flat_sibling_module() {
    let dir = tempdir().expect("create temp dir");
    fs::write(
        dir.path().join("util.lua"),
        "return { greet = function() return \"hello from util\" end }\n",
    )
    .expect("write module");
    fs::write(
        dir.path().join("main.lua"),
        "local util = require(\"util\")\nprint(util.greet())\n",
    )
    .expect("write script");

    launcher()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("hello from util"));
}

#[test]
fn resolves_package_style_module() {
    let dir = tempdir().expect("create temp dir");
    fs::create_dir(dir.path().join("greetings")).expect("create module dir");
    fs::write(
        dir.path().join("greetings/init.lua"),
        "return { hello = \"hello from package\" }\n",
    )
    .expect("write module");
    fs::write(
        dir.path().join("main.lua"),
        "local greetings = require(\"greetings\")\nprint(greetings.hello)\n",
    )
    .expect("write script");

    launcher()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("hello from package"));
}

#[test]
fn ambient_search_path_keeps_precedence() {
    let dir = tempdir().expect("create temp dir");
    fs::write(dir.path().join("main.lua"), "print(package.path)\n").expect("write script");

    let expected = format!(
        "/elsewhere/?.lua;{0}/?.lua;{0}/?/init.lua",
        dir.path().display()
    );
    launcher()
        .arg(dir.path())
        .env("LUA_PATH", "/elsewhere/?.lua")
        .assert()
        .success()
        .stdout(predicate::str::contains(expected));
}

#[test]
fn verbose_flag_traces_pipeline_stages() {
    let dir = tempdir().expect("create temp dir");
    fs::write(dir.path().join("main.lua"), "print(\"ok\")\n").expect("write script");

    launcher()
        .arg(dir.path())
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains("module search path"));
}
