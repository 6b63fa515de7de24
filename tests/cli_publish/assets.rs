use crate::common::*;

#[test]
fn asset_publish_copies_package_public_tree() {
    let env = env_with_packages();

    let result = env.run(&["asset:publish", "acme/widgets"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(
        env.read("public/packages/acme/widgets/css/widgets.css"),
        WIDGETS_CSS
    );
    assert_eq!(
        env.read("public/packages/acme/widgets/js/widgets.js"),
        WIDGETS_JS
    );
    assert!(
        result.stdout.contains("acme/widgets: 2 copied, 0 skipped"),
        "{}",
        result.stdout
    );
}

#[test]
fn asset_publish_twice_overwrites_every_file() {
    let env = env_with_packages();

    let first = env.run(&["asset:publish", "acme/widgets"]);
    env.write("public/packages/acme/widgets/css/widgets.css", "stale");
    let second = env.run(&["asset:publish", "acme/widgets"]);

    assert!(first.success && second.success);
    assert!(second.stdout.contains("2 copied, 0 skipped"));
    assert_eq!(
        env.read("public/packages/acme/widgets/css/widgets.css"),
        WIDGETS_CSS
    );
}

#[test]
fn asset_publish_without_package_publishes_all_with_assets() {
    let env = env_with_packages();

    let result = env.run(&["asset:publish"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("acme/widgets"));
    assert!(!result.stdout.contains("acme/gadgets"));
    assert!(!env.exists("public/packages/acme/gadgets"));
}

#[test]
fn dash_alias_works() {
    let env = env_with_packages();

    let result = env.run(&["asset-publish", "acme/widgets"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(env.exists("public/packages/acme/widgets/css/widgets.css"));
}

#[test]
fn unknown_package_exits_non_zero() {
    let env = env_with_packages();

    let result = env.run(&["asset:publish", "acme/nothing"]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert!(
        result.stdout.contains("invalid package name 'acme/nothing'"),
        "{}",
        result.stdout
    );
}

#[test]
fn package_without_assets_is_a_quiet_success() {
    let env = env_with_packages();

    let result = env.run(&["asset:publish", "acme/gadgets"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("acme/gadgets: 0 copied, 0 skipped"));
    assert!(!env.exists("public/packages/acme/gadgets"));
}

#[test]
fn blocked_destination_file_fails_the_package() {
    let env = env_with_packages();
    std::fs::create_dir_all(env.path("public/packages/acme/widgets/css/widgets.css")).unwrap();

    let result = env.run(&["asset:publish", "acme/widgets"]);

    assert_eq!(result.exit_code, 1);
    assert!(
        result.stdout.contains("failed to copy css/widgets.css"),
        "{}",
        result.stdout
    );
}

#[test]
fn partial_failure_reports_files_already_copied() {
    let env = TestEnv::new();
    env.install_package(
        "acme/widgets",
        &[
            ("public/a.css", "a"),
            ("public/b.css", "b"),
            ("public/c.css", "c"),
        ],
    );
    std::fs::create_dir_all(env.path("public/packages/acme/widgets/c.css")).unwrap();

    let result = env.run(&["asset:publish", "acme/widgets", "--json"]);

    assert_eq!(result.exit_code, 1);
    let summary = result.json_lines().pop().unwrap();
    assert_eq!(summary["success"], false);
    assert_eq!(summary["packages"][0]["copied"], 2);
    assert_eq!(env.read("public/packages/acme/widgets/b.css"), "b");

    let text = env.run(&["asset:publish", "acme/widgets"]);
    assert!(
        text.stdout.contains("acme/widgets: 2 copied, 0 skipped"),
        "{}",
        text.stdout
    );
    assert!(text.stdout.contains("failed to copy c.css"), "{}", text.stdout);
}

#[test]
fn vendor_namespace_is_not_publishable() {
    let env = env_with_packages();

    let result = env.run(&["asset:publish", "acme"]);

    assert_eq!(result.exit_code, 1);
    assert!(
        result.stdout.contains("invalid package name 'acme'"),
        "{}",
        result.stdout
    );
    assert!(!env.exists("public/packages"));
}

#[test]
fn dry_run_writes_nothing() {
    let env = env_with_packages();

    let result = env.run(&["asset:publish", "acme/widgets", "--dry-run"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("(dry run)"));
    assert!(result.stdout.contains("2 copied"));
    assert!(!env.exists("public/packages"));
    assert!(!env.exists(".vendorpub.lock"));
}

#[test]
fn flat_publishes_into_public_root() {
    let env = env_with_packages();

    let result = env.run(&["asset:publish", "acme/widgets", "--flat"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(env.read("public/css/widgets.css"), WIDGETS_CSS);
    assert!(!env.exists("public/packages"));
}

#[test]
fn path_publishes_from_workbench_directory() {
    let env = env_with_packages();
    env.write("workbench/widgets/public/dev.css", "dev");

    let result = env.run(&[
        "asset:publish",
        "acme/widgets",
        "--path",
        env.path("workbench/widgets/public").to_str().unwrap(),
    ]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(env.read("public/packages/acme/widgets/dev.css"), "dev");
    assert!(!env.exists("public/packages/acme/widgets/css"));
}

#[test]
fn json_output_streams_events_and_summary() {
    let env = env_with_packages();

    let result = env.run(&["asset:publish", "acme/widgets", "--json"]);

    assert!(result.success, "{}", result.combined_output());
    let lines = result.json_lines();
    assert_eq!(lines[0]["event"], "start");
    assert_eq!(lines[0]["command"], "asset:publish");
    assert_eq!(
        lines
            .iter()
            .filter(|l| l["event"] == "item_copied")
            .count(),
        2
    );
    let summary = lines.last().unwrap();
    assert_eq!(summary["event"], "summary");
    assert_eq!(summary["success"], true);
    assert_eq!(summary["copied"], 2);
}
