use crate::common::*;

#[test]
fn config_publish_creates_missing_files() {
    let env = env_with_packages();

    let result = env.run(&["config:publish", "acme/widgets"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(
        env.read("app/config/packages/acme/widgets/widgets.php"),
        WIDGETS_CONFIG
    );
}

#[test]
fn config_publish_never_overwrites_customized_files() {
    let env = env_with_packages();
    env.write("app/config/packages/acme/widgets/widgets.php", "customized");

    let result = env.run(&["config:publish", "acme/widgets"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(
        result.stdout.contains("acme/widgets: 0 copied, 1 skipped"),
        "{}",
        result.stdout
    );
    assert_eq!(
        env.read("app/config/packages/acme/widgets/widgets.php"),
        "customized"
    );
}

#[test]
fn config_publish_all_packages() {
    let env = env_with_packages();

    let result = env.run(&["config-publish"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(
        env.read("app/config/packages/acme/gadgets/gadgets.php"),
        GADGETS_CONFIG
    );
    assert_eq!(
        env.read("app/config/packages/acme/widgets/widgets.php"),
        WIDGETS_CONFIG
    );
}

#[test]
fn config_falls_back_to_src_config() {
    let env = TestEnv::new();
    env.install_package("solo", &[("src/config/solo.php", "solo")]);

    let result = env.run(&["config:publish", "solo"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(env.read("app/config/packages/solo/solo.php"), "solo");
}

#[test]
fn json_reports_skipped_items() {
    let env = env_with_packages();
    env.write("app/config/packages/acme/gadgets/gadgets.php", "mine");

    let result = env.run(&["config:publish", "acme/gadgets", "--json"]);

    assert!(result.success, "{}", result.combined_output());
    let lines = result.json_lines();
    let skipped: Vec<_> = lines
        .iter()
        .filter(|l| l["event"] == "item_skipped")
        .collect();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0]["path"], "gadgets.php");
}
