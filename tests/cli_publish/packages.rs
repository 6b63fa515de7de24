use crate::common::*;

#[test]
fn packages_lists_what_each_package_publishes() {
    let env = env_with_packages();
    std::fs::create_dir_all(env.path("vendor/.cache/junk")).unwrap();

    let result = env.run(&["packages"]);

    assert!(result.success, "{}", result.combined_output());
    let lines: Vec<_> = result.stdout.lines().collect();
    assert_eq!(lines.len(), 2, "{}", result.stdout);
    assert!(lines[0].starts_with("acme/gadgets"));
    assert!(lines[0].ends_with("config"));
    assert!(lines[1].starts_with("acme/widgets"));
    assert!(lines[1].ends_with("assets, config"));
}

#[test]
fn packages_json() {
    let env = env_with_packages();

    let result = env.run(&["packages", "--json"]);

    let lines = result.json_lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1]["package"], "acme/widgets");
    assert_eq!(lines[1]["assets"], true);
    assert_eq!(lines[0]["assets"], false);
}

#[test]
fn empty_vendor_reports_no_packages() {
    let env = TestEnv::new();

    let result = env.run(&["packages"]);

    assert!(result.success);
    assert!(result.stdout.contains("No packages found"));
}

#[test]
fn listing_is_stable_between_runs() {
    let env = env_with_packages();
    env.install_package("zeta", &[("public/z.css", "z")]);
    env.install_package("alpha", &[("config/a.php", "a")]);

    let first = env.run(&["packages", "--json"]);
    let second = env.run(&["packages", "--json"]);

    assert_eq!(first.stdout, second.stdout);
    let names: Vec<_> = first
        .json_lines()
        .iter()
        .map(|l| l["package"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["acme/gadgets", "acme/widgets", "alpha", "zeta"]);
}
