//! Package layouts shared by CLI tests.

#![allow(dead_code)]

use super::env::TestEnv;

pub const WIDGETS_CSS: &str = "body { color: teal; }\n";
pub const WIDGETS_JS: &str = "console.log('widgets');\n";
pub const WIDGETS_CONFIG: &str = "<?php return ['size' => 'large'];\n";
pub const GADGETS_CONFIG: &str = "<?php return ['enabled' => true];\n";

/// `acme/widgets` with assets and config, `acme/gadgets` with config only
pub fn env_with_packages() -> TestEnv {
    let env = TestEnv::new();
    env.install_package(
        "acme/widgets",
        &[
            ("composer.json", "{}"),
            ("public/css/widgets.css", WIDGETS_CSS),
            ("public/js/widgets.js", WIDGETS_JS),
            ("config/widgets.php", WIDGETS_CONFIG),
        ],
    );
    env.install_package(
        "acme/gadgets",
        &[("composer.json", "{}"), ("config/gadgets.php", GADGETS_CONFIG)],
    );
    env
}
