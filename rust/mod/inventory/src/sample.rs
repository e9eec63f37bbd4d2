//! Built-in sample fleet, compiled into the binary.
//!
//! The same files live under `fixtures/` and can be loaded from disk
//! with `--data-dir`, which is handy as a template for real data.

use devicehub_fixture::{Format, StaticSource};

const DEVICES: &str = include_str!("../fixtures/devices.toml");
const TICKETS: &str = include_str!("../fixtures/tickets.toml");
const ACTIVITIES: &str = include_str!("../fixtures/activities.toml");
const SCRIPTS: &str = include_str!("../fixtures/scripts.toml");
const POLICIES: &str = include_str!("../fixtures/policies.toml");
const EXECUTIONS: &str = include_str!("../fixtures/executions.toml");

/// Fixture source serving the sample fleet.
pub fn source() -> StaticSource {
    StaticSource::new(
        "builtin",
        &[
            ("devices", Format::Toml, DEVICES),
            ("tickets", Format::Toml, TICKETS),
            ("activities", Format::Toml, ACTIVITIES),
            ("scripts", Format::Toml, SCRIPTS),
            ("policies", Format::Toml, POLICIES),
            ("executions", Format::Toml, EXECUTIONS),
        ],
    )
}
