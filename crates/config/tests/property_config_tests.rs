//! Property-based tests for profile file loading.
//!
//! These tests render randomly generated profile sets to INI text, load them
//! back through the public API, and check the lookup properties against the
//! generated model.
//!
//! Test coverage:
//! - `[profile X]` sections are found under `X` with the prefix stripped once
//! - `[default]` presence matches `default()` presence
//! - Absent names are never found
//! - `source_profile` follows exactly one hop, or is `None`
//! - Loading the same file twice answers every query identically

use std::collections::BTreeMap;
use std::fmt::Write as _;

use proptest::prelude::*;
use tempfile::TempDir;
use vault_config::{Config, Profile, load_config};

/// Strategy for profile names that survive trimming and contain no `]`.
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,12}"
}

fn value_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[a-zA-Z0-9:/_-]{1,24}")
}

/// Strategy for a set of named profiles, with source references drawn from the same names.
fn profiles_strategy() -> impl Strategy<Value = BTreeMap<String, Profile>> {
    prop::collection::btree_set(name_strategy(), 0..8).prop_flat_map(|names| {
        let names: Vec<String> = names.into_iter().collect();
        let count = names.len();
        let pool = names.clone();
        (
            Just(names),
            prop::collection::vec(
                (
                    value_strategy(),
                    value_strategy(),
                    value_strategy(),
                    value_strategy(),
                    prop::option::of(prop_oneof![
                        prop::sample::select(if pool.is_empty() {
                            vec!["dangling".to_string()]
                        } else {
                            pool.clone()
                        }),
                        Just("dangling".to_string()),
                    ]),
                ),
                count,
            ),
        )
            .prop_map(|(names, fields)| {
                names
                    .into_iter()
                    .zip(fields)
                    .map(
                        |(name, (region, output, role_arn, mfa_serial, source_profile))| {
                            let profile = Profile {
                                name: name.clone(),
                                region,
                                output,
                                role_arn,
                                mfa_serial,
                                source_profile,
                            };
                            (name, profile)
                        },
                    )
                    .collect()
            })
    })
}

fn render(profiles: &BTreeMap<String, Profile>) -> String {
    let mut out = String::from("# generated\n");
    for profile in profiles.values() {
        if profile.is_default() {
            writeln!(out, "[default]").unwrap();
        } else {
            writeln!(out, "[profile {}]", profile.name).unwrap();
        }
        let fields = [
            ("region", &profile.region),
            ("output", &profile.output),
            ("role_arn", &profile.role_arn),
            ("mfa_serial", &profile.mfa_serial),
            ("source_profile", &profile.source_profile),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                writeln!(out, "{} = {}", key, value).unwrap();
            }
        }
        writeln!(out).unwrap();
    }
    out
}

fn load(text: &str) -> (TempDir, Config) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config");
    std::fs::write(&path, text).unwrap();
    let config = load_config(&path).unwrap();
    (temp_dir, config)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_declared_profiles_are_found(profiles in profiles_strategy()) {
        let (_dir, config) = load(&render(&profiles));

        prop_assert_eq!(config.len(), profiles.len());
        for (name, expected) in &profiles {
            let actual = config.profile(name);
            prop_assert_eq!(actual.as_ref(), Some(expected));
        }
    }

    #[test]
    fn prop_absent_names_not_found(
        profiles in profiles_strategy(),
        probe in "[A-Z]{1,8}",
    ) {
        let (_dir, config) = load(&render(&profiles));
        prop_assert!(config.profile(&probe).is_none());
        prop_assert!(config.source_profile(&probe).is_none());
    }

    #[test]
    fn prop_default_present_iff_declared(
        profiles in profiles_strategy(),
        region in "[a-z]{2}-[a-z]{4,7}-[1-3]",
    ) {
        let mut profiles = profiles;
        let with_default = !profiles.is_empty();
        if with_default {
            profiles.insert(
                "default".to_string(),
                Profile { region: Some(region.clone()), ..Profile::new("default") },
            );
        }

        let (_dir, config) = load(&render(&profiles));
        prop_assert_eq!(config.default().is_some(), with_default);
        if with_default {
            prop_assert_eq!(config.default().unwrap().region, Some(region));
        }
    }

    #[test]
    fn prop_source_profile_is_one_hop(profiles in profiles_strategy()) {
        let (_dir, config) = load(&render(&profiles));

        for (name, profile) in &profiles {
            let expected = profile
                .source_profile
                .as_deref()
                .and_then(|source| profiles.get(source))
                .cloned();
            prop_assert_eq!(config.source_profile(name), expected);
        }
    }

    #[test]
    fn prop_reload_is_idempotent(profiles in profiles_strategy()) {
        let text = render(&profiles);
        let (_first_dir, first) = load(&text);
        let (_second_dir, second) = load(&text);

        for name in profiles.keys() {
            prop_assert_eq!(first.profile(name), second.profile(name));
            prop_assert_eq!(first.source_profile(name), second.source_profile(name));
        }
    }
}
