use std::path::PathBuf;

use clap::Parser;
use theme_switch::LinkKind;

use super::RawConfig;
use super::link::LinkSection;
use super::themes::ThemesSection;
use crate::cli::CliArgs;

#[test]
fn cli_overrides_take_precedence() {
    let cli = CliArgs::parse_from([
        "theme-switch",
        "--themes-file",
        "/tmp/themes.json",
        "--link-kind",
        "symlink",
        "list",
    ]);

    let mut config = RawConfig {
        themes: ThemesSection {
            file: Some(PathBuf::from("from-file.json")),
        },
        link: LinkSection {
            kind: Some("hardlink".into()),
        },
    };
    config.apply_cli_overrides(&cli);

    assert_eq!(config.themes.file, Some(PathBuf::from("/tmp/themes.json")));
    assert_eq!(config.link.kind.as_deref(), Some("symlink"));

    let resolved = config.resolve(&cli).expect("resolves");
    assert_eq!(resolved.themes_file, PathBuf::from("/tmp/themes.json"));
    assert_eq!(resolved.link.kind, LinkKind::Symlink);
}

#[test]
fn defaults_apply_without_overrides() {
    let cli = CliArgs::parse_from(["theme-switch", "set", "--theme", "dark"]);

    let resolved = RawConfig::default().resolve(&cli).expect("resolves");

    assert_eq!(resolved.themes_file, PathBuf::from("./config.json"));
    assert_eq!(resolved.link.kind, LinkKind::Hardlink);
}

#[test]
fn invalid_link_kind_names_its_origin() {
    let cli = CliArgs::parse_from(["theme-switch", "list"]);
    let config = RawConfig {
        link: LinkSection {
            kind: Some("junction".into()),
        },
        ..RawConfig::default()
    };

    let message = config.resolve(&cli).unwrap_err().to_string();
    assert!(message.contains("link.kind"));
    assert!(message.contains("junction"));
    assert!(message.contains("settings key"));
}

#[test]
fn settings_file_shape_deserializes() {
    let raw: RawConfig = config::Config::builder()
        .add_source(config::File::from_str(
            "[themes]\nfile = \"themes.json\"\n\n[link]\nkind = \"symlink\"\n",
            config::FileFormat::Toml,
        ))
        .build()
        .expect("builds")
        .try_deserialize()
        .expect("deserializes");

    assert_eq!(raw.themes.file, Some(PathBuf::from("themes.json")));
    assert_eq!(raw.link.kind.as_deref(), Some("symlink"));
}
