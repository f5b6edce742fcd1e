use camino::{Utf8Path, Utf8PathBuf};
use lacquer::{
    BuiltinCatalog, Config, Error, MemoryCatalog, ModeOrder, RawTheme, ResolveError, catalog_for,
    generate, render,
};
use pretty_assertions::assert_eq;

fn utf8_tempdir() -> (tempfile::TempDir, Utf8PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
    (dir, path)
}

fn github_catalog() -> MemoryCatalog {
    MemoryCatalog::new()
        .with(
            "github-light",
            RawTheme::new("GitHub Light")
                .entry("bg", "#fff")
                .entry("fg", "#000")
                .entry("comment", "#888"),
        )
        .with(
            "github-dark",
            RawTheme::new("GitHub Dark")
                .entry("bg", "#000")
                .entry("fg", "#fff")
                .entry("comment", "#aaa"),
        )
}

fn config_in(dir: &Utf8Path) -> Config {
    Config {
        output: dir.join("public/css/shiki-theme.css"),
        ..Config::default()
    }
}

fn entries(dir: &Utf8Path) -> usize {
    fs_err::read_dir(dir).map(|d| d.count()).unwrap_or(0)
}

#[test]
fn test_round_trip() {
    let (_guard, dir) = utf8_tempdir();
    let config = config_in(&dir);

    let generated = generate(&config, &github_catalog()).unwrap();
    let written = fs_err::read_to_string(&config.output).unwrap();

    assert_eq!(
        written,
        "\
.dark {
  --shiki-bg: #000;
  --shiki-fg: #fff;
  --shiki-token-comment: #aaa;
}

:root {
  --shiki-bg: #fff;
  --shiki-fg: #000;
  --shiki-token-comment: #888;
}
"
    );
    assert_eq!(generated.path, config.output);
    assert_eq!(generated.bytes, written.len());
    assert_eq!(generated.modes, ["dark", "light"]);
}

#[test]
fn test_builtin_github_pair() {
    let css = render(&Config::default(), &BuiltinCatalog).unwrap();
    assert_eq!(
        css,
        "\
.dark {
  --shiki-bg: #24292e;
  --shiki-fg: #e1e4e8;
  --shiki-token-comment: #6a737d;
  --shiki-token-string: #9ecbff;
  --shiki-token-keyword: #f97583;
  --shiki-token-function: #b392f0;
  --shiki-token-class: #b392f0;
  --shiki-token-constant: #79b8ff;
  --shiki-token-punctuation: #e1e4e8;
  --shiki-token-variable: #ffab70;
}

:root {
  --shiki-bg: #ffffff;
  --shiki-fg: #24292e;
  --shiki-token-comment: #6a737d;
  --shiki-token-string: #032f62;
  --shiki-token-keyword: #d73a49;
  --shiki-token-function: #6f42c1;
  --shiki-token-class: #6f42c1;
  --shiki-token-constant: #005cc5;
  --shiki-token-punctuation: #24292e;
  --shiki-token-variable: #e36209;
}
"
    );
}

#[test]
fn test_root_first_config() {
    let config = Config {
        mode_order: ModeOrder::RootFirst,
        ..Config::default()
    };
    let css = render(&config, &github_catalog()).unwrap();
    assert!(css.starts_with(":root {\n"));
    assert!(css.contains("}\n\n.dark {\n"));
}

#[test]
fn test_deterministic_output() {
    let (_guard, dir) = utf8_tempdir();
    let config = config_in(&dir);

    generate(&config, &BuiltinCatalog).unwrap();
    let first = fs_err::read(&config.output).unwrap();
    generate(&config, &BuiltinCatalog).unwrap();
    let second = fs_err::read(&config.output).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_mapping_writes_nothing() {
    let (_guard, dir) = utf8_tempdir();
    let mut config = config_in(&dir);
    config.themes.clear();

    let err = generate(&config, &BuiltinCatalog).unwrap_err();
    assert!(matches!(err, Error::Resolve(ResolveError::EmptyModeMapping)));
    assert!(!config.output.exists());
}

#[test]
fn test_unknown_theme_writes_nothing() {
    let (_guard, dir) = utf8_tempdir();
    let mut config = config_in(&dir);
    config
        .themes
        .insert("light".to_string(), "does-not-exist".to_string());

    let err = generate(&config, &BuiltinCatalog).unwrap_err();
    assert!(err.to_string().contains("does-not-exist"));
    assert!(!config.output.exists());
    assert_eq!(entries(&dir), 0);
}

#[test]
fn test_invalid_prefix_writes_nothing() {
    let (_guard, dir) = utf8_tempdir();
    let config = Config {
        var_prefix: "not valid".to_string(),
        ..config_in(&dir)
    };

    let err = generate(&config, &BuiltinCatalog).unwrap_err();
    assert!(matches!(err, Error::Emit(lacquer::EmitError::InvalidPrefix { .. })));
    assert!(!config.output.exists());
}

#[test]
fn test_write_failure_keeps_previous_file() {
    let (_guard, dir) = utf8_tempdir();
    // The output path is taken by a directory, so the final rename fails
    let config = Config {
        output: dir.join("theme.css"),
        ..Config::default()
    };
    fs_err::create_dir(&config.output).unwrap();

    let err = generate(&config, &BuiltinCatalog).unwrap_err();
    assert!(matches!(err, Error::Write(_)));
    assert!(config.output.is_dir());
    assert_eq!(entries(&dir), 1);
}

#[test]
fn test_theme_dir_overrides_builtin() {
    let (_guard, dir) = utf8_tempdir();
    let themes = dir.join("themes");
    fs_err::create_dir(&themes).unwrap();
    fs_err::write(
        themes.join("github-light.toml"),
        "background = \"#fafafa\"\nforeground = \"#111\"\n",
    )
    .unwrap();
    fs_err::write(
        themes.join("paper.toml"),
        "background = \"cream\"\n\n[palette]\ncream = \"#fdf6e3\"\n",
    )
    .unwrap();

    let mut config = Config {
        theme_dir: Some(themes),
        ..config_in(&dir)
    };
    config.themes.insert("sepia".to_string(), "paper".to_string());

    let catalog = catalog_for(&config).unwrap();
    let css = render(&config, &catalog).unwrap();

    assert!(css.contains(":root {\n  --shiki-bg: #fafafa;\n  --shiki-fg: #111;\n}\n"));
    assert!(css.contains(".sepia {\n  --shiki-bg: #fdf6e3;\n}\n"));
    // Untouched built-in
    assert!(css.contains(".dark {\n  --shiki-bg: #24292e;\n"));
}

#[test]
fn test_missing_theme_dir_is_an_error() {
    let (_guard, dir) = utf8_tempdir();
    let config = Config {
        theme_dir: Some(dir.join("nope")),
        ..Config::default()
    };
    assert!(matches!(catalog_for(&config), Err(Error::Catalog(_))));
}

#[test]
fn test_load_config_file() {
    let (_guard, dir) = utf8_tempdir();
    let path = dir.join("lacquer.toml");
    fs_err::write(
        &path,
        "var_prefix = \"code\"\n\n[themes]\nlight = \"solarized-light\"\ndark = \"solarized-dark\"\n",
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    let css = render(&config, &BuiltinCatalog).unwrap();
    assert!(css.contains("--code-token-keyword"));
    assert!(!css.contains("--shiki-"));
}
