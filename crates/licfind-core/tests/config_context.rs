use std::path::Path;

use tempfile::TempDir;

use licfind_core::config::{Persistence, RawAttributes, TemplateSource};
use licfind_core::context::ConfigContext;

#[test]
fn context_creates_from_paths() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("project");
    let config_file = temp.path().join("custom.yml");

    let ctx = ConfigContext::new(project.clone(), config_file.clone());

    assert_eq!(ctx.working_dir(), project.as_path());
    assert_eq!(ctx.config_file(), config_file.as_path());
    assert_eq!(ctx.persistence().file(), config_file.as_path());
}

#[test]
fn context_for_project_uses_default_config_location() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("project");

    let ctx = ConfigContext::for_project(project.clone(), None);

    assert_eq!(
        ctx.config_file(),
        project.join("config/license_finder.yml").as_path()
    );
}

#[test]
fn context_ensure_default_bootstraps_and_names_project_after_root() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("billing_service");
    std::fs::create_dir_all(&project).unwrap();

    let ctx = ConfigContext::for_project(project.clone(), None);
    let config = ctx.ensure_default().unwrap();

    assert!(ctx.config_file().exists());
    assert_eq!(config.project_name(), "billing_service");
    assert_eq!(config.artifacts().dir(), Path::new("./doc/"));
}

#[test]
fn context_save_then_reload() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("project");
    let ctx = ConfigContext::for_project(project, None);

    let config = ctx.ensure_default().unwrap().with_gradle_command("./gradlew");
    ctx.save(&config).unwrap();

    let reloaded = ctx.ensure_default().unwrap();
    assert_eq!(reloaded, config);
}

#[test]
fn context_overrides_win_over_saved_values() {
    let temp = TempDir::new().unwrap();
    let ctx = ConfigContext::for_project(temp.path().join("project"), None);
    let saved = ctx.ensure_default().unwrap().with_project_name("Saved");
    ctx.save(&saved).unwrap();

    let config = ctx
        .ensure_default_with(RawAttributes {
            gradle_command: Some("./gradlew".to_string()),
            ..RawAttributes::new()
        })
        .unwrap();

    assert_eq!(config.project_name(), "Saved");
    assert_eq!(config.gradle_command(), "./gradlew");
}

#[test]
fn context_uses_custom_template() {
    let temp = TempDir::new().unwrap();
    let template = temp.path().join("template.yml");
    std::fs::write(&template, "gradle_command: ./gradlew\n").unwrap();

    let ctx = ConfigContext::for_project(temp.path().join("project"), None)
        .with_template(TemplateSource::File(template));
    let config = ctx.ensure_default().unwrap();

    assert_eq!(config.gradle_command(), "./gradlew");
    assert!(!ctx.persistence().get().unwrap().is_empty());
}
