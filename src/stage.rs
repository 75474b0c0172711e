//! Template & file stager
//!
//! Materializes every file of the deployment bundle under
//! `<build_location>/bundle/`. Staging order is load-bearing: base assets
//! first, flag-gated fragments next, caller overrides last, so on a name
//! collision the override wins.

use std::path::Path;

use tera::Context;

use crate::common::fs::copy_dir_recursive;
use crate::config::BundleConfig;
use crate::error::{EbstageError, Result};
use crate::names;
use crate::runtime::RuntimeVersions;
use crate::template;
use crate::ui;

const PACKAGE_JSON: &str = include_str!("../assets/package.json");
const NPMRC: &str = include_str!("../assets/npmrc");
const START_SH: &str = include_str!("../assets/start.sh");
const NODE_CONFIG: &str = include_str!("../assets/node.yaml");
const NGINX_CONFIG: &str = include_str!("../assets/nginx.yaml");
const PACKAGES_CONFIG: &str = include_str!("../assets/packages.yaml");
const GRACEFUL_SHUTDOWN_CONFIG: &str = include_str!("../assets/graceful_shutdown.yaml");
const ENV_CONFIG: &str = include_str!("../assets/env.yaml");
const ADDFILES_CONFIG: &str = include_str!("../assets/addfiles.yaml");
const HEALTH_CHECK_JS: &str = include_str!("../assets/health-check.js");

/// Stage the full bundle tree for one build
pub fn stage(config: &BundleConfig) -> Result<()> {
    let bundle = config.bundle_dir();

    ui::step("Staging Bundle");

    reset_bundle_dir(&bundle)?;

    stage_base_files(config, &bundle)?;
    stage_fragments(config, &bundle)?;
    stage_overrides(config, &bundle)?;

    Ok(())
}

/// Every build starts from an empty staging tree
fn reset_bundle_dir(bundle: &Path) -> Result<()> {
    match std::fs::remove_dir_all(bundle) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            return Err(EbstageError::FileWriteFailed {
                path: bundle.display().to_string(),
                reason: e.to_string(),
            });
        }
    }

    std::fs::create_dir_all(bundle).map_err(|e| EbstageError::FileWriteFailed {
        path: bundle.display().to_string(),
        reason: e.to_string(),
    })
}

fn stage_base_files(config: &BundleConfig, bundle: &Path) -> Result<()> {
    let mut context = Context::new();
    context.insert("name", &config.name);
    context.insert("version", &config.version);
    template::render_to_file("package.json", PACKAGE_JSON, &bundle.join("package.json"), &context)?;

    let empty = Context::new();
    template::render_to_file("npmrc", NPMRC, &bundle.join(".npmrc"), &empty)?;
    template::render_to_file("start.sh", START_SH, &bundle.join("start.sh"), &empty)?;

    ensure_dir(&bundle.join(".ebextensions"));
    ensure_dir(&bundle.join(".platform/nginx/conf.d"));

    let versions = RuntimeVersions::detect(&config.path);
    let mut context = Context::new();
    context.insert("node_version", &versions.node_version);
    context.insert("npm_version", &versions.npm_version);
    template::render_to_file(
        "node.yaml",
        NODE_CONFIG,
        &bundle.join(".ebextensions/node.config"),
        &context,
    )?;

    let mut context = Context::new();
    context.insert("force_ssl", &config.force_ssl);
    template::render_to_file(
        "nginx.yaml",
        NGINX_CONFIG,
        &bundle.join(".ebextensions/nginx.config"),
        &context,
    )?;

    template::render_to_file(
        "health-check.js",
        HEALTH_CHECK_JS,
        &bundle.join("health-check.js"),
        &Context::new(),
    )?;

    Ok(())
}

fn stage_fragments(config: &BundleConfig, bundle: &Path) -> Result<()> {
    if !config.yum_packages.is_empty() {
        let mut context = Context::new();
        context.insert("packages", &config.yum_packages);
        template::render_to_file(
            "packages.yaml",
            PACKAGES_CONFIG,
            &bundle.join(".ebextensions/packages.config"),
            &context,
        )?;
    }

    if config.graceful_shutdown {
        template::render_to_file(
            "graceful_shutdown.yaml",
            GRACEFUL_SHUTDOWN_CONFIG,
            &bundle.join(".ebextensions/graceful_shutdown.config"),
            &Context::new(),
        )?;
    }

    if config.long_env_vars {
        let mut context = Context::new();
        context.insert("bucket_name", &names::env_bucket(&config.name));
        template::render_to_file(
            "env.yaml",
            ENV_CONFIG,
            &bundle.join(".ebextensions/env.config"),
            &context,
        )?;
    }

    if !config.additional_files.is_empty() {
        let mut context = Context::new();
        context.insert("additional_files", &config.additional_files);
        template::render_to_file(
            "addfiles.yaml",
            ADDFILES_CONFIG,
            &bundle.join(".ebextensions/addfiles.config"),
            &context,
        )?;
    }

    Ok(())
}

fn stage_overrides(config: &BundleConfig, bundle: &Path) -> Result<()> {
    let custom_config = config.path.join(".ebextensions");
    if custom_config.exists() {
        ui::detail(&format!(
            "Copying custom config files from {}",
            custom_config.display()
        ));
        let entries = std::fs::read_dir(&custom_config).map_err(|e| EbstageError::FileReadFailed {
            path: custom_config.display().to_string(),
            reason: e.to_string(),
        })?;
        for entry in entries {
            let entry = entry.map_err(|e| EbstageError::FileReadFailed {
                path: custom_config.display().to_string(),
                reason: e.to_string(),
            })?;
            template::render_file_to_file(
                &entry.path(),
                &bundle.join(".ebextensions").join(entry.file_name()),
            )?;
        }
    }

    let platform_dir = config.path.join(".platform");
    ui::detail(&format!(
        "Copying custom config files from {}",
        platform_dir.display()
    ));
    copy_dir_recursive(&platform_dir, bundle.join(".platform")).map_err(|e| {
        EbstageError::FileWriteFailed {
            path: bundle.join(".platform").display().to_string(),
            reason: e.to_string(),
        }
    })?;

    Ok(())
}

/// Directory creation is best-effort; an existing directory is fine and any
/// other failure surfaces later as a write error on the files inside it.
fn ensure_dir(path: &Path) {
    if let Err(e) = std::fs::create_dir_all(path) {
        ui::warn(&format!("could not create {}: {e}", path.display()));
    }
}
