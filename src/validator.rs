//! Repository validation.
//!
//! Independent of generation: loads the palette on its own, checks its shape,
//! checks that the expected directories exist and that every present template
//! only references placeholders the palette can fill. Findings are split into
//! errors (fail the run) and warnings (reported only).

use std::collections::BTreeSet;
use std::path::Path;
use tokio::fs;

use crate::generator::read_template;
use crate::palette::{
    resolve_colors, Contrast, Mode, Palette, ACCENT_ROLES, ANSI_ROLES, BASE_ROLES, GRAY_ROLES, PALETTE_PATH,
};
use crate::registry::TOOLS;
use crate::template::unresolved;
use crate::terminal;

/// Top-level sections the palette must define
const REQUIRED_SECTIONS: &[&str] = &["variants", "accents", "grays"];

/// Directories expected at the repository root
pub const REQUIRED_DIRS: &[&str] = &["palettes", "terminals", "cli", "editors", "web", "docs", "verify"];

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Only errors fail validation
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn print(&self) {
        terminal::print_section("Validation Results:");

        if !self.errors.is_empty() {
            terminal::print_section("Errors:");
            for error in &self.errors {
                terminal::print_item(error);
            }
        }

        if !self.warnings.is_empty() {
            terminal::print_section("Warnings:");
            for warning in &self.warnings {
                terminal::print_item(warning);
            }
        }

        println!();
        if self.is_ok() {
            terminal::print_success("Validation passed!");
        } else {
            terminal::print_error("Validation failed!");
        }
    }
}

/// Run every check against the repository at `root`
pub async fn validate(root: &Path) -> ValidationReport {
    let mut report = ValidationReport::default();

    let palette = validate_palette(root, &mut report).await;
    validate_file_structure(root, &mut report);

    if let Some(ref palette) = palette {
        validate_templates(root, palette, &mut report).await;
    }

    report
}

async fn validate_palette(root: &Path, report: &mut ValidationReport) -> Option<Palette> {
    let path = root.join(PALETTE_PATH);

    let content = match fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(e) => {
            report.error(format!("Palette validation failed: cannot read {}: {}", path.display(), e));
            return None;
        }
    };

    let value: serde_json::Value = match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            report.error(format!("Palette validation failed: {}", e));
            return None;
        }
    };

    let missing: Vec<&str> = REQUIRED_SECTIONS
        .iter()
        .copied()
        .filter(|section| value.get(section).is_none())
        .collect();
    if !missing.is_empty() {
        report.error(format!("Palette missing required sections: {}", missing.join(", ")));
        return None;
    }

    let palette: Palette = match serde_json::from_value(value) {
        Ok(palette) => palette,
        Err(e) => {
            report.error(format!("Palette validation failed: {}", e));
            return None;
        }
    };

    let errors_before = report.errors.len();
    check_palette_roles(&palette, report);
    if report.errors.len() == errors_before {
        terminal::print_success("Palette structure valid");
    }

    Some(palette)
}

/// Check that every variant and role the generator looks up is present
pub fn check_palette_roles(palette: &Palette, report: &mut ValidationReport) {
    for mode in Mode::ALL {
        for contrast in Contrast::ALL {
            match palette
                .variants
                .get(mode.as_str())
                .and_then(|contrasts| contrasts.get(contrast.as_str()))
            {
                None => report.error(format!("Palette has no variant {}-{}", mode, contrast)),
                Some(base) => {
                    for role in BASE_ROLES.iter().filter(|role| !base.contains_key(**role)) {
                        report.error(format!("Variant {}-{} is missing '{}'", mode, contrast, role));
                    }
                }
            }
        }

        match palette.grays.get(mode.as_str()) {
            None => report.error(format!("Palette has no grays for {}", mode)),
            Some(grays) => {
                for role in GRAY_ROLES.iter().filter(|role| !grays.contains_key(**role)) {
                    report.error(format!("Grays for {} are missing '{}'", mode, role));
                }
            }
        }
    }

    for role in ACCENT_ROLES.iter().filter(|role| !palette.accents.contains_key(**role)) {
        report.error(format!("Accents are missing '{}'", role));
    }

    match palette.ansi {
        None => report.warning("Palette has no ansi section; ansi_* placeholders will not resolve"),
        Some(ref ansi) => {
            let missing: Vec<&str> = ANSI_ROLES
                .iter()
                .copied()
                .filter(|role| !ansi.contains_key(*role))
                .collect();
            if !missing.is_empty() {
                report.warning(format!("ANSI section is missing: {}", missing.join(", ")));
            }
        }
    }
}

fn validate_file_structure(root: &Path, report: &mut ValidationReport) {
    for dir in REQUIRED_DIRS {
        if root.join(dir).is_dir() {
            tracing::debug!(dir, "directory exists");
        } else {
            report.warning(format!("Directory {} missing - will be created during generation", dir));
        }
    }
}

/// Check present templates for undefined placeholders and missing outputs
async fn validate_templates(root: &Path, palette: &Palette, report: &mut ValidationReport) {
    for tool in TOOLS {
        let template_file = tool.display_path(tool.template);

        let template = match read_template(&tool.template_path(root)).await {
            Ok(Some(template)) => template,
            Ok(None) => continue,
            Err(e) => {
                report.error(e.to_string());
                continue;
            }
        };

        let mut undefined = BTreeSet::new();
        let mut not_generated = Vec::new();

        for mode in Mode::ALL {
            for contrast in Contrast::ALL {
                if let Ok(colors) = resolve_colors(palette, mode.as_str(), contrast.as_str()) {
                    undefined.extend(unresolved(&template, &colors));
                }
                if !tool.output_path(root, mode, contrast).exists() {
                    not_generated.push(format!("{}-{}", mode, contrast));
                }
            }
        }

        if !undefined.is_empty() {
            let names: Vec<&str> = undefined.into_iter().collect();
            report.error(format!(
                "{} references undefined placeholders: {}",
                template_file,
                names.join(", ")
            ));
        }

        if !not_generated.is_empty() {
            report.warning(format!(
                "{} has no output for {} (run generate)",
                template_file,
                not_generated.join(", ")
            ));
        }
    }
}
