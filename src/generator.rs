//! Variant fan-out.
//!
//! For each of the six (mode, contrast) variants the palette is flattened into
//! a [`ColorMap`] once, then every registered template is substituted, has its
//! header annotated and is written next to the template under a
//! variant-qualified name.
//!
//! Failures are contained per tool: one unreadable template or unwritable
//! output is reported and the fan-out moves on to the next tool.

use std::fmt;
use std::path::Path;
use tokio::fs;

use crate::error::ThemeError;
use crate::header::annotate_header;
use crate::palette::{resolve_colors, ColorMap, Contrast, Mode, Palette, ACCENT_ROLES, BASE_ROLES, GRAY_ROLES};
use crate::registry::{tools_in, Category, MissingTemplate, ToolDescriptor};
use crate::template::substitute;
use crate::terminal;
use crate::writer::write_output;

/// Result of processing one tool for one variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Written from the tool's template
    Generated(String),
    /// Template absent, fallback content written instead
    Fallback(String),
    /// Template absent, nothing written
    Skipped,
    /// Processing failed; the reason is kept for the report
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct ToolResult {
    pub tool: &'static ToolDescriptor,
    pub mode: Mode,
    pub contrast: Contrast,
    pub outcome: Outcome,
}

impl ToolResult {
    pub fn variant(&self) -> String {
        format!("{}-{}", self.mode, self.contrast)
    }
}

/// Everything one generation run did
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub results: Vec<ToolResult>,
}

impl GenerationReport {
    pub fn generated_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, Outcome::Generated(_) | Outcome::Fallback(_)))
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.results.iter().filter(|r| r.outcome == Outcome::Skipped).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &ToolResult> {
        self.results.iter().filter(|r| matches!(r.outcome, Outcome::Failed(_)))
    }

    fn extend(&mut self, other: GenerationReport) {
        self.results.extend(other.results);
    }
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} files generated, {} skipped, {} failed",
            self.generated_count(),
            self.skipped_count(),
            self.failures().count()
        )
    }
}

/// Generate every registered tool for all six variants.
///
/// All color mappings are resolved before anything is written, so a palette
/// missing a variant fails the run without producing partial output.
pub async fn generate_all(root: &Path, palette: &Palette) -> Result<GenerationReport, ThemeError> {
    let mut variants = Vec::with_capacity(Mode::ALL.len() * Contrast::ALL.len());
    for mode in Mode::ALL {
        for contrast in Contrast::ALL {
            let colors = resolve_colors(palette, mode.as_str(), contrast.as_str())?;
            variants.push((mode, contrast, colors));
        }
    }

    let mut report = GenerationReport::default();
    for (mode, contrast, colors) in &variants {
        report.extend(render_variant(root, *mode, *contrast, colors).await);
    }

    Ok(report)
}

/// Generate every registered tool for a single variant
pub async fn generate_variant(
    root: &Path,
    palette: &Palette,
    mode: Mode,
    contrast: Contrast,
) -> Result<GenerationReport, ThemeError> {
    let colors = resolve_colors(palette, mode.as_str(), contrast.as_str())?;
    Ok(render_variant(root, mode, contrast, &colors).await)
}

async fn render_variant(root: &Path, mode: Mode, contrast: Contrast, colors: &ColorMap) -> GenerationReport {
    let variant = format!("{}-{}", mode, contrast);
    tracing::info!(%variant, colors = colors.len(), "generating variant");
    terminal::print_variant_header(&variant);

    let mut report = GenerationReport::default();
    for category in Category::ALL {
        tracing::debug!(%category, %variant, "processing category");
        for tool in tools_in(category) {
            report.results.push(render_tool(root, tool, mode, contrast, colors).await);
        }
    }

    report
}

async fn render_tool(
    root: &Path,
    tool: &'static ToolDescriptor,
    mode: Mode,
    contrast: Contrast,
    colors: &ColorMap,
) -> ToolResult {
    let variant = format!("{}-{}", mode, contrast);
    let outcome = match process_tool(root, tool, mode, contrast, colors).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::debug!(tool = tool.name, %variant, error = ?e, "tool failed");
            Outcome::Failed(e.to_string())
        }
    };

    match &outcome {
        Outcome::Generated(file) => terminal::print_success(&format!("Generated {}", file)),
        Outcome::Fallback(file) => terminal::print_success(&format!("Generated {} (basic)", file)),
        Outcome::Skipped => {
            tracing::debug!(tool = tool.name, template = tool.template, %variant, "no template, skipping");
        }
        Outcome::Failed(reason) => {
            terminal::print_error(&format!("Failed to process {} ({}): {}", tool.name, variant, reason));
        }
    }

    ToolResult {
        tool,
        mode,
        contrast,
        outcome,
    }
}

/// Substitute, annotate and write one tool's template for one variant
pub async fn process_tool(
    root: &Path,
    tool: &ToolDescriptor,
    mode: Mode,
    contrast: Contrast,
    colors: &ColorMap,
) -> Result<Outcome, ThemeError> {
    let output_name = tool.output.for_variant(mode, contrast);
    let output_path = tool.dir(root).join(&output_name);
    let display = tool.display_path(&output_name);

    let Some(template) = read_template(&tool.template_path(root)).await? else {
        return match tool.on_missing {
            MissingTemplate::Skip => Ok(Outcome::Skipped),
            MissingTemplate::BasicCss => {
                write_output(&output_path, &basic_css(colors, mode, contrast)).await?;
                Ok(Outcome::Fallback(display))
            }
        };
    };

    let processed = annotate_header(&substitute(&template, colors), mode.as_str(), contrast.as_str());
    write_output(&output_path, &processed).await?;

    Ok(Outcome::Generated(display))
}

/// Read a template, treating a missing file as `None`
pub async fn read_template(path: &Path) -> Result<Option<String>, ThemeError> {
    match fs::read_to_string(path).await {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(ThemeError::template_read(path, e)),
    }
}

/// Stylesheet of `--everforest-*` custom properties for one variant
pub fn basic_css(colors: &ColorMap, mode: Mode, contrast: Contrast) -> String {
    let mut css = String::new();
    css.push_str(&format!("/* Everforest {}-{} theme for CSS */\n", mode, contrast));
    css.push_str("/* Generated from template - do not edit manually */\n\n");
    css.push_str(":root {\n");
    css.push_str(&format!("  /* Everforest {}-{} color variables */\n", mode, contrast));

    for role in BASE_ROLES.iter().chain(ACCENT_ROLES).chain(GRAY_ROLES) {
        if let Some(value) = colors.get(*role) {
            css.push_str(&format!("  --everforest-{}: {};\n", role, value));
        }
    }

    css.push_str("}\n");
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PALETTE_PATH;
    use std::fs as std_fs;
    use std::path::PathBuf;

    fn palette_json() -> String {
        let variant = |bg: &str| {
            format!(r##"{{ "bg": "{bg}", "bg1": "{bg}1", "bg2": "{bg}2", "fg": "#d3c6aa" }}"##)
        };
        format!(
            r##"{{
                "variants": {{
                    "dark": {{ "hard": {}, "medium": {}, "soft": {} }},
                    "light": {{ "hard": {}, "medium": {}, "soft": {} }}
                }},
                "accents": {{
                    "red": "#e67e80", "orange": "#e69875", "yellow": "#dbbc7f",
                    "green": "#a7c080", "aqua": "#83c092", "blue": "#7fbbb3", "purple": "#d699b6"
                }},
                "grays": {{
                    "dark": {{ "gray1": "#7a8478", "gray2": "#859289", "gray3": "#9da9a0" }},
                    "light": {{ "gray1": "#a6b0a0", "gray2": "#939f91", "gray3": "#829181" }}
                }},
                "ansi": {{ "red": "1", "bright_red": "9" }}
            }}"##,
            variant("#dh"),
            variant("#dm"),
            variant("#ds"),
            variant("#lh"),
            variant("#lm"),
            variant("#ls"),
        )
    }

    fn write(root: &Path, rel: &str, content: &[u8]) {
        let path = root.join(rel);
        std_fs::create_dir_all(path.parent().unwrap()).unwrap();
        std_fs::write(path, content).unwrap();
    }

    fn setup() -> (tempfile::TempDir, Palette) {
        let dir = tempfile::tempdir().unwrap();
        let json = palette_json();
        write(dir.path(), PALETTE_PATH, json.as_bytes());
        write(
            dir.path(),
            "terminals/kitty/template.conf",
            b"# Everforest theme for kitty\nbackground {{bg}}\nforeground {{fg}}\ncolor1 {{red}}\n",
        );
        write(
            dir.path(),
            "cli/starship/template.txt",
            b"# Everforest theme for starship\n[character]\nsuccess_symbol = \"[>](fg:{{green}})\"\nerror = \"{{ansi_red}}\"\n",
        );
        write(dir.path(), "web/css/template.css", b"/* Everforest theme */\n:root {\n  --everforest-bg: {{bg}};\n}\n");
        let palette = Palette::from_json(&json).unwrap();
        (dir, palette)
    }

    fn read(root: &Path, rel: &str) -> String {
        std_fs::read_to_string(root.join(rel)).unwrap()
    }

    #[tokio::test]
    async fn test_generate_all_variants() {
        let (dir, palette) = setup();
        let report = generate_all(dir.path(), &palette).await.unwrap();

        assert_eq!(report.results.len(), crate::registry::TOOLS.len() * 6);
        assert_eq!(report.generated_count(), 18);
        assert_eq!(report.failures().count(), 0);

        for mode in Mode::ALL {
            for contrast in Contrast::ALL {
                let kitty = format!("terminals/kitty/everforest-{}-{}.conf", mode, contrast);
                assert!(dir.path().join(&kitty).is_file(), "missing {}", kitty);
                let css = format!("web/css/everforest-{}-{}.css", mode, contrast);
                assert!(dir.path().join(&css).is_file(), "missing {}", css);
            }
        }

        let kitty = read(dir.path(), "terminals/kitty/everforest-dark-medium.conf");
        assert_eq!(
            kitty,
            "# Everforest dark-medium theme for kitty\nbackground #dm\nforeground #d3c6aa\ncolor1 #e67e80\n"
        );

        let starship = read(dir.path(), "cli/starship/starship-light-soft.toml");
        assert!(starship.starts_with("# Everforest light-soft theme for starship\n"));
        assert!(starship.contains("fg:#a7c080"));
        assert!(starship.contains("error = \"1\""));

        let css = read(dir.path(), "web/css/everforest-light-hard.css");
        assert_eq!(css, "/* Everforest light-hard theme */\n:root {\n  --everforest-bg: #lh;\n}\n");
    }

    #[tokio::test]
    async fn test_missing_template_is_skipped() {
        let (dir, palette) = setup();
        let report = generate_all(dir.path(), &palette).await.unwrap();

        let htop_dir = dir.path().join("cli/htop");
        assert!(!htop_dir.exists());
        let htop: Vec<_> = report.results.iter().filter(|r| r.tool.name == "htop").collect();
        assert_eq!(htop.len(), 6);
        assert!(htop.iter().all(|r| r.outcome == Outcome::Skipped));
    }

    #[tokio::test]
    async fn test_generation_is_idempotent() {
        let (dir, palette) = setup();
        let outputs: Vec<PathBuf> = ["terminals/kitty/everforest-dark-hard.conf", "cli/starship/starship-light-medium.toml"]
            .iter()
            .map(|rel| dir.path().join(rel))
            .collect();

        generate_all(dir.path(), &palette).await.unwrap();
        let first: Vec<Vec<u8>> = outputs.iter().map(|p| std_fs::read(p).unwrap()).collect();

        generate_all(dir.path(), &palette).await.unwrap();
        let second: Vec<Vec<u8>> = outputs.iter().map(|p| std_fs::read(p).unwrap()).collect();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_bad_template_does_not_stop_the_run() {
        let (dir, palette) = setup();
        write(dir.path(), "cli/bat/template.txt", &[0xff, 0xfe, 0x00, 0x80]);
        write(dir.path(), "cli/zoxide/template.txt", b"# Everforest theme for zoxide\nexport _ZO_FZF_OPTS='--color=fg:{{fg}}'\n");

        let report = generate_variant(dir.path(), &palette, Mode::Dark, Contrast::Hard).await.unwrap();

        let failures: Vec<_> = report.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].tool.name, "bat");
        assert_eq!(failures[0].variant(), "dark-hard");
        match &failures[0].outcome {
            Outcome::Failed(reason) => assert!(reason.contains("cli/bat/template.txt")),
            other => panic!("unexpected outcome {:?}", other),
        }

        assert!(dir.path().join("terminals/kitty/everforest-dark-hard.conf").is_file());
        // zoxide comes after bat in the table
        let zoxide = read(dir.path(), "cli/zoxide/zoxide-dark-hard.sh");
        assert_eq!(zoxide, "# Everforest dark-hard theme for zoxide\nexport _ZO_FZF_OPTS='--color=fg:#d3c6aa'\n");
    }

    #[tokio::test]
    async fn test_basic_css_fallback() {
        let (dir, palette) = setup();
        std_fs::remove_file(dir.path().join("web/css/template.css")).unwrap();

        let report = generate_variant(dir.path(), &palette, Mode::Light, Contrast::Medium).await.unwrap();
        let css_result = report.results.iter().find(|r| r.tool.name == "css").unwrap();
        assert_eq!(
            css_result.outcome,
            Outcome::Fallback("web/css/everforest-light-medium.css".to_string())
        );

        let css = read(dir.path(), "web/css/everforest-light-medium.css");
        assert!(css.starts_with("/* Everforest light-medium theme for CSS */\n"));
        assert!(css.contains("  --everforest-bg: #lm;\n"));
        assert!(css.contains("  --everforest-purple: #d699b6;\n"));
        assert!(css.contains("  --everforest-gray3: #829181;\n"));
    }

    #[tokio::test]
    async fn test_missing_variant_fails_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "terminals/kitty/template.conf", b"background {{bg}}\n");
        let palette = Palette::from_json(
            r##"{
                "variants": { "dark": { "hard": { "bg": "#000" } } },
                "accents": {},
                "grays": {}
            }"##,
        )
        .unwrap();

        let err = generate_all(dir.path(), &palette).await.unwrap_err();
        assert!(matches!(err, ThemeError::UnknownVariant { .. }));
        assert_eq!(err.to_string(), "Palette has no variant dark-medium");
        assert!(!dir.path().join("terminals/kitty/everforest-dark-hard.conf").exists());
    }

    #[tokio::test]
    async fn test_read_template_distinguishes_absence() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_template(&dir.path().join("nope.txt")).await.unwrap().is_none());

        write(dir.path(), "t.txt", b"{{bg}}");
        assert_eq!(read_template(&dir.path().join("t.txt")).await.unwrap().as_deref(), Some("{{bg}}"));
    }
}
