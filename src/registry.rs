//! Static table of every template the generator knows about.
//!
//! Adding a tool means adding a row; the fan-out is driven entirely by this
//! table.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::palette::{Contrast, Mode};

/// Platform category, which is also the top-level directory of its tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Terminal,
    Editor,
    Web,
    Cli,
}

impl Category {
    pub const ALL: [Category; 4] = [Category::Terminal, Category::Editor, Category::Web, Category::Cli];

    pub fn dir(self) -> &'static str {
        match self {
            Category::Terminal => "terminals",
            Category::Editor => "editors",
            Category::Web => "web",
            Category::Cli => "cli",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir())
    }
}

/// How the output file of a tool is named for a variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputName {
    /// `everforest.conf` -> `everforest-dark-medium.conf`
    Suffixed(&'static str),
    /// `("everforest", "fish")` -> `everforest-dark-medium.fish`
    PerVariant(&'static str, &'static str),
}

impl OutputName {
    pub fn for_variant(self, mode: Mode, contrast: Contrast) -> String {
        match self {
            OutputName::Suffixed(file) => variant_file_name(file, mode, contrast),
            OutputName::PerVariant(prefix, ext) => format!("{}-{}-{}.{}", prefix, mode, contrast, ext),
        }
    }
}

/// Insert `-<mode>-<contrast>` between a file's stem and its extension.
///
/// Dotfiles such as `.ripgreprc` have no extension and get the suffix appended.
pub fn variant_file_name(file: &str, mode: Mode, contrast: Contrast) -> String {
    let path = Path::new(file);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| file.to_string());

    match path.extension() {
        Some(ext) => format!("{}-{}-{}.{}", stem, mode, contrast, ext.to_string_lossy()),
        None => format!("{}-{}-{}", stem, mode, contrast),
    }
}

/// What to do when a tool's template file does not exist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingTemplate {
    /// Generate nothing for the tool
    Skip,
    /// Emit a basic stylesheet of `--everforest-*` custom properties
    BasicCss,
}

/// One template-to-output registration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolDescriptor {
    pub category: Category,
    pub name: &'static str,
    pub template: &'static str,
    pub output: OutputName,
    pub on_missing: MissingTemplate,
}

impl ToolDescriptor {
    const fn new(category: Category, name: &'static str, template: &'static str, output: &'static str) -> Self {
        Self {
            category,
            name,
            template,
            output: OutputName::Suffixed(output),
            on_missing: MissingTemplate::Skip,
        }
    }

    /// `<root>/<category>/<name>`
    pub fn dir(&self, root: &Path) -> PathBuf {
        root.join(self.category.dir()).join(self.name)
    }

    pub fn template_path(&self, root: &Path) -> PathBuf {
        self.dir(root).join(self.template)
    }

    pub fn output_path(&self, root: &Path, mode: Mode, contrast: Contrast) -> PathBuf {
        self.dir(root).join(self.output.for_variant(mode, contrast))
    }

    /// `<category>/<name>/<file>`, for reporting
    pub fn display_path(&self, file: &str) -> String {
        format!("{}/{}/{}", self.category.dir(), self.name, file)
    }
}

use Category::{Cli, Editor, Terminal, Web};

pub const TOOLS: &[ToolDescriptor] = &[
    // Terminals
    ToolDescriptor::new(Terminal, "alacritty", "template.yml", "everforest.yml"),
    ToolDescriptor::new(Terminal, "kitty", "template.conf", "everforest.conf"),
    ToolDescriptor::new(Terminal, "wezterm", "template.lua", "everforest.lua"),
    ToolDescriptor::new(Terminal, "windows-terminal", "template.json", "everforest.json"),
    ToolDescriptor::new(Terminal, "ghostty", "template.conf", "everforest.conf"),
    // Editors
    ToolDescriptor::new(Editor, "vim-nvim", "template.lua", "everforest.lua"),
    ToolDescriptor::new(Editor, "vscode", "template.json", "everforest-theme.json"),
    ToolDescriptor::new(Editor, "jetbrains", "template.xml", "everforest.xml"),
    ToolDescriptor::new(Editor, "zed", "template.json", "everforest.json"),
    ToolDescriptor::new(Editor, "sublime", "template.tmTheme", "everforest.tmTheme"),
    // Web
    ToolDescriptor {
        category: Web,
        name: "css",
        template: "template.css",
        output: OutputName::PerVariant("everforest", "css"),
        on_missing: MissingTemplate::BasicCss,
    },
    // CLI tools
    ToolDescriptor::new(Cli, "starship", "template.txt", "starship.toml"),
    ToolDescriptor::new(Cli, "fzf", "template.txt", "everforest.sh"),
    ToolDescriptor::new(Cli, "delta", "template.txt", "gitconfig.delta"),
    ToolDescriptor::new(Cli, "tmux", "template.txt", "everforest.tmux.conf"),
    ToolDescriptor::new(Cli, "ls_colors", "template.txt", "everforest.sh"),
    ToolDescriptor::new(Cli, "bat", "template.txt", "everforest.tmTheme"),
    ToolDescriptor::new(Cli, "eza", "template.txt", "everforest.sh"),
    ToolDescriptor::new(Cli, "ripgrep", "template.txt", ".ripgreprc"),
    ToolDescriptor::new(Cli, "zsh", "template.txt", "everforest.zsh"),
    ToolDescriptor::new(Cli, "htop", "template.txt", "htoprc"),
    ToolDescriptor::new(Cli, "btop", "template.txt", "everforest.theme"),
    ToolDescriptor::new(Cli, "bottom", "template.txt", "bottom.toml"),
    ToolDescriptor::new(Cli, "atuin", "template.txt", "config.toml"),
    ToolDescriptor::new(Cli, "fd", "template.txt", "config"),
    ToolDescriptor::new(Cli, "gitui", "template.txt", "theme.ron"),
    ToolDescriptor::new(Cli, "glances", "template.txt", "glances.conf"),
    ToolDescriptor::new(Cli, "jq", "template.txt", "jq-colors.sh"),
    ToolDescriptor::new(Cli, "lazygit", "template.txt", "config.yml"),
    ToolDescriptor::new(Cli, "less", "template.txt", "lesskey"),
    ToolDescriptor::new(Cli, "lf", "template.txt", "colors"),
    ToolDescriptor::new(Cli, "mc", "template.txt", "everforest.ini"),
    ToolDescriptor::new(Cli, "neofetch", "template.txt", "config.conf"),
    ToolDescriptor::new(Cli, "ranger", "template.txt", "colorscheme.py"),
    ToolDescriptor::new(Cli, "tig", "template.txt", "config"),
    ToolDescriptor::new(Cli, "zoxide", "template.txt", "zoxide.sh"),
    // Fish flavours of shell integrations
    ToolDescriptor::new(Cli, "fzf", "template.fish", "everforest.fish"),
    ToolDescriptor::new(Cli, "eza", "template.fish", "everforest.fish"),
    ToolDescriptor::new(Cli, "ls_colors", "template.fish", "everforest.fish"),
    ToolDescriptor {
        category: Cli,
        name: "fish",
        template: "colors-template.txt",
        output: OutputName::PerVariant("everforest", "fish"),
        on_missing: MissingTemplate::Skip,
    },
];

/// Registered tools of one category, in table order
pub fn tools_in(category: Category) -> impl Iterator<Item = &'static ToolDescriptor> {
    TOOLS.iter().filter(move |tool| tool.category == category)
}
