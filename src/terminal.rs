use colored::Colorize;
use crate::colors;

/// Print the banner for a command run
pub fn print_banner(message: &str) {
    println!("{} {}",
             "🌲".truecolor(colors::GREEN.0, colors::GREEN.1, colors::GREEN.2),
             message.truecolor(colors::PURPLE.0, colors::PURPLE.1, colors::PURPLE.2).bold());
}

/// Print the heading for one variant of the fan-out
pub fn print_variant_header(variant: &str) {
    println!("\n{} {}",
             "[Variant:".truecolor(colors::AQUA.0, colors::AQUA.1, colors::AQUA.2),
             format!("{}]", variant).truecolor(colors::AQUA.0, colors::AQUA.1, colors::AQUA.2).bold());
}

/// Print a section heading in a report
pub fn print_section(title: &str) {
    println!("\n{}",
             title.truecolor(colors::ORANGE.0, colors::ORANGE.1, colors::ORANGE.2).bold());
}

/// Print a list item in a report
pub fn print_item(message: &str) {
    println!("  {} {}",
             "-".truecolor(colors::GRAY1.0, colors::GRAY1.1, colors::GRAY1.2),
             message.truecolor(colors::FG.0, colors::FG.1, colors::FG.2));
}

/// Print a dimmed detail line
pub fn print_detail(message: &str) {
    println!("  {}",
             message.truecolor(colors::GRAY2.0, colors::GRAY2.1, colors::GRAY2.2));
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{} {}",
             "ℹ️".truecolor(colors::BLUE.0, colors::BLUE.1, colors::BLUE.2),
             message.truecolor(colors::BLUE.0, colors::BLUE.1, colors::BLUE.2));
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}",
             "✓".truecolor(colors::GREEN.0, colors::GREEN.1, colors::GREEN.2),
             message.truecolor(colors::GREEN.0, colors::GREEN.1, colors::GREEN.2));
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}",
             "⚠️".truecolor(colors::YELLOW.0, colors::YELLOW.1, colors::YELLOW.2),
             message.truecolor(colors::YELLOW.0, colors::YELLOW.1, colors::YELLOW.2));
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}",
              "✗".truecolor(colors::RED.0, colors::RED.1, colors::RED.2),
              message.truecolor(colors::RED.0, colors::RED.1, colors::RED.2));
}
