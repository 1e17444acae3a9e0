//! Banner, current-organization line, and numbered menu.

use std::io::{self, Write};

use switcher_core::{format_group_name, Group, GroupRegistry};

const BOLD_GREEN: &str = "\x1b[1;32m";
const RESET: &str = "\x1b[0m";

/// Prints the boxed program title followed by a blank line.
pub fn render_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "╔═══════════════════════════════════════════════════════╗")?;
    writeln!(out, "║          AWS Account Organization Switcher            ║")?;
    writeln!(out, "╚═══════════════════════════════════════════════════════╝")?;
    writeln!(out)
}

/// Prints the active organization, or nothing when none is active.
pub fn render_current<W: Write>(out: &mut W, active: Option<&Group>) -> io::Result<()> {
    match active {
        Some(group) => writeln!(
            out,
            "📍 Current active organization: {BOLD_GREEN}{}{RESET}\n",
            format_group_name(&group.name)
        ),
        None => Ok(()),
    }
}

/// Prints one numbered line per group; active groups are ticked.
pub fn render_entries<W: Write>(out: &mut W, registry: &GroupRegistry) -> io::Result<()> {
    for (index, group) in registry.iter().enumerate() {
        let indicator = if group.active { "✓ " } else { "  " };
        writeln!(
            out,
            "{indicator}{}. {}",
            index + 1,
            format_group_name(&group.name)
        )?;
    }
    Ok(())
}

/// Prints the selection heading, the entries, and the input prompt.
///
/// The prompt has no trailing newline, so the output is flushed.
pub fn render_menu<W: Write>(out: &mut W, registry: &GroupRegistry) -> io::Result<()> {
    writeln!(out, "Select the organization you want to activate:")?;
    writeln!(out)?;
    render_entries(out, registry)?;
    writeln!(out)?;
    write!(
        out,
        "Enter your choice (1-{}) or 'q' to quit: ",
        registry.len()
    )?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use switcher_core::locate_groups;

    fn registry() -> GroupRegistry {
        let lines = [
            "## BEGIN COMPANY_A",
            "#[profile default]",
            "## END COMPANY_A",
            "## BEGIN PERSONAL",
            "[profile default]",
            "## END PERSONAL",
        ];
        locate_groups(&lines, &["COMPANY_A", "PERSONAL"])
    }

    fn rendered(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).expect("writing to a Vec cannot fail");
        String::from_utf8(buf).expect("utf-8 output")
    }

    #[test]
    fn test_banner_has_title() {
        let text = rendered(|out| render_banner(out));
        assert!(text.contains("AWS Account Organization Switcher"));
        assert!(text.ends_with("\n\n"));
    }

    #[test]
    fn test_current_shows_formatted_name() {
        let reg = registry();
        let text = rendered(|out| render_current(out, reg.current_active()));
        assert!(text.contains("Current active organization"));
        assert!(text.contains("Personal"));
    }

    #[test]
    fn test_current_prints_nothing_without_active_group() {
        let text = rendered(|out| render_current(out, None));
        assert!(text.is_empty());
    }

    #[test]
    fn test_menu_numbers_entries_and_ticks_active() {
        // Arrange
        let reg = registry();

        // Act
        let text = rendered(|out| render_menu(out, &reg));

        // Assert
        assert!(text.contains("  1. Company A\n"));
        assert!(text.contains("✓ 2. Personal\n"));
        assert!(text.ends_with("Enter your choice (1-2) or 'q' to quit: "));
    }
}
