//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use kguide_core::{Advertisement, CategoryListEntry, Translation, User};

/// Fallback glyph when a category carries no icon
const DEFAULT_ICON: &str = "•";

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Check if output is in quiet mode
    pub fn is_quiet(&self) -> bool {
        matches!(self.format, OutputFormat::Quiet)
    }

    /// Check if output is in JSON mode
    pub fn is_json(&self) -> bool {
        matches!(self.format, OutputFormat::Json)
    }

    /// Print the resolved category list
    pub fn print_category_list(&self, entries: &[CategoryListEntry]) {
        match self.format {
            OutputFormat::Human => {
                if entries.is_empty() {
                    println!("No categories found.");
                    return;
                }
                for entry in entries {
                    let icon = if entry.icon.is_empty() {
                        DEFAULT_ICON
                    } else {
                        &entry.icon
                    };
                    let title = if entry.title.is_empty() {
                        "(untranslated)"
                    } else {
                        &entry.title
                    };
                    println!(
                        "{:>3} | {} {:<22} | {}",
                        entry.order,
                        icon,
                        entry.id,
                        truncate(title, 40)
                    );
                }
                println!("\n{} categor(ies)", entries.len());
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(entries).unwrap());
            }
            OutputFormat::Quiet => {
                for entry in entries {
                    println!("{}", entry.id);
                }
            }
        }
    }

    /// Print one category's translated content (or its absence)
    pub fn print_category_detail(&self, detail: Option<&Translation>) {
        match self.format {
            OutputFormat::Human => match detail {
                Some(translation) => {
                    println!("{}", translation.title);
                    if !translation.subtitle.is_empty() {
                        println!("{}", translation.subtitle);
                    }
                    println!();
                    println!("{}", translation.overview);

                    for section in &translation.sections {
                        println!();
                        println!("── {} ──", section.heading);
                        if !section.body.is_empty() {
                            println!("{}", section.body);
                        }
                        for link in &section.links {
                            println!("🔗 {}: {}", link.name, link.url);
                        }
                    }
                }
                None => println!("No content found."),
            },
            OutputFormat::Json => match detail {
                Some(translation) => {
                    println!("{}", serde_json::to_string_pretty(translation).unwrap());
                }
                None => println!("null"),
            },
            OutputFormat::Quiet => {
                if let Some(translation) = detail {
                    println!("{}", translation.category_id);
                }
            }
        }
    }

    /// Print an ad set
    pub fn print_ads(&self, ads: &[Advertisement]) {
        match self.format {
            OutputFormat::Human => {
                if ads.is_empty() {
                    println!("No ads to display.");
                    return;
                }
                for ad in ads {
                    println!(
                        "{:>3} | {} | {}",
                        ad.position,
                        truncate(&ad.text, 45),
                        truncate(&ad.link_url, 40)
                    );
                }
                println!("\n{} ad(s)", ads.len());
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(ads).unwrap());
            }
            OutputFormat::Quiet => {
                for ad in ads {
                    println!("{}", ad.id);
                }
            }
        }
    }

    /// Print a user record
    pub fn print_user(&self, user: &User) {
        match self.format {
            OutputFormat::Human => {
                println!("Signed in as: {}", user.display_name());
                println!("  Open ID: {}", user.open_id);
                if let Some(ref email) = user.email {
                    println!("  Email:   {}", email);
                }
                println!("  Role:    {}", user.role.as_str());
                println!(
                    "  Last signed in: {}",
                    user.last_signed_in.format("%Y-%m-%d %H:%M")
                );
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(user).unwrap());
            }
            OutputFormat::Quiet => {
                println!("{}", user.open_id);
            }
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("✓ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Print an informational message
    pub fn message(&self, msg: &str) {
        match self.format {
            OutputFormat::Human => println!("{}", msg),
            OutputFormat::Json => {
                println!("{}", serde_json::json!({"message": msg}));
            }
            OutputFormat::Quiet => {}
        }
    }
}

/// Truncate a string to max length, adding "..." if truncated
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
