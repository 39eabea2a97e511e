use crate::application::{Disposition, ImportReport};
use owo_colors::OwoColorize;

/// コマンド結果の 1 行サマリ
pub struct CommandSummary {
    pub prefix: String,
    pub message: String,
}

impl CommandSummary {
    /// インポート結果
    pub fn import(report: &ImportReport) -> Self {
        let verb = match report.disposition {
            Disposition::Installed => "Installed",
            Disposition::Updated => "Updated",
        };
        let warnings = report.warnings.len() + report.index_warning_count();
        let fields = format!("{} field(s) set", report.fields.len());

        if warnings > 0 {
            Self {
                prefix: "!".yellow().to_string(),
                message: format!(
                    "{} {} ({}, {} warning(s))",
                    verb,
                    report.mime_type.bold(),
                    fields,
                    warnings.yellow()
                ),
            }
        } else {
            Self {
                prefix: "✓".green().to_string(),
                message: format!("{} {} ({})", verb, report.mime_type.bold(), fields),
            }
        }
    }

    /// 一覧の問い合わせ結果
    pub fn list(found: usize, failed: usize) -> Self {
        match (found, failed) {
            (s, f) if f > 0 => Self {
                prefix: "✗".red().to_string(),
                message: format!("{} type(s) listed, {} query(ies) failed", s, f.red()),
            },
            (s, _) if s > 0 => Self {
                prefix: "✓".green().to_string(),
                message: format!("{} type(s) installed", s.green()),
            },
            _ => Self {
                prefix: "•".yellow().to_string(),
                message: "No entity or relation types installed".to_string(),
            },
        }
    }
}

impl std::fmt::Display for CommandSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.prefix, self.message)
    }
}

#[cfg(test)]
#[path = "output_test.rs"]
mod tests;
