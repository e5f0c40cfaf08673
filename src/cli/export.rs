//! Friend export command

use anyhow::Result;
use friend_circle::FriendRecord;
use std::{io::Write, path::PathBuf};
use tracing::debug;

use super::helpers::GlobalOptions;

/// Output formats, picked from the output file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExportFormat {
    Json,
    JsonLines,
    Markdown,
}

impl ExportFormat {
    fn from_output(output: Option<&str>) -> Self {
        match output {
            Some(path) if path.ends_with(".jsonl") => ExportFormat::JsonLines,
            Some(path) if path.ends_with(".md") || path.ends_with(".markdown") => {
                ExportFormat::Markdown
            }
            _ => ExportFormat::Json,
        }
    }
}

/// Handle friend export command
pub fn handle(output: Option<String>, globals: &GlobalOptions) -> Result<()> {
    if let Some(ref out_path) = output {
        debug!("Exporting friends to {}...", out_path);
    } else {
        debug!("Exporting friends to stdout...");
    }

    let circle = globals.open_circle()?;
    let records: Vec<FriendRecord> = circle.friends().iter().map(FriendRecord::from).collect();

    // Determine output format and destination
    let format = ExportFormat::from_output(output.as_deref());

    // Helper closure to write formatted output
    let write_output = |writer: &mut dyn Write| -> Result<()> {
        match format {
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(&records)?;
                writer.write_all(json.as_bytes())?;
                writer.write_all(b"\n")?;
            }
            ExportFormat::JsonLines => {
                for record in &records {
                    let json = serde_json::to_string(record)?;
                    writeln!(writer, "{}", json)?;
                }
            }
            ExportFormat::Markdown => {
                writeln!(writer, "# Friend Circle Export\n")?;
                writeln!(
                    writer,
                    "Exported {} friends on {}\n",
                    records.len(),
                    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
                )?;
                writeln!(writer, "---\n")?;

                for (i, record) in records.iter().enumerate() {
                    writeln!(writer, "## {}. {}\n", i + 1, record.name)?;
                    writeln!(writer, "**Gender**: {}", record.gender)?;
                    writeln!(writer, "**Total**: {}", record.total)?;
                    writeln!(writer, "**Category**: {}\n", record.category)?;
                    writeln!(writer, "| Criterion | Score |")?;
                    writeln!(writer, "|---|---|")?;
                    for score in &record.scores {
                        writeln!(writer, "| {} | {} |", score.criterion, score.score)?;
                    }
                    writeln!(writer, "\n---\n")?;
                }
            }
        }
        Ok(())
    };

    // Write to stdout or file
    match output {
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            write_output(&mut handle)?;
        }
        Some(path) => {
            let output_path = PathBuf::from(path);
            let mut file = std::fs::File::create(&output_path)?;
            write_output(&mut file)?;
            eprintln!(
                " Exported {} friends to {}",
                records.len(),
                output_path.display()
            );
        }
    }

    Ok(())
}
