//! CLI probe and terminal rendering shell.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `notecat_core` linkage.
//! - Exercise the renderer seam end-to-end against a real catalog file.
//!
//! Usage:
//! - `notecat_cli` — core wiring probe, deterministic output.
//! - `notecat_cli <catalog.json> [--profile TAG] [--compare NAME NAME [NAME]]`

use notecat_core::{
    load_catalog_from_path, AppEvent, NotebookCard, Renderer, TableModel, ValidationError,
    ViewController,
};

/// Plain-text rendering surface for the terminal.
#[derive(Default)]
struct TerminalRenderer;

impl Renderer for TerminalRenderer {
    fn show_list(&mut self, cards: &[NotebookCard]) {
        for card in cards {
            println!("* {}", card.name);
            if let Some(description) = &card.description {
                println!("    {description}");
            }
            println!("    profiles: {}", card.profiles.join(", "));
        }
    }

    fn show_no_results(&mut self) {
        println!("(no notebooks match the selected profile)");
    }

    fn show_picker_options(&mut self, names: &[String]) {
        println!("selectable: {}", names.join(", "));
    }

    fn show_comparison(&mut self, table: &TableModel) {
        println!("comparison: {}", table.headers.join(" | "));
        for row in &table.rows {
            println!("  {}: {}", row.label, row.cells.join(" | "));
        }
    }

    fn show_list_surface(&mut self) {
        println!("-- back to list --");
    }

    fn show_notice(&mut self, error: &ValidationError) {
        println!("!! {error}");
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        println!("notecat_core ping={}", notecat_core::ping());
        println!("notecat_core version={}", notecat_core::core_version());
        return;
    }

    let mut controller = ViewController::new(TerminalRenderer);
    controller.handle(AppEvent::LoadCompleted(load_catalog_from_path(&args[0])));

    let mut rest = args[1..].iter();
    while let Some(flag) = rest.next() {
        match flag.as_str() {
            "--profile" => {
                let tag = rest.next().cloned().unwrap_or_default();
                controller.handle(AppEvent::ProfileChanged(tag));
            }
            "--compare" => {
                let mut slot = 0;
                while slot < 3 {
                    match rest.clone().next() {
                        Some(name) if !name.starts_with("--") => {
                            rest.next();
                            controller.handle(AppEvent::SlotChanged(slot, Some(name.clone())));
                            slot += 1;
                        }
                        _ => break,
                    }
                }
                controller.handle(AppEvent::CompareRequested);
            }
            other => {
                eprintln!("unknown flag `{other}`");
                std::process::exit(2);
            }
        }
    }
}
