//! Loads a page JSON file, rebuilds the block tree, validates it, and
//! prints each block's inline CSS at a chosen viewport width.
//!
//! Usage: `cargo run --example page_preview -- [page.json] [viewport-width]`
use mason::{Page, PageError, css, flatten_tree};

fn main() -> Result<(), PageError> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "demos/landing_page.json".to_string());
    let width: u32 = args.next().and_then(|w| w.parse().ok()).unwrap_or(1280);

    let json = std::fs::read_to_string(&path)?;
    let mut page = Page::from_json(&json)?;
    page.organize();

    let report = page.validate();
    if report.is_valid() {
        println!("{} ({}): tree OK", page.title, page.slug);
    } else {
        println!("{} ({}): {} validation error(s)", page.title, page.slug, report.errors.len());
        for error in &report.errors {
            println!("  - {error}");
        }
    }

    println!("\ninline styles at {width}px:");
    let styles = page.resolved_styles(width);
    for block in flatten_tree(&page.content_blocks) {
        let declarations = &styles[&block.id];
        println!("  #{} {} [{}]", block.id, block.selector_id, block.kind());
        if !declarations.is_empty() {
            println!("    {}", css::to_declarations(declarations));
        }
    }

    Ok(())
}
