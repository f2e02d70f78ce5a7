//! Runs a few editing scripts and prints each step.
//!
//! Set `RUST_LOG=texted=trace` to see buffer splices and search matches.

use anyhow::Result;
use texted::tools::documentation;
use texted::{parse, write, Buffer, Evaluator, Syntax, TraceStep};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("texted=info".parse()?))
        .init();

    println!("=== texted - Editing Demo ===\n");

    let demos = vec![
        (
            "Delete a word",
            "Hello world",
            Syntax::Shell,
            "goto-char 7; delete-char 5",
        ),
        (
            "Replace the whole buffer",
            "Hello world",
            Syntax::SExpr,
            r#"(mark-whole-buffer) (replace-region "Goodbye")"#,
        ),
        (
            "Search and replace",
            "Hello world",
            Syntax::Json,
            r#"[["search-forward", "world"], ["replace-match", "earth"]]"#,
        ),
        (
            "Shout the second line",
            "first line\nsecond line\nthird line",
            Syntax::SExpr,
            r#"
                (goto-line 2)
                (mark-line)
                (replace-region (upcase (buffer-substring (region-beginning) (region-end))))
            "#,
        ),
    ];

    let evaluator = Evaluator::new();
    for (title, text, syntax, script) in demos {
        println!("--- {} ({}) ---", title, syntax);
        let program = parse(syntax, script)?;
        println!("Script as sexp:\n{}", write(Syntax::SExpr, &program)?);

        let mut buffer = Buffer::new(text);
        let result = evaluator.execute_traced(&program, &mut buffer, &mut |step: &TraceStep<'_>| {
            println!(
                "  [{}] {:<40} point={:<3} mark={:<3} => {}",
                step.index,
                step.instruction.to_string(),
                step.buffer.point(),
                step.buffer.mark(),
                step.result
            );
        })?;

        println!("Result: {}", result);
        println!("Buffer: {:?}\n", buffer.as_str());
    }

    println!("=== Documentation ===\n");
    for category in documentation::categories() {
        let names: Vec<&str> = documentation::by_category(category)
            .iter()
            .map(|doc| doc.name)
            .collect();
        println!("{:<10} {}", category, names.join(" "));
    }
    if let Some(doc) = documentation::lookup("replace-match") {
        println!("\nreplace-match: {}", doc.summary);
    }

    Ok(())
}
