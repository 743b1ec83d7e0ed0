//! CLI for txt2link - plain-text auto-linker

use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};
use txt2link::{linkify, render_template, Result};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input text file path (reads stdin if not specified)
    input: Option<PathBuf>,

    /// Output file path (optional, prints to stdout if not specified)
    output: Option<PathBuf>,

    /// Handlebars template file; the input text is available as {{text}}
    #[arg(long)]
    template: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let text = match read_input(args.input.as_deref()) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error reading input: {}", e);
            std::process::exit(1);
        }
    };

    let html = match transform(&text, args.template.as_deref()) {
        Ok(html) => html,
        Err(e) => {
            eprintln!("Error transforming text: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(output) = args.output {
        if let Err(e) = std::fs::write(&output, &html) {
            eprintln!("Error writing output: {}", e);
            std::process::exit(1);
        }
        println!("Successfully wrote {:?}", output);
    } else {
        println!("{}", html);
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn transform(text: &str, template: Option<&Path>) -> Result<String> {
    match template {
        Some(path) => {
            let template = std::fs::read_to_string(path)?;
            render_template(&template, &serde_json::json!({ "text": text }))
        }
        None => Ok(linkify(Some(text)).into_html()),
    }
}
