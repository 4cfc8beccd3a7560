use anyhow::Result;
use clap::Parser;
use data_display_config::Config;
use data_display_engine::{DisplayOptions, generate_with_summary, io, parse_sections};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Render text or JSON as an interactive HTML page of collapsible sections
#[derive(Parser, Debug)]
#[command(name = "data-display", version)]
struct Cli {
    /// Input file; `-` or omitted reads stdin
    input: Option<PathBuf>,

    /// Write the page here instead of the configured output directory or stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Page heading and document title
    #[arg(long)]
    title: Option<String>,

    /// Accent color, e.g. "#059669"
    #[arg(long)]
    theme_color: Option<String>,

    /// Treat the input as plain text even if it is valid JSON
    #[arg(long)]
    no_auto_parse: bool,

    /// Start every section collapsed
    #[arg(long)]
    collapsed: bool,

    /// Print the parsed sections as JSON instead of rendering HTML
    #[arg(long)]
    sections: bool,
}

#[derive(Debug, PartialEq)]
enum Destination {
    File(PathBuf),
    Stdout,
}

impl Cli {
    fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| *path != Path::new("-"))
    }

    /// Command-line flags layered over the configured defaults
    fn options(&self, defaults: DisplayOptions) -> DisplayOptions {
        let mut options = defaults
            .with_title(self.title.as_deref())
            .with_theme_color(self.theme_color.as_deref());
        if self.no_auto_parse {
            options = options.with_auto_parse(false);
        }
        if self.collapsed {
            options = options.with_collapsed(true);
        }
        options
    }

    /// Extension for files written into the output directory
    fn extension(&self) -> &'static str {
        if self.sections { "json" } else { "html" }
    }

    fn destination(&self, output_dir: Option<&Path>) -> Destination {
        if let Some(output) = &self.output {
            return Destination::File(output.clone());
        }
        match output_dir {
            // Stdin has no stem, so its file is named `output.<ext>`
            Some(dir) => Destination::File(io::output_path_for(
                self.input_path().unwrap_or(Path::new("")),
                dir,
                self.extension(),
            )),
            None => Destination::Stdout,
        }
    }

    fn render(&self, raw: &str, options: &DisplayOptions) -> Result<String> {
        if self.sections {
            let sections = parse_sections(raw, options.auto_parse_structured);
            log::info!("Parsed {} section(s)", sections.len());
            return Ok(serde_json::to_string_pretty(&sections)? + "\n");
        }

        let page = generate_with_summary(raw, options);
        log::info!("Generated display with {} section(s)", page.section_count);
        Ok(page.html)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();

    let config = match Config::load()? {
        Some(config) => {
            log::debug!("Loaded config from {}", Config::config_path().display());
            config
        }
        None => Config::default(),
    };

    let raw = match cli.input_path() {
        Some(path) => io::read_input(path)?,
        None => io::read_input_from(std::io::stdin().lock())?,
    };

    let options = cli.options(config.display.clone());
    let rendered = cli.render(&raw, &options)?;

    match cli.destination(config.output_dir.as_deref()) {
        Destination::File(path) => {
            io::write_page(&path, &rendered)?;
            log::info!("Wrote {}", path.display());
        }
        Destination::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("data-display").chain(args.iter().copied())).unwrap()
    }

    #[rstest]
    #[case::omitted(&[], None)]
    #[case::dash(&["-"], None)]
    #[case::file(&["report.json"], Some("report.json"))]
    fn test_input_path(#[case] args: &[&str], #[case] expected: Option<&str>) {
        let cli = parse(args);
        assert_eq!(cli.input_path(), expected.map(Path::new));
    }

    #[test]
    fn test_flags_override_config_defaults() {
        let defaults = DisplayOptions::default()
            .with_title(Some("From Config"))
            .with_theme_color(Some("#DC2626"));
        let cli = parse(&["--title", "From Flag", "--no-auto-parse", "--collapsed"]);

        let options = cli.options(defaults);

        assert_eq!(options.title, "From Flag");
        assert_eq!(options.theme_color, "#DC2626");
        assert!(!options.auto_parse_structured);
        assert!(options.collapsed_by_default);
    }

    #[test]
    fn test_absent_flags_keep_config_defaults() {
        let defaults = DisplayOptions::default().with_collapsed(true);
        let options = parse(&[]).options(defaults.clone());
        assert_eq!(options, defaults);
    }

    #[test]
    fn test_explicit_output_wins() {
        let cli = parse(&["in.txt", "-o", "page.html"]);
        assert_eq!(
            cli.destination(Some(Path::new("/srv/pages"))),
            Destination::File(PathBuf::from("page.html"))
        );
    }

    #[test]
    fn test_output_dir_uses_input_stem() {
        let cli = parse(&["notes/review.txt"]);
        assert_eq!(
            cli.destination(Some(Path::new("/srv/pages"))),
            Destination::File(PathBuf::from("/srv/pages/review.html"))
        );
    }

    #[test]
    fn test_sections_dump_into_output_dir_is_json() {
        let cli = parse(&["in.json", "--sections"]);
        assert_eq!(
            cli.destination(Some(Path::new("pages"))),
            Destination::File(PathBuf::from("pages/in.json"))
        );
    }

    #[test]
    fn test_sections_dump_from_stdin_is_json() {
        let cli = parse(&["--sections"]);
        assert_eq!(
            cli.destination(Some(Path::new("pages"))),
            Destination::File(PathBuf::from("pages/output.json"))
        );
    }

    #[test]
    fn test_stdin_into_output_dir() {
        let cli = parse(&["-"]);
        assert_eq!(
            cli.destination(Some(Path::new("pages"))),
            Destination::File(PathBuf::from("pages/output.html"))
        );
    }

    #[test]
    fn test_stdout_without_output_dir() {
        assert_eq!(parse(&["in.txt"]).destination(None), Destination::Stdout);
    }

    #[test]
    fn test_render_sections_as_json() {
        let cli = parse(&["--sections"]);
        let json = cli
            .render(r#"{"key_points": [1, 2]}"#, &DisplayOptions::default())
            .unwrap();

        let sections: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(sections[0]["title"], "Key Points");
        assert_eq!(sections[0]["content"], "[\n  1,\n  2\n]");
    }

    #[test]
    fn test_render_html_page() {
        let cli = parse(&["--title", "CLI Run"]);
        let options = cli.options(DisplayOptions::default());

        let html = cli.render("just one line", &options).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>CLI Run</title>"));
        assert!(html.contains("<h3>Output</h3>"));
    }
}
