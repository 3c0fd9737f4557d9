use anyhow::{Context, Result, bail};
use clap::Parser;
use multiline_format_config::Config;
use multiline_format_engine::{EditorHost, Formatter, Position, SectionCache, Style, io};
use std::path::{Path, PathBuf};

/// Wrap every run of text in a Markdown selection with a style's markers
#[derive(Parser, Debug)]
#[command(name = "multiline-format", author, version, about)]
struct Cli {
    /// Markdown file to format
    #[arg(required_unless_present_any = ["list_styles", "init_config"])]
    file: Option<PathBuf>,

    /// Saved style to apply, by id or nickname
    #[arg(short, long, value_name = "ID|NICKNAME", conflicts_with_all = ["left", "right"])]
    style: Option<String>,

    /// Ad-hoc left wrapper
    #[arg(long, requires = "right")]
    left: Option<String>,

    /// Ad-hoc right wrapper
    #[arg(long, requires = "left")]
    right: Option<String>,

    /// Leave heading text unwrapped
    #[arg(long)]
    skip_headings: bool,

    /// Leave list items unwrapped
    #[arg(long)]
    skip_list_items: bool,

    /// Leave blockquotes unwrapped
    #[arg(long)]
    skip_blockquotes: bool,

    /// Selection start as LINE:COL, 0-based (default: start of file)
    #[arg(long, value_name = "LINE:COL")]
    from: Option<Position>,

    /// Selection end as LINE:COL, 0-based (default: end of file)
    #[arg(long, value_name = "LINE:COL")]
    to: Option<Position>,

    /// Write the result back to FILE instead of stdout
    #[arg(short, long)]
    in_place: bool,

    /// Config file to read styles from
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Ignore the parsed block structure and rely on line classification alone
    #[arg(long)]
    no_structure: bool,

    /// Do not read the lines above the selection for context
    #[arg(long)]
    no_context: bool,

    /// Print the configured styles and exit
    #[arg(long)]
    list_styles: bool,

    /// Write a config file with the default styles and exit
    #[arg(long)]
    init_config: bool,
}

impl Cli {
    fn config_path(&self) -> PathBuf {
        match &self.config {
            Some(path) => Config::expand_path(path).unwrap_or_else(|| path.clone()),
            None => Config::config_path(),
        }
    }

    /// Saved config, or the built-in styles when no file exists yet.
    fn load_config(&self) -> Result<Config> {
        let path = self.config_path();
        let config = Config::load_from_path(&path)
            .with_context(|| format!("loading styles from {}", path.display()))?;
        Ok(config.unwrap_or_else(|| {
            log::debug!("no config at {}, using defaults", path.display());
            Config::default()
        }))
    }

    fn resolve_style(&self, config: &Config) -> Result<Style> {
        let mut style = match (&self.style, &self.left, &self.right) {
            (Some(key), _, _) => config
                .find_style(key)
                .cloned()
                .with_context(|| format!("no style with id or nickname {key:?}"))?,
            (None, Some(left), Some(right)) => Style::new(left.as_str(), right.as_str()),
            _ => match config.styles.first() {
                Some(style) => style.clone(),
                None => bail!("no styles configured; pass --style or --left/--right"),
            },
        };
        style.skip_headings |= self.skip_headings;
        style.skip_list_items |= self.skip_list_items;
        style.skip_blockquotes |= self.skip_blockquotes;
        Ok(style)
    }
}

fn list_styles(config: &Config) {
    for style in &config.styles {
        println!("{}\t{}\t{}…{}", style.id, style.nickname, style.left, style.right);
    }
}

fn init_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("{} already exists", path.display());
    }
    Config::default()
        .save_to_path(path)
        .with_context(|| format!("writing {}", path.display()))?;
    println!("Created {}", path.display());
    Ok(())
}

fn format_file(cli: &Cli, file: &Path, style: &Style) -> Result<String> {
    let mut buffer =
        io::read_document(file).with_context(|| format!("reading {}", file.display()))?;
    let from = cli.from.unwrap_or_default();
    let to = cli.to.unwrap_or_else(|| buffer.end());
    buffer.select(from, to);
    log::debug!("selection {from}..{to} of {}", file.display());

    let cache = (!cli.no_structure).then(|| SectionCache::from_markdown(&buffer.text()));
    let mut formatter = Formatter::new(style).with_context_scan(!cli.no_context);
    if let Some(cache) = &cache {
        formatter = formatter.with_structure(cache);
    }
    formatter.format_selection(&mut buffer);
    log::debug!("selection after edit {:?}", buffer.selection());

    if cli.in_place {
        io::write_document(file, &buffer)
            .with_context(|| format!("writing {}", file.display()))?;
    }
    Ok(buffer.text())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if cli.init_config {
        return init_config(&cli.config_path());
    }

    let config = cli.load_config()?;
    if cli.list_styles {
        list_styles(&config);
        return Ok(());
    }

    let Some(file) = cli.file.as_deref() else {
        bail!("no FILE given");
    };
    let style = cli.resolve_style(&config)?;
    let text = format_file(&cli, file, &style)?;
    if !cli.in_place {
        print!("{text}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("multiline-format").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_selection_positions() {
        let cli = parse(&["note.md", "--from", "2:4", "--to", "5:0"]);

        assert_eq!(cli.from, Some(Position::new(2, 4)));
        assert_eq!(cli.to, Some(Position::new(5, 0)));
    }

    #[test]
    fn test_rejects_bad_position() {
        let result = Cli::try_parse_from(["multiline-format", "note.md", "--from", "2"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_file_required_unless_listing() {
        assert!(Cli::try_parse_from(["multiline-format"]).is_err());
        assert!(parse(&["--list-styles"]).file.is_none());
    }

    #[test]
    fn test_style_and_adhoc_wrappers_conflict() {
        let result = Cli::try_parse_from([
            "multiline-format",
            "note.md",
            "--style",
            "bold",
            "--left",
            "<",
            "--right",
            ">",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_style_by_nickname_with_skip_override() {
        let cli = parse(&[
            "note.md",
            "--style",
            "BOLD, even over multiple lines",
            "--skip-headings",
        ]);

        let style = cli.resolve_style(&Config::default()).unwrap();

        assert_eq!(style.id, "multi-line-format-bold");
        assert!(style.skip_headings);
    }

    #[test]
    fn test_resolve_style_defaults_to_first_configured() {
        let cli = parse(&["note.md"]);

        let style = cli.resolve_style(&Config::default()).unwrap();

        assert_eq!(style, Style::cyan_highlight());
    }

    #[test]
    fn test_resolve_unknown_style_fails() {
        let cli = parse(&["note.md", "--style", "missing"]);
        assert!(cli.resolve_style(&Config::default()).is_err());
    }

    #[test]
    fn test_format_file_in_place() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("note.md");
        std::fs::write(&file, "# Title\nbody text\n").unwrap();
        let file_arg = file.to_string_lossy().to_string();
        let cli = parse(&[
            file_arg.as_str(),
            "--left",
            "<<",
            "--right",
            ">>",
            "--in-place",
        ]);
        let style = cli.resolve_style(&Config::default()).unwrap();

        let text = format_file(&cli, &file, &style).unwrap();

        assert_eq!(text, "# <<Title>>\n<<body text>>\n");
        assert_eq!(std::fs::read_to_string(&file).unwrap(), text);
    }

    #[test]
    fn test_format_file_partial_selection_to_stdout() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("note.md");
        std::fs::write(&file, "one\ntwo\nthree\n").unwrap();
        let file_arg = file.to_string_lossy().to_string();
        let cli = parse(&[
            file_arg.as_str(),
            "--style",
            "multi-line-format-bold",
            "--from",
            "1:0",
            "--to",
            "1:3",
        ]);
        let style = cli.resolve_style(&Config::default()).unwrap();

        let text = format_file(&cli, &file, &style).unwrap();

        assert_eq!(text, "one\n**two**\nthree\n");
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "one\ntwo\nthree\n");
    }

    #[test]
    fn test_init_config_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        init_config(&path).unwrap();
        let loaded = Config::load_from_path(&path).unwrap().unwrap();
        assert_eq!(loaded, Config::default());

        assert!(init_config(&path).is_err());
    }
}
