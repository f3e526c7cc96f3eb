use clap::{ArgAction, Parser};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "coursedeck",
    version,
    about = "course catalog browser with search, filters and shareable URLs",
    long_about = "coursedeck browses a fixed course catalog: search titles, filter by category, load more cards page by page, and keep the view in a shareable URL query.\n\nExamples:\n  coursedeck -u '/courses?category=Marketing'\n  coursedeck -u '?search=design' -o view.html\n  coursedeck -i --catalog ./courses.yml\n\nTip: Use --config to persist settings and keep CLI invocations short."
)]
pub struct CliArgs {
    #[arg(
        short = 'v',
        long = "vb",
        visible_alias = "verbose",
        action = ArgAction::Count,
        help_heading = "Output",
        help = "Increase verbosity (-v, -vv)."
    )]
    pub verbose: u8,

    #[arg(
        short = 'c',
        long = "clr",
        visible_alias = "color",
        help_heading = "Output",
        help = "Enable colored output (overrides --no-color)."
    )]
    pub color: bool,

    #[arg(
        short = 'n',
        long = "nc",
        visible_alias = "no-color",
        help_heading = "Output",
        help = "Disable colored output."
    )]
    pub no_color: bool,

    #[arg(
        short = 'C',
        long = "cfg",
        visible_alias = "config",
        value_name = "FILE",
        help_heading = "Input",
        help = "Path to config file (defaults to ~/.coursedeck/config.yml)."
    )]
    pub config: Option<String>,

    #[arg(
        long = "init-config",
        help_heading = "Input",
        help = "Write a commented default config file if none exists, then exit."
    )]
    pub init_config: bool,

    #[arg(
        short = 'k',
        long = "cat",
        visible_alias = "catalog",
        value_name = "FILE",
        help_heading = "Input",
        help = "Load courses from a YAML or JSON file instead of the built-in catalog."
    )]
    pub catalog: Option<String>,

    #[arg(
        short = 'u',
        long = "u",
        visible_alias = "url",
        value_name = "LOCATION",
        help_heading = "View",
        help = "Starting address; its category/search query restores the view."
    )]
    pub url: Option<String>,

    #[arg(
        short = 'b',
        long = "bp",
        visible_alias = "base-path",
        value_name = "PATH",
        help_heading = "View",
        help = "Path written in front of the query when the address is updated."
    )]
    pub base_path: Option<String>,

    #[arg(
        short = 'r',
        long = "rv",
        visible_alias = "reveal",
        value_name = "N",
        help_heading = "View",
        help = "Press \"load more\" N times before writing one-shot output."
    )]
    pub reveal: Option<usize>,

    #[arg(
        long = "cols",
        visible_alias = "columns",
        value_name = "N",
        help_heading = "View",
        help = "Cards per grid row for arrow-key navigation."
    )]
    pub columns: Option<usize>,

    #[arg(
        long = "avt",
        visible_alias = "avatar-template",
        value_name = "URL",
        help_heading = "View",
        help = "Avatar image URL template; {name} is replaced by the author."
    )]
    pub avatar_template: Option<String>,

    #[arg(
        short = 'i',
        long = "it",
        visible_alias = "interactive",
        help_heading = "Session",
        help = "Read commands and search text from stdin (/help lists commands)."
    )]
    pub interactive: bool,

    #[arg(
        short = 'd',
        long = "dbm",
        visible_alias = "debounce-ms",
        value_name = "MS",
        help_heading = "Session",
        help = "Quiet time after the last search keystroke before the search runs."
    )]
    pub debounce_ms: Option<u64>,

    #[arg(
        short = 'o',
        long = "out",
        visible_alias = "output",
        value_name = "FILE",
        help_heading = "Output",
        help = "Write the rendered view to a file."
    )]
    pub output: Option<String>,

    #[arg(
        short = 'A',
        long = "of",
        visible_alias = "output-format",
        value_name = "FORMAT",
        help_heading = "Output",
        help = "Output format (text, json or html)."
    )]
    pub output_format: Option<String>,
}
