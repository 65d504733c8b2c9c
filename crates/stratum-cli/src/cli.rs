use clap::{Parser, Subcommand};

/// Parse colors and flatten stacks of translucent layers into one color.
///
/// Colors may be hex (`#rgb`, `#rrggbb`, `#rrggbbaa`), functional
/// (`rgb(r, g, b)`, `rgba(r, g, b, a)`), or numeric tuples (`255,0,0` or
/// `[255, 0, 0, 0.5]`).
#[derive(Debug, Parser)]
#[command(name = "stratum", version)]
pub struct Cli {
    /// Print results as JSON objects
    #[arg(long, global = true)]
    pub json: bool,

    /// Log filter in env_logger syntax (overrides RUST_LOG)
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the canonical form of a color
    Parse {
        color: String,
    },

    /// Flatten a front-to-back stack of colors
    Blend {
        /// Topmost layer
        foreground: String,
        /// Layers beneath, nearest first
        background: Vec<String>,
    },

    /// Composite a single source color over a destination
    Composite {
        source: String,
        destination: String,
        /// Treat both colors as premultiplied
        #[arg(long)]
        premultiplied: bool,
    },

    /// Blend one `|`-separated stack per line of stdin
    Batch {
        /// Number of distinct stacks to memoize (0 disables caching)
        #[arg(long, env = "STRATUM_CACHE_CAPACITY", default_value_t = 256)]
        cache_capacity: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn blend_collects_background_layers() {
        let cli = Cli::try_parse_from(["stratum", "blend", "#fff8", "#000", "rgb(1,2,3)"]).unwrap();
        match cli.command {
            Command::Blend { foreground, background } => {
                assert_eq!(foreground, "#fff8");
                assert_eq!(background, vec!["#000", "rgb(1,2,3)"]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["stratum", "parse", "#fff", "--json", "--log-level", "debug"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn composite_premultiplied_flag() {
        let cli = Cli::try_parse_from(["stratum", "composite", "#f00", "#00f", "--premultiplied"]).unwrap();
        assert!(matches!(cli.command, Command::Composite { premultiplied: true, .. }));
    }

    #[test]
    fn batch_capacity_flag() {
        let cli = Cli::try_parse_from(["stratum", "batch", "--cache-capacity", "4"]).unwrap();
        assert!(matches!(cli.command, Command::Batch { cache_capacity: 4 }));
    }
}
