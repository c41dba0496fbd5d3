use clap::{Args, Parser, Subcommand, ValueEnum};
use fridge::view::{FilterColumn, SortKey};

#[derive(Parser, Debug)]
#[command(name = "fridge", bin_name = "fridge", version)]
#[command(about = "Keep track of what is in your fridge", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List groceries
    #[command(alias = "ls")]
    List(ListArgs),

    /// List the item catalogue
    Items {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show a single grocery
    #[command(alias = "v")]
    Show {
        /// Grocery id
        id: i64,
    },

    /// Put a grocery in the fridge
    #[command(alias = "a")]
    Add {
        /// Item name, as listed by `fridge items`
        item: String,

        /// Section: freezer, meat, cooling or crisper
        section: String,

        /// How many units
        #[arg(allow_hyphen_values = true)]
        quantity: String,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Use up one unit of a grocery
    #[command(alias = "consume")]
    Use {
        /// Grocery id
        id: i64,
    },

    /// Take a grocery out of the fridge, whatever is left of it
    #[command(alias = "rm")]
    Remove {
        /// Grocery id
        id: i64,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Create the database and seed the item catalogue
    Init {
        /// Only create the database, do not add catalogue items
        #[arg(long)]
        no_seed: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (database, confirm)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Only show rows whose column contains this text
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Column the filter applies to
    #[arg(long, value_enum, default_value_t = FilterBy::Item)]
    pub by: FilterBy,

    /// Only groceries that can expire
    #[arg(short, long)]
    pub expiring: bool,

    /// Column to sort by
    #[arg(short, long, value_enum, default_value_t = SortBy::Id)]
    pub sort: SortBy,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum FilterBy {
    #[default]
    Item,
    Section,
    Bought,
}

impl From<FilterBy> for FilterColumn {
    fn from(by: FilterBy) -> Self {
        match by {
            FilterBy::Item => FilterColumn::Item,
            FilterBy::Section => FilterColumn::Section,
            FilterBy::Bought => FilterColumn::Bought,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SortBy {
    #[default]
    Id,
    Item,
    Quantity,
    Section,
    Bought,
}

impl From<SortBy> for SortKey {
    fn from(by: SortBy) -> Self {
        match by {
            SortBy::Id => SortKey::Id,
            SortBy::Item => SortKey::Item,
            SortBy::Quantity => SortKey::Quantity,
            SortBy::Section => SortKey::Section,
            SortBy::Bought => SortKey::Bought,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_list() {
        let cli = Cli::try_parse_from(["fridge"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_list_options() {
        let cli = Cli::try_parse_from([
            "fridge", "ls", "-f", "milk", "--by", "section", "--expiring", "-s", "bought", "--desc",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::List(args)) => {
                assert_eq!(args.filter.as_deref(), Some("milk"));
                assert_eq!(args.by, FilterBy::Section);
                assert!(args.expiring);
                assert_eq!(args.sort, SortBy::Bought);
                assert!(args.desc);
                assert!(!args.json);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn add_keeps_quantity_as_text() {
        let cli = Cli::try_parse_from(["fridge", "add", "Milk", "cooling", "-2"]).unwrap();
        match cli.command {
            Some(Commands::Add {
                item,
                section,
                quantity,
                yes,
            }) => {
                assert_eq!(item, "Milk");
                assert_eq!(section, "cooling");
                assert_eq!(quantity, "-2");
                assert!(!yes);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn aliases_resolve() {
        assert!(matches!(
            Cli::try_parse_from(["fridge", "consume", "3"]).unwrap().command,
            Some(Commands::Use { id: 3 })
        ));
        assert!(matches!(
            Cli::try_parse_from(["fridge", "rm", "4", "-y"]).unwrap().command,
            Some(Commands::Remove { id: 4, yes: true })
        ));
    }
}
