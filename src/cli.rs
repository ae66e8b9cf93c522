// CLI argument grammar using clap derive. The four subcommands map
// one-to-one onto the handlers in `commands`; clap provides the
// -h/--help and --version surfaces.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Apollo API client
///
/// Search accounts, create contacts, bulk-upload CSV rows, and enrich
/// organization data through the Apollo.io REST API.
#[derive(Parser, Debug)]
#[command(name = "apollo", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search for companies by name
    Company {
        /// Company name to search for
        query: String,
    },

    /// Create a new contact
    Create {
        /// Contact first name
        name: String,
        /// Contact email address
        email: String,
        /// Company the contact belongs to
        company: String,
    },

    /// Upload rows from a CSV file
    Upload {
        /// Kind of record the rows describe: 'contact' or 'company'
        #[arg(value_name = "TYPE")]
        kind: String,
        /// Path to a CSV file with a header row
        file: PathBuf,
    },

    /// Enrich organization data for the given domains
    Enrich {
        /// One or more domain names
        #[arg(required = true)]
        domains: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_company_search() {
        let cli = Cli::try_parse_from(["apollo", "company", "Acme"]).unwrap();
        match cli.command {
            Commands::Company { query } => assert_eq!(query, "Acme"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_create_with_three_fields() {
        let cli =
            Cli::try_parse_from(["apollo", "create", "Ada", "ada@acme.io", "Acme"]).unwrap();
        match cli.command {
            Commands::Create { name, email, company } => {
                assert_eq!(name, "Ada");
                assert_eq!(email, "ada@acme.io");
                assert_eq!(company, "Acme");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_enrich_with_multiple_domains() {
        let cli =
            Cli::try_parse_from(["apollo", "enrich", "example.com", "other.org"]).unwrap();
        match cli.command {
            Commands::Enrich { domains } => {
                assert_eq!(domains, vec!["example.com", "other.org"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn enrich_requires_at_least_one_domain() {
        assert!(Cli::try_parse_from(["apollo", "enrich"]).is_err());
    }
}
