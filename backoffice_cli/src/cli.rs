//! Command-line surface of the backoffice client.

use crate::DEFAULT_BASE_URL;
use clap::{Parser, Subcommand};
use reqwest::Url;

/// Administrative client for the user-account backend
#[derive(Parser, Debug)]
#[command(name = "backoffice_cli")]
#[command(about = "Administrative client for the user-account backend", long_about = None)]
pub struct CliArgs {
    /// Backend base URL; the production backend when omitted
    #[arg(long = "base-url", value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Treat lookup transport failures as errors instead of "not found"
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Deposit funds to a user account, addressed by its opaque user id
    Deposit {
        /// Opaque backend user id
        user_id: String,
        /// Decimal amount, e.g. "150" or "9.99"
        amount: String,
        /// One of UYU, USD, USDc
        currency: String,
        /// Admin bearer token
        token: String,
    },
    /// Deposit funds, resolving the user id from the token or by email
    DepositByEmail {
        /// Email the pending-accounts listing is scanned for
        email: String,
        /// Decimal amount, e.g. "150" or "9.99"
        amount: String,
        /// One of UYU, USD, USDc
        currency: String,
        /// Admin bearer token; its subject claim wins when it decodes
        token: String,
    },
    /// Delete a user account, trying by email first, then by user id
    DeleteUser {
        /// Email of the account to delete
        email: String,
        /// Fallback user id, tried when the email attempt fails
        user_id: Option<String>,
    },
}

/// **Get base URL**
///
/// Resolves the `--base-url` option into the base URL every operation
/// joins its path onto. An absent or malformed value falls back to
/// [`DEFAULT_BASE_URL`], announced on stdout, so the caller always gets
/// a usable URL.
pub fn get_base_url(base_url: Option<String>) -> Url {
    let base_url = base_url.unwrap_or_else(|| {
        println!(
            "No base URL provided; using the production backend: {}",
            DEFAULT_BASE_URL
        );
        DEFAULT_BASE_URL.into()
    });

    let base_url = Url::parse(base_url.as_str()).unwrap_or_else(|_| {
        println!(
            "Provided base URL could not be parsed; using default: {}",
            DEFAULT_BASE_URL
        );
        Url::parse(DEFAULT_BASE_URL).unwrap()
    });

    base_url
}
