//! The backoffice administration client.
//!
//! One authenticated backend mutation per invocation: deposit funds to a
//! user account, or delete a user account. Control flow is strictly
//! linear — resolve inputs, optionally resolve the target identity,
//! execute one request, report the outcome, exit.

pub mod cli;
pub mod client;
pub mod identity;
pub mod logic;

/// The production backend. Overridable per invocation with `--base-url`.
pub const DEFAULT_BASE_URL: &str = "https://api.pagolibre.app/";

/// Description attached to every deposit made through this tool, so the
/// transaction is recognizable in the backend's ledger.
pub const DEPOSIT_DESCRIPTION: &str = "Manual deposit by backoffice";
