//! Command flows: validate inputs, resolve the target, execute the one
//! backend request, report the outcome.

use crate::cli::{get_base_url, CliArgs, Command};
use crate::client::BackendClient;
use crate::identity;
use crate::DEPOSIT_DESCRIPTION;
use backoffice_common::currency::Currency;
use backoffice_common::errors::BackofficeError;
use backoffice_common::requests::{DeleteTarget, DepositRequest};
use backoffice_common::validation::{parse_amount, require_token};

/// **Dispatch the parsed command**
///
/// Validation always happens before the client issues any request, so an
/// invalid amount, currency or credential never touches the network.
pub async fn run(args: CliArgs) -> Result<(), BackofficeError> {
    let base_url = get_base_url(args.base_url);
    let client = BackendClient::new(base_url, args.strict);

    match args.command {
        Command::Deposit {
            user_id,
            amount,
            currency,
            token,
        } => {
            let payload = validated_payload(&amount, &currency)?;
            require_token(&token)?;

            deposit(&client, &user_id, &payload, &token).await
        }
        Command::DepositByEmail {
            email,
            amount,
            currency,
            token,
        } => {
            let payload = validated_payload(&amount, &currency)?;
            require_token(&token)?;

            let user_id = identity::resolve_user_id(&client, &email, &token).await?;

            deposit(&client, &user_id, &payload, &token).await
        }
        Command::DeleteUser { email, user_id } => delete_user(&client, email, user_id).await,
    }
}

/// Builds the deposit payload from the raw amount and currency arguments,
/// rejecting anything that is not a decimal number or a supported code.
fn validated_payload(amount: &str, currency: &str) -> Result<DepositRequest, BackofficeError> {
    let amount = parse_amount(amount)?;
    let currency: Currency = currency.parse()?;

    Ok(DepositRequest::new(currency, amount, DEPOSIT_DESCRIPTION))
}

/// **Deposit funds to a resolved user account**
///
/// Narrates the request, issues it, and prints the raw backend response
/// on success.
async fn deposit(
    client: &BackendClient,
    user_id: &str,
    payload: &DepositRequest,
    token: &str,
) -> Result<(), BackofficeError> {
    println!(
        "Depositing {} {} to user {} at {} ...",
        payload.amount,
        payload.asset_code,
        user_id,
        client.base_url()
    );

    let response = client.deposit(user_id, payload, token).await?;

    println!("Deposit succeeded: {}", response);

    Ok(())
}

/// **Delete a user account**
///
/// Builds the ordered strategy list — by email first, by user id only when
/// one was supplied — and reports the first success.
async fn delete_user(
    client: &BackendClient,
    email: String,
    user_id: Option<String>,
) -> Result<(), BackofficeError> {
    let mut targets = vec![DeleteTarget::ByEmail(email)];
    if let Some(user_id) = user_id {
        targets.push(DeleteTarget::ByUserId(user_id));
    }

    println!(
        "Deleting user ({}) at {} ...",
        targets
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(", then "),
        client.base_url()
    );

    let response = client.delete_user(&targets).await?;

    println!("Delete succeeded: {}", response);

    Ok(())
}
