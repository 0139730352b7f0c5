//! Contact Intake - terminal front-end
//!
//! Runs the contact form interactively, or performs one registration / gallery
//! operation against the persistence API.

use anyhow::{bail, Result};
use contact_intake::client::{ApiClient, AsyncApiClient, AsyncApiClientImpl};
use contact_intake::form::{ContactForm, FieldChange, FormState, RegistrationForm};
use contact_intake::{ApiSubmissionClient, Config, Field, FormError};
use std::path::Path;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

type InputLines = Lines<BufReader<Stdin>>;

const USAGE: &str = "usage: contact-intake [contact | register <name> <captcha-token> | users | images | upload <path> | delete-image <id>]";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr; stdout belongs to the form
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Using API at {}", config.api_base_url);

    let client_impl = AsyncApiClientImpl::new(ApiClient::new(&config));
    let client = Arc::new(client_impl.clone()) as Arc<dyn AsyncApiClient>;
    let submissions = ApiSubmissionClient::new(client.clone());

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    let result = match args.as_slice() {
        [] | ["contact"] => run_contact_form(&config, &submissions).await,
        ["register", name, token] => register(&config, &submissions, name, token).await,
        ["users"] => {
            for user in client.list_users().await? {
                println!("{}\t{}", user.id, user.name);
            }
            Ok(())
        }
        ["images"] => {
            for image in client.list_images().await? {
                println!("{}\t{}", image.id, image.url);
            }
            Ok(())
        }
        ["upload", path] => {
            let image = client.upload_image(Path::new(path)).await?;
            println!("Uploaded {} -> {}", image.id, image.url);
            Ok(())
        }
        ["delete-image", id] => {
            client.delete_image(id).await?;
            println!("Deleted {}", id);
            Ok(())
        }
        _ => bail!(USAGE),
    };

    debug!("Metrics: {:?}", client_impl.inner().metrics().summary());
    result
}

/// Fill in and submit the contact form from stdin.
async fn run_contact_form(config: &Config, client: &ApiSubmissionClient) -> Result<()> {
    let mut form = ContactForm::new(config.notice_duration());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("Contact form");
    let mut pending: Vec<Field> = Field::ALL.to_vec();

    loop {
        for field in pending.drain(..) {
            prompt_field(&mut form, field, &mut lines).await?;
        }

        let outcome = form.submit(client).await.map(|state| state.clone());
        match outcome {
            Ok(FormState::Success) => {
                println!("{}", form.notice().unwrap_or_default());
                return Ok(());
            }
            Ok(_) => {
                println!("! {}", form.alert().unwrap_or_default());
                if !ask_yes_no("Send again? [y/N] ", &mut lines).await? {
                    bail!("contact message was not sent");
                }
            }
            Err(FormError::Invalid(fields)) => {
                println!("! {}", form.alert().unwrap_or_default());
                pending = fields;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Ask for one field until its value is accepted and valid.
async fn prompt_field(form: &mut ContactForm, field: Field, lines: &mut InputLines) -> Result<()> {
    let prompt = if field.is_optional() {
        format!("{} (optional): ", field.label())
    } else {
        format!("{}: ", field.label())
    };

    loop {
        let input = read_line(&prompt, lines).await?;
        match form.on_field_change(field, input) {
            FieldChange::Ignored => {
                println!("  ! At most {} characters.", field.max_len().unwrap_or_default());
            }
            FieldChange::Applied => {
                let message = form.errors().message(field);
                if message.is_empty() {
                    return Ok(());
                }
                println!("  ! {}", message);
            }
        }
    }
}

async fn ask_yes_no(prompt: &str, lines: &mut InputLines) -> Result<bool> {
    let answer = read_line(prompt, lines).await?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

async fn read_line(prompt: &str, lines: &mut InputLines) -> Result<String> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(prompt.as_bytes()).await?;
    stdout.flush().await?;

    match lines.next_line().await? {
        Some(line) => Ok(line),
        None => bail!("input closed"),
    }
}

async fn register(
    config: &Config,
    client: &ApiSubmissionClient,
    name: &str,
    token: &str,
) -> Result<()> {
    let mut form = RegistrationForm::new(config.notice_duration());
    form.set_name(name);
    form.set_captcha_token(Some(token.to_string()));

    let outcome = form.submit(client).await.map(|state| state.clone());
    match outcome {
        Ok(FormState::Success) => {
            println!("{}", form.notice().unwrap_or_default());
            Ok(())
        }
        Ok(_) | Err(FormError::Invalid(_)) | Err(FormError::MissingCaptcha) => {
            bail!(form.alert().unwrap_or_default())
        }
        Err(e) => Err(e.into()),
    }
}
