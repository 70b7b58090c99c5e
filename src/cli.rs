use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use hootsuite::{
    Client, HootsuiteError, MessageState, OutboundMessagesQuery, Payload, ReviewerType, Settings,
};

#[derive(Parser)]
#[command(name = "hootsuite", about = "Command-line client for the Hootsuite REST API")]
pub struct Args {
    /// Settings file (defaults to ~/.hootsuite/settings.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log requests and responses
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Request timeout in seconds (overrides settings)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the OAuth2 consent URL
    Authorize {
        #[arg(long)]
        redirect_uri: Option<String>,
        /// Permission scope (repeatable)
        #[arg(long = "scope", required = true)]
        scopes: Vec<String>,
        /// Also open the URL in the default browser
        #[arg(long)]
        open: bool,
    },
    /// Exchange an authorization code and store the tokens
    Exchange {
        #[arg(long)]
        redirect_uri: Option<String>,
        #[arg(long)]
        code: String,
    },
    /// Refresh the stored access token
    Refresh {
        #[arg(long)]
        redirect_uri: Option<String>,
    },
    /// Test the connection
    Echo,
    Account,
    Me,
    Organizations,
    SocialProfiles,
    Member {
        id: String,
    },
    MemberOrganizations {
        id: String,
    },
    /// List outbound messages in a time range
    Messages {
        /// ISO-8601 start, e.g. 2024-03-01T00:00:00Z
        #[arg(long)]
        start: DateTime<Utc>,
        #[arg(long)]
        end: DateTime<Utc>,
        #[arg(long)]
        state: Option<MessageState>,
        /// Social profile id (repeatable)
        #[arg(long = "profile")]
        profiles: Vec<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    Message {
        id: String,
    },
    DeleteMessage {
        id: String,
    },
    Approve {
        id: String,
        #[arg(long)]
        sequence: u64,
        #[arg(long)]
        reviewer: ReviewerType,
    },
    Reject {
        id: String,
        #[arg(long)]
        sequence: u64,
        #[arg(long)]
        reviewer: ReviewerType,
        #[arg(long)]
        reason: String,
    },
    OrgMembers {
        organization_id: String,
    },
    RemoveMember {
        organization_id: String,
        member_id: String,
    },
}

pub async fn run(args: Args) -> Result<(), HootsuiteError> {
    let settings_path = match args.config {
        Some(path) => path,
        None => Settings::settings_path()?,
    };
    let mut settings = Settings::load_from(&settings_path)?;
    if let Some(secs) = args.timeout {
        settings.timeout_secs = Some(secs);
    }

    let client = Client::from_settings(&settings)?;
    let default_redirect = settings.redirect_uri.clone();
    let redirect_uri = |arg: Option<String>| {
        arg.or_else(|| default_redirect.clone())
            .ok_or_else(|| HootsuiteError::config("redirect_uri is not set"))
    };

    let result = match args.command {
        Command::Authorize {
            redirect_uri: uri,
            scopes,
            open: open_browser,
        } => {
            let url = client.authorization_url(&redirect_uri(uri)?, scopes.as_slice())?;
            println!("{url}");
            if open_browser && let Err(e) = open::that(url.as_str()) {
                eprintln!("Failed to open browser: {e}");
            }
            return Ok(());
        }
        Command::Exchange {
            redirect_uri: uri,
            code,
        } => {
            let token = client.exchange_code(&redirect_uri(uri)?, &code).await?;
            settings.apply_token(&token);
            settings.save_to(&settings_path)?;
            println!("Access token stored in {}", settings_path.display());
            return Ok(());
        }
        Command::Refresh { redirect_uri: uri } => {
            let refresh = settings
                .refresh_token
                .clone()
                .ok_or_else(|| HootsuiteError::config("no refresh token stored"))?;
            let token = client.refresh_token(&redirect_uri(uri)?, &refresh).await?;
            settings.apply_token(&token);
            settings.save_to(&settings_path)?;
            println!("Access token refreshed");
            return Ok(());
        }
        Command::Echo => client.send_echo().await?,
        Command::Account => client.get_account_info().await?,
        Command::Me => client.get_me().await?,
        Command::Organizations => client.get_my_organizations().await?,
        Command::SocialProfiles => client.get_my_social_profiles().await?,
        Command::Member { id } => client.get_member(&id).await?,
        Command::MemberOrganizations { id } => client.get_member_organizations(&id).await?,
        Command::Messages {
            start,
            end,
            state,
            profiles,
            limit,
        } => {
            let query = OutboundMessagesQuery {
                start_time: start,
                end_time: end,
                state,
                social_profile_ids: profiles,
                limit,
            };
            client.get_outbound_messages(&query).await?
        }
        Command::Message { id } => client.get_message(&id).await?,
        Command::DeleteMessage { id } => client.delete_message(&id).await?,
        Command::Approve {
            id,
            sequence,
            reviewer,
        } => client.approve_message(&id, sequence, reviewer).await?,
        Command::Reject {
            id,
            sequence,
            reviewer,
            reason,
        } => {
            client
                .reject_message(&id, sequence, reviewer, &reason)
                .await?
        }
        Command::OrgMembers { organization_id } => {
            client.get_organization_members(&organization_id).await?
        }
        Command::RemoveMember {
            organization_id,
            member_id,
        } => {
            client
                .remove_member_from_organization(&organization_id, &member_id)
                .await?
        }
    };

    display_payload(result.as_ref())?;
    Ok(())
}

fn display_payload(payload: Option<&Payload>) -> Result<(), HootsuiteError> {
    match payload {
        Some(Payload::Json(value)) => println!("{}", serde_json::to_string_pretty(value)?),
        Some(Payload::Text(text)) => println!("{text}"),
        None => println!("(no content)"),
    }
    Ok(())
}
