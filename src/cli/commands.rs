//! Execution of the publishing and feed commands.

use std::sync::Arc;

use color_eyre::eyre::{eyre, Result, WrapErr};
use color_eyre::Section;
use tracing::{debug, info};

use crate::adapters::{
    ArweaveUploader, HeyPollService, LeafwatchAnalytics, LensClient, NoWalletSigner,
    ReqwestHttpClient,
};
use crate::auth::{Credentials, CredentialsManager};
use crate::composer::{Composer, ComposerServices, PublicationReceipt};
use crate::config::ClientConfig;
use crate::feed::{FeedView, NftFeedLoader};
use crate::models::{Profile, ProfileStatus, PublicationRef};
use crate::state::NonceStore;
use crate::traits::{AnalyticsSink, HttpClient, LensApi};

/// Everything a command needs to talk to Lens and hey.
pub struct Session {
    pub config: ClientConfig,
    pub api: Arc<dyn LensApi>,
    pub services: ComposerServices,
    pub profile_id: Option<String>,
}

impl Session {
    /// Wire the HTTP adapters from configuration and stored credentials.
    pub fn connect(config: ClientConfig, credentials: &Credentials) -> Result<Self> {
        let http: Arc<dyn HttpClient> = Arc::new(
            ReqwestHttpClient::with_timeout(config.request_timeout)
                .wrap_err("Failed to build HTTP client")?,
        );
        let token = credentials.usable_token().map(String::from);
        if credentials.has_token() && token.is_none() {
            info!("Stored access token has expired; continuing unauthenticated");
        }

        let api: Arc<dyn LensApi> = Arc::new(
            LensClient::new(http.clone(), config.lens_api_url.clone())
                .with_access_token(token.clone()),
        );
        let analytics: Arc<dyn AnalyticsSink> = Arc::new(
            LeafwatchAnalytics::new(http.clone(), &config.hey_api_url)
                .with_actor(credentials.profile_id.clone()),
        );
        let services = ComposerServices {
            api: api.clone(),
            uploader: Arc::new(ArweaveUploader::new(
                http.clone(),
                config.metadata_url.clone(),
            )),
            polls: Arc::new(
                HeyPollService::new(http, config.hey_api_url.clone()).with_access_token(token),
            ),
            signer: Arc::new(NoWalletSigner),
            analytics,
            nonce: NonceStore::new(0),
        };

        Ok(Self {
            config,
            api,
            services,
            profile_id: credentials.profile_id.clone(),
        })
    }

    /// Load the session from `HEY_*` variables and `~/.hey/credentials.json`.
    pub fn from_env() -> Result<Self> {
        let config = ClientConfig::from_env().map_err(|err| {
            let hint = err.category().recovery_hint();
            eyre!(err).suggestion(hint)
        })?;
        let credentials = CredentialsManager::new()
            .map(|manager| manager.load())
            .unwrap_or_default();
        Self::connect(config, &credentials)
    }

    /// The signed-in profile, if credentials name one that exists.
    pub async fn profile(&self) -> Result<Option<Profile>> {
        let id = match &self.profile_id {
            Some(id) => id,
            None => return Ok(None),
        };
        let profile = self
            .api
            .profile(id)
            .await
            .wrap_err_with(|| format!("Failed to load profile {}", id))?;
        debug!(profile = id.as_str(), found = profile.is_some(), "Profile loaded");
        Ok(profile)
    }
}

/// What the composer should create.
#[derive(Debug, Clone, PartialEq)]
pub enum Draft {
    Post(String),
    Comment { on: String, content: String },
    Quote { on: String, content: String },
}

/// Compose and submit one publication.
pub async fn publish(session: &Session, draft: Draft) -> Result<PublicationReceipt> {
    let profile = session.profile().await?;

    let (composer, content) = match draft {
        Draft::Post(content) => (Composer::new(session.services.clone()), content),
        Draft::Comment { on, content } => (
            Composer::for_comment(session.services.clone(), PublicationRef::new(on)),
            content,
        ),
        Draft::Quote { on, content } => {
            let composer = Composer::new(session.services.clone());
            composer.quote(PublicationRef::new(on));
            (composer, content)
        }
    };
    composer.set_content(content);

    composer
        .create_publication(profile.as_ref(), ProfileStatus::default())
        .await
        .map_err(|err| {
            let report = match composer.feedback().banner {
                Some(banner) => eyre!("{} {}", banner, err.user_message()),
                None => eyre!(err.user_message()),
            };
            report.suggestion(err.category().recovery_hint())
        })
}

/// One line per NFT in the grid.
pub fn render_view(view: &FeedView) -> Vec<String> {
    match view {
        FeedView::Shimmer => vec!["Loading...".to_string()],
        FeedView::Empty { message } => vec![message.clone()],
        FeedView::Error { title, message } => vec![format!("{}: {}", title, message)],
        FeedView::Grid {
            items,
            show_sentinel,
        } => {
            let mut lines: Vec<String> = items
                .iter()
                .map(|nft| {
                    let name = nft.name.as_deref().unwrap_or("Untitled");
                    match &nft.collection_name {
                        Some(collection) => format!("{}  {} ({})", nft.key(), name, collection),
                        None => format!("{}  {}", nft.key(), name),
                    }
                })
                .collect();
            if *show_sentinel {
                lines.push("... more available (use --all)".to_string());
            }
            lines
        }
    }
}

/// Load the signed-in profile's NFTs and print them.
pub async fn list_nfts(session: &Session, all: bool) -> Result<()> {
    let profile = session
        .profile()
        .await?
        .ok_or_else(|| eyre!("Sign in to see your NFTs"))?;

    let mut loader = NftFeedLoader::new(
        session.api.clone(),
        session.services.analytics.clone(),
        &profile,
        session.config.is_mainnet,
        session.config.page_size,
    );
    let outcome = if all {
        loader.load_all().await
    } else {
        loader.load().await
    };
    if let Err(err) = outcome {
        debug!("NFT feed stopped early: {}", err);
    }

    for line in render_view(&loader.view()) {
        println!("{}", line);
    }
    Ok(())
}
