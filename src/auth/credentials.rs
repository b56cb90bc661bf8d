//! Credentials storage in `~/.hey/.credentials.json`.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

const CREDENTIALS_DIR: &str = ".hey";

const CREDENTIALS_FILE: &str = ".credentials.json";

/// A Lens session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Credentials {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    /// Unix timestamp (seconds) after which the access token is rejected
    pub expires_at: Option<i64>,
    /// Signed-in Lens profile id
    pub profile_id: Option<String>,
}

#[derive(Deserialize)]
struct JwtClaims {
    exp: i64,
}

/// Expiry (`exp` claim) of a JWT access token.
pub fn token_expires_at(access_token: &str) -> Option<i64> {
    let payload = access_token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let claims: JwtClaims = serde_json::from_slice(&bytes).ok()?;
    Some(claims.exp)
}

impl Credentials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session for a profile, taking the expiry from the token itself.
    pub fn for_profile(profile_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        let access_token = access_token.into();
        Self {
            expires_at: token_expires_at(&access_token),
            access_token: Some(access_token),
            refresh_token: None,
            profile_id: Some(profile_id.into()),
        }
    }

    pub fn has_token(&self) -> bool {
        self.access_token.is_some()
    }

    /// Expired, or no expiry known.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => chrono::Utc::now().timestamp() >= expires_at,
            None => true,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.has_token() && !self.is_expired()
    }

    /// The access token, if it can still be used.
    pub fn usable_token(&self) -> Option<&str> {
        if self.is_valid() {
            self.access_token.as_deref()
        } else {
            None
        }
    }
}

#[derive(Debug)]
pub struct CredentialsManager {
    credentials_path: PathBuf,
}

impl CredentialsManager {
    /// Manager for `~/.hey/.credentials.json`. `None` without a home
    /// directory.
    pub fn new() -> Option<Self> {
        let home = dirs::home_dir()?;
        Some(Self::in_dir(&home))
    }

    /// Manager storing under `<base>/.hey/`.
    pub fn in_dir(base: &Path) -> Self {
        Self {
            credentials_path: base.join(CREDENTIALS_DIR).join(CREDENTIALS_FILE),
        }
    }

    pub fn credentials_path(&self) -> &PathBuf {
        &self.credentials_path
    }

    /// Stored credentials, or defaults when missing or unreadable.
    pub fn load(&self) -> Credentials {
        let file = match File::open(&self.credentials_path) {
            Ok(f) => f,
            Err(_) => return Credentials::default(),
        };

        match serde_json::from_reader(BufReader::new(file)) {
            Ok(creds) => creds,
            Err(err) => {
                debug!("Ignoring unreadable credentials file: {}", err);
                Credentials::default()
            }
        }
    }

    /// Write the credentials, creating `~/.hey` when needed.
    pub fn save(&self, credentials: &Credentials) -> std::io::Result<()> {
        if let Some(parent) = self.credentials_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(File::create(&self.credentials_path)?);
        serde_json::to_writer_pretty(&mut writer, credentials)?;
        writer.flush()
    }

    /// Remove the stored session. Succeeds when nothing is stored.
    pub fn clear(&self) -> std::io::Result<()> {
        match fs::remove_file(&self.credentials_path) {
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}
