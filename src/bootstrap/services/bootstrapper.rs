//! Credential discovery and registry construction.
//!
//! Sources are consulted in a fixed order so that registration order, and
//! therefore key placement, is the same on every start with the same
//! deployment:
//!
//! 1. the main credential (environment variable, then fallback file) as
//!    `main`;
//! 2. numbered environment slots `DB1_CREDENTIALS`..`DB9_CREDENTIALS` as
//!    `db1`..`db9`;
//! 3. when exactly one backend connected, extra connections of the main
//!    credential as `main_2`, `main_3`, ...;
//! 4. while few backends exist, `*.json` files of the credentials directory
//!    in lexical order, named by file stem.

use crate::bootstrap::{
    domain::{CredentialSource, ServiceAccountCredential},
    ports::{BackendConnector, Environment},
};
use crate::config::BootstrapConfig;
use crate::routing::domain::{BackendRegistry, BackendRegistryBuilder};
use crate::store::domain::BackendName;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;
use std::sync::Arc;

const MAIN_BACKEND: &str = "main";
const CREDENTIAL_EXTENSION: &str = ".json";

/// Opens the directory relative paths of a [`BootstrapConfig`] resolve
/// against.
///
/// # Errors
///
/// Returns the I/O error when the directory cannot be opened.
pub fn open_root(path: &Utf8Path) -> io::Result<Dir> {
    Dir::open_ambient_dir(path, ambient_authority())
}

/// Builds a [`BackendRegistry`] from deployment credentials.
pub struct Bootstrapper<C, E>
where
    C: BackendConnector,
    E: Environment,
{
    config: BootstrapConfig,
    connector: Arc<C>,
    environment: E,
    root: Dir,
}

impl<C, E> Bootstrapper<C, E>
where
    C: BackendConnector,
    E: Environment,
{
    /// Creates a bootstrapper.
    #[must_use]
    pub const fn new(config: BootstrapConfig, connector: Arc<C>, environment: E, root: Dir) -> Self {
        Self {
            config,
            connector,
            environment,
            root,
        }
    }

    /// Discovers credentials, connects them and freezes the registry.
    ///
    /// Never fails: unreadable credentials and refused connections are logged
    /// and skipped, so the result may be empty.
    pub async fn bootstrap(&self) -> BackendRegistry {
        let mut builder = BackendRegistry::builder();

        let Some(main) = self.main_credential() else {
            tracing::error!(
                env = %self.config.main_credentials_env,
                file = %self.config.main_credentials_file,
                "no main credential found; no backend available"
            );
            return builder.build();
        };

        self.connect_named(&mut builder, MAIN_BACKEND.to_owned(), &main)
            .await;

        for slot in 1..=self.config.additional_slots {
            self.connect_slot(&mut builder, slot).await;
        }

        if builder.len() == 1 && self.config.duplicate_single_backend {
            tracing::info!(
                extra_connections = self.config.duplicate_count,
                "single backend found, adding connections to the main store"
            );
            for index in 0..self.config.duplicate_count {
                let name = format!("{MAIN_BACKEND}_{}", index.saturating_add(2));
                self.connect_named(&mut builder, name, &main).await;
            }
        }

        if builder.len() <= self.config.directory_scan_threshold {
            self.scan_credentials_dir(&mut builder).await;
        }

        let registry = builder.build();
        tracing::info!(
            backends = registry.len(),
            names = ?registry.names(),
            "bootstrap complete"
        );
        registry
    }

    fn main_credential(&self) -> Option<ServiceAccountCredential> {
        let env_name = &self.config.main_credentials_env;
        if let Some(json) = self.environment.var(env_name) {
            match ServiceAccountCredential::parse(
                CredentialSource::Environment(env_name.clone()),
                &json,
            ) {
                Ok(credential) => {
                    tracing::info!(source = %credential.source(), "using main credential");
                    return Some(credential);
                }
                Err(err) => tracing::warn!(error = %err, "ignoring main credential variable"),
            }
        }

        let path = &self.config.main_credentials_file;
        let json = match self.root.read_to_string(path) {
            Ok(json) => json,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
            Err(err) => {
                tracing::warn!(file = %path, error = %err, "failed to read main credential file");
                return None;
            }
        };
        match ServiceAccountCredential::parse(CredentialSource::File(path.to_string()), &json) {
            Ok(credential) => {
                tracing::info!(source = %credential.source(), "using main credential");
                Some(credential)
            }
            Err(err) => {
                tracing::warn!(error = %err, "ignoring main credential file");
                None
            }
        }
    }

    async fn connect_slot(&self, builder: &mut BackendRegistryBuilder, slot: u8) {
        let env_name = self.config.additional_env_var(slot);
        let Some(json) = self.environment.var(&env_name) else {
            return;
        };
        match ServiceAccountCredential::parse(CredentialSource::Environment(env_name), &json) {
            Ok(credential) => {
                let name = self.config.additional_backend_name(slot);
                self.connect_named(builder, name, &credential).await;
            }
            Err(err) => tracing::warn!(slot, error = %err, "skipping credential slot"),
        }
    }

    async fn scan_credentials_dir(&self, builder: &mut BackendRegistryBuilder) {
        let dir_path = &self.config.credentials_dir;
        let dir = match self.root.open_dir(dir_path) {
            Ok(dir) => dir,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(dir = %dir_path, "no credentials directory");
                return;
            }
            Err(err) => {
                tracing::warn!(dir = %dir_path, error = %err, "failed to open credentials directory");
                return;
            }
        };

        let file_names = match credential_file_names(&dir) {
            Ok(names) => names,
            Err(err) => {
                tracing::warn!(dir = %dir_path, error = %err, "failed to list credentials directory");
                return;
            }
        };

        for file_name in file_names {
            let Some(stem) = file_name.strip_suffix(CREDENTIAL_EXTENSION) else {
                continue;
            };
            let name = match BackendName::new(stem) {
                Ok(name) => name,
                Err(err) => {
                    tracing::warn!(file = %file_name, error = %err, "skipping credential file");
                    continue;
                }
            };
            if builder.contains(&name) {
                tracing::warn!(file = %file_name, backend = %name, "backend already registered, skipping credential file");
                continue;
            }

            let json = match dir.read_to_string(&file_name) {
                Ok(json) => json,
                Err(err) => {
                    tracing::warn!(file = %file_name, error = %err, "failed to read credential file");
                    continue;
                }
            };
            let source = CredentialSource::File(format!("{dir_path}/{file_name}"));
            match ServiceAccountCredential::parse(source, &json) {
                Ok(credential) => self.connect(builder, name, &credential).await,
                Err(err) => tracing::warn!(error = %err, "skipping credential file"),
            }
        }
    }

    async fn connect_named(
        &self,
        builder: &mut BackendRegistryBuilder,
        raw_name: String,
        credential: &ServiceAccountCredential,
    ) {
        match BackendName::new(raw_name) {
            Ok(name) => self.connect(builder, name, credential).await,
            Err(err) => tracing::warn!(error = %err, "skipping backend with invalid name"),
        }
    }

    async fn connect(
        &self,
        builder: &mut BackendRegistryBuilder,
        name: BackendName,
        credential: &ServiceAccountCredential,
    ) {
        let store = match self.connector.connect(&name, credential).await {
            Ok(store) => store,
            Err(err) => {
                tracing::warn!(backend = %name, source = %credential.source(), error = %err, "failed to connect backend");
                return;
            }
        };
        match builder.insert(name.clone(), store) {
            Ok(()) => tracing::info!(backend = %name, source = %credential.source(), "backend connected"),
            Err(err) => tracing::warn!(error = %err, "discarding backend connection"),
        }
    }
}

/// Lists `*.json` entries in lexical order.
fn credential_file_names(dir: &Dir) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in dir.entries()? {
        let file_name = entry?.file_name()?;
        if file_name.ends_with(CREDENTIAL_EXTENSION) {
            names.push(file_name);
        }
    }
    names.sort();
    Ok(names)
}
