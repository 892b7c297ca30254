//! App loader.
//!
//! Loading a compiled project is two steps: load the entry script, then hand
//! the binary URL to the bootstrap entry point the script registers. The
//! script loader returns that entry point as a [`Bootstrap`] capability
//! instead of leaving callers to look it up globally.

use tracing::debug;

use crate::artifact::ArtifactUrls;
use crate::error::LoadError;

/// Entry point registered by a loaded script.
#[allow(async_fn_in_trait)]
pub trait Bootstrap {
    /// Start the project whose wasm binary lives at `binary_url`.
    async fn start(&self, binary_url: &str) -> Result<(), LoadError>;
}

/// Loads an external entry script into the host.
#[allow(async_fn_in_trait)]
pub trait ScriptLoader {
    type Bootstrap: Bootstrap;

    /// Resolves once the script has loaded and its bootstrap is available.
    async fn load_script(&self, url: &str) -> Result<Self::Bootstrap, LoadError>;
}

/// Loads compiled projects by id.
pub struct AppLoader<L> {
    api_base: String,
    loader: L,
}

impl<L: ScriptLoader> AppLoader<L> {
    pub fn new(api_base: &str, loader: L) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            loader,
        }
    }

    /// Load the entry script for `id`, then bootstrap its binary.
    ///
    /// Previously loaded projects are left in place.
    pub async fn load_app(&self, id: &str) -> Result<ArtifactUrls, LoadError> {
        let urls = ArtifactUrls::for_project(&self.api_base, id);

        debug!(url = %urls.script, "loading entry script");
        let bootstrap = self.loader.load_script(&urls.script).await?;

        debug!(url = %urls.binary, "bootstrapping binary");
        bootstrap.start(&urls.binary).await?;

        Ok(urls)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// What a [`RecordingLoader`] saw, in order.
    #[derive(Clone, Debug, PartialEq)]
    pub enum LoadCall {
        Script(String),
        Start(String),
    }

    /// Script loader double that records script and bootstrap calls.
    #[derive(Clone, Default)]
    pub struct RecordingLoader {
        pub calls: Rc<RefCell<Vec<LoadCall>>>,
        pub fail_script: bool,
        pub fail_start: bool,
    }

    pub struct RecordingBootstrap {
        calls: Rc<RefCell<Vec<LoadCall>>>,
        fail: bool,
    }

    impl Bootstrap for RecordingBootstrap {
        async fn start(&self, binary_url: &str) -> Result<(), LoadError> {
            self.calls
                .borrow_mut()
                .push(LoadCall::Start(binary_url.to_string()));
            if self.fail {
                return Err(LoadError::Bootstrap("unreachable".into()));
            }
            Ok(())
        }
    }

    impl ScriptLoader for RecordingLoader {
        type Bootstrap = RecordingBootstrap;

        async fn load_script(&self, url: &str) -> Result<Self::Bootstrap, LoadError> {
            self.calls.borrow_mut().push(LoadCall::Script(url.to_string()));
            if self.fail_script {
                return Err(LoadError::Script {
                    url: url.to_string(),
                    reason: "network error".into(),
                });
            }
            Ok(RecordingBootstrap {
                calls: self.calls.clone(),
                fail: self.fail_start,
            })
        }
    }

    #[tokio::test]
    async fn test_loads_script_then_bootstraps_binary() {
        let loader = RecordingLoader::default();
        let app_loader = AppLoader::new("http://localhost:3000/api", loader.clone());

        let urls = app_loader.load_app("42").await.unwrap();

        assert_eq!(urls.script, "http://localhost:3000/api/project/42/playground.js");
        assert_eq!(
            *loader.calls.borrow(),
            vec![
                LoadCall::Script("http://localhost:3000/api/project/42/playground.js".into()),
                LoadCall::Start("http://localhost:3000/api/project/42/playground.wasm".into()),
            ]
        );
    }

    #[tokio::test]
    async fn test_script_failure_skips_bootstrap() {
        let loader = RecordingLoader {
            fail_script: true,
            ..Default::default()
        };
        let app_loader = AppLoader::new("/api", loader.clone());

        let err = app_loader.load_app("1").await.unwrap_err();

        assert!(matches!(err, LoadError::Script { .. }));
        assert_eq!(
            *loader.calls.borrow(),
            vec![LoadCall::Script("/api/project/1/playground.js".into())]
        );
    }

    #[tokio::test]
    async fn test_reloading_loads_again() {
        let loader = RecordingLoader::default();
        let app_loader = AppLoader::new("/api", loader.clone());

        app_loader.load_app("1").await.unwrap();
        app_loader.load_app("1").await.unwrap();

        assert_eq!(loader.calls.borrow().len(), 4);
    }
}
