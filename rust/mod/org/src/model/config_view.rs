use serde::Serialize;

/// Instance configuration snapshot served to clients.
///
/// An immutable aggregate assembled once per request: hosting mode, the
/// auth provider descriptors enabled for the caller (opaque, passed through
/// in the collaborator's chosen order), and whether a newer platform
/// version is available. Fields are only readable — there is no way to
/// mutate a view after [`ConfigViewBuilder::build`].
#[derive(Debug, Clone, Serialize)]
pub struct ConfigView {
    cloud_hosting: bool,
    auth_configs: Vec<serde_json::Value>,
    need_update: bool,
}

impl ConfigView {
    pub fn builder() -> ConfigViewBuilder {
        ConfigViewBuilder::default()
    }

    /// Whether this instance runs in cloud hosting mode.
    pub fn cloud_hosting(&self) -> bool {
        self.cloud_hosting
    }

    /// Enabled auth provider descriptors, in display order.
    pub fn auth_configs(&self) -> &[serde_json::Value] {
        &self.auth_configs
    }

    /// Whether a newer platform version is available.
    pub fn need_update(&self) -> bool {
        self.need_update
    }
}

/// Assembles a [`ConfigView`]. The collaborator gathers the three values
/// and calls [`build`](ConfigViewBuilder::build); no partially constructed
/// view is ever observable.
#[derive(Debug, Default)]
pub struct ConfigViewBuilder {
    cloud_hosting: bool,
    auth_configs: Vec<serde_json::Value>,
    need_update: bool,
}

impl ConfigViewBuilder {
    pub fn cloud_hosting(mut self, cloud_hosting: bool) -> Self {
        self.cloud_hosting = cloud_hosting;
        self
    }

    pub fn auth_configs(mut self, auth_configs: Vec<serde_json::Value>) -> Self {
        self.auth_configs = auth_configs;
        self
    }

    pub fn need_update(mut self, need_update: bool) -> Self {
        self.need_update = need_update;
        self
    }

    pub fn build(self) -> ConfigView {
        ConfigView {
            cloud_hosting: self.cloud_hosting,
            auth_configs: self.auth_configs,
            need_update: self.need_update,
        }
    }
}
