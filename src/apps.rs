//! App, env, cname and deploy endpoints.

use crate::{
    App, AppCname, AppDeploy, AppEnv, CreateAppEnv, Params, Result, TsuruClient,
    UpdateAppRequest,
};

const APPS: &str = "apps";

impl TsuruClient {
    /// Lists apps visible to the token.
    pub async fn list_apps(&self) -> Result<Vec<App>> {
        self.get(&[APPS]).await
    }

    /// Fetches one app by name.
    pub async fn get_app(&self, name: &str) -> Result<App> {
        self.get(&[APPS, name]).await
    }

    /// Creates an app. `200` and `201` are success.
    pub async fn create_app(&self, app: &App) -> Result<()> {
        self.post(app, &[APPS]).await
    }

    /// Updates pool, team owner, description, plan, platform and tags.
    pub async fn update_app(&self, name: &str, update: &UpdateAppRequest) -> Result<()> {
        self.put(update, &[APPS, name]).await
    }

    /// Removes an app.
    pub async fn delete_app(&self, name: &str) -> Result<()> {
        self.delete(&[APPS, name]).await
    }

    /// Sets env vars on an app.
    pub async fn create_app_envs(&self, app: &str, request: &CreateAppEnv) -> Result<()> {
        self.post(request, &[APPS, app, "env"]).await
    }

    /// Lists env vars of an app.
    pub async fn get_app_envs(&self, app: &str) -> Result<Vec<AppEnv>> {
        self.get(&[APPS, app, "env"]).await
    }

    /// Unsets the env vars named in `request`.
    ///
    /// Values are ignored; only names and `no_restart` are sent. When no
    /// names are given nothing is sent.
    pub async fn delete_app_envs(&self, app: &str, request: &CreateAppEnv) -> Result<()> {
        let params = delete_envs_query(request);
        if params.len() < 2 {
            return Ok(());
        }
        self.delete_with_params(&params, &[APPS, app, "env"]).await
    }

    /// Adds a cname to an app.
    pub async fn create_app_cname(&self, app: &str, cname: &AppCname) -> Result<()> {
        self.post(cname, &[APPS, app, "cname"]).await
    }

    /// Replaces a cname of an app.
    pub async fn update_app_cname(&self, app: &str, cname: &AppCname) -> Result<()> {
        self.put(cname, &[APPS, app, "cname"]).await
    }

    /// Removes a cname; the cname travels as a JSON body.
    pub async fn delete_app_cname(&self, app: &str, cname: &AppCname) -> Result<()> {
        self.delete_with_payload(cname, &Params::new(), &[APPS, app, "cname"])
            .await
    }

    /// Triggers an image deploy. See [`deploy_form`] for the fields sent.
    pub async fn deploy_app(&self, app: &str, deploy: &AppDeploy) -> Result<()> {
        self.post_url_encoded(&deploy_form(deploy), &[APPS, app, "deploy"])
            .await
    }
}

/// `norestart` first, then one `env` pair per name.
fn delete_envs_query(request: &CreateAppEnv) -> Params {
    let mut params = Params::new().with("norestart", request.no_restart);
    for env in &request.envs {
        params.push("env", &env.name);
    }
    params
}

/// Builds the deploy form body.
///
/// `image` is always present. Every other field is included only when set:
/// numbers above zero, `true` flags, non-empty strings. Registry credentials
/// ride along with `private-image=true` even when empty. The server picks its
/// defaults for omitted fields.
pub fn deploy_form(deploy: &AppDeploy) -> Params {
    let mut form = Params::new().with("image", &deploy.image);
    if deploy.private_image {
        form.push("private-image", true);
        form.push("registry-user", &deploy.registry_user);
        form.push("registry-secret", &deploy.registry_secret);
    }
    for (key, value) in [
        ("steps", deploy.steps),
        ("step-weight", deploy.step_weight),
        ("step-interval", deploy.step_interval),
        ("port", deploy.port),
    ] {
        if value > 0 {
            form.push(key, value);
        }
    }
    if deploy.detach {
        form.push("detach", true);
    }
    if !deploy.message.is_empty() {
        form.push("message", &deploy.message);
    }
    form
}
