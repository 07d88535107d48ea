use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct App {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default)]
    pub pool: String,
    #[serde(rename = "teamowner", default, skip_serializing_if = "String::is_empty")]
    pub team_owner: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<Plan>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub units: Vec<Unit>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cname: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ip: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub org: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entrypoints: Vec<Entrypoint>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub routers: Vec<Router>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lock: Option<Lock>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub platform: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub status: String,
    /// Client-side only; the API does not return it.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error: String,
}

/// Body of `PUT apps/<name>`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAppRequest {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pool: String,
    #[serde(rename = "teamowner", default, skip_serializing_if = "String::is_empty")]
    pub team_owner: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub plan: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub platform: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl From<&App> for UpdateAppRequest {
    fn from(app: &App) -> Self {
        Self {
            pool: app.pool.clone(),
            team_owner: app.team_owner.clone(),
            description: app.description.clone(),
            plan: app
                .plan
                .as_ref()
                .map(|plan| plan.name.clone())
                .unwrap_or_default(),
            platform: app.platform.clone(),
            tags: app.tags.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default)]
    pub memory: i64,
    #[serde(default)]
    pub swap: i64,
    #[serde(rename = "cpushare", default)]
    pub cpu_share: i64,
    #[serde(default)]
    pub default: bool,
    #[serde(default)]
    pub public: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub org: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub teams: Vec<String>,
}

/// A running unit of an app. Field names are capitalized on the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Unit {
    #[serde(rename = "ID", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub app_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub process_name: String,
    #[serde(rename = "Type", default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(rename = "IP", default, skip_serializing_if = "String::is_empty")]
    pub ip: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub org: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub host_addr: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub host_port: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub scheme: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub host: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub opaque: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub user: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub raw_path: String,
    #[serde(default)]
    pub force_query: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub raw_query: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub fragment: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub raw_fragment: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entrypoint {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cname: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub scheme: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Router {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub opts: serde_json::Map<String, JsonValue>,
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address: String,
    #[serde(default)]
    pub default: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Lock {
    #[serde(default)]
    pub locked: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reason: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub owner: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub acquire_date: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppEnv {
    pub name: String,
    pub value: String,
}

/// Body of env creation; its names and `norestart` also drive env deletion.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateAppEnv {
    pub envs: Vec<AppEnv>,
    #[serde(rename = "norestart")]
    pub no_restart: bool,
    pub private: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppCname {
    pub cname: String,
    pub encrypt: bool,
}

/// Deploy options. Sent as a form; see [`crate::TsuruClient::deploy_app`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppDeploy {
    pub image: String,
    pub private_image: bool,
    pub registry_user: String,
    pub registry_secret: String,
    pub steps: i64,
    pub step_weight: i64,
    pub step_interval: i64,
    pub port: i64,
    pub detach: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{Address, App, AppCname, AppEnv, CreateAppEnv, Lock, Plan, Unit, UpdateAppRequest};

    #[test]
    fn app_omits_empty_optionals_and_roundtrips() {
        let app = App {
            name: "web".to_owned(),
            pool: "default".to_owned(),
            team_owner: "platform".to_owned(),
            plan: Some(Plan {
                name: "small".to_owned(),
                memory: 134_217_728,
                ..Plan::default()
            }),
            tags: vec!["prod".to_owned()],
            ..App::default()
        };

        let encoded = serde_json::to_value(&app).unwrap();
        assert_eq!(
            encoded,
            json!({
                "name": "web",
                "pool": "default",
                "teamowner": "platform",
                "plan": {
                    "name": "small",
                    "memory": 134_217_728,
                    "swap": 0,
                    "cpushare": 0,
                    "default": false,
                    "public": false
                },
                "tags": ["prod"]
            })
        );

        let decoded: App = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, app);
    }

    #[test]
    fn empty_pool_is_still_sent() {
        let encoded = serde_json::to_value(App::default()).unwrap();
        assert_eq!(encoded, json!({ "pool": "" }));
    }

    #[test]
    fn unit_uses_capitalized_wire_names() {
        let unit = Unit {
            id: "abc".to_owned(),
            app_name: "web".to_owned(),
            kind: "python".to_owned(),
            ip: "10.0.0.1".to_owned(),
            address: Some(Address {
                scheme: "http".to_owned(),
                host: "10.0.0.1:8888".to_owned(),
                ..Address::default()
            }),
            ..Unit::default()
        };

        let encoded = serde_json::to_value(&unit).unwrap();
        assert_eq!(
            encoded,
            json!({
                "ID": "abc",
                "AppName": "web",
                "Type": "python",
                "IP": "10.0.0.1",
                "Address": { "Scheme": "http", "Host": "10.0.0.1:8888", "ForceQuery": false }
            })
        );
        assert_eq!(serde_json::from_value::<Unit>(encoded).unwrap(), unit);
    }

    #[test]
    fn app_decodes_api_response_with_unknown_fields() {
        let app: App = serde_json::from_value(json!({
            "name": "web",
            "pool": "default",
            "lock": { "Locked": false },
            "routers": [{ "name": "ingress", "opts": { "tls": true }, "type": "nginx" }],
            "deploys": 12
        }))
        .unwrap();

        assert_eq!(app.lock, Some(Lock::default()));
        assert_eq!(app.routers[0].kind, "nginx");
        assert_eq!(app.routers[0].opts["tls"], json!(true));
    }

    #[test]
    fn env_and_cname_entries_default_missing_fields() {
        let envs: Vec<AppEnv> = serde_json::from_value(json!([
            { "name": "DATABASE_URL" },
            { "name": "PORT", "value": "8888", "public": true }
        ]))
        .unwrap();
        assert_eq!(envs[0].value, "");
        assert_eq!(envs[1].value, "8888");

        let cname: AppCname = serde_json::from_value(json!({ "cname": "web.example.com" })).unwrap();
        assert!(!cname.encrypt);

        let request: CreateAppEnv = serde_json::from_value(json!({ "norestart": true })).unwrap();
        assert!(request.no_restart);
        assert!(request.envs.is_empty());
    }

    #[test]
    fn update_request_copies_plan_name() {
        let app = App {
            pool: "default".to_owned(),
            plan: Some(Plan {
                name: "large".to_owned(),
                ..Plan::default()
            }),
            ..App::default()
        };
        let update = UpdateAppRequest::from(&app);
        assert_eq!(update.plan, "large");
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({ "pool": "default", "plan": "large" })
        );
    }
}
