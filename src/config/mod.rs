mod args;

pub use args::read_args;

use std::env;

pub const ENV_DYNAMODB_ENDPOINT_URL: &str = "DYNAMODB_ENDPOINT_URL";

const ENV_REGION: [&str; 3] = ["AWS_REGION", "AWS_DEFAULT_REGION", "EC2_REGION"];
const ENV_ENDPOINT_URL: [&str; 3] = ["AWS_URL", "EC2_URL", ENV_DYNAMODB_ENDPOINT_URL];
const ENV_ACCESS_KEY: [&str; 3] = ["AWS_ACCESS_KEY_ID", "AWS_ACCESS_KEY", "EC2_ACCESS_KEY"];
const ENV_SECRET_KEY: [&str; 3] = ["AWS_SECRET_ACCESS_KEY", "AWS_SECRET_KEY", "EC2_SECRET_KEY"];
const ENV_SECURITY_TOKEN: [&str; 3] = [
    "AWS_SECURITY_TOKEN",
    "EC2_SECURITY_TOKEN",
    "AWS_SESSION_TOKEN",
];
const ENV_PROFILE: [&str; 2] = ["AWS_PROFILE", "AWS_DEFAULT_PROFILE"];

/// AWS connection fields as given in the module arguments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectionParams {
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
    pub aws_access_key: Option<String>,
    pub aws_secret_key: Option<String>,
    pub security_token: Option<String>,
    pub profile: Option<String>,
    pub validate_certs: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StaticCredentials {
    pub access_key: String,
    pub secret_key: String,
    pub session_token: Option<String>,
}

/// Connection settings after falling back to the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    region: Option<String>,
    endpoint_url: Option<String>,
    credentials: Option<StaticCredentials>,
    profile: Option<String>,
    validate_certs: bool,
}

impl Config {
    pub fn new(params: &ConnectionParams) -> Self {
        Self::resolve(params, |key| env::var(key).ok())
    }

    fn resolve<F>(params: &ConnectionParams, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |value: &Option<String>, keys: &[&str]| -> Option<String> {
            non_empty(value.clone()).or_else(|| {
                keys.iter()
                    .copied()
                    .find_map(|key| non_empty(lookup(key)))
            })
        };

        let access_key = pick(&params.aws_access_key, &ENV_ACCESS_KEY);
        let secret_key = pick(&params.aws_secret_key, &ENV_SECRET_KEY);
        let session_token = pick(&params.security_token, &ENV_SECURITY_TOKEN);

        // A lone key is useless; leave it to the default provider chain.
        let credentials = match (access_key, secret_key) {
            (Some(access_key), Some(secret_key)) => Some(StaticCredentials {
                access_key,
                secret_key,
                session_token,
            }),
            _ => None,
        };

        Self {
            region: pick(&params.region, &ENV_REGION),
            endpoint_url: pick(&params.endpoint_url, &ENV_ENDPOINT_URL),
            credentials,
            profile: pick(&params.profile, &ENV_PROFILE),
            validate_certs: params.validate_certs.unwrap_or(true),
        }
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn endpoint_url(&self) -> Option<String> {
        self.endpoint_url.clone()
    }

    pub fn credentials(&self) -> Option<&StaticCredentials> {
        self.credentials.as_ref()
    }

    pub fn profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    pub fn validate_certs(&self) -> bool {
        self.validate_certs
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
