//! Wire types for the Yggdrasil `/authenticate` endpoint.

use serde::{Deserialize, Serialize};

pub(crate) const GAME_NAME: &str = "Minecraft";
pub(crate) const AGENT_VERSION: u32 = 1;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AuthenticateRequest<'a> {
    pub agent: Agent,
    pub username: &'a str,
    pub password: &'a str,
    pub client_token: &'a str,
    pub request_user: bool,
}

#[derive(Serialize)]
pub(crate) struct Agent {
    pub name: &'static str,
    pub version: u32,
}

impl Default for Agent {
    fn default() -> Self {
        Self {
            name: GAME_NAME,
            version: AGENT_VERSION,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AuthenticateResponse {
    #[allow(dead_code)]
    pub access_token: String,
    #[serde(default)]
    pub selected_profile: Option<GameProfile>,
}

#[derive(Deserialize)]
pub(crate) struct GameProfile {
    #[allow(dead_code)]
    pub id: String,
    pub name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ErrorResponse {
    pub error: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub cause: Option<String>,
}
