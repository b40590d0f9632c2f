use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Body of `GET /`.
#[derive(Serialize, Debug)]
pub struct Greeting {
    #[serde(rename = "Hello")]
    pub hello: &'static str,
}

impl Default for Greeting {
    fn default() -> Self {
        Self { hello: "World" }
    }
}
