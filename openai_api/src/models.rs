use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct Message {
    pub role: String,
    pub content: String,
}

/// One candidate completion; only the first is consumed.
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct CompletionChoice {
    pub index: u32,
    pub message: Message,
    //null in practice, kept raw
    pub logprobs: Option<serde_json::Value>,
    pub finish_reason: String,
}

#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

//every field defaults so non-200 error bodies still decode
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct CompletionResponse {
    pub id: String,
    pub object: String,
    pub created: i64,
    pub model: String,
    pub choices: Vec<CompletionChoice>,
    pub usage: Usage,
    pub system_fingerprint: Option<serde_json::Value>,
}
