use grammar_correction::{CorrectionError, Language};
use std::time::Duration;
use tracing::*;

use crate::models::{CompletionRequest, CompletionResponse, Message};
use crate::prompt::prompt_for;
use crate::{OPENAI_API_MODEL, OPENAI_API_ROLE};

//should load from a config file
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub(crate) async fn run_completion(
    client: &reqwest::Client,
    api_url: &str,
    api_key: &str,
    language: Language,
    text: &str,
) -> Result<String, CorrectionError> {
    let request = CompletionRequest {
        model: OPENAI_API_MODEL.to_string(),
        messages: vec![
            Message {
                role: OPENAI_API_ROLE.to_string(),
                content: prompt_for(language).to_string(),
            },
            Message {
                role: OPENAI_API_ROLE.to_string(),
                content: text.to_string(),
            },
        ],
    };
    trace!("run_completion request={:?}", request);

    let response = client
        .post(api_url)
        .header("Authorization", format!("Bearer {}", api_key))
        .timeout(REQUEST_TIMEOUT)
        .json(&request)
        .send()
        .await
        .map_err(|e| CorrectionError::Transport(e.into()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| CorrectionError::Transport(e.into()))?;

    //parse before the status check, error bodies may still carry diagnostic json
    let completion: CompletionResponse =
        serde_json::from_str(&body).map_err(|e| CorrectionError::Decode(e.into()))?;
    trace!("run_completion response={:?}", completion);

    if status != reqwest::StatusCode::OK {
        return Err(CorrectionError::Remote {
            status: status.as_u16(),
            body: format!("{:?}", completion),
        });
    }

    match completion.choices.first() {
        Some(choice) => {
            debug!(
                "run_completion text={} result={}",
                text, choice.message.content
            );
            Ok(choice.message.content.clone())
        }
        //no choices means nothing to correct, pass the empty result through
        None => Ok(String::new()),
    }
}
